//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 配置源加载或合并失败
    #[error("配置构建失败: {source}")]
    BuildError {
        /// 底层配置错误
        #[from]
        source: config::ConfigError,
    },

    /// 描述符 JSON 无法解析
    #[error("描述符反序列化失败: {source}")]
    SerializationError {
        /// 底层 JSON 错误
        #[from]
        source: serde_json::Error,
    },

    /// 配置值不合法
    #[error("配置验证失败: {message}")]
    ValidationError {
        /// 错误描述
        message: String,
    },
}

impl ConfigError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

/// 注入点解析错误类型
///
/// 所有错误对当前解析调用都是致命的，不可重试。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// 多个构造器带有注入标记
    #[error("类型 {type_name} 中有两个或更多构造器被标注为注入点")]
    AmbiguousInjectionPoint {
        /// 出错的类型
        type_name: String,
    },

    /// 找不到可用的构造器
    #[error("类型 {type_name} 没有可用作注入点的构造器（标注的、唯一的或无参的）")]
    NoEligibleConstructor {
        /// 出错的类型
        type_name: String,
    },

    /// 引用组数量与参数个数不一致
    #[error("引用声明与参数不对齐: {target}, 期望 {expected} 个位置, 实际 {actual} 个")]
    MalformedReferenceSpecification {
        /// 构造器或方法，形如 `Type#member`
        target: String,
        /// 参数个数
        expected: usize,
        /// 声明的引用组数量
        actual: usize,
    },

    /// 内省器中没有该类型
    #[error("类型未注册: {type_name}")]
    UnknownType {
        /// 查找的类型名称
        type_name: String,
    },

    /// 外部标记指向不存在的成员
    #[error("类型 {type_name} 中不存在成员: {member}")]
    UnknownMember {
        /// 所属类型
        type_name: String,
        /// 成员名称
        member: String,
    },

    /// 初始化或销毁方法带有参数
    #[error("生命周期方法不允许有参数: {type_name}#{method}")]
    InvalidLifecycleMethod {
        /// 所属类型
        type_name: String,
        /// 方法名称
        method: String,
    },

    /// 提供者方法或字段不满足要求
    #[error("提供者定义无效: {type_name}#{member}, 原因: {reason}")]
    InvalidProvider {
        /// 所属类型
        type_name: String,
        /// 提供者成员名称
        member: String,
        /// 失败原因
        reason: String,
    },
}

impl ResolutionError {
    /// 创建类型未注册错误
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// 创建成员不存在错误
    pub fn unknown_member(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::UnknownMember {
            type_name: type_name.into(),
            member: member.into(),
        }
    }
}

/// 配置结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
/// 解析结果类型别名
pub type ResolutionResult<T> = Result<T, ResolutionError>;
