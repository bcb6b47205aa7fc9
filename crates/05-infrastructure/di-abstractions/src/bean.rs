//! Bean 与提供者定义

use infrastructure_common::{FieldDescriptor, Introspect, MethodDescriptor};
use serde::{Deserialize, Serialize};

/// 容器管理的实例
///
/// 生命周期方法解析只需要实例的类型名称。所有 [`Introspect`] 类型自动实现此 trait。
pub trait Bean: Send + Sync {
    /// 实例类型在内省器中的注册名称
    fn bean_type(&self) -> &str;
}

impl<T> Bean for T
where
    T: Introspect + Send + Sync,
{
    fn bean_type(&self) -> &str {
        T::type_name()
    }
}

/// Bean 定义
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeanDefinition {
    /// bean 名称
    pub name: String,
    /// bean 类型名称
    pub type_name: String,
}

impl BeanDefinition {
    /// 创建新的 bean 定义
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// 为可内省类型创建 bean 定义
    pub fn of<T: Introspect>(name: impl Into<String>) -> Self {
        Self::new(name, T::type_name())
    }
}

/// 提供者来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderSource {
    /// 工厂方法
    Method {
        /// 方法描述符
        method: MethodDescriptor,
    },
    /// 提供者字段
    Field {
        /// 字段描述符
        field: FieldDescriptor,
    },
}

impl ProviderSource {
    /// 来源成员名称
    pub fn member_name(&self) -> &str {
        match self {
            Self::Method { method } => &method.name,
            Self::Field { field } => &field.name,
        }
    }
}

/// 提供者定义
///
/// 描述 bean 中产出另一个具名 bean 的工厂方法或字段，生命周期与所属 bean 定义相同。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDefinition {
    /// 被提供的 bean 名称
    pub name: String,
    /// 声明提供者的类型
    pub owner_type: String,
    /// 所属 bean 名称，关联函数提供者为 `None`
    pub bean_name: Option<String>,
    /// 产出 bean 的成员
    pub source: ProviderSource,
}

impl ProviderDefinition {
    /// 是否无需所属实例即可调用
    pub fn is_static(&self) -> bool {
        self.bean_name.is_none()
    }
}
