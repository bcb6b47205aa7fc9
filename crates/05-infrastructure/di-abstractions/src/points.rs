//! 注入点值对象
//!
//! 注入点由注入点工厂创建，创建后不可变，交由容器持有。

use infrastructure_common::{
    ConstructorDescriptor, FieldDescriptor, InitInvocation, MethodDescriptor, ReferenceLookup,
};
use serde::{Deserialize, Serialize};

/// 引用名称组
///
/// 单个注入位置的候选 bean 名称，按优先级排列。所有候选均为空（规范形式为 `[""]`）
/// 表示"由成员名称或类型推导默认名称"，而不是"不注入"。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceGroup(Vec<String>);

impl ReferenceGroup {
    /// 由候选名称创建引用组
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(candidates.into_iter().map(Into::into).collect())
    }

    /// 默认名称引用组
    pub fn default_name() -> Self {
        Self(vec![String::new()])
    }

    /// 是否需要推导默认名称
    pub fn is_default(&self) -> bool {
        self.0.iter().all(|candidate| candidate.is_empty())
    }

    /// 候选名称
    pub fn candidates(&self) -> &[String] {
        &self.0
    }

    /// 获取实际查找时使用的候选名称
    ///
    /// 非默认组原样返回；默认组按 `lookups` 的顺序推导，去除重复和空名称。
    pub fn candidates_or_defaults(
        &self,
        member_name: &str,
        type_name: &str,
        lookups: &[ReferenceLookup],
    ) -> Vec<String> {
        if !self.is_default() {
            return self.0.clone();
        }

        let mut names: Vec<String> = Vec::with_capacity(lookups.len());
        for lookup in lookups {
            let name = lookup.candidate(member_name, type_name);
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// 构造器注入点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorInjectionPoint {
    /// 所属类型
    pub owner: String,
    /// 选中的构造器
    pub constructor: ConstructorDescriptor,
    /// 每个参数一组引用
    pub references: Vec<ReferenceGroup>,
}

/// 属性（字段）注入点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInjectionPoint {
    /// 所属类型
    pub owner: String,
    /// 注入的字段
    pub field: FieldDescriptor,
    /// 候选引用，按顺序尝试
    pub references: ReferenceGroup,
}

/// 方法注入点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInjectionPoint {
    /// 所属类型
    pub owner: String,
    /// 注入方法
    pub method: MethodDescriptor,
    /// 每个参数一组引用
    pub references: Vec<ReferenceGroup>,
}

/// 集合注入点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInjectionPoint {
    /// 所属类型
    pub owner: String,
    /// 集合字段
    pub field: FieldDescriptor,
    /// 集合元素类型，容器注入该类型的所有 bean
    pub element_type: String,
    /// 字段上声明的引用
    pub references: ReferenceGroup,
}

/// 初始化方法点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitMethodPoint {
    /// 无参方法
    pub method: MethodDescriptor,
    /// 调用顺序，越小越先
    pub order: i32,
    /// 调用时机
    pub invocation: InitInvocation,
}

/// 销毁方法点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyMethodPoint {
    /// 无参方法
    pub method: MethodDescriptor,
    /// 调用顺序，越小越先
    pub order: i32,
}
