//! 注入点工厂抽象接口
//!
//! 工厂归容器所有，在构造时注入到每个解析器中，负责根据容器自身的注入语义做最终校验。

use crate::points::{
    CollectionInjectionPoint, ConstructorInjectionPoint, MethodInjectionPoint,
    PropertyInjectionPoint, ReferenceGroup,
};
use infrastructure_common::{
    ConstructorDescriptor, FieldDescriptor, MethodDescriptor, ResolutionResult, TypeDescriptor,
};

/// 注入点工厂 trait
///
/// 实现必须可重入；解析器会在多个线程中共享同一个工厂。
pub trait InjectionPointFactory: Send + Sync {
    /// 创建构造器注入点
    fn create_constructor_point(
        &self,
        owner: &TypeDescriptor,
        constructor: &ConstructorDescriptor,
        references: Vec<ReferenceGroup>,
    ) -> ResolutionResult<ConstructorInjectionPoint>;

    /// 创建属性注入点
    fn create_property_point(
        &self,
        owner: &TypeDescriptor,
        field: &FieldDescriptor,
        references: ReferenceGroup,
    ) -> ResolutionResult<PropertyInjectionPoint>;

    /// 创建方法注入点
    fn create_method_point(
        &self,
        owner: &TypeDescriptor,
        method: &MethodDescriptor,
        references: Vec<ReferenceGroup>,
    ) -> ResolutionResult<MethodInjectionPoint>;

    /// 创建集合注入点
    fn create_collection_point(
        &self,
        owner: &TypeDescriptor,
        field: &FieldDescriptor,
        references: ReferenceGroup,
    ) -> ResolutionResult<CollectionInjectionPoint>;
}
