//! 注入点解析器抽象接口
//!
//! 容器只通过这一个接口请求解析，从不直接接触单个成员解析器。

use crate::bean::{Bean, BeanDefinition, ProviderDefinition};
use crate::points::{
    CollectionInjectionPoint, ConstructorInjectionPoint, DestroyMethodPoint, InitMethodPoint,
    MethodInjectionPoint, PropertyInjectionPoint,
};
use infrastructure_common::ResolutionResult;

/// 注入点解析器 trait
///
/// 每次调用要么完整成功，要么整体失败，调用方不会拿到部分结果。
pub trait InjectionPointResolver: Send + Sync {
    /// 解析构造器注入点
    fn resolve_constructor_injection_point(
        &self,
        type_name: &str,
    ) -> ResolutionResult<ConstructorInjectionPoint>;

    /// 解析属性注入点
    fn resolve_property_injection_points(
        &self,
        type_name: &str,
        autowire: bool,
    ) -> ResolutionResult<Vec<PropertyInjectionPoint>>;

    /// 解析方法注入点
    fn resolve_method_injection_points(
        &self,
        type_name: &str,
    ) -> ResolutionResult<Vec<MethodInjectionPoint>>;

    /// 解析集合注入点
    fn resolve_collection_injection_points(
        &self,
        type_name: &str,
        autowire: bool,
    ) -> ResolutionResult<Vec<CollectionInjectionPoint>>;

    /// 解析初始化方法点，按声明顺序值升序排列
    fn resolve_init_method_points(&self, bean: &dyn Bean)
        -> ResolutionResult<Vec<InitMethodPoint>>;

    /// 解析销毁方法点，按声明顺序值升序排列
    fn resolve_destroy_method_points(
        &self,
        bean: &dyn Bean,
    ) -> ResolutionResult<Vec<DestroyMethodPoint>>;

    /// 解析 bean 中定义的提供者
    fn resolve_provider_definitions(
        &self,
        definition: &BeanDefinition,
    ) -> ResolutionResult<Vec<ProviderDefinition>>;
}
