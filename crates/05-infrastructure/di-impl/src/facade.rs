//! 解析器门面
//!
//! 组合七个成员解析器，对容器暴露统一的 [`InjectionPointResolver`] 接口。

use crate::factory::DefaultInjectionPointFactory;
use crate::resolvers::{
    CollectionResolver, ConstructorResolver, DestroyMethodResolver, InitMethodResolver,
    MethodResolver, PropertyResolver, ProviderResolver,
};
use di_abstractions::{
    Bean, BeanDefinition, CollectionInjectionPoint, ConstructorInjectionPoint,
    DestroyMethodPoint, InitMethodPoint, InjectionPointFactory, InjectionPointResolver,
    MethodInjectionPoint, PropertyInjectionPoint, ProviderDefinition, TypeIntrospector,
};
use infrastructure_common::{ResolutionResult, ResolverConfig};
use std::sync::Arc;
use tracing::debug;

/// 解析器集合
///
/// 构造后不可变，可在多个线程间共享。
pub struct Resolvers {
    config: ResolverConfig,
    constructor: ConstructorResolver,
    property: PropertyResolver,
    method: MethodResolver,
    collection: CollectionResolver,
    init_method: InitMethodResolver,
    destroy_method: DestroyMethodResolver,
    provider: ProviderResolver,
}

impl Resolvers {
    /// 使用默认配置创建解析器集合
    pub fn new(
        introspector: Arc<dyn TypeIntrospector>,
        factory: Arc<dyn InjectionPointFactory>,
    ) -> Self {
        Self::with_config(introspector, factory, ResolverConfig::default())
    }

    /// 使用指定配置创建解析器集合
    pub fn with_config(
        introspector: Arc<dyn TypeIntrospector>,
        factory: Arc<dyn InjectionPointFactory>,
        config: ResolverConfig,
    ) -> Self {
        debug!(
            "创建解析器集合: use_annotation_scan={}, expand_default_references={}",
            config.use_annotation_scan, config.expand_default_references
        );

        Self {
            constructor: ConstructorResolver::new(introspector.clone(), factory.clone()),
            property: PropertyResolver::new(introspector.clone(), factory.clone()),
            method: MethodResolver::new(introspector.clone(), factory.clone()),
            collection: CollectionResolver::new(introspector.clone(), factory),
            init_method: InitMethodResolver::new(introspector.clone()),
            destroy_method: DestroyMethodResolver::new(introspector.clone()),
            provider: ProviderResolver::new(introspector),
            config,
        }
    }

    /// 根据配置创建解析器集合，注入点由 [`DefaultInjectionPointFactory`] 创建
    pub fn from_config(introspector: Arc<dyn TypeIntrospector>, config: ResolverConfig) -> Self {
        let factory = Arc::new(DefaultInjectionPointFactory::with_config(config.clone()));
        Self::with_config(introspector, factory, config)
    }

    /// 当前配置
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl InjectionPointResolver for Resolvers {
    fn resolve_constructor_injection_point(
        &self,
        type_name: &str,
    ) -> ResolutionResult<ConstructorInjectionPoint> {
        self.constructor
            .resolve(type_name, self.config.use_annotation_scan)
    }

    fn resolve_property_injection_points(
        &self,
        type_name: &str,
        autowire: bool,
    ) -> ResolutionResult<Vec<PropertyInjectionPoint>> {
        self.property.resolve(type_name, autowire)
    }

    fn resolve_method_injection_points(
        &self,
        type_name: &str,
    ) -> ResolutionResult<Vec<MethodInjectionPoint>> {
        self.method.resolve(type_name)
    }

    fn resolve_collection_injection_points(
        &self,
        type_name: &str,
        autowire: bool,
    ) -> ResolutionResult<Vec<CollectionInjectionPoint>> {
        self.collection.resolve(type_name, autowire)
    }

    fn resolve_init_method_points(
        &self,
        bean: &dyn Bean,
    ) -> ResolutionResult<Vec<InitMethodPoint>> {
        self.init_method.resolve(bean)
    }

    fn resolve_destroy_method_points(
        &self,
        bean: &dyn Bean,
    ) -> ResolutionResult<Vec<DestroyMethodPoint>> {
        self.destroy_method.resolve(bean)
    }

    fn resolve_provider_definitions(
        &self,
        definition: &BeanDefinition,
    ) -> ResolutionResult<Vec<ProviderDefinition>> {
        self.provider.resolve(definition)
    }
}
