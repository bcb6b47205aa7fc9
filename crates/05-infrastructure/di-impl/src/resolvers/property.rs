//! 属性注入点解析

use super::select_fields;
use di_abstractions::{InjectionPointFactory, PropertyInjectionPoint, TypeIntrospector};
use infrastructure_common::ResolutionResult;
use std::sync::Arc;
use tracing::debug;

/// 属性解析器
///
/// 只处理单值字段，集合字段由 [`CollectionResolver`](super::CollectionResolver) 处理。
pub struct PropertyResolver {
    introspector: Arc<dyn TypeIntrospector>,
    factory: Arc<dyn InjectionPointFactory>,
}

impl PropertyResolver {
    /// 创建属性解析器
    pub fn new(
        introspector: Arc<dyn TypeIntrospector>,
        factory: Arc<dyn InjectionPointFactory>,
    ) -> Self {
        Self {
            introspector,
            factory,
        }
    }

    /// 解析属性注入点
    pub fn resolve(
        &self,
        type_name: &str,
        autowire: bool,
    ) -> ResolutionResult<Vec<PropertyInjectionPoint>> {
        let descriptor = self.introspector.lookup(type_name)?;

        let points = select_fields(&descriptor, autowire, false)
            .into_iter()
            .map(|(field, references)| {
                self.factory
                    .create_property_point(&descriptor, field, references)
            })
            .collect::<ResolutionResult<Vec<_>>>()?;

        debug!(
            "解析属性注入点: {} (autowire={}), 共 {} 个",
            descriptor.name,
            autowire,
            points.len()
        );
        Ok(points)
    }
}
