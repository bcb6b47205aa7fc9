//! 集合注入点解析

use super::select_fields;
use di_abstractions::{CollectionInjectionPoint, InjectionPointFactory, TypeIntrospector};
use infrastructure_common::ResolutionResult;
use std::sync::Arc;
use tracing::debug;

/// 集合字段解析器
pub struct CollectionResolver {
    introspector: Arc<dyn TypeIntrospector>,
    factory: Arc<dyn InjectionPointFactory>,
}

impl CollectionResolver {
    /// 创建集合解析器
    pub fn new(
        introspector: Arc<dyn TypeIntrospector>,
        factory: Arc<dyn InjectionPointFactory>,
    ) -> Self {
        Self {
            introspector,
            factory,
        }
    }

    /// 解析集合注入点
    pub fn resolve(
        &self,
        type_name: &str,
        autowire: bool,
    ) -> ResolutionResult<Vec<CollectionInjectionPoint>> {
        let descriptor = self.introspector.lookup(type_name)?;

        let mut points = Vec::new();
        for (field, references) in select_fields(&descriptor, autowire, true) {
            points.push(
                self.factory
                    .create_collection_point(&descriptor, field, references)?,
            );
        }

        debug!("解析集合注入点: {}, 共 {} 个", descriptor.name, points.len());
        Ok(points)
    }
}
