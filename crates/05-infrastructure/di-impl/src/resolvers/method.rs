//! 方法注入点解析

use crate::references::member_references;
use di_abstractions::{InjectionPointFactory, MethodInjectionPoint, TypeIntrospector};
use infrastructure_common::{Marked, ResolutionResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// 方法解析器
pub struct MethodResolver {
    introspector: Arc<dyn TypeIntrospector>,
    factory: Arc<dyn InjectionPointFactory>,
}

impl MethodResolver {
    /// 创建方法解析器
    pub fn new(
        introspector: Arc<dyn TypeIntrospector>,
        factory: Arc<dyn InjectionPointFactory>,
    ) -> Self {
        Self {
            introspector,
            factory,
        }
    }

    /// 解析方法注入点
    ///
    /// 方法本身或任一参数带注入标记即入选；没有参数的方法无需注入，直接跳过。
    pub fn resolve(&self, type_name: &str) -> ResolutionResult<Vec<MethodInjectionPoint>> {
        let descriptor = self.introspector.lookup(type_name)?;

        let mut points = Vec::new();
        for method in &descriptor.methods {
            if !method.is_injected() && !method.parameters.iter().any(Marked::is_injected) {
                continue;
            }
            if method.parameters.is_empty() {
                warn!("注入方法没有参数，已跳过: {}#{}", descriptor.name, method.name);
                continue;
            }

            let target = format!("{}#{}", descriptor.name, method.name);
            let references = member_references(&target, method.inject_value(), &method.parameters)?;
            points.push(
                self.factory
                    .create_method_point(&descriptor, method, references)?,
            );
        }

        debug!("解析方法注入点: {}, 共 {} 个", descriptor.name, points.len());
        Ok(points)
    }
}
