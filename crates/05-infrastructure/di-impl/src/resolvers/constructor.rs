//! 构造器注入点解析

use crate::references::member_references;
use di_abstractions::{
    ConstructorInjectionPoint, InjectionPointFactory, ReferenceGroup, TypeIntrospector,
};
use infrastructure_common::{ConstructorDescriptor, Marked, ResolutionError, ResolutionResult};
use std::sync::Arc;
use tracing::{debug, trace};

/// 构造器解析器
pub struct ConstructorResolver {
    introspector: Arc<dyn TypeIntrospector>,
    factory: Arc<dyn InjectionPointFactory>,
}

impl ConstructorResolver {
    /// 创建构造器解析器
    pub fn new(
        introspector: Arc<dyn TypeIntrospector>,
        factory: Arc<dyn InjectionPointFactory>,
    ) -> Self {
        Self {
            introspector,
            factory,
        }
    }

    /// 解析构造器注入点
    ///
    /// 查找唯一被标注的构造器（构造器本身或任一参数带注入标记）。没有被标注的构造器时，
    /// 唯一的构造器即为注入点；存在多个构造器时使用无参构造器；否则返回错误。
    pub fn resolve(
        &self,
        type_name: &str,
        use_annotation_scan: bool,
    ) -> ResolutionResult<ConstructorInjectionPoint> {
        let descriptor = self.introspector.lookup(type_name)?;

        let mut default_ctor: Option<&ConstructorDescriptor> = None;
        let mut annotated: Option<&ConstructorDescriptor> = None;

        for ctor in &descriptor.constructors {
            if ctor.is_default() {
                default_ctor = Some(ctor);
            }
            if !use_annotation_scan {
                continue;
            }
            if !ctor.is_injected() && !ctor.parameters.iter().any(Marked::is_injected) {
                continue;
            }
            if annotated.is_some() {
                return Err(ResolutionError::AmbiguousInjectionPoint {
                    type_name: descriptor.name.clone(),
                });
            }
            trace!("发现被标注的构造器: {}#{}", descriptor.name, ctor.name);
            annotated = Some(ctor);
        }

        let (ctor, references) = match annotated {
            Some(ctor) => {
                let target = format!("{}#{}", descriptor.name, ctor.name);
                let references = member_references(&target, ctor.inject_value(), &ctor.parameters)?;
                (ctor, references)
            }
            None => {
                let ctor = if descriptor.constructors.len() == 1 {
                    descriptor.constructors.first()
                } else {
                    default_ctor
                }
                .ok_or_else(|| ResolutionError::NoEligibleConstructor {
                    type_name: descriptor.name.clone(),
                })?;
                (ctor, vec![ReferenceGroup::default_name(); ctor.arity()])
            }
        };

        debug!(
            "解析构造器注入点: {}#{} ({} 个参数)",
            descriptor.name,
            ctor.name,
            ctor.arity()
        );
        self.factory
            .create_constructor_point(&descriptor, ctor, references)
    }
}
