//! 提供者定义解析

use di_abstractions::{BeanDefinition, ProviderDefinition, ProviderSource, TypeIntrospector};
use infrastructure_common::{Marked, ResolutionError, ResolutionResult};
use std::sync::Arc;
use tracing::debug;

/// 提供者解析器
pub struct ProviderResolver {
    introspector: Arc<dyn TypeIntrospector>,
}

impl ProviderResolver {
    /// 创建提供者解析器
    pub fn new(introspector: Arc<dyn TypeIntrospector>) -> Self {
        Self { introspector }
    }

    /// 解析 bean 中定义的提供者，先方法后字段，各自保持声明顺序
    pub fn resolve(&self, definition: &BeanDefinition) -> ResolutionResult<Vec<ProviderDefinition>> {
        let descriptor = self.introspector.lookup(&definition.type_name)?;
        let invalid = |member: &str, reason: &str| ResolutionError::InvalidProvider {
            type_name: descriptor.name.clone(),
            member: member.to_string(),
            reason: reason.to_string(),
        };

        let mut providers = Vec::new();
        for method in &descriptor.methods {
            let Some(declared) = method.provider_name() else {
                continue;
            };
            if !method.parameters.is_empty() {
                return Err(invalid(&method.name, "提供者方法不允许有参数"));
            }

            let name = provider_name(declared, &method.name);
            if name.is_empty() {
                return Err(invalid(&method.name, "无法推导提供者名称"));
            }
            providers.push(ProviderDefinition {
                name,
                owner_type: descriptor.name.clone(),
                bean_name: (!method.is_static).then(|| definition.name.clone()),
                source: ProviderSource::Method {
                    method: method.clone(),
                },
            });
        }

        for field in &descriptor.fields {
            let Some(declared) = field.provider_name() else {
                continue;
            };

            let name = provider_name(declared, &field.name);
            if name.is_empty() {
                return Err(invalid(&field.name, "无法推导提供者名称"));
            }
            providers.push(ProviderDefinition {
                name,
                owner_type: descriptor.name.clone(),
                bean_name: Some(definition.name.clone()),
                source: ProviderSource::Field {
                    field: field.clone(),
                },
            });
        }

        debug!(
            "解析提供者定义: {} ({}), 共 {} 个",
            definition.name,
            descriptor.name,
            providers.len()
        );
        Ok(providers)
    }
}

/// 提供者名称：声明值优先，否则为去掉 `Provider` 后缀的成员名
fn provider_name(declared: &str, member: &str) -> String {
    let declared = declared.trim();
    if !declared.is_empty() {
        return declared.to_string();
    }

    member
        .strip_suffix("_provider")
        .or_else(|| member.strip_suffix("Provider"))
        .unwrap_or(member)
        .to_string()
}
