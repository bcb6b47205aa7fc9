//! 默认注入点工厂

use di_abstractions::{
    CollectionInjectionPoint, ConstructorInjectionPoint, InjectionPointFactory,
    MethodInjectionPoint, PropertyInjectionPoint, ReferenceGroup,
};
use infrastructure_common::{
    ConstructorDescriptor, FieldDescriptor, MethodDescriptor, ParameterDescriptor,
    ResolutionError, ResolutionResult, ResolverConfig, TypeDescriptor,
};
use tracing::trace;

/// 默认注入点工厂
///
/// 校验引用组与参数一一对应；开启 `expand_default_references` 时把默认组展开为具体候选名称。
#[derive(Debug, Clone, Default)]
pub struct DefaultInjectionPointFactory {
    config: ResolverConfig,
}

impl DefaultInjectionPointFactory {
    /// 创建使用默认配置的工厂
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建工厂
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    fn expand(&self, group: ReferenceGroup, member_name: &str, type_name: &str) -> ReferenceGroup {
        if !self.config.expand_default_references || !group.is_default() {
            return group;
        }

        let expanded = ReferenceGroup::new(group.candidates_or_defaults(
            member_name,
            type_name,
            &self.config.lookup_references,
        ));
        trace!("展开默认引用: {} -> {:?}", member_name, expanded.candidates());
        expanded
    }

    fn parameter_references(
        &self,
        target: String,
        parameters: &[ParameterDescriptor],
        references: Vec<ReferenceGroup>,
    ) -> ResolutionResult<Vec<ReferenceGroup>> {
        if parameters.len() != references.len() {
            return Err(ResolutionError::MalformedReferenceSpecification {
                target,
                expected: parameters.len(),
                actual: references.len(),
            });
        }

        Ok(parameters
            .iter()
            .zip(references)
            .map(|(parameter, group)| self.expand(group, &parameter.name, &parameter.type_name))
            .collect())
    }
}

impl InjectionPointFactory for DefaultInjectionPointFactory {
    fn create_constructor_point(
        &self,
        owner: &TypeDescriptor,
        constructor: &ConstructorDescriptor,
        references: Vec<ReferenceGroup>,
    ) -> ResolutionResult<ConstructorInjectionPoint> {
        let references = self.parameter_references(
            format!("{}#{}", owner.name, constructor.name),
            &constructor.parameters,
            references,
        )?;

        Ok(ConstructorInjectionPoint {
            owner: owner.name.clone(),
            constructor: constructor.clone(),
            references,
        })
    }

    fn create_property_point(
        &self,
        owner: &TypeDescriptor,
        field: &FieldDescriptor,
        references: ReferenceGroup,
    ) -> ResolutionResult<PropertyInjectionPoint> {
        Ok(PropertyInjectionPoint {
            owner: owner.name.clone(),
            field: field.clone(),
            references: self.expand(references, &field.name, &field.type_name),
        })
    }

    fn create_method_point(
        &self,
        owner: &TypeDescriptor,
        method: &MethodDescriptor,
        references: Vec<ReferenceGroup>,
    ) -> ResolutionResult<MethodInjectionPoint> {
        let references = self.parameter_references(
            format!("{}#{}", owner.name, method.name),
            &method.parameters,
            references,
        )?;

        Ok(MethodInjectionPoint {
            owner: owner.name.clone(),
            method: method.clone(),
            references,
        })
    }

    fn create_collection_point(
        &self,
        owner: &TypeDescriptor,
        field: &FieldDescriptor,
        references: ReferenceGroup,
    ) -> ResolutionResult<CollectionInjectionPoint> {
        // 未声明元素类型的字段按声明类型本身收集
        let element_type = field.element_type().unwrap_or(&field.type_name).to_string();
        let references = self.expand(references, &field.name, &element_type);

        Ok(CollectionInjectionPoint {
            owner: owner.name.clone(),
            field: field.clone(),
            element_type,
            references,
        })
    }
}
