//! 派生宏生成的描述符经由解析器门面的集成测试

use descriptor_macros_integration_tests::{
    resolvers, Ambiguous, Clock, Factories, Foo, Holder, UserService,
};
use di_abstractions::{BeanDefinition, InjectionPointResolver, ReferenceGroup};
use infrastructure_common::{
    FieldKind, InitInvocation, Introspect, Marked, ResolutionError, ResolverConfig,
};

fn group(candidates: &[&str]) -> ReferenceGroup {
    ReferenceGroup::new(candidates.iter().copied())
}

#[test]
fn test_derived_descriptor_shape() {
    let descriptor = UserService::describe();

    assert_eq!(descriptor.name, UserService::type_name());
    assert_eq!(descriptor.short_name(), "UserService");
    assert_eq!(descriptor.constructors.len(), 1);
    assert_eq!(descriptor.constructors[0].name, "new");
    assert_eq!(
        descriptor.constructors[0].parameters[0].type_name,
        "Arc<UserRepository>"
    );

    let names: Vec<&str> = descriptor.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["repo", "audit", "listeners", "retries"]);
    assert!(!descriptor.fields[0].is_injected());
    assert_eq!(descriptor.fields[1].inject_value(), Some("auditLog, log"));
    assert_eq!(
        descriptor.fields[2].kind,
        FieldKind::Collection {
            element_type: "Arc<dyn Listener>".to_string()
        }
    );

    let methods: Vec<&str> = descriptor.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, vec!["set_clock", "start", "warm_up", "stop"]);
}

#[test]
fn test_constructor_from_member_value() {
    let resolvers = resolvers(ResolverConfig::default());
    let point = resolvers
        .resolve_constructor_injection_point(UserService::type_name())
        .unwrap();

    assert_eq!(
        point.references,
        vec![group(&["mainRepo"]), group(&["auditLog"])]
    );
}

#[test]
fn test_constructor_from_parameter_markers() {
    let resolvers = resolvers(ResolverConfig::default());
    let point = resolvers
        .resolve_constructor_injection_point(Foo::type_name())
        .unwrap();

    assert_eq!(
        point.references,
        vec![group(&["bar"]), group(&["par"]), group(&[""])]
    );
}

#[test]
fn test_ambiguous_constructors() {
    let resolvers = resolvers(ResolverConfig::default());
    let err = resolvers
        .resolve_constructor_injection_point(Ambiguous::type_name())
        .unwrap_err();
    assert!(matches!(err, ResolutionError::AmbiguousInjectionPoint { .. }));

    let resolvers = resolvers_without_scan();
    let point = resolvers
        .resolve_constructor_injection_point(Ambiguous::type_name())
        .unwrap();
    assert_eq!(point.constructor.name, "new");
}

fn resolvers_without_scan() -> di_impl::Resolvers {
    resolvers(ResolverConfig {
        use_annotation_scan: false,
        ..ResolverConfig::default()
    })
}

#[test]
fn test_fields_and_collections() {
    let resolvers = resolvers(ResolverConfig::default());

    let properties = resolvers
        .resolve_property_injection_points(UserService::type_name(), false)
        .unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].field.name, "audit");
    assert_eq!(properties[0].references, group(&["auditLog", "log"]));

    let autowired = resolvers
        .resolve_property_injection_points(UserService::type_name(), true)
        .unwrap();
    let names: Vec<&str> = autowired.iter().map(|p| p.field.name.as_str()).collect();
    assert_eq!(names, vec!["repo", "audit", "retries"]);

    let collections = resolvers
        .resolve_collection_injection_points(UserService::type_name(), false)
        .unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].element_type, "Arc<dyn Listener>");
}

#[test]
fn test_methods_and_lifecycle() {
    let resolvers = resolvers(ResolverConfig::default());

    let methods = resolvers
        .resolve_method_injection_points(UserService::type_name())
        .unwrap();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].references, vec![ReferenceGroup::default_name()]);

    let service = UserService {
        repo: std::sync::Arc::new(descriptor_macros_integration_tests::UserRepository),
        audit: std::sync::Arc::new(descriptor_macros_integration_tests::AuditLog),
        listeners: Vec::new(),
        retries: 3,
    };

    let init = resolvers.resolve_init_method_points(&service).unwrap();
    let order: Vec<(&str, i32, InitInvocation)> = init
        .iter()
        .map(|p| (p.method.name.as_str(), p.order, p.invocation))
        .collect();
    assert_eq!(
        order,
        vec![
            ("warm_up", 1, InitInvocation::PostConstruct),
            ("start", 2, InitInvocation::PostDefine),
        ]
    );

    let destroy = resolvers.resolve_destroy_method_points(&service).unwrap();
    assert_eq!(destroy.len(), 1);
    assert_eq!(destroy[0].method.name, "stop");
    assert_eq!(destroy[0].order, infrastructure_common::DEFAULT_ORDER);
}

#[test]
fn test_providers() {
    let resolvers = resolvers(ResolverConfig::default());
    let providers = resolvers
        .resolve_provider_definitions(&BeanDefinition::of::<Factories>("factories"))
        .unwrap();

    let summary: Vec<(&str, Option<&str>)> = providers
        .iter()
        .map(|p| (p.name.as_str(), p.bean_name.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("clock", Some("factories")),
            ("pool", None),
            ("session", Some("factories")),
        ]
    );
}

#[test]
fn test_generic_struct_descriptor() {
    let descriptor = Holder::<Clock>::describe();
    assert_eq!(descriptor.name, Holder::<Clock>::type_name());
    assert_eq!(descriptor.fields[0].name, "inner");
    assert_eq!(descriptor.fields[0].type_name, "T");
    assert!(descriptor.fields[0].is_injected());

    let resolvers = resolvers(ResolverConfig::default());
    let properties = resolvers
        .resolve_property_injection_points(Holder::<Clock>::type_name(), false)
        .unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].references, ReferenceGroup::default_name());
}
