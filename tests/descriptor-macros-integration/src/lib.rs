//! descriptor-macros 集成测试使用的示例类型

use descriptor_macros::Introspect;
use di_impl::{CachingIntrospector, Resolvers};
use infrastructure_common::ResolverConfig;
use std::sync::Arc;

pub struct UserRepository;
pub struct AuditLog;
pub struct Clock;
pub struct Pool;
pub struct Session;
pub struct Bar;

pub trait Listener: Send + Sync {}

#[derive(Introspect)]
#[bean(
    constructor(
        params(repo = "Arc<UserRepository>", audit = "Arc<AuditLog>"),
        inject = "mainRepo, auditLog"
    ),
    method(name = "set_clock", params(clock = "Clock"), inject),
    init(method = "start", order = 2),
    init(method = "warm_up", order = 1, invoke = "post_construct"),
    destroy(method = "stop")
)]
pub struct UserService {
    pub repo: Arc<UserRepository>,
    #[inject("auditLog, log")]
    pub audit: Arc<AuditLog>,
    #[inject]
    pub listeners: Vec<Arc<dyn Listener>>,
    pub retries: u32,
}

#[derive(Introspect)]
#[bean(
    provider(method = "clock_provider"),
    provider(method = "create_pool", name = "pool", static)
)]
pub struct Factories {
    #[provider]
    pub session_provider: Session,
}

#[derive(Introspect)]
#[bean(
    constructor(name = "new"),
    constructor(name = "with_repo", params(repo = "UserRepository"), inject),
    constructor(name = "with_log", param(name = "log", ty = "AuditLog", inject))
)]
pub struct Ambiguous;

#[derive(Introspect)]
#[bean(constructor(
    param(name = "bar", ty = "Bar", inject = "bar"),
    param(name = "par", ty = "Bar", inject = "par"),
    param(name = "bar_object", ty = "Bar", inject)
))]
pub struct Foo;

#[derive(Introspect)]
pub struct Holder<T> {
    #[inject]
    pub inner: T,
}

/// 注册全部示例类型的解析器集合
pub fn resolvers(config: ResolverConfig) -> Resolvers {
    let introspector = Arc::new(CachingIntrospector::new());
    introspector.register_type::<UserService>();
    introspector.register_type::<Factories>();
    introspector.register_type::<Ambiguous>();
    introspector.register_type::<Foo>();
    introspector.register_type::<Holder<Clock>>();
    Resolvers::from_config(introspector, config)
}
