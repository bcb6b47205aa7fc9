//! # 注入点解析实现
//!
//! 根据类型描述符解析容器需要的注入点：构造器、属性、方法、集合字段、
//! 初始化方法、销毁方法以及提供者定义。
//!
//! ## 核心组件
//!
//! - [`Resolvers`] - 解析器门面，实现 [`di_abstractions::InjectionPointResolver`]
//! - [`CachingIntrospector`] - 基于并发映射的描述符缓存
//! - [`DefaultInjectionPointFactory`] - 默认注入点工厂
//!
//! ## 使用示例
//!
//! ```rust
//! use di_abstractions::InjectionPointResolver;
//! use di_impl::{CachingIntrospector, Resolvers};
//! use infrastructure_common::{
//!     ConstructorDescriptor, Marker, ParameterDescriptor, ResolverConfig, TypeDescriptor,
//! };
//! use std::sync::Arc;
//!
//! let introspector = Arc::new(CachingIntrospector::new());
//! introspector.register(
//!     TypeDescriptor::builder("app::Service")
//!         .constructor(
//!             ConstructorDescriptor::new("new")
//!                 .with_parameter(ParameterDescriptor::new("repo", "app::Repo"))
//!                 .with_marker(Marker::inject_value("mainRepo")),
//!         )
//!         .build(),
//! );
//!
//! let resolvers = Resolvers::from_config(introspector, ResolverConfig::default());
//! let point = resolvers
//!     .resolve_constructor_injection_point("app::Service")
//!     .unwrap();
//! assert_eq!(point.references[0].candidates(), ["mainRepo"]);
//! ```

pub mod facade;
pub mod factory;
pub mod introspector;
pub mod references;
pub mod resolvers;

pub use facade::*;
pub use factory::*;
pub use introspector::*;
pub use references::{align_references, parse_candidates, parse_references};
pub use resolvers::*;
