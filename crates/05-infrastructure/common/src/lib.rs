//! # Infrastructure Common
//!
//! 注入点解析的公共模型：类型描述符、标记、错误类型和解析器配置。
//!
//! ## 核心组件
//!
//! - [`TypeDescriptor`] - 类型的反射形状（构造器、字段、方法）
//! - [`Marker`] - 附加在成员和参数上的声明式标记
//! - [`Introspect`] - 可生成自身描述符的类型
//! - [`ResolutionError`] - 注入点解析错误
//! - [`ResolverConfig`] - 解析器配置
//!
//! ## 设计原则
//!
//! - 解析逻辑只面向抽象描述符，不依赖具体反射机制
//! - 描述符注册后不可变，可在线程间共享
//! - 错误通过 `Result` 返回，从不 panic

pub mod configuration;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
