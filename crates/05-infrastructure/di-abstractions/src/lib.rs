//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义注入点值对象以及解析器所依赖的外部协作接口。
//!
//! ## 核心接口
//!
//! - [`TypeIntrospector`] - 类型内省器接口
//! - [`InjectionPointFactory`] - 注入点工厂接口
//! - [`InjectionPointResolver`] - 面向容器的解析器门面接口
//! - [`Bean`] - 生命周期方法解析所需的实例接口

pub mod bean;
pub mod factory;
pub mod introspector;
pub mod points;
pub mod resolver;

pub use bean::*;
pub use factory::*;
pub use introspector::*;
pub use points::*;
pub use resolver::*;
