//! 类型内省器抽象接口
//!
//! 按类型名称提供类型描述符。实现必须是纯查找：同一名称多次查找返回相同的描述符。

use infrastructure_common::{ResolutionResult, TypeDescriptor};
use std::sync::Arc;

/// 类型内省器 trait
pub trait TypeIntrospector: Send + Sync {
    /// 查找类型描述符，未注册时返回 `UnknownType`
    fn lookup(&self, type_name: &str) -> ResolutionResult<Arc<TypeDescriptor>>;

    /// 是否可以提供指定类型的描述符
    fn contains(&self, type_name: &str) -> bool;
}
