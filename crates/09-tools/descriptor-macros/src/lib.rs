//! # Descriptor Macros
//!
//! 这个 crate 提供在编译期生成类型描述符的派生宏，代替运行时反射。
//!
//! ## 核心宏
//!
//! - [`Introspect`](derive@Introspect) - 为结构体实现 `infrastructure_common::Introspect`
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use descriptor_macros::Introspect;
//! use std::sync::Arc;
//!
//! #[derive(Introspect)]
//! #[bean(
//!     constructor(params(repo = "Arc<UserRepository>"), inject = "mainRepo"),
//!     init(method = "start", order = 1),
//!     destroy(method = "stop"),
//! )]
//! pub struct UserService {
//!     repo: Arc<UserRepository>,
//!     #[inject("auditLog, log")]
//!     audit: Arc<AuditLog>,
//!     #[inject]
//!     listeners: Vec<Arc<dyn Listener>>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod bean;
mod introspect;
mod utils;

/// 类型描述符派生宏
///
/// 字段按声明顺序进入描述符，`Vec`、`VecDeque`、`LinkedList`、`HashSet`、`BTreeSet`
/// 字段被识别为集合字段。
///
/// # 字段属性
///
/// - `#[inject]` / `#[inject("a, b")]` - 注入标记，逗号分隔回退候选
/// - `#[provider]` / `#[provider("name")]` - 提供者字段
///
/// # 结构体属性
///
/// `#[bean(...)]` 声明结构体定义中看不到的成员，可重复：
///
/// - `constructor(name = "new", params(a = "Type", ...), inject = "a, b")`
/// - `constructor(param(name = "a", ty = "Type", inject = "x"))`
/// - `method(name = "set_a", params(a = "Type"), inject)`
/// - `init(method = "start", order = 1, invoke = "post_construct")`
/// - `destroy(method = "stop", order = 1)`
/// - `provider(method = "clock_provider", name = "clock", static)`
///
/// 同名方法的声明会合并为一个方法描述符。
#[proc_macro_derive(Introspect, attributes(bean, inject, provider))]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    introspect::derive_introspect_impl(input)
}
