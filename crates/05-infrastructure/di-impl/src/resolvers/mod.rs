//! 成员解析器
//!
//! 每个解析器只扫描一类成员，并通过注入点工厂创建注入点。

mod collection;
mod constructor;
mod destroy_method;
mod init_method;
mod method;
mod property;
mod provider;

pub use collection::CollectionResolver;
pub use constructor::ConstructorResolver;
pub use destroy_method::DestroyMethodResolver;
pub use init_method::InitMethodResolver;
pub use method::MethodResolver;
pub use property::PropertyResolver;
pub use provider::ProviderResolver;

use crate::references::parse_candidates;
use di_abstractions::ReferenceGroup;
use infrastructure_common::{FieldDescriptor, Marked, MethodDescriptor, ResolutionError, TypeDescriptor};
use std::collections::HashSet;
use tracing::trace;

/// 选出需要注入的字段
///
/// 带注入标记的字段总是入选；`autowire` 时未标记的字段也入选并使用默认引用。
/// 同名字段只保留一次，且被标记的同名字段优先。
fn select_fields(
    descriptor: &TypeDescriptor,
    autowire: bool,
    collections: bool,
) -> Vec<(&FieldDescriptor, ReferenceGroup)> {
    let candidates = || {
        descriptor
            .fields
            .iter()
            .filter(move |field| field.is_collection() == collections)
    };

    let claimed: HashSet<&str> = candidates()
        .filter(|field| field.is_injected())
        .map(|field| field.name.as_str())
        .collect();

    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for field in candidates() {
        let references = match field.inject_value() {
            Some(value) => parse_candidates(Some(value)),
            None if autowire && !claimed.contains(field.name.as_str()) => {
                ReferenceGroup::default_name()
            }
            None => continue,
        };

        if !seen.insert(field.name.as_str()) {
            trace!("跳过重复字段: {}#{}", descriptor.name, field.name);
            continue;
        }
        selected.push((field, references));
    }
    selected
}

/// 生命周期方法不允许有参数
fn ensure_no_parameters(
    descriptor: &TypeDescriptor,
    method: &MethodDescriptor,
) -> Result<(), ResolutionError> {
    if method.parameters.is_empty() {
        Ok(())
    } else {
        Err(ResolutionError::InvalidLifecycleMethod {
            type_name: descriptor.name.clone(),
            method: method.name.clone(),
        })
    }
}
