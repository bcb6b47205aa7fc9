//! 带缓存的类型内省器
//!
//! 类型可以直接以描述符注册，也可以注册描述符的生成函数；后者在首次查找时生成并缓存。
//! 缓存基于并发哈希表，可在线程间共享。

use dashmap::DashMap;
use di_abstractions::TypeIntrospector;
use infrastructure_common::{ConfigResult, Introspect, ResolutionError, ResolutionResult, TypeDescriptor};
use std::sync::Arc;
use tracing::{debug, warn};

/// 描述符生成函数
pub type DescriptorFn = fn() -> TypeDescriptor;

/// 带缓存的类型内省器
#[derive(Debug, Default)]
pub struct CachingIntrospector {
    /// 已生成的描述符
    cache: DashMap<String, Arc<TypeDescriptor>>,
    /// 尚未生成的描述符来源
    sources: DashMap<String, DescriptorFn>,
}

impl CachingIntrospector {
    /// 创建新的内省器
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册描述符
    ///
    /// 描述符注册后不可变；同名类型重复注册时保留先注册的描述符。
    pub fn register(&self, descriptor: TypeDescriptor) -> Arc<TypeDescriptor> {
        let name = descriptor.name.clone();
        let entry = self
            .cache
            .entry(name.clone())
            .or_insert_with(|| Arc::new(descriptor.clone()));

        if **entry.value() != descriptor {
            warn!("类型 {} 已注册不同的描述符，忽略新的描述符", name);
        } else {
            debug!("注册类型描述符: {}", name);
        }
        Arc::clone(entry.value())
    }

    /// 注册可内省类型，描述符在首次查找时生成
    pub fn register_type<T: Introspect>(&self) {
        debug!("注册可内省类型: {}", T::type_name());
        self.sources.insert(T::type_name().to_string(), T::describe);
    }

    /// 从 JSON 数组注册描述符，返回注册数量
    pub fn register_json(&self, json: &str) -> ConfigResult<usize> {
        let descriptors: Vec<TypeDescriptor> = serde_json::from_str(json)?;
        let count = descriptors.len();
        for descriptor in descriptors {
            self.register(descriptor);
        }
        debug!("从 JSON 注册了 {} 个类型描述符", count);
        Ok(count)
    }

    /// 已生成的描述符数量
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl TypeIntrospector for CachingIntrospector {
    fn lookup(&self, type_name: &str) -> ResolutionResult<Arc<TypeDescriptor>> {
        if let Some(descriptor) = self.cache.get(type_name) {
            return Ok(Arc::clone(descriptor.value()));
        }

        let source = self
            .sources
            .get(type_name)
            .map(|source| *source.value())
            .ok_or_else(|| ResolutionError::unknown_type(type_name))?;

        let entry = self
            .cache
            .entry(type_name.to_string())
            .or_insert_with(|| Arc::new(source()));
        debug!("生成并缓存类型描述符: {}", type_name);
        Ok(Arc::clone(entry.value()))
    }

    fn contains(&self, type_name: &str) -> bool {
        self.cache.contains_key(type_name) || self.sources.contains_key(type_name)
    }
}
