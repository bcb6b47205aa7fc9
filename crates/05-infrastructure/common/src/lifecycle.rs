//! 组件生命周期标记

use serde::{Deserialize, Serialize};

/// 未声明顺序的生命周期方法使用的默认顺序
pub const DEFAULT_ORDER: i32 = 0;

/// 初始化方法的调用时机
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitInvocation {
    /// 构造器执行后立即调用，此时尚未注入任何依赖
    PostConstruct,
    /// 属性、方法和集合注入完成后调用
    PostDefine,
    /// 所有 `PostDefine` 初始化方法执行完毕后调用
    PostInitialize,
}

impl Default for InitInvocation {
    fn default() -> Self {
        Self::PostDefine
    }
}

impl InitInvocation {
    /// 从配置中的名称解析调用时机
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "post_construct" | "postconstruct" => Some(Self::PostConstruct),
            "post_define" | "postdefine" => Some(Self::PostDefine),
            "post_initialize" | "postinitialize" => Some(Self::PostInitialize),
            _ => None,
        }
    }
}
