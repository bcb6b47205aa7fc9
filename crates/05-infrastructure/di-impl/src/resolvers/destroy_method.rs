//! 销毁方法解析

use super::ensure_no_parameters;
use di_abstractions::{Bean, DestroyMethodPoint, TypeIntrospector};
use infrastructure_common::{Marked, ResolutionResult, DEFAULT_ORDER};
use std::sync::Arc;
use tracing::debug;

/// 销毁方法解析器
///
/// 与初始化方法相互独立，同一方法可以同时带有两种标记。
pub struct DestroyMethodResolver {
    introspector: Arc<dyn TypeIntrospector>,
}

impl DestroyMethodResolver {
    /// 创建销毁方法解析器
    pub fn new(introspector: Arc<dyn TypeIntrospector>) -> Self {
        Self { introspector }
    }

    /// 解析 bean 的销毁方法，按顺序值升序排列，顺序相同时保持声明顺序
    pub fn resolve(&self, bean: &dyn Bean) -> ResolutionResult<Vec<DestroyMethodPoint>> {
        let descriptor = self.introspector.lookup(bean.bean_type())?;

        let mut points = Vec::new();
        for method in &descriptor.methods {
            if let Some(order) = method.destroy_marker() {
                ensure_no_parameters(&descriptor, method)?;
                points.push(DestroyMethodPoint {
                    method: method.clone(),
                    order: order.unwrap_or(DEFAULT_ORDER),
                });
            }
        }
        points.sort_by_key(|point| point.order);

        debug!("解析销毁方法: {}, 共 {} 个", descriptor.name, points.len());
        Ok(points)
    }
}
