//! 初始化方法解析

use super::ensure_no_parameters;
use di_abstractions::{Bean, InitMethodPoint, TypeIntrospector};
use infrastructure_common::{Marked, ResolutionResult, DEFAULT_ORDER};
use std::sync::Arc;
use tracing::debug;

/// 初始化方法解析器
pub struct InitMethodResolver {
    introspector: Arc<dyn TypeIntrospector>,
}

impl InitMethodResolver {
    /// 创建初始化方法解析器
    pub fn new(introspector: Arc<dyn TypeIntrospector>) -> Self {
        Self { introspector }
    }

    /// 解析 bean 的初始化方法，按顺序值升序排列，顺序相同时保持声明顺序
    pub fn resolve(&self, bean: &dyn Bean) -> ResolutionResult<Vec<InitMethodPoint>> {
        let descriptor = self.introspector.lookup(bean.bean_type())?;

        let mut points = Vec::new();
        for method in &descriptor.methods {
            let Some((order, invocation)) = method.init_marker() else {
                continue;
            };
            ensure_no_parameters(&descriptor, method)?;

            points.push(InitMethodPoint {
                method: method.clone(),
                order: order.unwrap_or(DEFAULT_ORDER),
                invocation,
            });
        }
        points.sort_by_key(|point| point.order);

        debug!("解析初始化方法: {}, 共 {} 个", descriptor.name, points.len());
        Ok(points)
    }
}
