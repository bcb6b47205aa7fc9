//! 引用声明解析
//!
//! 把标记上的原始字符串转换为按位置排列的引用名称组。

use di_abstractions::ReferenceGroup;
use infrastructure_common::{Marked, ParameterDescriptor, ResolutionError, ResolutionResult};

/// 解析按位置排列的引用声明
///
/// 顶层逗号分隔位置，每个位置得到一个单候选组。空值或缺失得到一个默认组。
///
/// ```
/// use di_impl::parse_references;
///
/// let groups = parse_references(Some("bar, par,"));
/// assert_eq!(groups.len(), 3);
/// assert!(groups[2].is_default());
/// ```
pub fn parse_references(raw: Option<&str>) -> Vec<ReferenceGroup> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return vec![ReferenceGroup::default_name()];
    }

    value
        .split(',')
        .map(|name| ReferenceGroup::new([name.trim()]))
        .collect()
}

/// 解析单个位置的候选名称列表
///
/// 逗号分隔的是同一位置的回退候选，空条目被丢弃。没有候选时得到默认组。
pub fn parse_candidates(raw: Option<&str>) -> ReferenceGroup {
    let candidates: Vec<&str> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .collect();

    if candidates.is_empty() {
        ReferenceGroup::default_name()
    } else {
        ReferenceGroup::new(candidates)
    }
}

/// 让引用组与参数个数对齐
///
/// 单个默认组展开为每个参数一个默认组；其他数量不一致的情况视为声明错误。
pub fn align_references(
    groups: Vec<ReferenceGroup>,
    arity: usize,
    target: &str,
) -> ResolutionResult<Vec<ReferenceGroup>> {
    if groups.len() == arity {
        return Ok(groups);
    }
    if groups.len() == 1 && groups[0].is_default() {
        return Ok(vec![ReferenceGroup::default_name(); arity]);
    }

    Err(ResolutionError::MalformedReferenceSpecification {
        target: target.to_string(),
        expected: arity,
        actual: groups.len(),
    })
}

/// 解析构造器或方法的引用
///
/// 成员自身的标记值优先；没有值时按参数顺序取每个参数自己的标记值，
/// 参数值中的逗号只表示该位置的回退候选，不会影响位置对齐。
pub(crate) fn member_references(
    target: &str,
    member_value: Option<&str>,
    parameters: &[ParameterDescriptor],
) -> ResolutionResult<Vec<ReferenceGroup>> {
    let groups = match member_value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => parse_references(Some(value)),
        None => parameters
            .iter()
            .map(|parameter| parse_candidates(parameter.inject_value()))
            .collect(),
    };

    align_references(groups, parameters.len(), target)
}
