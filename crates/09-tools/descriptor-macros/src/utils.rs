//! 宏工具函数

use quote::ToTokens;
use syn::{Attribute, GenericArgument, PathArguments, Type};

/// 作为集合字段识别的容器类型
const COLLECTION_TYPES: &[&str] = &["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet"];

/// 把类型转换为紧凑的字符串形式
///
/// 只在两个标识符之间保留空格，例如 `Arc < dyn Repo >` 得到 `Arc<dyn Repo>`。
pub fn type_string(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();

    let mut result = String::with_capacity(raw.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch == ' ' {
            let prev = result.chars().last();
            let next = chars.get(i + 1).copied();
            if let (Some(prev), Some(next)) = (prev, next) {
                if is_word_char(prev) && is_word_char(next) {
                    result.push(' ');
                }
            }
            continue;
        }
        result.push(ch);
    }
    result
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// 从类型中提取第一个泛型参数
pub fn extract_generic_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        }),
        _ => None,
    }
}

/// 集合字段的元素类型
pub fn collection_element(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if !COLLECTION_TYPES.iter().any(|name| segment.ident == name) {
        return None;
    }
    extract_generic_type(ty)
}

/// 查找指定名称的属性
pub fn find_attributes<'a>(
    attrs: &'a [Attribute],
    name: &'a str,
) -> impl Iterator<Item = &'a Attribute> + 'a {
    attrs.iter().filter(move |attr| attr.path().is_ident(name))
}
