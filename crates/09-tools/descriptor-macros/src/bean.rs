//! `#[bean(...)]` 属性解析
//!
//! 结构体字段之外的成员（构造器、注入方法、生命周期方法、提供者方法）无法从结构体定义中
//! 获得，只能通过该属性声明。

use crate::utils::find_attributes;
use infrastructure_common::InitInvocation;
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitInt, LitStr, Result, Token};

/// 成员标记
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerSpec {
    Inject(Option<String>),
    Init {
        order: Option<i32>,
        invocation: InitInvocation,
    },
    Destroy {
        order: Option<i32>,
    },
    Provider(Option<String>),
}

impl ToTokens for MarkerSpec {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let expanded = match self {
            Self::Inject(None) => quote!(::infrastructure_common::Marker::inject()),
            Self::Inject(Some(value)) => {
                quote!(::infrastructure_common::Marker::inject_value(#value))
            }
            Self::Init { order, invocation } => {
                let order = order_tokens(*order);
                let invocation = invocation_tokens(*invocation);
                quote!(::infrastructure_common::Marker::init_method(#order, #invocation))
            }
            Self::Destroy { order } => {
                let order = order_tokens(*order);
                quote!(::infrastructure_common::Marker::destroy_method(#order))
            }
            Self::Provider(None) => {
                quote!(::infrastructure_common::Marker::provider(::std::option::Option::None))
            }
            Self::Provider(Some(name)) => quote! {
                ::infrastructure_common::Marker::provider(
                    ::std::option::Option::Some(::std::string::String::from(#name))
                )
            },
        };
        tokens.extend(expanded);
    }
}

fn order_tokens(order: Option<i32>) -> TokenStream {
    match order {
        Some(order) => quote!(::std::option::Option::Some(#order)),
        None => quote!(::std::option::Option::None),
    }
}

fn invocation_tokens(invocation: InitInvocation) -> TokenStream {
    match invocation {
        InitInvocation::PostConstruct => {
            quote!(::infrastructure_common::InitInvocation::PostConstruct)
        }
        InitInvocation::PostDefine => quote!(::infrastructure_common::InitInvocation::PostDefine),
        InitInvocation::PostInitialize => {
            quote!(::infrastructure_common::InitInvocation::PostInitialize)
        }
    }
}

/// 参数声明
#[derive(Debug, Clone, Default)]
pub struct ParamSpec {
    pub name: String,
    pub ty: String,
    pub markers: Vec<MarkerSpec>,
}

impl ToTokens for ParamSpec {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { name, ty, markers } = self;
        tokens.extend(quote! {
            ::infrastructure_common::ParameterDescriptor::new(#name, #ty)
                #( .with_marker(#markers) )*
        });
    }
}

/// 构造器声明
#[derive(Debug, Clone, Default)]
pub struct ConstructorSpec {
    pub name: String,
    pub params: Vec<ParamSpec>,
    pub markers: Vec<MarkerSpec>,
}

impl ToTokens for ConstructorSpec {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            name,
            params,
            markers,
        } = self;
        tokens.extend(quote! {
            ::infrastructure_common::ConstructorDescriptor::new(#name)
                #( .with_parameter(#params) )*
                #( .with_marker(#markers) )*
        });
    }
}

/// 方法声明
#[derive(Debug, Clone, Default)]
pub struct MethodSpec {
    pub name: String,
    pub params: Vec<ParamSpec>,
    pub is_static: bool,
    pub markers: Vec<MarkerSpec>,
}

impl ToTokens for MethodSpec {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            name,
            params,
            is_static,
            markers,
        } = self;
        let as_static = is_static.then(|| quote!(.as_static()));
        tokens.extend(quote! {
            ::infrastructure_common::MethodDescriptor::new(#name)
                #( .with_parameter(#params) )*
                #as_static
                #( .with_marker(#markers) )*
        });
    }
}

/// 结构体上声明的全部成员
#[derive(Debug, Default)]
pub struct BeanSpec {
    pub constructors: Vec<ConstructorSpec>,
    pub methods: Vec<MethodSpec>,
}

impl BeanSpec {
    /// 合并同名方法的声明，保持首次声明的位置
    fn merge_method(&mut self, method: MethodSpec) {
        match self.methods.iter_mut().find(|m| m.name == method.name) {
            Some(existing) => {
                if existing.params.is_empty() {
                    existing.params = method.params;
                }
                existing.is_static |= method.is_static;
                existing.markers.extend(method.markers);
            }
            None => self.methods.push(method),
        }
    }
}

/// 解析结构体上所有 `#[bean(...)]` 属性
///
/// ```text
/// #[bean(
///     constructor(name = "new", params(repo = "Arc<Repo>"), inject = "mainRepo"),
///     method(name = "set_clock", params(clock = "Clock"), inject),
///     init(method = "start", order = 1, invoke = "post_construct"),
///     destroy(method = "stop"),
///     provider(method = "clock_provider", static),
/// )]
/// ```
pub fn parse_bean_attributes(attrs: &[Attribute]) -> Result<BeanSpec> {
    let mut spec = BeanSpec::default();

    for attr in find_attributes(attrs, "bean") {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("constructor") {
                spec.constructors.push(parse_constructor(&meta)?);
            } else if meta.path.is_ident("method") {
                let method = parse_method(&meta)?;
                spec.merge_method(method);
            } else if meta.path.is_ident("init") {
                let method = parse_init(&meta)?;
                spec.merge_method(method);
            } else if meta.path.is_ident("destroy") {
                let method = parse_destroy(&meta)?;
                spec.merge_method(method);
            } else if meta.path.is_ident("provider") {
                let method = parse_provider(&meta)?;
                spec.merge_method(method);
            } else {
                return Err(meta.error("未知的 bean 属性，可用: constructor, method, init, destroy, provider"));
            }
            Ok(())
        })?;
    }

    Ok(spec)
}

/// `inject` 或 `inject = "a, b"`
fn parse_inject(meta: &ParseNestedMeta<'_>) -> Result<MarkerSpec> {
    if meta.input.peek(Token![=]) {
        let value: LitStr = meta.value()?.parse()?;
        Ok(MarkerSpec::Inject(Some(value.value())))
    } else {
        Ok(MarkerSpec::Inject(None))
    }
}

fn parse_string(meta: &ParseNestedMeta<'_>) -> Result<String> {
    let value: LitStr = meta.value()?.parse()?;
    Ok(value.value())
}

fn parse_order(meta: &ParseNestedMeta<'_>) -> Result<i32> {
    let value: LitInt = meta.value()?.parse()?;
    value.base10_parse()
}

/// `params(name = "Type", ...)` 或 `param(name = "...", ty = "...", inject = "...")`
fn parse_params(meta: &ParseNestedMeta<'_>, params: &mut Vec<ParamSpec>) -> Result<()> {
    if meta.path.is_ident("params") {
        meta.parse_nested_meta(|param| {
            let name = param
                .path
                .get_ident()
                .map(ToString::to_string)
                .ok_or_else(|| param.error("参数名称必须是标识符"))?;
            params.push(ParamSpec {
                name,
                ty: parse_string(&param)?,
                markers: Vec::new(),
            });
            Ok(())
        })
    } else {
        let mut spec = ParamSpec::default();
        meta.parse_nested_meta(|item| {
            if item.path.is_ident("name") {
                spec.name = parse_string(&item)?;
            } else if item.path.is_ident("ty") {
                spec.ty = parse_string(&item)?;
            } else if item.path.is_ident("inject") {
                spec.markers.push(parse_inject(&item)?);
            } else {
                return Err(item.error("未知的参数属性，可用: name, ty, inject"));
            }
            Ok(())
        })?;

        if spec.name.is_empty() || spec.ty.is_empty() {
            return Err(meta.error("param 需要同时声明 name 和 ty"));
        }
        params.push(spec);
        Ok(())
    }
}

fn parse_constructor(meta: &ParseNestedMeta<'_>) -> Result<ConstructorSpec> {
    let mut spec = ConstructorSpec {
        name: "new".to_string(),
        ..ConstructorSpec::default()
    };

    meta.parse_nested_meta(|item| {
        if item.path.is_ident("name") {
            spec.name = parse_string(&item)?;
        } else if item.path.is_ident("params") || item.path.is_ident("param") {
            parse_params(&item, &mut spec.params)?;
        } else if item.path.is_ident("inject") {
            spec.markers.push(parse_inject(&item)?);
        } else {
            return Err(item.error("未知的构造器属性，可用: name, params, param, inject"));
        }
        Ok(())
    })?;

    Ok(spec)
}

fn parse_method(meta: &ParseNestedMeta<'_>) -> Result<MethodSpec> {
    let mut spec = MethodSpec::default();

    meta.parse_nested_meta(|item| {
        if item.path.is_ident("name") {
            spec.name = parse_string(&item)?;
        } else if item.path.is_ident("params") || item.path.is_ident("param") {
            parse_params(&item, &mut spec.params)?;
        } else if item.path.is_ident("inject") {
            spec.markers.push(parse_inject(&item)?);
        } else {
            return Err(item.error("未知的方法属性，可用: name, params, param, inject"));
        }
        Ok(())
    })?;

    if spec.name.is_empty() {
        return Err(meta.error("method 需要声明 name"));
    }
    Ok(spec)
}

fn parse_init(meta: &ParseNestedMeta<'_>) -> Result<MethodSpec> {
    let mut name = String::new();
    let mut order = None;
    let mut invocation = InitInvocation::default();

    meta.parse_nested_meta(|item| {
        if item.path.is_ident("method") {
            name = parse_string(&item)?;
        } else if item.path.is_ident("order") {
            order = Some(parse_order(&item)?);
        } else if item.path.is_ident("invoke") {
            let value: LitStr = item.value()?.parse()?;
            invocation = InitInvocation::from_name(&value.value()).ok_or_else(|| {
                syn::Error::new(
                    value.span(),
                    "未知的调用时机，可用: post_construct, post_define, post_initialize",
                )
            })?;
        } else {
            return Err(item.error("未知的初始化属性，可用: method, order, invoke"));
        }
        Ok(())
    })?;

    if name.is_empty() {
        return Err(meta.error("init 需要声明 method"));
    }
    Ok(MethodSpec {
        name,
        markers: vec![MarkerSpec::Init { order, invocation }],
        ..MethodSpec::default()
    })
}

fn parse_destroy(meta: &ParseNestedMeta<'_>) -> Result<MethodSpec> {
    let mut name = String::new();
    let mut order = None;

    meta.parse_nested_meta(|item| {
        if item.path.is_ident("method") {
            name = parse_string(&item)?;
        } else if item.path.is_ident("order") {
            order = Some(parse_order(&item)?);
        } else {
            return Err(item.error("未知的销毁属性，可用: method, order"));
        }
        Ok(())
    })?;

    if name.is_empty() {
        return Err(meta.error("destroy 需要声明 method"));
    }
    Ok(MethodSpec {
        name,
        markers: vec![MarkerSpec::Destroy { order }],
        ..MethodSpec::default()
    })
}

fn parse_provider(meta: &ParseNestedMeta<'_>) -> Result<MethodSpec> {
    let mut spec = MethodSpec::default();
    let mut provided = None;

    meta.parse_nested_meta(|item| {
        if item.path.is_ident("method") {
            spec.name = parse_string(&item)?;
        } else if item.path.is_ident("name") {
            provided = Some(parse_string(&item)?);
        } else if item.path.is_ident("static") {
            spec.is_static = true;
        } else {
            return Err(item.error("未知的提供者属性，可用: method, name, static"));
        }
        Ok(())
    })?;

    if spec.name.is_empty() {
        return Err(meta.error("provider 需要声明 method"));
    }
    spec.markers.push(MarkerSpec::Provider(provided));
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(attr: Attribute) -> BeanSpec {
        parse_bean_attributes(&[attr]).unwrap()
    }

    #[test]
    fn test_constructor_with_params() {
        let spec = parse(parse_quote! {
            #[bean(constructor(params(repo = "Arc<Repo>", cache = "Cache"), inject = "mainRepo, cache"))]
        });

        assert_eq!(spec.constructors.len(), 1);
        let ctor = &spec.constructors[0];
        assert_eq!(ctor.name, "new");
        assert_eq!(ctor.params.len(), 2);
        assert_eq!(ctor.params[0].ty, "Arc<Repo>");
        assert_eq!(
            ctor.markers,
            vec![MarkerSpec::Inject(Some("mainRepo, cache".to_string()))]
        );
    }

    #[test]
    fn test_single_param_with_own_marker() {
        let spec = parse(parse_quote! {
            #[bean(constructor(name = "with_db", param(name = "db", ty = "Db", inject = "primary, replica")))]
        });

        let param = &spec.constructors[0].params[0];
        assert_eq!(param.name, "db");
        assert_eq!(
            param.markers,
            vec![MarkerSpec::Inject(Some("primary, replica".to_string()))]
        );
    }

    #[test]
    fn test_lifecycle_methods_are_merged_by_name() {
        let spec = parse(parse_quote! {
            #[bean(
                init(method = "flush", order = -1, invoke = "post_initialize"),
                destroy(method = "flush", order = 3),
                provider(method = "create", name = "pool", static)
            )]
        });

        assert_eq!(spec.methods.len(), 2);
        assert_eq!(
            spec.methods[0].markers,
            vec![
                MarkerSpec::Init {
                    order: Some(-1),
                    invocation: InitInvocation::PostInitialize
                },
                MarkerSpec::Destroy { order: Some(3) },
            ]
        );
        assert!(spec.methods[1].is_static);
        assert_eq!(
            spec.methods[1].markers,
            vec![MarkerSpec::Provider(Some("pool".to_string()))]
        );
    }

    #[test]
    fn test_unknown_invocation_is_rejected() {
        let attr: Attribute = parse_quote!(#[bean(init(method = "start", invoke = "later"))]);
        assert!(parse_bean_attributes(&[attr]).is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let attr: Attribute = parse_quote!(#[bean(lazy)]);
        assert!(parse_bean_attributes(&[attr]).is_err());
    }
}
