//! `#[derive(Introspect)]` 实现

use crate::bean::{parse_bean_attributes, MarkerSpec};
use crate::utils::{collection_element, find_attributes, type_string};
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_quote, Attribute, Data, DeriveInput, Field, GenericParam, Generics, LitStr, Meta, Result,
    WherePredicate,
};

/// 实现 #[derive(Introspect)] 宏
pub fn derive_introspect_impl(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Introspect 只能派生于结构体",
        ));
    };

    let bean = parse_bean_attributes(&input.attrs)?;
    let constructors = &bean.constructors;
    let methods = &bean.methods;
    let fields = data
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| field_descriptor(index, field))
        .collect::<Result<Vec<_>>>()?;

    let struct_name = &input.ident;
    let generics = static_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::infrastructure_common::Introspect for #struct_name #ty_generics #where_clause {
            fn describe() -> ::infrastructure_common::TypeDescriptor {
                ::infrastructure_common::TypeDescriptor::builder(
                    <Self as ::infrastructure_common::Introspect>::type_name(),
                )
                #( .constructor(#constructors) )*
                #( .field(#fields) )*
                #( .method(#methods) )*
                .build()
            }
        }
    })
}

/// `Introspect` 要求 `'static`，为每个类型参数和生命周期参数补上约束
fn static_generics(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let predicates: Vec<WherePredicate> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => {
                let ident = &ty.ident;
                Some(parse_quote!(#ident: 'static))
            }
            GenericParam::Lifetime(lt) => {
                let lifetime = &lt.lifetime;
                Some(parse_quote!(#lifetime: 'static))
            }
            GenericParam::Const(_) => None,
        })
        .collect();
    generics.make_where_clause().predicates.extend(predicates);
    generics
}

/// 生成字段描述符表达式
fn field_descriptor(index: usize, field: &Field) -> Result<proc_macro2::TokenStream> {
    let name = field
        .ident
        .as_ref()
        .map_or_else(|| index.to_string(), ToString::to_string);
    let ty = type_string(&field.ty);

    let mut markers = Vec::new();
    for attr in find_attributes(&field.attrs, "inject") {
        markers.push(MarkerSpec::Inject(attribute_value(attr)?));
    }
    for attr in find_attributes(&field.attrs, "provider") {
        markers.push(MarkerSpec::Provider(attribute_value(attr)?));
    }

    let descriptor = match collection_element(&field.ty) {
        Some(element) => {
            let element = type_string(element);
            quote!(::infrastructure_common::FieldDescriptor::collection(#name, #ty, #element))
        }
        None => quote!(::infrastructure_common::FieldDescriptor::new(#name, #ty)),
    };

    Ok(quote! {
        #descriptor #( .with_marker(#markers) )*
    })
}

/// 字段标记的值：`#[inject]` 没有值，`#[inject("a, b")]` 取字符串值
fn attribute_value(attr: &Attribute) -> Result<Option<String>> {
    match &attr.meta {
        Meta::Path(_) => Ok(None),
        Meta::List(_) => {
            let value: LitStr = attr.parse_args()?;
            Ok(Some(value.value()))
        }
        Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "请使用 #[inject(\"name\")] 或 #[provider(\"name\")] 形式声明名称",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_generics_bounds_type_and_lifetime_params() {
        let input: DeriveInput = parse_quote! {
            struct Holder<'a, T: Clone, const N: usize> where T: Send {
                inner: &'a T,
            }
        };
        let generics = static_generics(&input.generics);
        let predicates: Vec<String> = generics
            .where_clause
            .as_ref()
            .map(|clause| {
                clause
                    .predicates
                    .iter()
                    .map(|p| quote!(#p).to_string())
                    .collect()
            })
            .unwrap_or_default();

        assert_eq!(
            predicates,
            vec!["T : Send", "'a : 'static", "T : 'static"]
        );
    }

    #[test]
    fn test_generic_struct_expands() {
        let input: DeriveInput = parse_quote! {
            struct Holder<T> {
                #[inject]
                inner: T,
            }
        };
        let expanded = expand(&input).unwrap().to_string();
        assert!(expanded.contains("T : 'static"));
    }
}
