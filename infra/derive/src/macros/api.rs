use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "camelCase";

/// Expands `#[api_model]`.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match api_model(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn api_model(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = ModelArgs::parse(args)?;
    let existing = SerdeAttrs::scan(&input.attrs)?;
    let derives = derived_trait_names(&input.attrs);

    let mut missing = Vec::new();
    for (name, path) in [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ] {
        if !derives.contains(name) {
            missing.push(path);
        }
    }
    let derive_attr =
        if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } };

    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename = args.rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));
    let rename_attr = match &existing.rename_all {
        Some(current) if current.value() != rename.value() => {
            return Err(syn::Error::new_spanned(
                current,
                "serde rename_all conflicts with api_model(rename_all = ..)",
            ));
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename)] },
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    let deny_attr = match (existing.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "serde(deny_unknown_fields) is set; remove it before disabling it in api_model",
            ));
        }
        (false, true) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands `#[api_handler]`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

impl ModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
        let mut parsed = Self::default();

        for meta in metas {
            let Meta::NameValue(pair) = meta else {
                return Err(syn::Error::new_spanned(
                    meta,
                    "expected `rename_all = \"..\"` or `deny_unknown_fields = bool`",
                ));
            };

            if pair.path.is_ident("rename_all") {
                let Lit::Str(value) = literal(&pair)? else {
                    return Err(syn::Error::new_spanned(&pair.value, "rename_all must be a string"));
                };
                store_once(&mut parsed.rename_all, value, &pair)?;
            } else if pair.path.is_ident("deny_unknown_fields") {
                let Lit::Bool(value) = literal(&pair)? else {
                    return Err(syn::Error::new_spanned(
                        &pair.value,
                        "deny_unknown_fields must be a boolean",
                    ));
                };
                store_once(&mut parsed.deny_unknown_fields, value.value, &pair)?;
            } else {
                return Err(syn::Error::new_spanned(
                    &pair.path,
                    "unsupported argument; expected rename_all or deny_unknown_fields",
                ));
            }
        }

        Ok(parsed)
    }
}

fn literal(pair: &MetaNameValue) -> syn::Result<Lit> {
    match &pair.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a literal")),
    }
}

fn store_once<T>(slot: &mut Option<T>, value: T, pair: &MetaNameValue) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(pair, "duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

/// Serde settings already present on the struct.
struct SerdeAttrs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl SerdeAttrs {
    fn scan(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut found = Self { rename_all: None, deny_unknown_fields: false };

        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    found.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    found.deny_unknown_fields = true;
                } else if meta.input.peek(Token![=]) {
                    let _: Expr = meta.value()?.parse()?;
                }
                Ok(())
            })?;
        }

        Ok(found)
    }
}
