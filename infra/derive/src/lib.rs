#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by the RegScope crates: runtime bootstrap, API
//! DTO/handler wiring, error enums and feature slice handles.
//!
//! The generated code refers to `::regscope_runtime`, `::regscope_kernel`,
//! `::serde`, `::thiserror` and `::utoipa` by absolute path, so consuming
//! crates must depend on whichever of those their macros touch.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns `async fn main` into a synchronous `main` that builds a Tokio
/// runtime from a [`RuntimeConfig`] profile and blocks on the body.
///
/// Accepted profiles: `default` (or no argument), `high_performance`,
/// `memory_efficient`. The function must return a `Result`.
///
/// ```rust,ignore
/// #[regscope_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
///
/// [`RuntimeConfig`]: ../regscope_runtime/struct.RuntimeConfig.html
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a request/response DTO.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, derives
/// `utoipa::ToSchema` under the consumer's `server` feature, applies
/// `rename_all = "camelCase"` and `deny_unknown_fields` unless told otherwise.
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct Finding {
///     pub regulation: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Documents an Axum handler through `utoipa::path` when the consumer's
/// `server` feature is on. Arguments are passed to `utoipa::path` verbatim.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health() -> Json<HealthResponse> { todo!() }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Builds a crate error enum on top of `thiserror`.
///
/// Every variant must use named fields. A variant with a `source` field
/// (or a field marked `#[source]`/`#[from]`) must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// Generated items:
/// * `#[derive(Debug, thiserror::Error)]` when not already derived;
/// * `From<Source>` for every sourced variant;
/// * a `<Name>Ext` trait adding `.context(..)` to `Result<T, Name>` and to
///   `Result<T, Source>`;
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists;
/// * a private `format_context` helper for display strings.
///
/// ```rust,ignore
/// #[regscope_error]
/// pub enum StoreError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn regscope_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a shareable feature slice handle.
///
/// The fields move into `<Name>Inner`; `<Name>` becomes an `Arc` wrapper
/// with `new`, `Deref` to the inner state and a `FeatureSlice` impl so it
/// can be registered in the kernel's `ApiState`.
///
/// ```rust,ignore
/// #[regscope_derive::regscope_slice]
/// pub struct Reports {
///     pub limit: usize,
/// }
///
/// let slice = Reports::new(ReportsInner { limit: 10 });
/// ```
#[proc_macro_attribute]
pub fn regscope_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
