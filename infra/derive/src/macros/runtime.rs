use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Expands `#[regscope_runtime::main]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.fn_token,
            "#[regscope_runtime::main] requires an async fn",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[regscope_runtime::main] requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match profile_call(args) {
        Ok(profile) => profile,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let runtime = ::regscope_runtime::build_runtime(&#profile)?;
            runtime.block_on(async #block)
        }
    }
}

fn profile_call(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::regscope_runtime::RuntimeConfig::default() });
    }

    let profile: Ident = syn::parse2(args)?;
    match profile.to_string().as_str() {
        "default" => Ok(quote! { ::regscope_runtime::RuntimeConfig::default() }),
        "high_performance" => Ok(quote! { ::regscope_runtime::RuntimeConfig::high_performance() }),
        "memory_efficient" => Ok(quote! { ::regscope_runtime::RuntimeConfig::memory_efficient() }),
        _ => Err(Error::new_spanned(
            profile,
            "unknown runtime profile; expected default, high_performance or memory_efficient",
        )),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = ty.as_ref() else {
        return false;
    };
    path.path.segments.last().is_some_and(|segment| segment.ident == "Result")
}
