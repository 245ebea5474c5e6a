//! Derive macro implementation for envs

use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2, TokenTree};
use quote::{quote, ToTokens};
use std::collections::HashSet;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldAnnotation, StructAttrs};

/// `Envs` derive macro
///
/// Implements `envs::Envs` (the binding descriptor) and `envs::EnvField`
/// (so the struct can be nested in another bindable record).
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[envs(prefix = "PREFIX_")]`: Add prefix to all keys declared on the struct
///
/// **Field-level**:
/// - `#[envs("KEY")]` / `#[envs = "KEY"]`: Bind from the `KEY` environment variable
/// - `#[envs("-")]`: Exclude the field
/// - `#[envs]` / `#[envs("")]`: No key; nested records are still bound
///
/// Fields without an `#[envs]` attribute are bound only when their type is
/// itself a record deriving `Envs`; other unannotated fields are left alone.
/// Annotated fields whose type uses a type parameter get a `T: EnvField` bound.
///
/// # Example
///
/// See the `envs` crate documentation for usage examples.
#[proc_macro_derive(Envs, attributes(envs))]
pub fn derive_envs(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Envs only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Envs only supports structs with named fields",
            ));
        }
    };

    let struct_attrs = StructAttrs::from_input(input)?;

    let type_params: HashSet<&Ident> = input
        .generics
        .type_params()
        .map(|param| &param.ident)
        .collect();
    let mut generics = input.generics.clone();

    let mut entries = Vec::new();
    for field in fields {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let field_name = field_ident.unraw().to_string();
        let field_type = &field.ty;

        let annotation = match FieldAnnotation::from_field(field)? {
            FieldAnnotation::Skip => continue,
            FieldAnnotation::Absent => {
                // Bound only if the field type turns out to be a record
                entries.push(quote! {
                    if let ::std::option::Option::Some(__slot) = {
                        use ::envs::dispatch::{ViaEnvs as _, ViaFallback as _};
                        ::envs::dispatch::Probe(&mut self.#field_ident).nested_slot()
                    } {
                        __fields.push(::envs::Field::new(
                            #field_name,
                            ::envs::Annotation::Empty,
                            __slot,
                        ));
                    }
                });
                continue;
            }
            FieldAnnotation::Empty => quote! { ::envs::Annotation::Empty },
            FieldAnnotation::Key(key) => {
                let key = format!("{}{}", struct_attrs.prefix, key);
                quote! { ::envs::Annotation::Key(#key) }
            }
        };

        if mentions_any(field_type.to_token_stream(), &type_params) {
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote! { #field_type: ::envs::EnvField });
        }

        entries.push(quote! {
            __fields.push(::envs::Field::new(
                #field_name,
                #annotation,
                ::envs::EnvField::slot(&mut self.#field_ident),
            ));
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envs::Envs for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envs::Field<'_>> {
                #[allow(unused_mut)]
                let mut __fields = ::std::vec::Vec::new();
                #(#entries)*
                __fields
            }
        }

        impl #impl_generics ::envs::EnvField for #struct_name #ty_generics #where_clause {
            fn slot(&mut self) -> ::envs::Slot<'_> {
                ::envs::Slot::Nested(::envs::Envs::fields(self))
            }
        }
    })
}

/// Whether `tokens` refer to any of the struct's type parameters.
fn mentions_any(tokens: TokenStream2, params: &HashSet<&Ident>) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => params.contains(&ident),
        TokenTree::Group(group) => mentions_any(group.stream(), params),
        _ => false,
    })
}
