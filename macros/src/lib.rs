//! Derive macros for composable state
//!
//! Writing a lens for every state field and a prism for every action
//! variant by hand is mechanical. These derives generate them.
//!
//! # Available Macros
//!
//! - `#[derive(Lenses)]` - One `<field>_lens()` constructor per struct field
//! - `#[derive(Prisms)]` - One `<variant>_prism()` constructor per enum variant
//!
//! # Example
//!
//! ```ignore
//! use composable_state_macros::{Lenses, Prisms};
//!
//! #[derive(Lenses, Clone, Debug)]
//! struct AppState {
//!     count: i64,
//!     favorite_primes: Vec<i64>,
//! }
//!
//! #[derive(Prisms, Clone, Debug)]
//! enum AppAction {
//!     Counter(CounterAction),
//!     PrimeModal(PrimeModalAction),
//! }
//!
//! // Generated constructors:
//! let count: Lens<AppState, i64> = AppState::count_lens();
//! let counter: Prism<AppAction, CounterAction> = AppAction::counter_prism();
//! ```
//!
//! Generated code refers to `::composable_state_core`, so the deriving crate
//! must depend on it directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for state structs
///
/// Generates, for every named field `field: T`, an associated function
/// `field_lens() -> composable_state_core::Lens<Self, T>`. The getter clones
/// the field, so `T` must implement `Clone`.
///
/// # Attributes
///
/// - `#[lens(skip)]` - Generate nothing for this field
///
/// # Errors
///
/// This macro produces a compile error if:
/// - Applied to an enum, union, or a struct without named fields
/// - A `#[lens(...)]` attribute contains anything other than `skip`
///
/// # Example
///
/// ```ignore
/// #[derive(Lenses, Clone, Debug, Default)]
/// struct AppState {
///     count: i64,
///     #[lens(skip)]
///     cache: Vec<u8>,
/// }
///
/// let mut state = AppState::default();
/// AppState::count_lens().set(&mut state, 3);
/// assert_eq!(state.count, 3);
/// ```
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_lenses(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_lenses(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Lenses)] can only be used on structs",
        ));
    };

    let Fields::Named(fields) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Lenses)] requires a struct with named fields",
        ));
    };

    let mut lenses = Vec::new();
    for field in &fields.named {
        if is_skipped(&field.attrs, "lens")? {
            continue;
        }

        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let fn_name = format_ident!("{}_lens", field_name.to_string().trim_start_matches("r#"));
        let doc = format!("Lens focusing on the `{field_name}` field");

        lenses.push(quote! {
            #[doc = #doc]
            #[must_use]
            pub fn #fn_name() -> ::composable_state_core::Lens<Self, #ty> {
                ::composable_state_core::Lens::new(
                    |state: &Self| ::core::clone::Clone::clone(&state.#field_name),
                    |state: &mut Self, value: #ty| state.#field_name = value,
                )
            }
        });
    }

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#lenses)*
        }
    })
}

/// Derive macro for action enums
///
/// Generates one associated function per variant, named after the variant
/// in snake case:
/// - `Variant(T)` gets `variant_prism() -> Prism<Self, T>`
/// - `Variant(T, U, ..)` gets `variant_prism() -> Prism<Self, (T, U, ..)>`
/// - `Variant` gets `variant_prism() -> Prism<Self, ()>`
///
/// Variants with named fields get no prism; wrap their payload in a struct
/// to make them addressable.
///
/// # Attributes
///
/// - `#[prism(skip)]` - Generate nothing for this variant
///
/// # Errors
///
/// This macro produces a compile error if:
/// - Applied to a struct or union
/// - A `#[prism(...)]` attribute contains anything other than `skip`
///
/// # Example
///
/// ```ignore
/// #[derive(Prisms, Clone, Debug)]
/// enum AppAction {
///     Counter(CounterAction),
///     Reset,
/// }
///
/// let prism = AppAction::counter_prism();
/// assert!(prism.extract(AppAction::Reset).is_none());
/// ```
#[proc_macro_derive(Prisms, attributes(prism))]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_prisms(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_prisms(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Prisms)] can only be used on enums",
        ));
    };

    let mut prisms = Vec::new();
    for variant in &data_enum.variants {
        if is_skipped(&variant.attrs, "prism")? {
            continue;
        }

        let variant_name = &variant.ident;
        let fn_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
        let doc = format!("Prism focusing on the `{variant_name}` variant");

        let (local, pattern, payload, embed) = match &variant.fields {
            Fields::Unit => (
                quote! { () },
                quote! { Self::#variant_name },
                quote! { () },
                quote! { |(): ()| Self::#variant_name },
            ),
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let ty = &fields.unnamed[0].ty;
                (
                    quote! { #ty },
                    quote! { Self::#variant_name(value) },
                    quote! { value },
                    quote! { |value: #ty| Self::#variant_name(value) },
                )
            },
            Fields::Unnamed(fields) => {
                let types: Vec<_> = fields.unnamed.iter().map(|f| &f.ty).collect();
                let bindings: Vec<_> = (0..types.len()).map(|i| format_ident!("value{i}")).collect();
                (
                    quote! { (#(#types),*) },
                    quote! { Self::#variant_name(#(#bindings),*) },
                    quote! { (#(#bindings),*) },
                    quote! { |(#(#bindings),*): (#(#types),*)| Self::#variant_name(#(#bindings),*) },
                )
            },
            Fields::Named(_) => continue,
        };

        prisms.push(quote! {
            #[doc = #doc]
            #[must_use]
            pub fn #fn_name() -> ::composable_state_core::Prism<Self, #local> {
                ::composable_state_core::Prism::new(
                    |action: Self| match action {
                        #pattern => ::core::option::Option::Some(#payload),
                        #[allow(unreachable_patterns)]
                        _ => ::core::option::Option::None,
                    },
                    #embed,
                )
            }
        });
    }

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#prisms)*
        }
    })
}

/// Whether `attrs` carries `#[<name>(skip)]`
fn is_skipped(attrs: &[Attribute], name: &str) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(name)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error(format!("unsupported #[{name}] option, expected `skip`")))
            }
        })?;
    }
    Ok(skip)
}

/// `PrimeModal` -> `prime_modal`, `HTTPRequest` -> `http_request`
fn to_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.trim_start_matches("r#").chars().collect();
    let mut snake = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if i > 0 && (prev_lower || (prev_upper && next_lower)) {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }

    snake
}
