//! `Wire` derive implementation.

mod decode;
mod encode;
mod schema;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive the wire traits for a struct.
pub fn derive_wire(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Layout of the struct's constructor.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Named,
    Unnamed,
    Unit,
}

/// One declared field.
pub struct WireField<'a> {
    /// `name` or `0`, for `self.#member`.
    pub member: syn::Member,
    /// Local variable used while decoding.
    pub binding: syn::Ident,
    /// Name reported in the field descriptor.
    pub label: String,
    pub ty: &'a syn::Type,
    pub skip: bool,
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Wire derive supports structs only; enums have no wire layout.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Wire derive is not supported for unions.",
            ));
        }
    };

    let (form, fields) = collect_fields(&data.fields)?;

    let schema = schema::generate(input, &fields);
    let encode = encode::generate(input, &fields);
    let decode = decode::generate(input, form, &fields);

    Ok(quote! {
        #schema
        #encode
        #decode
    })
}

fn collect_fields(fields: &Fields) -> syn::Result<(Form, Vec<WireField<'_>>)> {
    let form = match fields {
        Fields::Named(_) => Form::Named,
        Fields::Unnamed(_) => Form::Unnamed,
        Fields::Unit => Form::Unit,
    };

    let mut out = Vec::new();
    for (i, f) in fields.iter().enumerate() {
        let (member, binding, label) = match &f.ident {
            Some(ident) => (
                syn::Member::Named(ident.clone()),
                syn::Ident::new(&format!("__field_{ident}"), Span::call_site()),
                ident.to_string(),
            ),
            None => (
                syn::Member::Unnamed(syn::Index::from(i)),
                syn::Ident::new(&format!("__field_{i}"), Span::call_site()),
                i.to_string(),
            ),
        };
        out.push(WireField {
            member,
            binding,
            label,
            ty: &f.ty,
            skip: has_skip_attr(f)?,
        });
    }
    Ok((form, out))
}

/// Check for `#[wire(skip)]`, rejecting unknown options.
fn has_skip_attr(field: &syn::Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("wire") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown wire attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

/// Fields that travel on the wire, in order.
pub fn wire_fields<'a, 'b>(fields: &'b [WireField<'a>]) -> impl Iterator<Item = &'b WireField<'a>> {
    fields.iter().filter(|f| !f.skip)
}

/// Generics with `bound` added to every type parameter.
pub fn bounded_generics(input: &DeriveInput, bound: TokenStream2) -> syn::Generics {
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(#bound));
    }
    generics
}
