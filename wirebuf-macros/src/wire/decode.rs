//! `Decode` generation.

use super::{Form, WireField, bounded_generics, wire_fields};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

pub fn generate(input: &DeriveInput, form: Form, fields: &[WireField<'_>]) -> TokenStream2 {
    let name = &input.ident;
    let generics = bounded_generics(input, quote!(wirebuf::Decode));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let reads: Vec<_> = fields
        .iter()
        .map(|f| {
            let binding = &f.binding;
            let ty = f.ty;
            if f.skip {
                quote! {
                    let #binding: #ty = Default::default();
                }
            } else {
                quote! {
                    let (#binding, consumed) =
                        <#ty as wirebuf::Decode>::decode(&input[offset..], order)?;
                    offset += consumed;
                }
            }
        })
        .collect();

    let bindings: Vec<_> = fields.iter().map(|f| &f.binding).collect();
    let constructor = match form {
        Form::Named => {
            let members: Vec<_> = fields.iter().map(|f| &f.member).collect();
            quote! { #name { #(#members: #bindings),* } }
        }
        Form::Unnamed => quote! { #name(#(#bindings),*) },
        Form::Unit => quote! { #name },
    };

    let scans: Vec<_> = wire_fields(fields)
        .map(|f| {
            let ty = f.ty;
            quote! {
                offset += <#ty as wirebuf::Decode>::scan(&input[offset..], order)?;
            }
        })
        .collect();

    quote! {
        impl #impl_generics wirebuf::Decode for #name #ty_generics #where_clause {
            #[allow(unused_variables, unused_mut)]
            fn decode(
                input: &[u8],
                order: wirebuf::ByteOrder,
            ) -> Result<(Self, usize), wirebuf::WireError> {
                let mut offset = 0usize;
                #(#reads)*
                Ok((#constructor, offset))
            }

            #[allow(unused_variables, unused_mut)]
            fn scan(input: &[u8], order: wirebuf::ByteOrder) -> Result<usize, wirebuf::WireError> {
                if let Some(size) = <Self as wirebuf::Schema>::FIXED_SIZE {
                    if input.len() < size {
                        return Err(wirebuf::WireError::UnexpectedEof {
                            needed: size,
                            available: input.len(),
                        });
                    }
                    return Ok(size);
                }
                let mut offset = 0usize;
                #(#scans)*
                Ok(offset)
            }
        }
    }
}
