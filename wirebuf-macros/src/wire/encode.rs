//! `Encode` generation.

use super::{WireField, bounded_generics, wire_fields};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

pub fn generate(input: &DeriveInput, fields: &[WireField<'_>]) -> TokenStream2 {
    let name = &input.ident;
    let generics = bounded_generics(input, quote!(wirebuf::Encode));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let lens: Vec<_> = wire_fields(fields)
        .map(|f| {
            let member = &f.member;
            quote! { wirebuf::Encode::encoded_len(&self.#member) }
        })
        .collect();

    let writes: Vec<_> = wire_fields(fields)
        .map(|f| {
            let member = &f.member;
            quote! {
                offset += wirebuf::Encode::encode(&self.#member, &mut out[offset..], order)?;
            }
        })
        .collect();

    quote! {
        impl #impl_generics wirebuf::Encode for #name #ty_generics #where_clause {
            fn encoded_len(&self) -> usize {
                match <Self as wirebuf::Schema>::FIXED_SIZE {
                    Some(size) => size,
                    None => 0 #(+ #lens)*,
                }
            }

            #[allow(unused_variables, unused_mut)]
            fn encode(
                &self,
                out: &mut [u8],
                order: wirebuf::ByteOrder,
            ) -> Result<usize, wirebuf::WireError> {
                let mut offset = 0usize;
                #(#writes)*
                Ok(offset)
            }
        }
    }
}
