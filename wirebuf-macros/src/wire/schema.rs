//! `Schema` and `Composite` generation.

use super::{WireField, bounded_generics, wire_fields};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

pub fn generate(input: &DeriveInput, fields: &[WireField<'_>]) -> TokenStream2 {
    let name = &input.ident;
    let label = name.to_string();
    let generics = bounded_generics(input, quote!(wirebuf::Schema));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let sizes: Vec<_> = wire_fields(fields)
        .map(|f| {
            let ty = f.ty;
            quote! { <#ty as wirebuf::Schema>::FIXED_SIZE }
        })
        .collect();

    let descriptors: Vec<_> = wire_fields(fields)
        .map(|f| {
            let ty = f.ty;
            let label = &f.label;
            quote! { wirebuf::FieldDescriptor::of::<#ty>(#label) }
        })
        .collect();

    quote! {
        impl #impl_generics wirebuf::Schema for #name #ty_generics #where_clause {
            const SHAPE: wirebuf::Shape = wirebuf::Shape::Composite;
            const FIXED_SIZE: Option<usize> = wirebuf::fixed_sum(&[#(#sizes),*]);

            fn descriptor() -> wirebuf::Descriptor {
                wirebuf::Descriptor::Composite {
                    name: <Self as wirebuf::Composite>::NAME,
                    fields: <Self as wirebuf::Composite>::fields(),
                }
            }
        }

        impl #impl_generics wirebuf::Composite for #name #ty_generics #where_clause {
            const NAME: &'static str = #label;

            fn fields() -> wirebuf::__private::Vec<wirebuf::FieldDescriptor> {
                wirebuf::__private::vec![#(#descriptors),*]
            }
        }
    }
}
