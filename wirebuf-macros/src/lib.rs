//! Derive macro for wirebuf composites.

use proc_macro::TokenStream;
mod wire;

/// Derive `Schema`, `Composite`, `Encode` and `Decode` for a struct.
///
/// Fields go on the wire in declaration order. `#[wire(skip)]` leaves a
/// field off the wire; decoding fills it with `Default::default()`.
#[proc_macro_derive(Wire, attributes(wire))]
pub fn derive_wire(input: TokenStream) -> TokenStream {
    wire::derive_wire(input)
}
