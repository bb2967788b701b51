/// Declare an existing struct as a composite.
///
/// Lists the fields in wire order with their types and implements
/// [`Schema`](crate::Schema), [`Composite`](crate::Composite),
/// [`Encode`](crate::Encode) and [`Decode`](crate::Decode). Fields named
/// after a trailing `; skip` are left off the wire and rebuilt with
/// `Default` on decode.
/// With the `derive` feature, `#[derive(Wire)]` does the same from the
/// struct definition.
///
/// # Example
///
/// ```
/// use wirebuf::{Buffer, composite};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Packet {
///     kind: u8,
///     name: String,
///     shops: Vec<String>,
/// }
///
/// composite!(Packet { kind: u8, name: String, shops: Vec<String> });
///
/// let packet = Packet {
///     kind: 1,
///     name: "James Bond".into(),
///     shops: vec!["Pizza Hut".into()],
/// };
/// let mut buf = Buffer::new();
/// buf.write(&packet);
/// assert!(buf.good());
/// assert_eq!(buf.size(), 1 + 4 + 10 + 4 + 4 + 9);
/// ```
#[macro_export]
macro_rules! composite {
    ($name:ident { $($field:ident : $ty:ty),* $(,)? } $(; skip $($skipped:ident),+)?) => {
        impl $crate::Schema for $name {
            const SHAPE: $crate::Shape = $crate::Shape::Composite;
            const FIXED_SIZE: ::core::option::Option<usize> =
                $crate::fixed_sum(&[$(<$ty as $crate::Schema>::FIXED_SIZE),*]);

            fn descriptor() -> $crate::Descriptor {
                $crate::Descriptor::Composite {
                    name: <Self as $crate::Composite>::NAME,
                    fields: <Self as $crate::Composite>::fields(),
                }
            }
        }

        impl $crate::Composite for $name {
            const NAME: &'static str = ::core::stringify!($name);

            fn fields() -> $crate::__private::Vec<$crate::FieldDescriptor> {
                $crate::__private::vec![
                    $($crate::FieldDescriptor::of::<$ty>(::core::stringify!($field))),*
                ]
            }
        }

        impl $crate::Encode for $name {
            fn encoded_len(&self) -> usize {
                match <Self as $crate::Schema>::FIXED_SIZE {
                    ::core::option::Option::Some(size) => size,
                    ::core::option::Option::None => {
                        0 $(+ $crate::Encode::encoded_len(&self.$field))*
                    }
                }
            }

            #[allow(unused_mut, unused_variables)]
            fn encode(&self, out: &mut [u8], order: $crate::ByteOrder) -> $crate::Result<usize> {
                let mut offset = 0usize;
                $(offset += $crate::Encode::encode(&self.$field, &mut out[offset..], order)?;)*
                ::core::result::Result::Ok(offset)
            }
        }

        impl $crate::Decode for $name {
            #[allow(unused_mut, unused_variables)]
            fn decode(input: &[u8], order: $crate::ByteOrder) -> $crate::Result<(Self, usize)> {
                let mut offset = 0usize;
                $(
                    let ($field, consumed) =
                        <$ty as $crate::Decode>::decode(&input[offset..], order)?;
                    offset += consumed;
                )*
                ::core::result::Result::Ok((
                    $name {
                        $($field,)*
                        $($($skipped: ::core::default::Default::default(),)+)?
                    },
                    offset,
                ))
            }

            #[allow(unused_mut, unused_variables)]
            fn scan(input: &[u8], order: $crate::ByteOrder) -> $crate::Result<usize> {
                let mut offset = 0usize;
                $(offset += <$ty as $crate::Decode>::scan(&input[offset..], order)?;)*
                ::core::result::Result::Ok(offset)
            }
        }
    };
}
