use std::collections::BTreeMap;
use std::string::{String, ToString};
use std::vec::Vec;

use super::{Cached, Packet, Point};
use crate::{Composite, Descriptor, FieldDescriptor, NumericKind, Schema, Shape};

#[test]
fn primitive_descriptors() {
    assert_eq!(
        u16::descriptor(),
        Descriptor::primitive(2, NumericKind::Unsigned)
    );
    assert_eq!(i64::descriptor().to_string(), "i64");
    assert_eq!(f32::descriptor().to_string(), "f32");
    assert_eq!(usize::descriptor().to_string(), "u64");
    assert_eq!(bool::descriptor().to_string(), "bool");
    assert_eq!(char::descriptor().to_string(), "char");
}

#[test]
fn container_descriptors_render() {
    assert_eq!(String::descriptor().to_string(), "text");
    assert_eq!(<[u16; 3]>::descriptor().to_string(), "[u16; 3]");
    assert_eq!(Vec::<String>::descriptor().to_string(), "seq<text>");
    assert_eq!(
        BTreeMap::<u8, Vec<f64>>::descriptor().to_string(),
        "map<u8, seq<f64>>"
    );
    assert_eq!(<(u8, String)>::descriptor().to_string(), "(u8, text)");
    assert_eq!(<(u32,)>::descriptor().to_string(), "(u32,)");
    assert_eq!(<()>::descriptor().to_string(), "()");
}

#[test]
fn composite_descriptor_lists_fields_in_order() {
    assert_eq!(
        Packet::descriptor().to_string(),
        "Packet { kind: u8, name: text, age: u8, money: f32, shops: seq<text> }"
    );
    assert_eq!(Point::descriptor().to_string(), "Point { x: i32, y: i32 }");
    assert_eq!(
        Descriptor::composite("Empty", []).to_string(),
        "Empty {}"
    );
}

#[test]
fn composite_trait_exposes_name_and_fields() {
    assert_eq!(Packet::NAME, "Packet");
    let names: Vec<_> = Packet::fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["kind", "name", "age", "money", "shops"]);
    assert_eq!(Packet::fields()[4], FieldDescriptor::of::<Vec<String>>("shops"));
}

#[test]
fn skipped_fields_are_not_described() {
    assert_eq!(Cached::fields(), [FieldDescriptor::of::<u16>("id")]);
    assert_eq!(Cached::FIXED_SIZE, Some(2));
}

#[test]
fn shapes_match_descriptors() {
    assert_eq!(u8::SHAPE, Shape::Primitive);
    assert_eq!(String::SHAPE, Shape::Text);
    assert_eq!(<[u8; 2]>::SHAPE, Shape::FixedArray);
    assert_eq!(Vec::<u8>::SHAPE, Shape::Sequence);
    assert_eq!(BTreeMap::<u8, u8>::SHAPE, Shape::AssociativeSequence);
    assert_eq!(<(u8, u8)>::SHAPE, Shape::Tuple);
    assert_eq!(Point::SHAPE, Shape::Composite);

    assert_eq!(Packet::descriptor().shape(), Packet::SHAPE);
    assert_eq!(<[Point; 2]>::descriptor().shape(), Shape::FixedArray);
}

#[test]
fn fixed_size_agrees_with_descriptor() {
    fn check<T: Schema>() {
        assert_eq!(T::descriptor().fixed_size(), T::FIXED_SIZE);
    }
    check::<u8>();
    check::<f64>();
    check::<String>();
    check::<[u32; 4]>();
    check::<[String; 2]>();
    check::<Vec<u8>>();
    check::<(u8, u16, [i32; 2])>();
    check::<(u8, String)>();
    check::<Point>();
    check::<Packet>();

    assert_eq!(Point::FIXED_SIZE, Some(8));
    assert_eq!(<(u8, [u16; 3])>::FIXED_SIZE, Some(7));
    assert_eq!(Packet::FIXED_SIZE, None);
}

#[test]
fn depth_counts_nesting() {
    assert_eq!(u8::descriptor().depth(), 1);
    assert_eq!(Vec::<Vec<u8>>::descriptor().depth(), 3);
    assert_eq!(Point::descriptor().depth(), 2);
    assert_eq!(Packet::descriptor().depth(), 3);
    assert_eq!(<()>::descriptor().depth(), 1);
}
