extern crate std;

mod buffer;
mod descriptor;

use std::{string::String, vec, vec::Vec};

use crate::composite;

/// The packet from the README, declared without the derive.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Packet {
    pub kind: u8,
    pub name: String,
    pub age: u8,
    pub money: f32,
    pub shops: Vec<String>,
}

composite!(Packet {
    kind: u8,
    name: String,
    age: u8,
    money: f32,
    shops: Vec<String>,
});

pub(crate) fn sample_packet() -> Packet {
    Packet {
        kind: 1,
        name: "James Bond".into(),
        age: 45,
        money: 2_929_292.0,
        shops: vec!["Pizza Hut".into(), "Hungry Jacks".into(), "JB HIFI".into()],
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct Point {
    pub x: i32,
    pub y: i32,
}

composite!(Point { x: i32, y: i32 });

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Cached {
    pub id: u16,
    pub hits: u64,
}

composite!(Cached { id: u16 }; skip hits);
