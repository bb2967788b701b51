use core::fmt;
use std::sync::{Arc, Mutex};
use std::{string::String, vec, vec::Vec};

use tracing::Level;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use super::{Packet, Point, sample_packet};
use crate::{Buffer, BufferConfig, ByteOrder, ByteStore, WireError};

#[test]
fn one_byte_value_is_written_verbatim() {
    let mut buf = Buffer::new();
    buf.write(&0xABu8);
    assert!(buf.good());
    assert_eq!(buf.size(), 1);
    assert_eq!(buf.written(), [0xAB]);
}

#[test]
fn u32_is_written_in_network_order() {
    let mut buf = Buffer::new();
    buf.write(&0x12345678u32);
    assert_eq!(buf.size(), 4);
    assert_eq!(buf.written(), [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn text_has_length_prefix_and_no_terminator() {
    let mut buf = Buffer::new();
    buf.write("hi");
    assert_eq!(buf.written(), [0, 0, 0, 2, b'h', b'i']);
}

#[test]
fn sequence_has_count_prefix() {
    let mut buf = Buffer::new();
    buf.write(&vec![7u8, 9]);
    assert_eq!(buf.written(), [0, 0, 0, 2, 7, 9]);
}

#[test]
fn fixed_buffer_rejects_oversized_write() {
    let mut region = [0u8; 3];
    let mut buf = Buffer::wrap(&mut region);
    buf.write(&0x12345678u32);

    assert!(!buf.good());
    assert_eq!(buf.size(), 0);
    assert_eq!(
        buf.last_error(),
        Some(&WireError::BufferTooSmall {
            needed: 4,
            available: 3
        })
    );
    drop(buf);
    assert_eq!(region, [0, 0, 0]);
}

#[test]
fn reset_after_failure_allows_new_writes() {
    let mut region = [0u8; 3];
    let mut buf = Buffer::wrap(&mut region);
    buf.write(&0x12345678u32);
    assert!(!buf.good());

    buf.reset();
    assert!(buf.good());
    assert_eq!(buf.size(), 0);
    assert!(buf.last_error().is_none());

    buf.write(&0xBEEFu16);
    assert!(buf.good());
    assert_eq!(buf.written(), [0xBE, 0xEF]);
}

#[test]
fn failure_is_sticky_until_reset() {
    let mut region = [0u8; 3];
    let mut buf = Buffer::wrap(&mut region);
    buf.write(&1u32).write(&1u8).write(&2u8);

    assert!(!buf.good());
    assert_eq!(buf.size(), 0);
    assert!(buf.try_write(&1u8).is_err());

    let mut value = 0u8;
    buf.read(&mut value);
    assert_eq!(value, 0);
    assert!(!buf.good());
}

#[test]
fn chained_writes_fill_fixed_region_exactly() {
    let mut region = [0u8; 7];
    let mut buf = Buffer::wrap(&mut region);
    buf.write(&1u8).write(&2u16).write(&3u32);
    assert!(buf.good());
    assert_eq!(buf.size(), 7);
    assert_eq!(buf.remaining(), 0);
    assert!(!buf.resizable());
    drop(buf);
    assert_eq!(region, [1, 0, 2, 0, 0, 0, 3]);
}

#[test]
fn capacity_check_is_relative_to_cursor() {
    let mut region = [0u8; 5];
    let mut buf = Buffer::wrap(&mut region);
    buf.write(&0u16).write(&0u32);
    assert!(!buf.good());
    assert_eq!(buf.size(), 2);
    assert_eq!(
        buf.last_error(),
        Some(&WireError::BufferTooSmall {
            needed: 4,
            available: 3
        })
    );
}

#[test]
fn growable_buffer_grows_in_whole_increments() {
    let mut buf = Buffer::with_config(BufferConfig::new().with_growth(4));
    assert_eq!(buf.capacity(), 4);
    assert!(buf.resizable());

    buf.write(&[0u8; 10]);
    assert!(buf.good());
    assert_eq!(buf.capacity(), 12);

    buf.write(&1u8);
    assert_eq!(buf.capacity(), 12);

    buf.write(&1u16);
    assert_eq!(buf.capacity(), 16);
    assert_eq!(buf.size(), 13);
}

#[test]
fn default_buffer_starts_at_default_growth() {
    let buf = Buffer::new();
    assert_eq!(buf.capacity(), crate::DEFAULT_GROWTH);
    assert_eq!(buf.size(), 0);
    assert_eq!(buf.byte_order(), ByteOrder::Network);
}

#[test]
fn zero_growth_disables_growth() {
    let mut buf = Buffer::with_config(BufferConfig::new().with_growth(0));
    buf.write(&1u8);
    assert!(!buf.good());
    assert_eq!(
        buf.last_error(),
        Some(&WireError::GrowthDisabled {
            needed: 1,
            capacity: 0
        })
    );
}

#[test]
fn growth_preserves_earlier_bytes() {
    let mut buf = Buffer::with_config(BufferConfig::new().with_growth(2));
    buf.write(&0x0102u16).write(&0x03040506u32);
    assert!(buf.good());
    assert_eq!(buf.written(), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn unchecked_write_does_not_grow() {
    let config = BufferConfig::new().with_growth(2).with_check_size(false);
    let mut buf = Buffer::with_config(config);
    buf.write(&1u32);
    assert!(!buf.good());
    assert_eq!(buf.capacity(), 2);
    assert_eq!(buf.size(), 0);
}

#[test]
fn unchecked_composite_write_can_leave_partial_bytes() {
    let mut region = [0u8; 6];
    let config = BufferConfig::new().with_check_size(false);
    let mut buf = Buffer::wrap_with_config(&mut region, config);
    buf.write(&(1u32, 2u32));

    assert!(!buf.good());
    assert_eq!(buf.size(), 0);
    drop(buf);
    assert_eq!(region[..4], [0, 0, 0, 1]);
}

#[test]
fn checked_composite_write_is_all_or_nothing() {
    let mut region = [0u8; 6];
    let mut buf = Buffer::wrap(&mut region);
    buf.write(&(1u32, 2u32));
    assert!(!buf.good());
    drop(buf);
    assert_eq!(region, [0; 6]);
}

#[test]
fn native_order_uses_host_bytes() {
    let mut buf = Buffer::with_config(BufferConfig::new().with_byte_order(ByteOrder::Native));
    buf.write(&0x12345678u32).write("a");
    assert_eq!(buf.written()[..4], 0x12345678u32.to_ne_bytes());
    assert_eq!(buf.written()[4..8], 1u32.to_ne_bytes());
}

#[test]
fn read_advances_cursor_by_bytes_consumed() {
    let mut buf = Buffer::from_vec(vec![0, 0, 0, 2, b'h', b'i', 0x01, 0x02]);
    let mut text = String::new();
    let mut tail = 0u16;

    buf.read(&mut text);
    assert_eq!(buf.size(), 6);
    buf.read(&mut tail);
    assert_eq!(buf.size(), 8);
    assert!(buf.good());
    assert_eq!(text, "hi");
    assert_eq!(tail, 0x0102);
}

#[test]
fn short_read_leaves_destination_untouched() {
    let mut buf = Buffer::from_vec(vec![0, 0, 0, 5, b'h', b'i']);
    let mut text = String::from("keep");
    buf.read(&mut text);

    assert!(!buf.good());
    assert_eq!(text, "keep");
    assert_eq!(buf.size(), 0);
    assert_eq!(
        buf.last_error(),
        Some(&WireError::UnexpectedEof {
            needed: 9,
            available: 6
        })
    );
}

#[test]
fn short_read_without_size_check_still_fails_cleanly() {
    let config = BufferConfig::new().with_check_size(false);
    let mut buf = Buffer::from_vec_with_config(vec![0, 0, 0, 3, 1, 2], config);
    let mut items = vec![9u8];
    buf.read(&mut items);

    assert!(!buf.good());
    assert_eq!(items, [9]);
    assert_eq!(buf.size(), 0);
}

#[test]
fn read_replaces_previous_sequence_contents() {
    let mut buf = Buffer::from_vec(vec![0, 0, 0, 1, 5]);
    let mut items = vec![1u8, 2, 3];
    buf.read(&mut items);
    assert_eq!(items, [5]);
}

#[test]
fn try_read_returns_owned_value() {
    let mut buf = Buffer::from_vec(vec![0x00, 0x2A]);
    assert_eq!(buf.try_read::<u16>(), Ok(42));
    assert_eq!(
        buf.try_read::<u8>(),
        Err(WireError::UnexpectedEof {
            needed: 1,
            available: 0
        })
    );
    assert!(!buf.good());
}

#[test]
fn composite_round_trip_in_both_orders() {
    for order in [ByteOrder::Network, ByteOrder::Native] {
        let config = BufferConfig::new().with_growth(16).with_byte_order(order);
        let packet = sample_packet();

        let mut writer = Buffer::with_config(config);
        writer.write(&packet).write(&Point { x: -3, y: 7 });
        assert!(writer.good());

        let mut reader = Buffer::from_vec_with_config(writer.into_vec(), config);
        let mut decoded = Packet::default();
        let mut point = Point::default();
        reader.read(&mut decoded).read(&mut point);

        assert!(reader.good());
        assert_eq!(decoded, packet);
        assert_eq!(point, Point { x: -3, y: 7 });
        assert_eq!(reader.remaining(), 0);
    }
}

#[test]
fn packet_size_matches_bytes_written() {
    let packet = sample_packet();
    let mut buf = Buffer::new();
    let written = buf.try_write(&packet).unwrap();

    // 1 + (4 + 10) + 1 + 4 + (4 + (4 + 9) + (4 + 12) + (4 + 7))
    assert_eq!(written, 64);
    assert_eq!(crate::Encode::encoded_len(&packet), written);
    assert_eq!(buf.size(), written);
}

#[test]
fn wrap_and_read_back_from_same_region() {
    let mut region = [0u8; 16];
    {
        let mut buf = Buffer::wrap(&mut region);
        buf.write(&Point { x: 1, y: 2 });
        assert!(buf.good());
    }
    let mut buf = Buffer::wrap(&mut region);
    let mut point = Point::default();
    buf.read(&mut point);
    assert_eq!(point, Point { x: 1, y: 2 });
}

#[test]
fn into_vec_returns_written_bytes() {
    let mut buf = Buffer::new();
    buf.write(&1u8).write(&2u8);
    let bytes: Vec<u8> = buf.into_vec();
    assert_eq!(bytes, [1, 2]);
}

#[test]
fn custom_store_is_accepted() {
    let store = ByteStore::growable(1);
    let mut buf = Buffer::from_store(store, BufferConfig::new().with_growth(1));
    buf.write(&0u64);
    assert!(buf.good());
    assert_eq!(buf.capacity(), 8);
}

/// Level and message of every event seen while installed.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

impl<S: tracing::Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        let level = *event.metadata().level();
        self.0.lock().unwrap().push((level, visitor.0));
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = std::format!("{value:?}");
        }
    }
}

#[test]
fn growth_reset_and_failure_emit_events() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut buf = Buffer::with_config(BufferConfig::new().with_growth(1));
        buf.write(&0u32);
        buf.reset();

        let mut region = [0u8; 1];
        let mut fixed = Buffer::wrap(&mut region);
        fixed.write(&0u32);
        assert!(!fixed.good());
    });

    let events = captured.0.lock().unwrap();
    let seen = |level: Level, message: &str| {
        events.iter().any(|(l, m)| *l == level && m == message)
    };
    assert!(seen(Level::TRACE, "growing buffer"));
    assert!(seen(Level::TRACE, "buffer reset"));
    assert!(seen(Level::DEBUG, "buffer invalidated"));
    assert_eq!(
        events.iter().filter(|(_, m)| m == "buffer invalidated").count(),
        1
    );
}
