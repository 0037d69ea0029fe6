//! Fixed daily time slots.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Number of teaching slots per day.
pub const SLOT_COUNT: usize = 5;

/// Start/end labels of the five daily slots, in ordinal order.
const SLOT_TABLE: [(&str, &str); SLOT_COUNT] = [
    ("08:30", "10:05"),
    ("10:20", "11:55"),
    ("12:10", "13:45"),
    ("14:30", "16:05"),
    ("16:20", "17:35"),
];

/// One of the five fixed daily teaching slots.
///
/// Ordered by `order`, which is also the only field that varies
/// independently; start and end times come from the fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    /// 1-based position of the slot within the day
    pub order: u8,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

static TIME_SLOTS: Lazy<[TimeSlot; SLOT_COUNT]> = Lazy::new(|| {
    std::array::from_fn(|position| TimeSlot {
        order: (position + 1) as u8,
        start: parse_label(SLOT_TABLE[position].0).unwrap(),
        end: parse_label(SLOT_TABLE[position].1).unwrap(),
    })
});

fn parse_label(label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(label.trim(), hhmm::FORMAT).ok()
}

impl TimeSlot {
    /// All five slots in ordinal order.
    pub fn all() -> &'static [TimeSlot] {
        &*TIME_SLOTS
    }

    /// Look a slot up by its start label, e.g. `"08:30"`.
    pub fn from_start_label(label: &str) -> Option<TimeSlot> {
        let start = parse_label(label)?;
        TimeSlot::all().iter().copied().find(|slot| slot.start == start)
    }
}

/// Serde helpers for the `"HH:MM"` time representation.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
