//! Normalized schedule output model.
//!
//! The serialized shape is the API contract: snake_case fields,
//! `"HH:MM"` times, a `kind` tag on the slot variant and a `layout`
//! tag on each week side, `null` as the empty marker inside stacked
//! event lists, and order-preserving maps keyed by entity label.

use chrono::NaiveTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::day::Day;
use super::time::{hhmm, TimeSlot};

/// Classified kind of one timetable sub-event.
///
/// Serialized as the full Ukrainian word; free-text abbreviations are
/// expanded by the cell parser before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubEventKind {
    #[serde(rename = "лекція")]
    Lecture,
    #[serde(rename = "лабораторна")]
    Lab,
    #[serde(rename = "практичні")]
    Practicum,
    #[serde(rename = "адаптаційний курс")]
    AdaptationCourse,
}

impl SubEventKind {
    /// Classify a normalized kind label.
    pub fn from_label(label: &str) -> Option<SubEventKind> {
        match label {
            "лекція" => Some(SubEventKind::Lecture),
            "лабораторна" => Some(SubEventKind::Lab),
            "практичні" => Some(SubEventKind::Practicum),
            "адаптаційний курс" => Some(SubEventKind::AdaptationCourse),
            _ => None,
        }
    }

    /// The serialized label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubEventKind::Lecture => "лекція",
            SubEventKind::Lab => "лабораторна",
            SubEventKind::Practicum => "практичні",
            SubEventKind::AdaptationCourse => "адаптаційний курс",
        }
    }
}

/// One parsed timetable cell entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubEvent {
    #[serde(rename = "type")]
    pub kind: SubEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor: Option<String>,
    /// Group labels this entry applies to; the reconciler guarantees at
    /// least one by defaulting to the owning column's label
    pub groups: Vec<String>,
}

/// One side (week parity) of a horizontally split slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum WeekSide {
    /// No event this parity
    Empty,
    /// One event spanning every sub-column
    Single { event: SubEvent },
    /// One entry per sub-column in column order; `null` marks a free sub-column
    Stacked { events: Vec<Option<SubEvent>> },
}

impl WeekSide {
    /// True when the side holds at most one event covering all sub-columns.
    pub fn is_collapsed(&self) -> bool {
        !matches!(self, WeekSide::Stacked { .. })
    }

    /// True when the side carries no event at all.
    pub fn is_empty(&self) -> bool {
        match self {
            WeekSide::Empty => true,
            WeekSide::Single { .. } => false,
            WeekSide::Stacked { events } => events.iter().all(Option::is_none),
        }
    }
}

/// Variant payload of a reconciled slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotVariant {
    /// Identical content in both week parities and every sub-column
    Single { event: SubEvent },
    /// Co-resident events stacked across sub-columns, identical in both
    /// parities; `null` marks a free sub-column
    Vertical { events: Vec<Option<SubEvent>> },
    /// Distinct odd-week (nominator) and even-week (denominator) content
    Horizontal {
        nominator: WeekSide,
        denominator: WeekSide,
    },
}

/// One reconciled timetable slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSlot {
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// 1-based slot ordinal within the day
    pub order: u8,
    /// True when odd and even weeks carry identical content
    pub spans_both_weeks: bool,
    /// True when every parity side collapses to at most one event
    /// covering all sub-columns
    pub spans_all_subcolumns: bool,
    #[serde(flatten)]
    pub variant: SlotVariant,
}

impl EventSlot {
    /// Build a slot from its variant, deriving the two span flags.
    pub fn new(slot: TimeSlot, variant: SlotVariant) -> EventSlot {
        let spans_both_weeks = !matches!(variant, SlotVariant::Horizontal { .. });
        let spans_all_subcolumns = match &variant {
            SlotVariant::Single { .. } => true,
            SlotVariant::Vertical { .. } => false,
            SlotVariant::Horizontal {
                nominator,
                denominator,
            } => nominator.is_collapsed() && denominator.is_collapsed(),
        };

        EventSlot {
            start_time: slot.start,
            end_time: slot.end,
            order: slot.order,
            spans_both_weeks,
            spans_all_subcolumns,
            variant,
        }
    }
}

/// All retained slots of one weekday, ordered by slot ordinal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Day,
    pub events: Vec<EventSlot>,
}

/// Students document entry for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupScheduleEntry {
    /// Group label derived from the sub-column headers
    pub group: String,
    /// Sub-group column labels in sheet order
    pub subgroups: Vec<String>,
    pub schedule: Vec<DaySchedule>,
}

/// Teachers document entry for one teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherScheduleEntry {
    pub teacher: String,
    pub schedule: Vec<DaySchedule>,
}

/// Students document, keyed by group label in resolver order.
pub type GroupSchedules = IndexMap<String, GroupScheduleEntry>;

/// Teachers document, keyed by teacher name in column order.
pub type TeacherSchedules = IndexMap<String, TeacherScheduleEntry>;
