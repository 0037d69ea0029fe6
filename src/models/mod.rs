//! Data model: fixed tables, the loader grid, and the output document.

pub mod day;
pub mod event;
pub mod grid;
pub mod time;

pub use day::Day;
pub use event::{
    DaySchedule, EventSlot, GroupScheduleEntry, GroupSchedules, SlotVariant, SubEvent,
    SubEventKind, TeacherScheduleEntry, TeacherSchedules, WeekSide,
};
pub use grid::{GridRow, ScheduleGrid, WeekParity, EVEN_WEEK_TOKEN};
pub use time::{TimeSlot, SLOT_COUNT};
