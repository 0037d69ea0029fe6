//! Normalization engine.
//!
//! Pure, synchronous computation over a materialized [`ScheduleGrid`]:
//! cell parsing, odd/even slot reconciliation, group resolution,
//! per-entity schedule construction, and full-document assembly. Data
//! flows strictly upward; nothing here performs I/O.
//!
//! [`ScheduleGrid`]: crate::models::ScheduleGrid

pub mod assembler;
pub mod builder;
pub mod cell;
pub mod groups;
pub mod reconcile;

pub use assembler::{assemble_group_schedules, assemble_teacher_schedules};
pub use builder::build_schedule;
pub use cell::parse_cell;
pub use groups::{group_label, resolve_groups};
pub use reconcile::{reconcile, EntityContext};
