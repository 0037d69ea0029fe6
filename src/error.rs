//! Error types for schedule loading and normalization.
//!
//! Every failure in the loader or the engine is fatal for the whole
//! run: a partially rendered timetable is worse than an explicit
//! failure, so there is no skip-and-continue past a malformed cell.

/// Result type for loader and engine operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Error type for loader and engine operations.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// A cell's text matches none of the recognized event shapes after
    /// abbreviation expansion. Carries the original text for the log.
    #[error("invalid event format: {text:?}")]
    InvalidEventFormat { text: String },

    /// A row's day label is not one of the known weekday spellings.
    #[error("unknown day label: {label:?}")]
    UnknownDay { label: String },

    /// A row's start-time label is not in the fixed slot table.
    #[error("unknown time slot start: {label:?}")]
    UnknownTimeSlot { label: String },

    /// A time cell lacks the `<start>_<parity>` separator.
    #[error("malformed time label: {value:?}")]
    MalformedTimeLabel { value: String },

    /// An entity sub-column named by the caller is absent from the grid.
    #[error("column not present in grid: {name:?}")]
    MissingColumn { name: String },

    /// The document contains no usable rows or entity columns.
    #[error("document contains no usable rows or columns")]
    EmptyGrid,

    /// The source bytes could not be read as CSV.
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),
}

impl ScheduleError {
    /// Create an invalid-event-format error preserving the raw text.
    pub fn invalid_event_format(text: impl Into<String>) -> Self {
        Self::InvalidEventFormat { text: text.into() }
    }

    /// Create an unknown-day error.
    pub fn unknown_day(label: impl Into<String>) -> Self {
        Self::UnknownDay {
            label: label.into(),
        }
    }

    /// Create an unknown-time-slot error.
    pub fn unknown_time_slot(label: impl Into<String>) -> Self {
        Self::UnknownTimeSlot {
            label: label.into(),
        }
    }

    /// Create a malformed-time-label error.
    pub fn malformed_time_label(value: impl Into<String>) -> Self {
        Self::MalformedTimeLabel {
            value: value.into(),
        }
    }

    /// Create a missing-column error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn { name: name.into() }
    }
}
