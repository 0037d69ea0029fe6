//! In-memory grid produced by the tabular loader.
//!
//! The grid is the boundary between document loading and the
//! normalization engine: ordered entity columns plus rows carrying a
//! raw day label, a slot start label with its week parity, and one
//! optional cell per column. Label resolution against the fixed day
//! and slot tables happens in the engine, not here.

use serde::{Deserialize, Serialize};

/// Time-suffix token marking an even-week row.
pub const EVEN_WEEK_TOKEN: &str = "з";

/// Week parity of one timetable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
    Odd,
    Even,
}

impl WeekParity {
    /// Classify a time-suffix token. Anything but the even marker is odd.
    pub fn from_token(token: &str) -> WeekParity {
        if token == EVEN_WEEK_TOKEN {
            WeekParity::Even
        } else {
            WeekParity::Odd
        }
    }
}

/// One loaded grid row.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// Raw day label, forward-filled by the loader
    pub day: String,
    /// Slot start label, e.g. `"08:30"`
    pub start: String,
    /// Week parity parsed from the time suffix
    pub parity: WeekParity,
    /// Aligned with `ScheduleGrid::columns`; `Some` is non-empty and trimmed
    pub cells: Vec<Option<String>>,
}

/// Materialized timetable grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleGrid {
    /// Entity sub-column labels in sheet order
    pub columns: Vec<String>,
    /// Data rows in sheet order
    pub rows: Vec<GridRow>,
}

impl ScheduleGrid {
    /// Position of a column label within `columns`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_from_token() {
        assert_eq!(WeekParity::from_token("з"), WeekParity::Even);
        assert_eq!(WeekParity::from_token("ч"), WeekParity::Odd);
        // any token other than the even marker counts as odd
        assert_eq!(WeekParity::from_token("x"), WeekParity::Odd);
        assert_eq!(WeekParity::from_token(""), WeekParity::Odd);
    }

    #[test]
    fn test_column_index() {
        let grid = ScheduleGrid {
            columns: vec!["КН-21/1".to_owned(), "КН-21/2".to_owned()],
            rows: Vec::new(),
        };
        assert_eq!(grid.column_index("КН-21/2"), Some(1));
        assert_eq!(grid.column_index("ІПЗ-21"), None);
    }
}
