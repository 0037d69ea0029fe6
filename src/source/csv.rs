//! CSV workbook export loading.
//!
//! Turns the raw bytes of a sheet's CSV export into a
//! [`ScheduleGrid`]. The pipeline mirrors how the workbook is
//! maintained by hand: the first row is a title and is skipped, the
//! next row names the columns (the first two are the unnamed day and
//! time columns), merged cells arrive as blanks and are resolved by
//! forward-filling every column, all-blank rows are trimmed, the
//! students layout carries a trailing note row that is dropped, and
//! explicitly free slots are marked with `---` or `-x-`.
//!
//! The teachers workbook is stored transposed (one row per teacher);
//! [`load_teachers_grid`] swaps rows and columns before applying the
//! same pipeline.
//!
//! [`ScheduleGrid`]: crate::models::ScheduleGrid

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{GridRow, ScheduleGrid, WeekParity};

/// Cell values marking an explicitly free slot.
const EMPTY_CELL_MARKERS: [&str; 2] = ["---", "-x-"];

/// Layout parameters of one workbook orientation.
struct Layout {
    /// Swap rows and columns before any other processing
    transpose: bool,
    /// Drop the trailing note row after blank-row trimming
    trim_trailing_row: bool,
    /// Drop entity columns whose cells are all blank
    drop_empty_columns: bool,
}

/// Load the students workbook: day/time rows, one column per sub-group.
pub fn load_students_grid(bytes: &[u8]) -> ScheduleResult<ScheduleGrid> {
    build_grid(
        bytes,
        Layout {
            transpose: false,
            trim_trailing_row: true,
            drop_empty_columns: false,
        },
    )
}

/// Load the teachers workbook, which is stored transposed.
pub fn load_teachers_grid(bytes: &[u8]) -> ScheduleResult<ScheduleGrid> {
    build_grid(
        bytes,
        Layout {
            transpose: true,
            trim_trailing_row: false,
            drop_empty_columns: true,
        },
    )
}

fn build_grid(bytes: &[u8], layout: Layout) -> ScheduleResult<ScheduleGrid> {
    let mut records = read_records(bytes)?;
    if records.is_empty() {
        return Err(ScheduleError::EmptyGrid);
    }

    // Title row goes first, before any orientation handling.
    records.remove(0);
    if layout.transpose {
        records = transpose(records);
    }

    let mut records = records.into_iter();
    let header = records.next().ok_or(ScheduleError::EmptyGrid)?;

    // Entity columns keep their raw index so data rows can be projected;
    // the first two (day, time) columns are unnamed by convention.
    let mut columns: Vec<(usize, String)> = header
        .iter()
        .enumerate()
        .skip(2)
        .filter_map(|(index, name)| {
            let name = name.trim();
            (!name.is_empty()).then(|| (index, name.to_owned()))
        })
        .collect();

    let mut data: Vec<Vec<String>> = records.collect();
    data.retain(|row| !row_is_blank(row, &columns));
    if layout.trim_trailing_row {
        data.pop();
    }
    if columns.is_empty() || data.is_empty() {
        return Err(ScheduleError::EmptyGrid);
    }

    if layout.drop_empty_columns {
        columns.retain(|(index, _)| data.iter().any(|row| !cell_at(row, *index).is_empty()));
        if columns.is_empty() {
            return Err(ScheduleError::EmptyGrid);
        }
    }

    forward_fill(&mut data, &columns);

    let mut rows = Vec::with_capacity(data.len());
    for record in &data {
        let day = cell_at(record, 0).replace('\n', "").trim().to_owned();

        let time = cell_at(record, 1);
        let (start, token) = time
            .split_once('_')
            .ok_or_else(|| ScheduleError::malformed_time_label(time))?;
        let parity = WeekParity::from_token(token.trim());

        let cells = columns
            .iter()
            .map(|(index, _)| {
                let value = cell_at(record, *index);
                (!value.is_empty() && !EMPTY_CELL_MARKERS.contains(&value))
                    .then(|| value.to_owned())
            })
            .collect();

        rows.push(GridRow {
            day,
            start: start.trim().to_owned(),
            parity,
            cells,
        });
    }

    Ok(ScheduleGrid {
        columns: columns.into_iter().map(|(_, name)| name).collect(),
        rows,
    })
}

fn read_records(bytes: &[u8]) -> ScheduleResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(str::to_owned).collect());
    }
    Ok(records)
}

/// Swap rows and columns, padding short rows with blanks.
fn transpose(records: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = records.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|column| {
            records
                .iter()
                .map(|row| row.get(column).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Trimmed cell value, blank when the row is too short.
fn cell_at(row: &[String], index: usize) -> &str {
    row.get(index).map(|cell| cell.trim()).unwrap_or("")
}

fn row_is_blank(row: &[String], columns: &[(usize, String)]) -> bool {
    cell_at(row, 0).is_empty()
        && cell_at(row, 1).is_empty()
        && columns
            .iter()
            .all(|(index, _)| cell_at(row, *index).is_empty())
}

/// Resolve merged cells: every tracked column carries the last
/// non-blank value forward, across day boundaries too. Free slots stay
/// distinguishable because they are marked, not blank.
fn forward_fill(data: &mut [Vec<String>], columns: &[(usize, String)]) {
    let mut fill_indexes = vec![0usize, 1];
    fill_indexes.extend(columns.iter().map(|(index, _)| *index));

    for &index in &fill_indexes {
        let mut last: Option<String> = None;
        for row in data.iter_mut() {
            if row.len() <= index {
                row.resize(index + 1, String::new());
            }
            let trimmed = row[index].trim();
            if trimmed.is_empty() {
                if let Some(value) = &last {
                    row[index] = value.clone();
                }
            } else {
                let trimmed = trimmed.to_owned();
                row[index] = trimmed.clone();
                last = Some(trimmed);
            }
        }
    }
}
