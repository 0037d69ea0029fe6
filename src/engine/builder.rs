//! Per-entity schedule construction from the grid.

use std::collections::BTreeMap;

use super::reconcile::{reconcile, EntityContext};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Day, DaySchedule, ScheduleGrid, TimeSlot, WeekParity};

/// Accumulated raw values of one (day, slot) coordinate.
struct SlotCells {
    slot: TimeSlot,
    odd: Vec<Option<String>>,
    even: Vec<Option<String>>,
}

/// Build one entity's schedule.
///
/// Two passes: first project every grid row onto an explicit
/// `(day, slot)` table of odd/even value vectors, then reconcile each
/// coordinate and keep the survivors. Output days follow fixed weekday
/// order regardless of input row order, slots follow ordinal order
/// within a day, and days without a retained slot are omitted.
pub fn build_schedule(
    grid: &ScheduleGrid,
    entity_label: &str,
    sub_columns: &[String],
) -> ScheduleResult<Vec<DaySchedule>> {
    let indexes: Vec<usize> = sub_columns
        .iter()
        .map(|name| {
            grid.column_index(name)
                .ok_or_else(|| ScheduleError::missing_column(name))
        })
        .collect::<ScheduleResult<_>>()?;

    let mut table: BTreeMap<(Day, u8), SlotCells> = BTreeMap::new();
    for row in &grid.rows {
        let day =
            Day::from_raw_label(&row.day).ok_or_else(|| ScheduleError::unknown_day(&row.day))?;
        let slot = TimeSlot::from_start_label(&row.start)
            .ok_or_else(|| ScheduleError::unknown_time_slot(&row.start))?;

        let cells = table.entry((day, slot.order)).or_insert_with(|| SlotCells {
            slot,
            odd: vec![None; indexes.len()],
            even: vec![None; indexes.len()],
        });
        let side = match row.parity {
            WeekParity::Odd => &mut cells.odd,
            WeekParity::Even => &mut cells.even,
        };
        for (position, &index) in indexes.iter().enumerate() {
            side[position] = row.cells.get(index).cloned().flatten();
        }
    }

    let entity = EntityContext {
        label: entity_label,
        sub_columns,
    };
    let mut days: Vec<DaySchedule> = Vec::new();
    for ((day, _), cells) in table {
        let Some(event) = reconcile(cells.slot, &cells.odd, &cells.even, &entity)? else {
            continue;
        };
        match days.last_mut() {
            Some(last) if last.day == day => last.events.push(event),
            _ => days.push(DaySchedule {
                day,
                events: vec![event],
            }),
        }
    }

    Ok(days)
}
