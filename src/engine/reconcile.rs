//! Odd/even week slot reconciliation.
//!
//! Given the raw odd- and even-week values of one (day, slot)
//! coordinate across an entity's K sub-columns, decide the slot's
//! shape and parse the distinct texts. Comparison is textual equality
//! of the trimmed values, with absence equal to absence; the decision
//! order guarantees that a horizontal slot's sides differ and that a
//! vertical slot is identical in both parities.

use super::cell::parse_cell;
use crate::error::ScheduleResult;
use crate::models::{EventSlot, SlotVariant, SubEvent, TimeSlot, WeekSide};

/// Entity a slot is reconciled for: the owning label used as the group
/// default for collapsed values, plus the ordered sub-column labels
/// used as defaults for per-column values.
#[derive(Debug, Clone, Copy)]
pub struct EntityContext<'a> {
    pub label: &'a str,
    pub sub_columns: &'a [String],
}

/// Reconcile one slot.
///
/// Returns `Ok(None)` when every value on both sides is absent; the
/// caller drops the slot from the day entirely.
pub fn reconcile(
    slot: TimeSlot,
    odd: &[Option<String>],
    even: &[Option<String>],
    entity: &EntityContext<'_>,
) -> ScheduleResult<Option<EventSlot>> {
    if odd.iter().chain(even).all(Option::is_none) {
        return Ok(None);
    }

    let variant = if odd == even {
        if all_same(odd) {
            match odd.first().and_then(|cell| cell.as_deref()) {
                Some(text) => SlotVariant::Single {
                    event: parse_with_default(text, entity.label)?,
                },
                // unreachable for K >= 1: the all-absent case returned above
                None => return Ok(None),
            }
        } else {
            SlotVariant::Vertical {
                events: parse_stack(odd, entity)?,
            }
        }
    } else {
        SlotVariant::Horizontal {
            nominator: reconcile_side(odd, entity)?,
            denominator: reconcile_side(even, entity)?,
        }
    };

    Ok(Some(EventSlot::new(slot, variant)))
}

/// Reconcile one parity side of a horizontally split slot.
fn reconcile_side(
    values: &[Option<String>],
    entity: &EntityContext<'_>,
) -> ScheduleResult<WeekSide> {
    if all_same(values) {
        match values.first().and_then(|cell| cell.as_deref()) {
            None => Ok(WeekSide::Empty),
            Some(text) => Ok(WeekSide::Single {
                event: parse_with_default(text, entity.label)?,
            }),
        }
    } else {
        Ok(WeekSide::Stacked {
            events: parse_stack(values, entity)?,
        })
    }
}

/// Parse one side column by column; absent cells stay empty markers.
fn parse_stack(
    values: &[Option<String>],
    entity: &EntityContext<'_>,
) -> ScheduleResult<Vec<Option<SubEvent>>> {
    values
        .iter()
        .zip(entity.sub_columns)
        .map(|(cell, column)| {
            cell.as_deref()
                .map(|text| parse_with_default(text, column))
                .transpose()
        })
        .collect()
}

/// Parse one cell, defaulting its groups to `label` when the text
/// names none.
fn parse_with_default(text: &str, label: &str) -> ScheduleResult<SubEvent> {
    let mut event = parse_cell(text)?;
    if event.groups.is_empty() {
        event.groups = vec![label.to_owned()];
    }
    Ok(event)
}

fn all_same(values: &[Option<String>]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}
