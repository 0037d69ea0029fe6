//! Full-document assembly across all entities.

use super::builder::build_schedule;
use super::groups::resolve_groups;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{
    Day, GroupScheduleEntry, GroupSchedules, ScheduleGrid, TeacherScheduleEntry, TeacherSchedules,
    TimeSlot,
};

/// Check the grid shape before any per-entity work, so a structural
/// problem fails the run once instead of per entity.
fn validate_grid(grid: &ScheduleGrid) -> ScheduleResult<()> {
    if grid.columns.is_empty() || grid.rows.is_empty() {
        return Err(ScheduleError::EmptyGrid);
    }
    for row in &grid.rows {
        if Day::from_raw_label(&row.day).is_none() {
            return Err(ScheduleError::unknown_day(&row.day));
        }
        if TimeSlot::from_start_label(&row.start).is_none() {
            return Err(ScheduleError::unknown_time_slot(&row.start));
        }
    }
    Ok(())
}

/// Assemble the students document: one entry per resolved group, keyed
/// and ordered by the resolver's first-seen group order.
pub fn assemble_group_schedules(grid: &ScheduleGrid) -> ScheduleResult<GroupSchedules> {
    validate_grid(grid)?;

    let mut document = GroupSchedules::new();
    for (group, subgroups) in resolve_groups(&grid.columns) {
        let schedule = build_schedule(grid, &group, &subgroups)?;
        document.insert(
            group.clone(),
            GroupScheduleEntry {
                group,
                subgroups,
                schedule,
            },
        );
    }
    Ok(document)
}

/// Assemble the teachers document.
///
/// Every column is its own singleton entity; the group resolver is not
/// consulted, so a teacher name that happens to end in a digit suffix
/// cannot be merged with another column.
pub fn assemble_teacher_schedules(grid: &ScheduleGrid) -> ScheduleResult<TeacherSchedules> {
    validate_grid(grid)?;

    let mut document = TeacherSchedules::new();
    for teacher in &grid.columns {
        let schedule = build_schedule(grid, teacher, std::slice::from_ref(teacher))?;
        document.insert(
            teacher.clone(),
            TeacherScheduleEntry {
                teacher: teacher.clone(),
                schedule,
            },
        );
    }
    Ok(document)
}
