//! Full pipeline integration tests: CSV export bytes in, JSON document out.

use rozklad_rust::engine::{assemble_group_schedules, assemble_teacher_schedules};
use rozklad_rust::error::ScheduleError;
use rozklad_rust::models::{GroupSchedules, SlotVariant, WeekSide};
use rozklad_rust::source::csv::{load_students_grid, load_teachers_grid};

/// A realistic students workbook excerpt: merged odd/even cells arrive
/// as blanks under the odd row, free slots are marked, sub-groups of
/// one group sit in adjacent columns, and a note row trails the data.
const STUDENTS_CSV: &str = "\
,,Розклад занять I курс,,
,,КН-21/1,КН-21/2,ІПЗ-21
Понеділок,08:30_ч,\"КН-1,КН-2\nМатаналіз лек.\nПроцах Н.П.\nа.4 к.А\",\"КН-1,КН-2\nМатаналіз лек.\nПроцах Н.П.\nа.4 к.А\",\"Англійська мова практ.\nЗінчук І.П.\nа.2 к.5\"
,08:30_з,,,\"Історія лек.\nШевчук М.М.\nа.12 к.3\"
,10:20_ч,\"Програмування лаб.\nГрицюк Ю.І.\nа.35 к.1\",---,---
,10:20_з,\"Програмування лаб.\nГрицюк Ю.І.\nа.35 к.1\",---,---
Вівторок,08:30_ч,---,---,---
,08:30_з,---,---,---
Примітка,,,,
";

fn students_document() -> GroupSchedules {
    let grid = load_students_grid(STUDENTS_CSV.as_bytes()).expect("students grid loads");
    assemble_group_schedules(&grid).expect("students document assembles")
}

#[test]
fn test_group_aggregation_and_key_order() {
    let document = students_document();
    let keys: Vec<&String> = document.keys().collect();
    assert_eq!(keys, ["КН-21", "ІПЗ"]);
    assert_eq!(document["КН-21"].subgroups, vec!["КН-21/1", "КН-21/2"]);
    assert_eq!(document["ІПЗ"].subgroups, vec!["ІПЗ-21"]);
}

#[test]
fn test_merged_cell_becomes_single_slot() {
    let document = students_document();
    let monday = &document["КН-21"].schedule[0];
    assert_eq!(monday.day.as_str(), "monday");

    let first = &monday.events[0];
    assert_eq!(first.order, 1);
    assert!(first.spans_both_weeks);
    match &first.variant {
        SlotVariant::Single { event } => {
            assert_eq!(event.name.as_deref(), Some("Матаналіз"));
            assert_eq!(event.groups, vec!["КН-1", "КН-2"]);
        }
        other => panic!("expected single variant, got {:?}", other),
    }
}

#[test]
fn test_subgroup_only_slot_becomes_vertical() {
    let document = students_document();
    let monday = &document["КН-21"].schedule[0];

    let second = &monday.events[1];
    assert_eq!(second.order, 2);
    match &second.variant {
        SlotVariant::Vertical { events } => {
            let first_subgroup = events[0].as_ref().expect("first sub-group occupied");
            assert_eq!(first_subgroup.name.as_deref(), Some("Програмування"));
            assert_eq!(first_subgroup.groups, vec!["КН-21/1"]);
            assert!(events[1].is_none());
        }
        other => panic!("expected vertical variant, got {:?}", other),
    }
}

#[test]
fn test_alternating_weeks_become_horizontal() {
    let document = students_document();
    let monday = &document["ІПЗ"].schedule[0];

    let slot = &monday.events[0];
    assert!(!slot.spans_both_weeks);
    match &slot.variant {
        SlotVariant::Horizontal {
            nominator,
            denominator,
        } => {
            let odd = match nominator {
                WeekSide::Single { event } => event,
                other => panic!("expected collapsed nominator, got {:?}", other),
            };
            let even = match denominator {
                WeekSide::Single { event } => event,
                other => panic!("expected collapsed denominator, got {:?}", other),
            };
            assert_eq!(odd.tutor.as_deref(), Some("Зінчук І.П."));
            assert_eq!(even.tutor.as_deref(), Some("Шевчук М.М."));
            // no groups line in either cell: both default to the entity label
            assert_eq!(odd.groups, vec!["ІПЗ"]);
            assert_eq!(even.groups, vec!["ІПЗ"]);
        }
        other => panic!("expected horizontal variant, got {:?}", other),
    }
}

#[test]
fn test_fully_free_day_is_omitted() {
    let document = students_document();
    // Tuesday is explicitly free for everyone
    for entry in document.values() {
        assert!(entry
            .schedule
            .iter()
            .all(|day| day.day.as_str() != "tuesday"));
    }
}

#[test]
fn test_teachers_pipeline() {
    let csv = "\
Розклад викладачів,,,
,Понеділок,,
,08:30_ч,08:30_з,10:20_ч
Процах Н.П.,\"КН-21\nМатаналіз лек.\nПроцах Н.П.\nа.4 к.А\",,\"КН-21\nМатаналіз практ.\nПроцах Н.П.\nа.4 к.А\"
Грицюк Ю.І.,---,---,---
";

    let grid = load_teachers_grid(csv.as_bytes()).expect("teachers grid loads");
    let document = assemble_teacher_schedules(&grid).expect("teachers document assembles");

    let keys: Vec<&String> = document.keys().collect();
    assert_eq!(keys, ["Процах Н.П.", "Грицюк Ю.І."]);

    let schedule = &document["Процах Н.П."].schedule;
    assert_eq!(schedule.len(), 1);
    // the blank even cell repeats the odd one, so 08:30 is a single slot
    let orders: Vec<u8> = schedule[0].events.iter().map(|event| event.order).collect();
    assert_eq!(orders, vec![1, 2]);
    assert!(schedule[0].events[0].spans_both_weeks);

    assert!(document["Грицюк Ю.І."].schedule.is_empty());
}

#[test]
fn test_malformed_cell_fails_the_document() {
    let csv = "\
,,Розклад,
,,КН-21
Понеділок,08:30_ч,\"лише два\nрядки\"
note,,
";
    let grid = load_students_grid(csv.as_bytes()).expect("grid still loads");
    let result = assemble_group_schedules(&grid);
    assert!(matches!(
        result,
        Err(ScheduleError::InvalidEventFormat { .. })
    ));
}

#[test]
fn test_document_round_trips_through_json() {
    let document = students_document();
    let json = serde_json::to_string_pretty(&document).expect("document serializes");
    let parsed: GroupSchedules = serde_json::from_str(&json).expect("document parses back");
    assert_eq!(parsed, document);
}
