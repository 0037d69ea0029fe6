//! Free-text event cell parsing.

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{SubEvent, SubEventKind};

/// Literal abbreviation expansions applied before shape matching.
const ABBREVIATIONS: [(&str, &str); 3] = [
    ("лек.", "лекція"),
    ("лаб.", "лабораторна"),
    ("практ.", "практичні"),
];

/// Last line of the adaptation-course cell shape.
const ADAPTATION_COURSE: &str = "адаптаційний курс";

/// Display name emitted for adaptation-course entries.
const ADAPTATION_COURSE_NAME: &str = "Адаптаційний курс";

/// Parse one event cell into a structured sub-event.
///
/// Recognized shapes, after abbreviation expansion and per-line
/// trimming:
///
/// * three lines ending with the adaptation-course marker: a groups
///   line, an ignored middle line, the marker;
/// * four lines: groups, subject with a trailing kind token, tutor,
///   location;
/// * three lines: the same without the groups line (the caller fills
///   the group default).
///
/// Anything else fails with [`ScheduleError::InvalidEventFormat`]
/// carrying the original text. Pure function, no side effects.
pub fn parse_cell(text: &str) -> ScheduleResult<SubEvent> {
    let mut expanded = text.to_owned();
    for (abbreviation, full) in ABBREVIATIONS {
        expanded = expanded.replace(abbreviation, full);
    }

    let lines: Vec<&str> = expanded.trim().split('\n').map(str::trim).collect();

    match lines.as_slice() {
        [groups, _, kind] if *kind == ADAPTATION_COURSE => Ok(SubEvent {
            kind: SubEventKind::AdaptationCourse,
            name: Some(ADAPTATION_COURSE_NAME.to_owned()),
            location: None,
            tutor: None,
            groups: split_groups(groups),
        }),
        [groups, subject, tutor, location] => {
            let (name, kind) = parse_subject(subject, text)?;
            Ok(SubEvent {
                kind,
                name: Some(name),
                location: Some((*location).to_owned()),
                tutor: Some((*tutor).to_owned()),
                groups: split_groups(groups),
            })
        }
        [subject, tutor, location] => {
            let (name, kind) = parse_subject(subject, text)?;
            Ok(SubEvent {
                kind,
                name: Some(name),
                location: Some((*location).to_owned()),
                tutor: Some((*tutor).to_owned()),
                groups: Vec::new(),
            })
        }
        _ => Err(ScheduleError::invalid_event_format(text)),
    }
}

/// Split a subject line into its name and trailing kind token.
///
/// The kind token is the last whitespace-separated word, stripped of
/// surrounding quotes and underscores, and must classify against the
/// closed kind enum.
fn parse_subject(subject: &str, original: &str) -> ScheduleResult<(String, SubEventKind)> {
    let (name, token) = subject
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| ScheduleError::invalid_event_format(original))?;

    let token = token.trim_matches('"').trim_matches('_');
    let kind = SubEventKind::from_label(token)
        .ok_or_else(|| ScheduleError::invalid_event_format(original))?;

    Ok((name.trim_end().to_owned(), kind))
}

/// Split a comma-separated groups line, trimming and de-duplicating
/// while preserving order.
fn split_groups(line: &str) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for part in line.split(',') {
        let part = part.trim();
        if !part.is_empty() && !groups.iter().any(|known| known == part) {
            groups.push(part.to_owned());
        }
    }
    groups
}
