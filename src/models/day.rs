//! Weekday identifiers and raw label resolution.

use serde::{Deserialize, Serialize};

/// Teaching weekday, ordered Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Resolve a raw sheet label to a weekday.
    ///
    /// Lookup is case-insensitive and ignores apostrophes, so both
    /// spellings of Friday (`Пятниця` and `П'ятниця`, including the
    /// typographic apostrophe) resolve.
    pub fn from_raw_label(label: &str) -> Option<Day> {
        let folded: String = label
            .trim()
            .chars()
            .filter(|c| !matches!(c, '\'' | '’' | 'ʼ'))
            .flat_map(char::to_lowercase)
            .collect();

        match folded.as_str() {
            "понеділок" => Some(Day::Monday),
            "вівторок" => Some(Day::Tuesday),
            "середа" => Some(Day::Wednesday),
            "четвер" => Some(Day::Thursday),
            "пятниця" => Some(Day::Friday),
            _ => None,
        }
    }

    /// Lowercase English identifier, the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
