//! Locale-dependent presentation strings.
//!
//! Month and weekday names are presentation data, not calendar logic: the
//! views look them up here, keyed by language, and nothing in annum-core
//! ever sees them.

use annum_core::Language;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_IT: [&str; 12] = [
    "Gennaio",
    "Febbraio",
    "Marzo",
    "Aprile",
    "Maggio",
    "Giugno",
    "Luglio",
    "Agosto",
    "Settembre",
    "Ottobre",
    "Novembre",
    "Dicembre",
];

pub fn month_names(language: Language) -> &'static [&'static str; 12] {
    match language {
        Language::En => &MONTHS_EN,
        Language::It => &MONTHS_IT,
    }
}

pub fn quarter_label(language: Language) -> &'static str {
    match language {
        Language::En => "Quarter",
        Language::It => "Trimestre",
    }
}

pub fn reset_label(language: Language) -> &'static str {
    match language {
        Language::En => "Reset week",
        Language::It => "Reset week",
    }
}

pub fn prep_label(language: Language) -> &'static str {
    match language {
        Language::En => "Prep week",
        Language::It => "Prep week (settimana 0)",
    }
}

pub fn check_in_label(language: Language) -> &'static str {
    match language {
        Language::En => "check-in",
        Language::It => "punto di controllo",
    }
}

pub fn continuation_label(language: Language) -> &'static str {
    match language {
        Language::En => "cont.",
        Language::It => "cont.",
    }
}

/// Advisory banner shown when long-running events are detected.
pub fn chain_advisory(language: Language, count: usize) -> String {
    match language {
        Language::En => format!(
            "Advisory: {} event(s) running 14+ days. Consider scheduling recovery periods.",
            count
        ),
        Language::It => format!(
            "Avviso: {} eventi di oltre 14 giorni. Considera periodi di recupero.",
            count
        ),
    }
}
