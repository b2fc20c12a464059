//! Keyword and pattern classifier for inbound SMS replies.
//!
//! Rules are tried in priority order and the first match wins:
//! no-cases keywords, case counts, emergency keywords, then unclear.

use std::sync::LazyLock;

use regex::Regex;

use super::entities::{ResponseType, UrgencyLevel};

static NO_CASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(no cases?|zero|none|nil|0 cases|all well|all clear|nothing)\b")
        .expect("no-cases pattern is valid")
});

static COUNT_THEN_CASE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+\s*(cases?|patients?|people|persons|infected)\b")
        .expect("count pattern is valid")
});

static CASE_WORD_THEN_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(cases?|patients?|people|persons|infected)\s*[:=-]?\s*\d+")
        .expect("case word pattern is valid")
});

static ONLY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("number pattern is valid"));

static EMERGENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(emergency|urgent|critical|outbreak|help|death|died|dying|severe|serious)\b")
        .expect("emergency pattern is valid")
});

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub response_type: ResponseType,
    pub cases_reported: i32,
    pub urgency_level: UrgencyLevel,
    pub is_emergency: bool,
}

impl Classification {
    fn new(response_type: ResponseType, cases_reported: i32, urgency_level: UrgencyLevel) -> Self {
        Self {
            response_type,
            cases_reported,
            urgency_level,
            is_emergency: response_type == ResponseType::Emergency,
        }
    }
}

pub fn classify(message: &str) -> Classification {
    let text = message.trim().to_lowercase();

    if NO_CASES.is_match(&text) {
        return Classification::new(ResponseType::NoCases, 0, UrgencyLevel::Low);
    }

    if COUNT_THEN_CASE_WORD.is_match(&text)
        || CASE_WORD_THEN_COUNT.is_match(&text)
        || ONLY_NUMBER.is_match(&text)
    {
        let count = first_number(&text).unwrap_or(0);
        return Classification::new(ResponseType::CasesReported, count, urgency_for_count(count));
    }

    if EMERGENCY.is_match(&text) {
        let count = first_number(&text).unwrap_or(0);
        return Classification::new(ResponseType::Emergency, count, UrgencyLevel::Critical);
    }

    Classification::new(ResponseType::Unclear, 0, UrgencyLevel::Low)
}

pub fn urgency_for_count(count: i32) -> UrgencyLevel {
    match count {
        i32::MIN..=2 => UrgencyLevel::Low,
        3..=9 => UrgencyLevel::Medium,
        _ => UrgencyLevel::High,
    }
}

/// First run of digits, saturating at `i32::MAX`.
fn first_number(text: &str) -> Option<i32> {
    DIGITS
        .find(text)
        .map(|m| m.as_str().parse::<i32>().unwrap_or(i32::MAX))
}
