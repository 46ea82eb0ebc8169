use regex::Regex;
use std::sync::OnceLock;

/// Number words understood by the textual duration rules
const NUMBER_WORDS: &[(&str, i64)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
];

static WEEK_AND_HALF_RE: OnceLock<Regex> = OnceLock::new();
static WEEKS_RE: OnceLock<Regex> = OnceLock::new();
static DAY_RANGE_RE: OnceLock<Regex> = OnceLock::new();
static DAYS_RE: OnceLock<Regex> = OnceLock::new();
static NUMBER_WORDS_RE: OnceLock<Regex> = OnceLock::new();
static BARE_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn week_and_half_re() -> &'static Regex {
    WEEK_AND_HALF_RE.get_or_init(|| {
        Regex::new(r"(?:a|one)\s+week\s+and\s+a\s+half").expect("valid regex")
    })
}

fn weeks_re() -> &'static Regex {
    WEEKS_RE.get_or_init(|| Regex::new(r"(\d+|\w+)\s*(?:weeks|week)\b").expect("valid regex"))
}

fn day_range_re() -> &'static Regex {
    DAY_RANGE_RE.get_or_init(|| {
        Regex::new(r"(\d+)\s*[-–]\s*(\d+)\s*(?:days|day|nights|night)").expect("valid regex")
    })
}

fn days_re() -> &'static Regex {
    DAYS_RE.get_or_init(|| Regex::new(r"(\d+)\s*(?:days|day|nights|night)\b").expect("valid regex"))
}

fn number_words_re() -> &'static Regex {
    NUMBER_WORDS_RE.get_or_init(|| {
        Regex::new(
            r"\b(?:(?:one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety|hundred)(?:\s+|[-])?){1,3}\b(?:\s*(?:days|day|nights|night))?",
        )
        .expect("valid regex")
    })
}

fn bare_number_re() -> &'static Regex {
    BARE_NUMBER_RE.get_or_init(|| Regex::new(r"\b(\d{1,3})\b").expect("valid regex"))
}

fn word_value(word: &str) -> Option<i64> {
    NUMBER_WORDS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, value)| *value)
}

/// Convert a run of number words ("twenty two") to its value.
///
/// Tokens outside the number vocabulary are skipped, so a match like
/// "five days" still yields 5. "hundred" multiplies the running total.
/// Returns `None` when nothing summed above zero.
pub fn words_to_number(words: &str) -> Option<i64> {
    let lowered = words.to_lowercase();
    let mut current = 0i64;
    for token in lowered.split_whitespace() {
        let Some(value) = word_value(token) else {
            continue;
        };
        if value == 100 {
            current = current.saturating_mul(value);
        } else {
            current = current.saturating_add(value);
        }
    }
    (current > 0).then_some(current)
}

/// First textual duration rule that matches, in fixed precedence order.
fn first_rule_value(text: &str) -> Option<i64> {
    // 1. Weekend heuristic
    if text.contains("weekend") {
        return Some(2);
    }

    // 2. "a week and a half"
    if week_and_half_re().is_match(text) {
        return Some(11);
    }

    // 3. Week counts, numeric or spelled out ("2 weeks", "two weeks")
    if let Some(caps) = weeks_re().captures(text) {
        let raw = &caps[1];
        let count = raw
            .parse::<i64>()
            .ok()
            .or_else(|| words_to_number(raw))
            .unwrap_or(1);
        return Some(count.saturating_mul(7).max(1));
    }

    // 4. Day ranges resolve to the lower bound ("10-12 days" -> 10)
    if let Some(caps) = day_range_re().captures(text) {
        return caps[1].parse::<i64>().ok();
    }

    // 5. Explicit day or night counts
    if let Some(caps) = days_re().captures(text) {
        return caps[1].parse::<i64>().ok();
    }

    // 6. Spelled-out numbers, with or without a day suffix ("five days")
    if let Some(m) = number_words_re().find(text) {
        if let Some(value) = words_to_number(m.as_str()) {
            return Some(value);
        }
    }

    // 7. Any standalone 1-3 digit number, taken as days when plausible
    if let Some(caps) = bare_number_re().captures(text) {
        if let Ok(value) = caps[1].parse::<i64>() {
            if (1..=365).contains(&value) {
                return Some(value);
            }
        }
    }

    None
}

/// Extract a trip duration in days from free text.
///
/// Rules are tried in a fixed order and the first match wins. The result
/// is guaranteed to land in `[1, max_duration]`; anything else collapses
/// to `fallback_days`.
pub fn extract_duration_days(text: &str, fallback_days: u32, max_duration: u32) -> u32 {
    let lowered = text.to_lowercase();

    match first_rule_value(&lowered) {
        Some(value) if value >= 1 && value <= i64::from(max_duration) => value as u32,
        _ => fallback_days,
    }
}
