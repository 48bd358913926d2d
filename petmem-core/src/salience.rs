//! Memory Salience Engine — display filtering, valence coloring, promotion.
//!
//! Decides which memory records are worth surfacing to a viewer, which
//! color/valence class they render with, and which qualify for promotion
//! from short-term to long-term storage.
//!
//! Every function here is total over malformed records: missing fields are
//! treated as absent, never raised as errors, so a single bad record cannot
//! break a display refresh.

use std::collections::HashSet;

use crate::config::{DisplayConfig, PromotionConfig};
use crate::types::{ColorClass, MemoryCategory, MemoryRecord, MemoryValue};

// ---------------------------------------------------------------------------
// Displayability
// ---------------------------------------------------------------------------

/// Whether a record represents a user-meaningful event worth displaying.
///
/// Evaluated in two layers, and the order is load-bearing: generic
/// structural checks first (they reject any category, including the
/// allow-listed ones), then the category-specific layer. The food /
/// decorations / interaction allow-list is only consulted after a record
/// has survived the structural layer.
#[must_use]
pub fn is_displayable(record: &MemoryRecord, config: &DisplayConfig) -> bool {
    // Structural layer.
    if record.category.tag().is_empty() {
        return false;
    }
    let Some(value) = &record.value else {
        return false;
    };
    if value.is_empty() {
        return false;
    }

    let text = record.display_text();
    let lower = text.to_lowercase();

    if record.category == MemoryCategory::Behavior && is_behavior_noise(&lower, config) {
        return false;
    }
    if record.category == MemoryCategory::Interaction && is_malformed_interaction(&text) {
        return false;
    }
    if key_is_bare_timestamp(&record.key) {
        return false;
    }
    if lower.contains("timestamp") {
        return false;
    }

    // Category layer.
    if record.category.is_allow_listed() {
        // Always displayable unless the text is an "interaction with <x>"
        // line where <x> is a float timestamp disguised as a name.
        return !mentions_interaction_with_timestamp(&lower);
    }

    record.formatted_value.is_some() || is_non_numeric_text(value)
}

/// Behavior-record noise: transition phrases, or a short status-only phrase.
fn is_behavior_noise(lower_text: &str, config: &DisplayConfig) -> bool {
    if config
        .behavior_noise_phrases
        .iter()
        .any(|phrase| lower_text.contains(phrase.as_str()))
    {
        return true;
    }
    let word_count = lower_text.split_whitespace().count();
    word_count <= config.status_phrase_word_limit
        && config
            .status_words
            .iter()
            .any(|word| lower_text.contains(word.as_str()))
}

/// Malformed serialized interaction payload: a brace-delimited fragment
/// alongside the literal `None`.
fn is_malformed_interaction(text: &str) -> bool {
    text.contains('{') && text.contains('}') && text.contains("None")
}

/// A key that is a bare timestamp: digits with at most one decimal point.
fn key_is_bare_timestamp(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    let mut dots = 0;
    let mut digits = 0;
    for c in key.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Text of the shape `...interaction with <token>...` where the token looks
/// like a float timestamp (contains both a digit and a dot).
fn mentions_interaction_with_timestamp(lower_text: &str) -> bool {
    const MARKER: &str = "interaction with ";
    let Some(start) = lower_text.find(MARKER) else {
        return false;
    };
    let rest = &lower_text[start + MARKER.len()..];
    let token = rest.split_whitespace().next().unwrap_or("");
    token.contains('.') && token.chars().any(|c| c.is_ascii_digit())
}

fn is_non_numeric_text(value: &MemoryValue) -> bool {
    matches!(value, MemoryValue::Text(text) if text.trim().parse::<f64>().is_err())
}

// ---------------------------------------------------------------------------
// Valence coloring
// ---------------------------------------------------------------------------

/// Color/valence class for a record.
///
/// Precedence is significant: explicit `positive:` / `negative:` text
/// prefixes win over everything else, including a computed effect sum of the
/// opposite sign.
#[must_use]
pub fn color_for(record: &MemoryRecord) -> ColorClass {
    let text = record.display_text();
    let lower = text.trim().to_lowercase();

    if lower.starts_with("positive:") {
        return ColorClass::Positive;
    }
    if lower.starts_with("negative:") {
        return ColorClass::Negative;
    }
    if record.category == MemoryCategory::MentalState && record.key == "startled" {
        return ColorClass::Negative;
    }
    if record.key == "plant_calming_effect" {
        return ColorClass::Positive;
    }
    if let Some(sum) = record.value.as_ref().and_then(MemoryValue::effect_sum) {
        return if sum > 0.0 {
            ColorClass::Positive
        } else if sum < 0.0 {
            ColorClass::Negative
        } else {
            ColorClass::Neutral
        };
    }
    ColorClass::Neutral
}

// ---------------------------------------------------------------------------
// Promotion policy
// ---------------------------------------------------------------------------

/// Whether a record qualifies for promotion to long-term storage.
///
/// Monotone in both `importance` and `access_count`: raising either never
/// un-promotes a record. Play records are exempt from the generic importance
/// floor and use their own, higher floor.
#[must_use]
pub fn should_promote(record: &MemoryRecord, config: &PromotionConfig) -> bool {
    let is_play = record.category == MemoryCategory::Play;

    if !is_play && record.importance >= config.importance_floor {
        return true;
    }
    if record.access_count >= config.access_floor {
        return true;
    }
    if record.importance >= config.combined_importance
        && record.access_count >= config.combined_access
    {
        return true;
    }
    if record.category == MemoryCategory::Health && record.importance >= config.health_importance {
        return true;
    }
    if is_play && record.importance >= config.play_importance {
        return true;
    }
    false
}

// ---------------------------------------------------------------------------
// Deduplication
// ---------------------------------------------------------------------------

/// Collapse a record sequence to at most one record per `(category, key)`.
///
/// The first occurrence wins and first-seen order is preserved. Short-term
/// and long-term pools must each be deduplicated independently before
/// display.
#[must_use]
pub fn dedupe(records: Vec<MemoryRecord>) -> Vec<MemoryRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.identity()))
        .collect()
}
