//! Configuration for the petmem decision layer.
//!
//! Maps directly to `petmem.toml`. The defaults carry the shipped tuning
//! constants; they are empirically tuned values with no documented
//! derivation, so hosts should override them only deliberately.

use serde::{Deserialize, Serialize};

/// Top-level petmem configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetmemConfig {
    /// Record displayability filtering.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Short-term → long-term promotion policy.
    #[serde(default)]
    pub promotion: PromotionConfig,
    /// Neurogenesis predictor tuning.
    #[serde(default)]
    pub predictor: PredictorConfig,
}

impl PetmemConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `PetmemError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::PetmemError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Filtering of structurally incomplete / bookkeeping records from display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Behavior-record phrases treated as transition noise.
    #[serde(default = "default_noise_phrases")]
    pub behavior_noise_phrases: Vec<String>,
    /// Words that mark a short behavior record as status-only.
    #[serde(default = "default_status_words")]
    pub status_words: Vec<String>,
    /// Word-count bound below which a status-word match counts as
    /// status-only noise.
    #[serde(default = "default_status_word_limit")]
    pub status_phrase_word_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            behavior_noise_phrases: default_noise_phrases(),
            status_words: default_status_words(),
            status_phrase_word_limit: 5,
        }
    }
}

/// Promotion thresholds for short-term → long-term transfer.
///
/// Play is deliberately harder to promote than other categories: the generic
/// importance floor does not apply to it. Asymmetric policy, not an
/// oversight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PromotionConfig {
    /// Importance at which any non-play record is promoted.
    #[serde(default = "default_8")]
    pub importance_floor: i64,
    /// Access count at which any record is promoted.
    #[serde(default = "default_4")]
    pub access_floor: u32,
    /// Importance part of the combined importance+access rule.
    #[serde(default = "default_5")]
    pub combined_importance: i64,
    /// Access part of the combined importance+access rule.
    #[serde(default = "default_3")]
    pub combined_access: u32,
    /// Importance at which a health record is promoted.
    #[serde(default = "default_6")]
    pub health_importance: i64,
    /// Importance at which a play record is promoted.
    #[serde(default = "default_9")]
    pub play_importance: i64,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            importance_floor: 8,
            access_floor: 4,
            combined_importance: 5,
            combined_access: 3,
            health_importance: 6,
            play_importance: 9,
        }
    }
}

/// Neurogenesis predictor tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Fraction of the primary candidate's urgency or counter an alternative
    /// must exceed to displace a repeat of the last-created type.
    #[serde(default = "default_0_75")]
    pub repeat_override_ratio: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            repeat_override_ratio: 0.75,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_noise_phrases() -> Vec<String> {
    vec![
        "returned to".to_string(),
        "status changed".to_string(),
        "after fleeing".to_string(),
    ]
}

fn default_status_words() -> Vec<String> {
    vec![
        "status".to_string(),
        "roaming".to_string(),
        "fleeing".to_string(),
    ]
}

fn default_status_word_limit() -> usize { 5 }
fn default_0_75() -> f64 { 0.75 }
fn default_3() -> u32 { 3 }
fn default_4() -> u32 { 4 }
fn default_5() -> i64 { 5 }
fn default_6() -> i64 { 6 }
fn default_8() -> i64 { 8 }
fn default_9() -> i64 { 9 }
