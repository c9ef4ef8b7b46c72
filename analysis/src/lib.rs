//! Contract of the SafeText text-analysis service.
//!
//! The service receives `{"text": ...}` with an `x-api-key` header and answers
//! with per-category scores, either flat on the response object or nested
//! under `result`:
//!
//! ```json
//! {"success": true, "toxic": 12.5, "insult": 3.0}
//! {"success": true, "result": {"toxic": 12.5, "insult": 3.0}}
//! ```
//!
//! SCALE
//! =====
//! Every score is a percentage in `0..=100`, whichever shape is used. The
//! parser does not guess at fractions: a score outside the range is an error,
//! so a service reporting `0..=1` values must be fixed at the source.

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Public endpoint of the hosted analysis model.
pub const DEFAULT_ANALYZE_URL: &str = "https://mogestesema-safe-text-model.hf.space/analyze";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Scores below this are [`Band::Safe`].
pub const SAFE_BELOW: f64 = 30.0;

/// Scores below this (and not safe) are [`Band::Warning`].
pub const WARNING_BELOW: f64 = 70.0;

/// Top-level keys of a flat response that are not category scores.
const METADATA_KEYS: &[&str] = &["success", "text", "message"];

/// Error returned by [`parse_analysis`].
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// The body is not JSON.
    #[error("analysis response is not valid JSON: {0}")]
    Parse(String),

    /// The body (or its `result`) is not a JSON object.
    #[error("analysis response is not an object")]
    NotAnObject,

    /// A category value is neither a number nor a numeric string.
    #[error("category {label} has a non-numeric score: {value}")]
    InvalidScore { label: String, value: String },

    /// A category value falls outside `0..=100`.
    #[error("category {label} score {value} is outside 0..=100")]
    OutOfRange { label: String, value: f64 },

    /// The response carries no category scores.
    #[error("analysis response has no category scores")]
    NoScores,
}

/// Request body sent to the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Color-coded severity of a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Safe,
    Warning,
    Danger,
}

impl Band {
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent < SAFE_BELOW {
            Self::Safe
        } else if percent < WARNING_BELOW {
            Self::Warning
        } else {
            Self::Danger
        }
    }

    /// Background class of the bar or badge.
    #[must_use]
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Safe => "bg-green-500",
            Self::Warning => "bg-yellow-400",
            Self::Danger => "bg-red-500",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
        }
    }
}

/// One scored category, e.g. `severe_toxic` at `4.2`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub label: String,
    pub percent: f64,
}

impl CategoryScore {
    /// Label with underscores shown as spaces.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label.replace('_', " ")
    }

    /// Percentage with two decimals, e.g. `"12.50%"`.
    #[must_use]
    pub fn percent_text(&self) -> String {
        format_percent(self.percent)
    }

    #[must_use]
    pub fn band(&self) -> Band {
        Band::from_percent(self.percent)
    }
}

/// A parsed analysis response.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// The service's own `success` flag; `false` when absent.
    pub success: bool,
    /// Category scores ordered by label.
    pub categories: Vec<CategoryScore>,
}

impl Analysis {
    /// Overall toxicity: the highest category score.
    #[must_use]
    pub fn toxicity(&self) -> f64 {
        self.categories.iter().map(|c| c.percent).fold(0.0, f64::max)
    }

    #[must_use]
    pub fn band(&self) -> Band {
        Band::from_percent(self.toxicity())
    }

    /// Flatten into the shape returned by `/api/analyze`.
    #[must_use]
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            success: self.success,
            toxicity: self.toxicity(),
            band: self.band(),
            categories: self.categories.clone(),
        }
    }
}

/// Response body of the `/api/analyze` proxy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub toxicity: f64,
    pub band: Band,
    pub categories: Vec<CategoryScore>,
}

impl AnalysisReport {
    /// Overall toxicity with two decimals, e.g. `"71.30%"`.
    #[must_use]
    pub fn toxicity_text(&self) -> String {
        format_percent(self.toxicity)
    }
}

#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}%")
}

/// Parse a raw response body from the service.
///
/// # Errors
///
/// Returns [`AnalysisError`] when the body is not JSON, is not shaped like
/// either response variant, or carries an invalid score.
pub fn parse_analysis(body: &str) -> Result<Analysis, AnalysisError> {
    let value: Value = serde_json::from_str(body).map_err(|e| AnalysisError::Parse(e.to_string()))?;
    analysis_from_value(&value)
}

/// Interpret an already-decoded response.
///
/// # Errors
///
/// See [`parse_analysis`].
pub fn analysis_from_value(value: &Value) -> Result<Analysis, AnalysisError> {
    let root = value.as_object().ok_or(AnalysisError::NotAnObject)?;
    let success = root.get("success").and_then(Value::as_bool).unwrap_or(false);

    let scores = match root.get("result") {
        Some(Value::Object(nested)) => collect_scores(nested, &[])?,
        Some(_) => return Err(AnalysisError::NotAnObject),
        None => collect_scores(root, METADATA_KEYS)?,
    };
    if scores.is_empty() {
        return Err(AnalysisError::NoScores);
    }

    Ok(Analysis { success, categories: scores })
}

fn collect_scores(map: &Map<String, Value>, skip: &[&str]) -> Result<Vec<CategoryScore>, AnalysisError> {
    let mut scores = Vec::with_capacity(map.len());
    for (label, value) in map {
        if skip.contains(&label.as_str()) {
            continue;
        }
        let percent = score_value(label, value)?;
        if !(0.0..=100.0).contains(&percent) {
            return Err(AnalysisError::OutOfRange { label: label.clone(), value: percent });
        }
        scores.push(CategoryScore { label: label.clone(), percent });
    }
    scores.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(scores)
}

fn score_value(label: &str, value: &Value) -> Result<f64, AnalysisError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    };
    parsed.ok_or_else(|| AnalysisError::InvalidScore { label: label.to_owned(), value: value.to_string() })
}
