//! Input normalization: raw request fields in, validated pipeline input out.
//!
//! All failure happens here; the stages after normalization are total
//! functions. Two quirks are contractual:
//!
//! - The birth date is checked for shape only (`YYYY-MM-DD`), not calendar
//!   validity. A month of 13 passes and later classifies best-effort.
//!   The birth string is also not trimmed; stray whitespace fails the check.
//! - Height and weight are trimmed and parsed as `f64`; anything that does
//!   not parse, is not finite, or falls outside the accepted band reports
//!   the band, mirroring how a reading of `NaN` would.

use serde::{Deserialize, Serialize};

const HEIGHT_MIN: f64 = 50.0;
const HEIGHT_MAX: f64 = 250.0;
const WEIGHT_MIN: f64 = 10.0;
const WEIGHT_MAX: f64 = 250.0;

/// Raw request as collected from the CLI or an interactive prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortuneRequest {
    pub name: String,
    /// Expected shape `YYYY-MM-DD`; validated, never trimmed.
    pub birth: String,
    pub detail: RequestDetail,
}

/// The variant-specific half of a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RequestDetail {
    /// Height/weight reading: numeric fields arrive as raw strings.
    Body { height: String, weight: String },
    /// Goal reading: free-text ambition for the year.
    Goal { goal: String },
}

/// Validation outcome; every variant is recoverable by resubmitting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FortuneError {
    #[error("Please enter a name.")]
    EmptyName,

    #[error("Please enter the birth date as YYYY-MM-DD.")]
    InvalidDate,

    #[error("{field} must be a number between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Please enter a goal for the year.")]
    EmptyGoal,
}

/// Birth date split into numeric parts. Shape-checked only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// A request that passed validation; input to the deterministic pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    pub name: String,
    /// Original (untrimmed) birth string; part of the seed material.
    pub birth_raw: String,
    pub birth: BirthDate,
    pub detail: NormalizedDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedDetail {
    Body { height_cm: f64, weight_kg: f64 },
    Goal { goal: String },
}

/// Validate a raw request. Field checks run in a fixed order: name, birth,
/// then the variant's own fields, and the first failure wins.
pub fn normalize(req: &FortuneRequest) -> Result<NormalizedInput, FortuneError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(FortuneError::EmptyName);
    }
    let birth = parse_birth(&req.birth).ok_or(FortuneError::InvalidDate)?;

    let detail = match &req.detail {
        RequestDetail::Body { height, weight } => {
            let height_cm = parse_measure(height, "height", HEIGHT_MIN, HEIGHT_MAX)?;
            let weight_kg = parse_measure(weight, "weight", WEIGHT_MIN, WEIGHT_MAX)?;
            NormalizedDetail::Body {
                height_cm,
                weight_kg,
            }
        }
        RequestDetail::Goal { goal } => {
            let goal = goal.trim();
            if goal.is_empty() {
                return Err(FortuneError::EmptyGoal);
            }
            NormalizedDetail::Goal {
                goal: goal.to_string(),
            }
        }
    };

    Ok(NormalizedInput {
        name: name.to_string(),
        birth_raw: req.birth.clone(),
        birth,
        detail,
    })
}

fn parse_birth(s: &str) -> Option<BirthDate> {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    let digits_ok = b
        .iter()
        .enumerate()
        .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    Some(BirthDate {
        year: s[0..4].parse().ok()?,
        month: s[5..7].parse().ok()?,
        day: s[8..10].parse().ok()?,
    })
}

fn parse_measure(
    raw: &str,
    field: &'static str,
    min: f64,
    max: f64,
) -> Result<f64, FortuneError> {
    let out_of_range = || FortuneError::OutOfRange { field, min, max };
    let value: f64 = raw.trim().parse().map_err(|_| out_of_range())?;
    if !value.is_finite() || value < min || value > max {
        return Err(out_of_range());
    }
    Ok(value)
}
