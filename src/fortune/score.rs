//! Bias terms and score arithmetic.
//!
//! Everything here is pure f64 math on top of stream draws. The expression
//! shapes are load-bearing: additions happen left to right exactly as
//! written, and a category score is rounded only once, after clamping.

use serde::Serialize;

/// Life-path bias in `[-8, +8]`: two points per step away from the midpoint 5.
/// Applied in full to the work score and at half weight to the money score.
pub fn life_path_bias(life_path: u8) -> i32 {
    (i32::from(life_path) - 5) * 2
}

/// BMI flavor band. Chooses a small health-score nudge and a soft extra
/// sentence for the health reading; deliberately not medical guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    /// Band edges follow the conventional cutoffs: 18.5, 25, 30.
    pub fn from_bmi(bmi: f64) -> Self {
        if (18.5..25.0).contains(&bmi) {
            BmiBand::Normal
        } else if (25.0..30.0).contains(&bmi) {
            BmiBand::Overweight
        } else if bmi < 18.5 {
            BmiBand::Underweight
        } else {
            BmiBand::Obese
        }
    }

    pub fn bias(self) -> i32 {
        match self {
            BmiBand::Normal => 6,
            BmiBand::Overweight => -2,
            BmiBand::Underweight => -1,
            BmiBand::Obese => -4,
        }
    }

    /// Sentence appended to the health reading for this band.
    pub fn health_note(self) -> &'static str {
        match self {
            BmiBand::Underweight => {
                "Rather than pushing hard, start by fixing the rhythm of meals and rest."
            }
            BmiBand::Normal => "Keeping your current balance is the best strategy this year.",
            BmiBand::Overweight => {
                "Keep the routine light and steady and the results will follow."
            }
            BmiBand::Obese => {
                "Small starts you can maintain will serve you far better than heavy goals."
            }
        }
    }
}

/// One category score: `round(clamp(baseline + (draw - 0.5) * 60 + bias, 0, 100))`.
///
/// The draw jitter spans ±30 around the baseline before bias. Result is an
/// integer in `0..=100`.
pub fn category(draw: f64, baseline: f64, bias: f64) -> u8 {
    (baseline + (draw - 0.5) * 60.0 + bias).clamp(0.0, 100.0).round() as u8
}

/// Success-percentage tier for a goal reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlookTier {
    High,
    Medium,
    Low,
}

impl OutlookTier {
    pub fn for_percent(percent: u8) -> Self {
        if percent >= 70 {
            OutlookTier::High
        } else if percent >= 45 {
            OutlookTier::Medium
        } else {
            OutlookTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutlookTier::High => "high",
            OutlookTier::Medium => "medium",
            OutlookTier::Low => "low",
        }
    }
}

/// Goal-success percentage from the four category scores, in `15..=95`.
///
/// `goal_bonus` comes from the goal's own side stream, `(draw - 0.5) * 20`;
/// the mean of the scores stays unrounded until the final rounding.
pub fn goal_percent(work: u8, money: u8, love: u8, health: u8, goal_bonus: f64, lp_bias: i32) -> u8 {
    let avg = f64::from(
        u32::from(work) + u32::from(money) + u32::from(love) + u32::from(health),
    ) / 4.0;
    (avg * 0.7 + 25.0 + goal_bonus + f64::from(lp_bias))
        .clamp(15.0, 95.0)
        .round() as u8
}
