//! The deterministic reading pipeline.
//!
//! A casting runs in five fixed stages: normalize the raw fields, derive the
//! birth attributes, hash the canonical seed material, walk one Mulberry32
//! stream in a fixed draw order, and assemble the result record. Identical
//! input always yields a bit-identical [`FortuneResult`]; there is no clock,
//! no ambient randomness and no I/O anywhere in this module tree.
//!
//! Draw order, which must never change:
//!
//! 1. tone, 2. focus window, 3. work score, 4. money score, 5.-6. love score
//! (base jitter then small extra jitter), 7. health score, 8.-11. the four
//! category readings, 12. the advice line. A goal reading additionally
//! consults a second stream, seeded from the goal text plus the main seed,
//! exactly once for the success-percentage bonus; that side stream does not
//! disturb the main stream's positions.

pub mod almanac;
pub mod content;
pub mod input;
pub mod rng;
pub mod score;
pub mod seed;

use serde::Serialize;

pub use input::{
    normalize, BirthDate, FortuneError, FortuneRequest, NormalizedDetail, NormalizedInput,
    RequestDetail,
};

use almanac::Zodiac;
use content::Tone;
use rng::Mulberry32;
use score::{BmiBand, OutlookTier};

/// The year every card is cast for. Appended to all seed material, so
/// bumping it re-deals every reading.
pub const TARGET_YEAR: &str = "2026";

/// Birth-derived attributes shown on the card header.
#[derive(Debug, Clone, Serialize)]
pub struct Attributes {
    pub zodiac: Zodiac,
    pub animal: &'static str,
    pub life_path: u8,
    /// BMI rounded to one decimal; absent for goal readings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
}

/// The four category scores, each an integer in `0..=100`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scores {
    pub work: u8,
    pub money: u8,
    pub love: u8,
    pub health: u8,
}

impl Scores {
    /// Rounded mean of the four categories; the share card's headline number.
    pub fn overall(&self) -> u8 {
        let sum = u32::from(self.work)
            + u32::from(self.money)
            + u32::from(self.love)
            + u32::from(self.health);
        (f64::from(sum) / 4.0).round() as u8
    }
}

/// One sentence-or-two of guidance per category.
#[derive(Debug, Clone, Serialize)]
pub struct Readings {
    pub work: &'static str,
    pub money: &'static str,
    pub love: &'static str,
    /// Health reading; body readings append a BMI-band note to the base line.
    pub health: String,
}

/// Goal-specific outcome attached to goal readings.
#[derive(Debug, Clone, Serialize)]
pub struct GoalOutlook {
    pub goal: String,
    /// Success percentage, clamped to `15..=95`.
    pub percent: u8,
    pub tier: OutlookTier,
}

/// A complete reading. Everything the presenter and exporters need; they
/// treat it as opaque data and never recompute.
#[derive(Debug, Clone, Serialize)]
pub struct FortuneResult {
    pub name: String,
    pub birth: String,
    pub seed: u32,
    pub seed_material: String,
    pub attributes: Attributes,
    pub tone: Tone,
    pub focus: &'static str,
    pub summary: String,
    pub scores: Scores,
    pub readings: Readings,
    pub advice: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlook: Option<GoalOutlook>,
}

/// Cast a reading. The only fallible stage is input validation.
pub fn cast(req: &FortuneRequest) -> Result<FortuneResult, FortuneError> {
    let input = normalize(req)?;
    Ok(cast_normalized(input))
}

fn cast_normalized(input: NormalizedInput) -> FortuneResult {
    let BirthDate { year, month, day } = input.birth;
    let life_path = almanac::life_path(year, month, day);
    let lp_bias = score::life_path_bias(life_path);

    // Variant split: health baseline and bias, plus the card's BMI figure.
    let (band, bmi_rounded, health_baseline) = match &input.detail {
        NormalizedDetail::Body {
            height_cm,
            weight_kg,
        } => {
            let bmi = almanac::bmi(*height_cm, *weight_kg);
            (Some(BmiBand::from_bmi(bmi)), Some(almanac::round1(bmi)), 58.0)
        }
        NormalizedDetail::Goal { .. } => (None, None, 55.0),
    };
    let health_bias = band.map_or(0.0, |b| f64::from(b.bias()));

    let seed_material = seed::material(&input);
    let seed = seed::fnv1a32(&seed_material);
    let mut stream = Mulberry32::new(seed);

    let tone = content::TONES[content::slot(stream.next_f64(), content::TONES.len())];
    let focus = content::pick(stream.next_f64(), &content::MONTH_FOCUS);

    let work = score::category(stream.next_f64(), 55.0, f64::from(lp_bias));
    let money = score::category(stream.next_f64(), 50.0, f64::from(lp_bias) / 2.0);
    let love_base = stream.next_f64();
    let love_extra = stream.next_f64();
    let love = score::category(love_base, 52.0, (love_extra - 0.5) * 10.0);
    let health = score::category(stream.next_f64(), health_baseline, health_bias);
    let scores = Scores {
        work,
        money,
        love,
        health,
    };

    let work_reading = content::pick(stream.next_f64(), &content::WORK_BANK);
    let money_reading = content::pick(stream.next_f64(), &content::MONEY_BANK);
    let love_reading = content::pick(stream.next_f64(), &content::LOVE_BANK);
    let health_base = content::pick(stream.next_f64(), &content::HEALTH_BANK);
    let health_reading = match band {
        Some(b) => format!("{} {}", health_base, b.health_note()),
        None => health_base.to_string(),
    };

    // The advice draw is always the stream's final consultation. Goal
    // readings compute the percentage first because it selects the tier.
    let (advice, outlook) = match &input.detail {
        NormalizedDetail::Body { .. } => {
            (content::pick(stream.next_f64(), &content::ADVICE_BANK), None)
        }
        NormalizedDetail::Goal { goal } => {
            let mut side = Mulberry32::new(seed::fnv1a32(goal).wrapping_add(seed));
            let goal_bonus = (side.next_f64() - 0.5) * 20.0;
            let percent = score::goal_percent(work, money, love, health, goal_bonus, lp_bias);
            let tier = OutlookTier::for_percent(percent);
            let advice = content::pick(stream.next_f64(), content::goal_advice(tier));
            (
                advice,
                Some(GoalOutlook {
                    goal: goal.clone(),
                    percent,
                    tier,
                }),
            )
        }
    };

    let summary = format!(
        "{}, your {} keyword is '{}'. {} The {} window looks especially promising.",
        input.name, TARGET_YEAR, tone.key, tone.desc, focus
    );

    FortuneResult {
        name: input.name,
        birth: input.birth_raw,
        seed,
        seed_material,
        attributes: Attributes {
            zodiac: almanac::zodiac(month, day),
            animal: almanac::animal(year),
            life_path,
            bmi: bmi_rounded,
        },
        tone,
        focus,
        summary,
        scores,
        readings: Readings {
            work: work_reading,
            money: money_reading,
            love: love_reading,
            health: health_reading,
        },
        advice,
        outlook,
    }
}
