//! Fixed text banks and the selection primitive.
//!
//! Bank order is part of the output contract: a draw maps to an index with
//! `floor(draw * len)`, so reordering or resizing a bank re-deals every card
//! that touches it. Edit wording in place; append only when a deliberate
//! format break is intended.

use serde::Serialize;

use super::score::OutlookTier;

/// Headline keyword plus its one-line elaboration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tone {
    pub key: &'static str,
    pub desc: &'static str,
}

/// Yearly keynote themes. First stream draw picks one.
pub const TONES: [Tone; 5] = [
    Tone {
        key: "Ascent",
        desc: "This is a year charged with growth and expansion.",
    },
    Tone {
        key: "Stability",
        desc: "Order and solid ground create your luck this year.",
    },
    Tone {
        key: "Change",
        desc: "Turning points and experiments are the heart of this year.",
    },
    Tone {
        key: "Focus",
        desc: "Choosing less and diving deep converts directly into results.",
    },
    Tone {
        key: "Recovery",
        desc: "A reset year: rest and repair set up the next leap.",
    },
];

/// Two-month windows the year divides into. Second stream draw picks one.
pub const MONTH_FOCUS: [&str; 6] = [
    "Jan-Feb: sorting and settling",
    "Mar-Apr: ignition and experiments",
    "May-Jun: expansion and teamwork",
    "Jul-Aug: focus and deep work",
    "Sep-Oct: harvest and settlement",
    "Nov-Dec: reset and redesign",
];

pub const WORK_BANK: [&str; 5] = [
    "Break plans into smaller pieces in the first half and results arrive faster. Stack small wins instead of chasing one big bet.",
    "Collaboration is favored this year. Splitting roles clearly beats pushing alone, and the pace picks up once you do.",
    "Learning a new tool or skill flows well. Keep 80% familiar methods and 20% experiments for a safe mix.",
    "An early course correction may appear. Treat changing direction as an update, not a failure.",
    "When a decision stalls, the simplest next action is usually the answer. Shrink the step by one size.",
];

pub const MONEY_BANK: [&str; 5] = [
    "Money luck rises fastest by plugging leaks. One pass over subscriptions and fixed costs pays off immediately.",
    "A steady cash flow steadies your luck. Set a ceiling on variable spending and the pressure eases.",
    "The habit of counting opportunity cost protects your money. Price decisions against the value of one hour of your time.",
    "Accumulating choices beat short-lived trends. Small but steady stacking is this year's keyword.",
    "Less comparison shopping, better luck. Write down what you actually need as one sentence and the wobble fades.",
];

pub const LOVE_BANK: [&str; 5] = [
    "Relationship luck follows the temperature of your words. Save important talks for rested hours, not tired ones.",
    "A connection grows naturally this year. Raising the frequency of small contacts is enough; no forcing required.",
    "Drawing clear lines makes relationships easier, not colder. Matched expectations shrink conflicts.",
    "The closer the person, the more small promises matter. Tiny reliability is this year's biggest blessing.",
    "Saying plainly what you want and what you don't moves things in a good direction.",
];

pub const HEALTH_BANK: [&str; 5] = [
    "Condition comes down to sleep plus routine. Even after late nights, a fixed wake time restores you quickly.",
    "Fatigue accumulates easily this year, so schedule mid-checks. Deliberately slow down once a week.",
    "Frequency beats intensity for exercise. Twenty minutes often beats one heroic session.",
    "Adjusting caffeine timing helps. Just avoiding late afternoons can change your sleep quality.",
    "When focus drops it is often the environment, not willpower. Simplify the workspace.",
];

/// Closing advice for the body-reading variant.
pub const ADVICE_BANK: [&str; 5] = [
    "This year's winning move is starting small and growing it big.",
    "Rhythm you can sustain beats speed you cannot.",
    "Fewer choices leave more energy, and spare energy turns into luck.",
    "Relationships are assets. Tend your connections and opportunities follow.",
    "Done beats perfect. Only finished things change you.",
];

const GOAL_ADVICE_HIGH: [&str; 4] = [
    "Conditions line up. Put a date on the first step and begin this week.",
    "Momentum is on your side; protect it with one non-negotiable weekly block.",
    "Tell one person the plan. Saying it out loud locks in the head start.",
    "Aim slightly higher than feels safe; this is the year it holds.",
];

const GOAL_ADVICE_MEDIUM: [&str; 4] = [
    "The base is workable. Shrink the goal to its next checkpoint and move.",
    "Progress comes in stretches; plan for plateaus so they do not read as failure.",
    "Trade intensity for cadence: a fixed small effort beats an occasional sprint.",
    "Line up one ally and one deadline; the middle ground firms up fast.",
];

const GOAL_ADVICE_LOW: [&str; 4] = [
    "Start smaller than feels meaningful; the entry step is the whole game now.",
    "Clear one obstacle out of the way before measuring progress at all.",
    "Rebuild the routine first; the goal follows the rhythm, not the reverse.",
    "Treat this season as groundwork and the pressure drops away.",
];

/// Advice bank for a goal reading, tiered by the computed success percentage.
pub fn goal_advice(tier: OutlookTier) -> &'static [&'static str] {
    match tier {
        OutlookTier::High => &GOAL_ADVICE_HIGH,
        OutlookTier::Medium => &GOAL_ADVICE_MEDIUM,
        OutlookTier::Low => &GOAL_ADVICE_LOW,
    }
}

/// Uniform bank index for a draw in `[0, 1)`.
pub fn slot(draw: f64, len: usize) -> usize {
    (draw * len as f64) as usize
}

/// Select a bank entry by draw.
pub fn pick(draw: f64, bank: &[&'static str]) -> &'static str {
    bank[slot(draw, bank.len())]
}
