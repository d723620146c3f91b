//! Seed derivation: canonical input material and the FNV-1a hash over it.
//!
//! The card's identity is the string `name|birth|<variant fields>|2026`. The
//! numeric fields are re-rendered from their parsed values so `"68.50"` and
//! `"68.5"` produce the same card. Hashing walks UTF-16 code units rather
//! than bytes, which keeps seeds stable for names in any script.

use super::input::{NormalizedDetail, NormalizedInput};
use super::TARGET_YEAR;

/// 32-bit FNV-1a over the string's UTF-16 code units.
///
/// ```
/// use fortunecast::fortune::seed::fnv1a32;
///
/// assert_eq!(fnv1a32(""), 0x811C_9DC5);
/// assert_eq!(fnv1a32("2026"), 0x4029_3D93);
/// ```
pub fn fnv1a32(s: &str) -> u32 {
    let mut hash: u32 = 0x811C_9DC5;
    for unit in s.encode_utf16() {
        hash ^= u32::from(unit);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

/// Build the canonical seed material for a normalized input.
///
/// Field order is fixed: name, birth string, then the variant's own fields,
/// then the target year tag. The height/weight pair renders through `f64`
/// display so trailing zeros in user input cannot fork the seed.
pub fn material(input: &NormalizedInput) -> String {
    match &input.detail {
        NormalizedDetail::Body {
            height_cm,
            weight_kg,
        } => format!(
            "{}|{}|{}|{}|{}",
            input.name, input.birth_raw, height_cm, weight_kg, TARGET_YEAR
        ),
        NormalizedDetail::Goal { goal } => format!(
            "{}|{}|{}|{}",
            input.name, input.birth_raw, goal, TARGET_YEAR
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::input::BirthDate;

    fn body_input(name: &str, birth: &str, h: f64, w: f64) -> NormalizedInput {
        NormalizedInput {
            name: name.to_string(),
            birth_raw: birth.to_string(),
            birth: BirthDate {
                year: 1999,
                month: 11,
                day: 2,
            },
            detail: NormalizedDetail::Body {
                height_cm: h,
                weight_kg: w,
            },
        }
    }

    #[test]
    fn empty_string_is_offset_basis() {
        assert_eq!(fnv1a32(""), 0x811C_9DC5);
    }

    #[test]
    fn year_tag_hash_snapshot() {
        assert_eq!(fnv1a32("2026"), 0x4029_3D93);
    }

    #[test]
    fn hangul_hashes_over_utf16_units() {
        // Three syllables, three code units; must not hash the UTF-8 bytes.
        assert_eq!(fnv1a32("\u{AE40}\u{C900}\u{D718}"), 0xDCB7_358F);
    }

    #[test]
    fn material_renders_whole_numbers_without_decimal_point() {
        let input = body_input("Kim", "1999-11-02", 175.0, 68.5);
        assert_eq!(material(&input), "Kim|1999-11-02|175|68.5|2026");
    }

    #[test]
    fn material_drops_trailing_zero_from_parsed_weight() {
        // "54.0" parses to 54.0 and must render as "54".
        let input = body_input("Lee", "1998-07-09", 162.0, 54.0);
        assert_eq!(material(&input), "Lee|1998-07-09|162|54|2026");
    }

    #[test]
    fn goal_material_places_goal_in_variant_slot() {
        let input = NormalizedInput {
            name: "Kim".to_string(),
            birth_raw: "1999-11-02".to_string(),
            birth: BirthDate {
                year: 1999,
                month: 11,
                day: 2,
            },
            detail: NormalizedDetail::Goal {
                goal: "run a marathon".to_string(),
            },
        };
        assert_eq!(material(&input), "Kim|1999-11-02|run a marathon|2026");
    }
}
