//! Birth-date attributes: zodiac sign, zodiac animal, life-path number, BMI.
//!
//! These classifications feed the bias model and the card header. They are
//! best-effort by contract: the validator only checks the date's shape, so a
//! month or day outside the calendar still classifies (falling through to
//! Capricorn) instead of erroring.

use serde::Serialize;

/// Tropical zodiac signs in boundary-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zodiac {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl Zodiac {
    pub fn label(self) -> &'static str {
        match self {
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
        }
    }
}

/// Classify a month/day pair. Boundary days belong to the later sign:
/// Jan 20 is already Aquarius, Dec 22 is already Capricorn.
pub fn zodiac(month: u8, day: u8) -> Zodiac {
    let (mo, d) = (month, day);
    if (mo == 1 && d < 20) || (mo == 12 && d >= 22) {
        Zodiac::Capricorn
    } else if (mo == 1 && d >= 20) || (mo == 2 && d < 19) {
        Zodiac::Aquarius
    } else if (mo == 2 && d >= 19) || (mo == 3 && d < 21) {
        Zodiac::Pisces
    } else if (mo == 3 && d >= 21) || (mo == 4 && d < 20) {
        Zodiac::Aries
    } else if (mo == 4 && d >= 20) || (mo == 5 && d < 21) {
        Zodiac::Taurus
    } else if (mo == 5 && d >= 21) || (mo == 6 && d < 22) {
        Zodiac::Gemini
    } else if (mo == 6 && d >= 22) || (mo == 7 && d < 23) {
        Zodiac::Cancer
    } else if (mo == 7 && d >= 23) || (mo == 8 && d < 23) {
        Zodiac::Leo
    } else if (mo == 8 && d >= 23) || (mo == 9 && d < 24) {
        Zodiac::Virgo
    } else if (mo == 9 && d >= 24) || (mo == 10 && d < 24) {
        Zodiac::Libra
    } else if (mo == 10 && d >= 24) || (mo == 11 && d < 23) {
        Zodiac::Scorpio
    } else if (mo == 11 && d >= 23) || (mo == 12 && d < 22) {
        Zodiac::Sagittarius
    } else {
        // Shape-valid but non-calendar dates (month 13 and friends) land here.
        Zodiac::Capricorn
    }
}

/// Twelve-year animal cycle, anchored so that 2016 maps to the first entry.
const ANIMALS: [&str; 12] = [
    "Monkey", "Rooster", "Dog", "Pig", "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse",
    "Goat",
];

/// Animal for a birth year; `rem_euclid` keeps pre-anchor years positive.
pub fn animal(year: u16) -> &'static str {
    let idx = (i32::from(year) - 2016).rem_euclid(12) as usize;
    ANIMALS[idx]
}

/// Numerology reduction of the 8-digit date string: sum the decimal digits,
/// then keep summing until a single digit remains. Zero promotes to nine so
/// the result is always in `1..=9`.
pub fn life_path(year: u16, month: u8, day: u8) -> u8 {
    let digits = format!("{}{:02}{:02}", year, month, day);
    let mut sum: u32 = digits.bytes().map(|b| u32::from(b - b'0')).sum();
    while sum > 9 {
        sum = {
            let mut t = 0;
            let mut n = sum;
            while n > 0 {
                t += n % 10;
                n /= 10;
            }
            t
        };
    }
    if sum == 0 {
        9
    } else {
        sum as u8
    }
}

/// Body mass index from centimeters and kilograms.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let h = height_cm / 100.0;
    weight_kg / (h * h)
}

/// Round to one decimal place, ties away from zero on the scaled value.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
