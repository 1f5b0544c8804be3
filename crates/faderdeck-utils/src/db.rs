//! Conversions between linear gain and decibels.

use crate::math;
use crate::Decibels;

/// Converts a linear gain factor to decibels.
///
/// A gain of exactly zero is silence and maps to negative infinity.
/// Negative input produces NaN; validating the domain is up to the caller.
#[inline]
pub fn linear_to_db(linear: f32) -> Decibels {
    if linear == 0.0 {
        f32::NEG_INFINITY
    } else {
        20.0 * linear.log10()
    }
}

/// Converts decibels to a linear gain factor.
#[inline]
pub fn db_to_linear(db: Decibels) -> f32 {
    if db == f32::NEG_INFINITY {
        0.0
    } else {
        10.0f32.powf(db / 20.0)
    }
}

/// Formats a decibel value for a fader scale label.
///
/// Positive finite values carry an explicit `+` so boosts read differently
/// from cuts. Infinities use the short `Inf` spellings. No unit suffix.
pub fn format_db(db: Decibels) -> String {
    if db == f32::NEG_INFINITY {
        "-Inf".to_string()
    } else if db == f32::INFINITY {
        "Inf".to_string()
    } else if db > 0.0 {
        format!("+{db}")
    } else {
        format!("{db}")
    }
}

/// Maps a linear gain onto `[0, 1]` across a decibel interval.
///
/// Fader positions are spaced in decibels, so the gain is converted to dB
/// first and the interval mapped from there. Zero gain lands below any
/// finite interval.
#[inline]
pub fn linear_to_normalized_db(linear: f32, min_db: Decibels, max_db: Decibels) -> f32 {
    math::normalized(linear_to_db(linear), min_db, max_db)
}

/// Inverse of [`linear_to_normalized_db`].
#[inline]
pub fn normalized_to_linear_db(norm: f32, min_db: Decibels, max_db: Decibels) -> f32 {
    db_to_linear(math::denormalized(norm, min_db, max_db))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_roundtrip() {
        let values = [0.1, 0.5, 1.0, 2.0, 10.0];
        for value in values {
            let db = linear_to_db(value);
            let round = db_to_linear(db);
            assert!((round - value).abs() < 1e-6);
        }
    }

    #[test]
    fn silence_is_negative_infinity() {
        assert_eq!(linear_to_db(0.0), f32::NEG_INFINITY);
        assert_eq!(db_to_linear(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn unity_gain_is_zero_db() {
        assert_eq!(linear_to_db(1.0), 0.0);
        assert_eq!(db_to_linear(0.0), 1.0);
    }

    #[test]
    fn formats_infinities() {
        assert_eq!(format_db(f32::NEG_INFINITY), "-Inf");
        assert_eq!(format_db(f32::INFINITY), "Inf");
    }

    #[test]
    fn formats_sign() {
        assert_eq!(format_db(6.0), "+6");
        assert_eq!(format_db(-3.5), "-3.5");
        assert_eq!(format_db(0.0), "0");
    }

    #[test]
    fn fader_position_roundtrip() {
        let values = [0.01, 0.25, 1.0, 1.5];
        for value in values {
            let norm = linear_to_normalized_db(value, -60.0, 12.0);
            let round = normalized_to_linear_db(norm, -60.0, 12.0);
            assert!((round - value).abs() < 1e-5);
        }
    }

    #[test]
    fn fader_position_of_silence_is_below_interval() {
        assert_eq!(linear_to_normalized_db(0.0, -60.0, 12.0), f32::NEG_INFINITY);
    }
}
