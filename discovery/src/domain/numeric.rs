//! Float helpers for turning provider readings and random samples into
//! the integer figures the records expose.

/// Map a unit sample in `[0, 1)` onto `[low, high)`.
pub(crate) fn scale_unit(sample: f64, low: f64, high: f64) -> f64 {
    low + sample.clamp(0.0, 1.0) * (high - low)
}

/// Round half away from zero and saturate into `i32`.
pub(crate) fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}

/// Round half away from zero and saturate into `u32`; negatives become 0.
pub(crate) fn round_to_u32(value: f64) -> u32 {
    value.round() as u32
}

/// Convert metres per second to kilometres per hour.
pub(crate) fn mps_to_kmh(speed: f64) -> f64 {
    speed * 3.6
}

/// Pick an index into a slice of `len` items from a unit sample.
pub(crate) fn pick_index(sample: f64, len: usize) -> usize {
    let scaled = scale_unit(sample, 0.0, len as f64).floor() as usize;
    scaled.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(18.4, 18)]
    #[case(18.5, 19)]
    #[case(-2.5, -3)]
    fn rounds_half_away_from_zero(#[case] value: f64, #[case] expected: i32) {
        assert_eq!(round_to_i32(value), expected);
    }

    #[rstest]
    fn negative_values_clamp_to_zero_for_unsigned() {
        assert_eq!(round_to_u32(-4.0), 0);
    }

    #[rstest]
    fn three_metres_per_second_is_eleven_kmh() {
        assert_eq!(round_to_u32(mps_to_kmh(3.0)), 11);
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.49, 1)]
    #[case(0.999, 3)]
    #[case(1.0, 3)]
    fn pick_index_stays_in_bounds(#[case] sample: f64, #[case] expected: usize) {
        assert_eq!(pick_index(sample, 4), expected);
    }

    #[rstest]
    fn scale_unit_spans_the_interval() {
        assert!((scale_unit(0.5, 10.0, 40.0) - 25.0).abs() < f64::EPSILON);
    }
}
