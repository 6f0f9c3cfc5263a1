use crate::income::brackets::{BRACKETS, BRACKET_COUNT};

/// Round a percentage to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of households whose income is at or above `income_threshold`,
/// in `[0, 100]`, one decimal place.
///
/// Brackets entirely at or above the threshold count whole. When the
/// threshold falls inside a bounded bracket, that bracket contributes a
/// fractional share under uniform density within its inclusive integer
/// width: `count * (max - threshold + 1) / (max - min + 1)`. The open-ended
/// top bracket is never interpolated: its true upper bound is unknown, so
/// its whole count is treated as above any threshold. Zero total households
/// yields `0`.
///
/// Pure arithmetic, no validation: callers own the well-formedness of the
/// histogram, and out-of-range inputs degrade to boundary answers rather
/// than failing.
pub fn affordability_pct(
    income_threshold: f64,
    total_households: u32,
    bracket_counts: &[u32; BRACKET_COUNT],
) -> f64 {
    if total_households == 0 {
        return 0.0;
    }

    let mut above = 0.0_f64;
    for (bracket, &count) in BRACKETS.iter().zip(bracket_counts.iter()) {
        if f64::from(bracket.min) >= income_threshold {
            above += f64::from(count);
            continue;
        }
        match bracket.max {
            Some(max) if f64::from(max) >= income_threshold => {
                let width = f64::from(max - bracket.min + 1);
                above += f64::from(count) * (f64::from(max) - income_threshold + 1.0) / width;
            }
            Some(_) => {}
            // Open top bracket below the threshold still counts whole.
            None => above += f64::from(count),
        }
    }

    round1(100.0 * above / f64::from(total_households))
}
