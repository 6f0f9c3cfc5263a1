use crate::income::brackets::BRACKET_COUNT;
use crate::income::interpolate::{affordability_pct, round1};

/// Standard rent-burden convention: housing is affordable when rent is at
/// most 30% of gross income.
pub const RENT_TO_INCOME_RATIO: f64 = 0.30;

/// Scale from the 30%-ratio income down to the income at which the same
/// rent consumes 40% of income (`0.30 / 0.40`).
pub const BURDENED_INCOME_SCALE: f64 = 0.75;

/// Annual income required to afford `monthly_rent` at the 30% ratio.
pub fn income_for_rent(monthly_rent: f64) -> f64 {
    monthly_rent * 12.0 / RENT_TO_INCOME_RATIO
}

/// Highest affordable monthly rent for `annual_income` at the 30% ratio.
pub fn rent_for_income(annual_income: f64) -> f64 {
    annual_income * RENT_TO_INCOME_RATIO / 12.0
}

/// Lowest income at which the rent behind `income_threshold` stays within
/// 40% of income. Households between this floor and the threshold can pay
/// the rent but are rent-burdened.
pub fn burdened_income_floor(income_threshold: f64) -> f64 {
    income_threshold * BURDENED_INCOME_SCALE
}

/// Affordability split into an unburdened share and a stretched share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityBand {
    /// Households at or above the 30%-ratio income.
    pub affordable_pct: f64,
    /// Households below the 30%-ratio income but at or above the
    /// 40%-burden floor: eligible, but rent-burdened.
    pub stretched_pct: f64,
}

/// Band a tract's households around `income_threshold`.
pub fn feasibility_band(
    income_threshold: f64,
    total_households: u32,
    bracket_counts: &[u32; BRACKET_COUNT],
) -> FeasibilityBand {
    let affordable_pct = affordability_pct(income_threshold, total_households, bracket_counts);
    let reachable_pct = affordability_pct(
        burdened_income_floor(income_threshold),
        total_households,
        bracket_counts,
    );
    FeasibilityBand {
        affordable_pct,
        stretched_pct: round1(reachable_pct - affordable_pct).max(0.0),
    }
}
