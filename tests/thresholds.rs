use afford_core::income::{
    burdened_income_floor, feasibility_band, income_for_rent, rent_for_income, BRACKET_COUNT,
    RENT_TO_INCOME_RATIO,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn income_for_rent_at_thirty_percent() {
    assert_close(income_for_rent(1_500.0), 60_000.0);
    assert_close(income_for_rent(1_000.0), 40_000.0);
    assert_close(income_for_rent(0.0), 0.0);
}

#[test]
fn rent_for_income_inverts_income_for_rent() {
    for rent in [450.0, 987.65, 1_500.0, 3_200.0] {
        assert_close(rent_for_income(income_for_rent(rent)), rent);
    }
    assert_close(rent_for_income(60_000.0), 1_500.0);
}

#[test]
fn ratio_is_the_standard_burden_convention() {
    assert_eq!(RENT_TO_INCOME_RATIO, 0.30);
}

#[test]
fn burdened_floor_is_three_quarters_of_threshold() {
    assert_close(burdened_income_floor(60_000.0), 45_000.0);
    assert_close(burdened_income_floor(0.0), 0.0);
}

#[test]
fn feasibility_band_splits_affordable_and_stretched() {
    // 50 households in [30000, 34999], 50 in the open top bracket.
    let mut counts = [0u32; BRACKET_COUNT];
    counts[5] = 50;
    counts[15] = 50;

    // Threshold 40000: only the top-bracket half affords outright. The
    // 40%-burden floor is 30000, which the whole [30000, 34999] bracket
    // clears, so the other half is eligible but stretched.
    let band = feasibility_band(40_000.0, 100, &counts);
    assert_eq!(band.affordable_pct, 50.0);
    assert_eq!(band.stretched_pct, 50.0);
}

#[test]
fn feasibility_band_stretched_share_never_negative() {
    let mut counts = [0u32; BRACKET_COUNT];
    counts[15] = 10;
    let band = feasibility_band(100_000.0, 10, &counts);
    assert_eq!(band.affordable_pct, 100.0);
    assert_eq!(band.stretched_pct, 0.0);
}
