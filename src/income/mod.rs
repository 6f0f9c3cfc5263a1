pub mod brackets;
pub mod interpolate;
pub mod threshold;

pub use brackets::{IncomeBracket, BRACKETS, BRACKET_COUNT};
pub use interpolate::affordability_pct;
pub use threshold::{
    burdened_income_floor, feasibility_band, income_for_rent, rent_for_income, FeasibilityBand,
    BURDENED_INCOME_SCALE, RENT_TO_INCOME_RATIO,
};
