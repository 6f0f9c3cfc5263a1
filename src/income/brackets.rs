/// Number of income brackets in the upstream histogram source.
pub const BRACKET_COUNT: usize = 16;

/// A contiguous income range. Both bounds are inclusive; the top bracket
/// is open-ended (`max = None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeBracket {
    pub min: u32,
    pub max: Option<u32>,
}

impl IncomeBracket {
    /// Integer width under the inclusive-bounds convention.
    /// `None` for the open-ended top bracket.
    pub fn width(&self) -> Option<u32> {
        self.max.map(|max| max - self.min + 1)
    }
}

/// The fixed bracket table used by the upstream household-income tabulation.
/// Ascending, non-overlapping, covering `[0, +inf)`.
pub const BRACKETS: [IncomeBracket; BRACKET_COUNT] = [
    IncomeBracket { min: 0, max: Some(9_999) },
    IncomeBracket { min: 10_000, max: Some(14_999) },
    IncomeBracket { min: 15_000, max: Some(19_999) },
    IncomeBracket { min: 20_000, max: Some(24_999) },
    IncomeBracket { min: 25_000, max: Some(29_999) },
    IncomeBracket { min: 30_000, max: Some(34_999) },
    IncomeBracket { min: 35_000, max: Some(39_999) },
    IncomeBracket { min: 40_000, max: Some(44_999) },
    IncomeBracket { min: 45_000, max: Some(49_999) },
    IncomeBracket { min: 50_000, max: Some(59_999) },
    IncomeBracket { min: 60_000, max: Some(74_999) },
    IncomeBracket { min: 75_000, max: Some(99_999) },
    IncomeBracket { min: 100_000, max: Some(124_999) },
    IncomeBracket { min: 125_000, max: Some(149_999) },
    IncomeBracket { min: 150_000, max: Some(199_999) },
    IncomeBracket { min: 200_000, max: None },
];
