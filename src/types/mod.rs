pub mod identifiers;
pub mod records;

pub use identifiers::{CountyId, IdentifierError, RegionId, TractId, ZipCode};
pub use records::{
    RankOutcome, RankQuery, RegionGeometry, RegionRecord, RegionRef, TractOutline, TractRecord,
};
