use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::income::brackets::BRACKET_COUNT;
use crate::income::threshold::income_for_rent;
use crate::lookup::{Bedrooms, ZipRentTable};
use crate::types::identifiers::{RegionId, TractId};

/// One tract's income histogram, aligned to the shared bracket table.
///
/// `total_households` comes from the source survey and may drift slightly
/// from `sum(bracket_counts)` due to rounding in the published data; the
/// engine does not reconcile the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TractRecord {
    pub tract_id: TractId,
    pub total_households: u32,
    pub bracket_counts: [u32; BRACKET_COUNT],
}

/// A metropolitan region's full tract histogram dataset. Built offline,
/// loaded lazily, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub region_id: RegionId,
    pub region_name: String,
    pub tracts: Vec<TractRecord>,
}

impl RegionRecord {
    pub fn tract(&self, id: &TractId) -> Option<&TractRecord> {
        self.tracts.iter().find(|t| t.tract_id == *id)
    }
}

/// Simplified outline of a single tract: exterior ring first, holes after.
/// Coordinates are `[longitude, latitude]` pairs as emitted by the offline
/// simplifier. Opaque to the engine beyond caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TractOutline {
    pub tract_id: TractId,
    pub rings: Vec<Vec<[f64; 2]>>,
}

/// A region's simplified tract geometries, cached independently of the
/// income dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionGeometry {
    pub region_id: RegionId,
    pub tracts: Vec<TractOutline>,
}

/// County-to-region mapping value: the region a county belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRef {
    pub region_id: RegionId,
    pub region_name: String,
}

/// A percentile-ranking request.
///
/// The threshold is a single annual-income figure applied to every tract,
/// unless a per-ZIP rent table is attached — then each tract whose
/// representative ZIP has a rent row is evaluated under its own derived
/// threshold, and only tracts without ZIP coverage fall back to the
/// uniform figure.
#[derive(Debug, Clone)]
pub struct RankQuery {
    pub tract: TractId,
    pub uniform_threshold: f64,
    pub zip_rents: Option<Arc<ZipRentTable>>,
    pub bedrooms: Bedrooms,
}

impl RankQuery {
    /// Rank against a uniform annual-income threshold.
    pub fn uniform(tract: TractId, income_threshold: f64) -> Self {
        Self {
            tract,
            uniform_threshold: income_threshold,
            zip_rents: None,
            bedrooms: Bedrooms::default(),
        }
    }

    /// Rank against the income needed to afford `monthly_rent`.
    pub fn for_monthly_rent(tract: TractId, monthly_rent: f64) -> Self {
        Self::uniform(tract, income_for_rent(monthly_rent))
    }

    /// Attach a per-ZIP rent table for mixed-threshold ranking.
    pub fn with_zip_rents(mut self, rents: Arc<ZipRentTable>) -> Self {
        self.zip_rents = Some(rents);
        self
    }

    pub fn with_bedrooms(mut self, bedrooms: Bedrooms) -> Self {
        self.bedrooms = bedrooms;
        self
    }
}

/// The outcome of a percentile-ranking query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankOutcome {
    /// Share of tracts in the region strictly below the target, in
    /// `[0, 100]`, one decimal place.
    pub percentile: f64,
    /// Number of tracts that participated in the ranking.
    pub tract_count: usize,
    pub region_name: String,
}
