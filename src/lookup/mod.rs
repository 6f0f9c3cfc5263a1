//! Static lookup tables: county-to-region, tract-to-ZIP, and the per-ZIP
//! fair-market-rent table. Build-time artifacts, loaded once and read-only
//! for the life of the process.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{CountyId, TractId, ZipCode};
use crate::types::records::RegionRef;

/// Bedroom count selecting a column of a ZIP's rent row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bedrooms {
    Studio,
    One,
    #[default]
    Two,
    Three,
    Four,
}

impl Bedrooms {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Monthly fair-market rents by ZIP: `[studio, 1BR, 2BR, 3BR, 4BR]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipRentTable {
    entries: BTreeMap<ZipCode, [f64; 5]>,
}

impl ZipRentTable {
    pub fn new(entries: BTreeMap<ZipCode, [f64; 5]>) -> Self {
        Self { entries }
    }

    pub fn rent(&self, zip: &ZipCode, bedrooms: Bedrooms) -> Option<f64> {
        self.entries.get(zip).map(|row| row[bedrooms.index()])
    }

    pub fn row(&self, zip: &ZipCode) -> Option<&[f64; 5]> {
        self.entries.get(zip)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum LookupLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The three read-only mappings the engine resolves against. Immutable
/// after construction; shared freely across concurrent reads.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    county_to_region: BTreeMap<CountyId, RegionRef>,
    tract_to_zip: BTreeMap<TractId, ZipCode>,
    zip_rents: Arc<ZipRentTable>,
}

impl Lookups {
    pub fn new(
        county_to_region: BTreeMap<CountyId, RegionRef>,
        tract_to_zip: BTreeMap<TractId, ZipCode>,
        zip_rents: ZipRentTable,
    ) -> Self {
        Self {
            county_to_region,
            tract_to_zip,
            zip_rents: Arc::new(zip_rents),
        }
    }

    /// Load the three tables from `county_regions.json`, `tract_zips.json`,
    /// and `zip_rents.json` under `dir`.
    pub fn from_json_dir(dir: &Path) -> Result<Self, LookupLoadError> {
        let county_to_region = serde_json::from_reader(File::open(dir.join("county_regions.json"))?)?;
        let tract_to_zip = serde_json::from_reader(File::open(dir.join("tract_zips.json"))?)?;
        let zip_rents: ZipRentTable =
            serde_json::from_reader(File::open(dir.join("zip_rents.json"))?)?;
        Ok(Self {
            county_to_region,
            tract_to_zip,
            zip_rents: Arc::new(zip_rents),
        })
    }

    pub fn region_for_county(&self, county: &CountyId) -> Option<&RegionRef> {
        self.county_to_region.get(county)
    }

    pub fn zip_for_tract(&self, tract: &TractId) -> Option<&ZipCode> {
        self.tract_to_zip.get(tract)
    }

    /// Shared handle to the fair-market-rent table, cheap to attach to a
    /// [`RankQuery`](crate::types::RankQuery).
    pub fn zip_rents(&self) -> Arc<ZipRentTable> {
        Arc::clone(&self.zip_rents)
    }
}
