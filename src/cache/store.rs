use std::fs::File;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::identifiers::RegionId;
use crate::types::records::{RegionGeometry, RegionRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Region ID mismatch: requested {requested}, dataset says {found}")]
    RegionIdMismatch { requested: String, found: String },
}

/// Keyed blob store the cache's miss path loads from. Implementations
/// return `Ok(None)` when no dataset exists for the identifier; only real
/// read or decode failures are errors.
pub trait RegionStore {
    fn load_region(&self, id: &RegionId) -> Result<Option<RegionRecord>, StoreError>;
    fn load_geometry(&self, id: &RegionId) -> Result<Option<RegionGeometry>, StoreError>;
}

/// Directory of build-time region artifacts: `<region_id>.json` for income
/// datasets, `<region_id>.geom.json` for simplified geometries.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RegionStore for JsonDirStore {
    fn load_region(&self, id: &RegionId) -> Result<Option<RegionRecord>, StoreError> {
        let path = self.root.join(format!("{}.json", id.as_str()));
        if !path.exists() {
            return Ok(None);
        }
        let record: RegionRecord = serde_json::from_reader(File::open(&path)?)?;
        // The filename is the key; the payload must agree with it.
        if record.region_id != *id {
            return Err(StoreError::RegionIdMismatch {
                requested: id.as_str().to_string(),
                found: record.region_id.as_str().to_string(),
            });
        }
        Ok(Some(record))
    }

    fn load_geometry(&self, id: &RegionId) -> Result<Option<RegionGeometry>, StoreError> {
        let path = self.root.join(format!("{}.geom.json", id.as_str()));
        if !path.exists() {
            return Ok(None);
        }
        let geometry: RegionGeometry = serde_json::from_reader(File::open(&path)?)?;
        if geometry.region_id != *id {
            return Err(StoreError::RegionIdMismatch {
                requested: id.as_str().to_string(),
                found: geometry.region_id.as_str().to_string(),
            });
        }
        Ok(Some(geometry))
    }
}
