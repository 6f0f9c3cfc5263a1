pub mod percentile;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::cache::{RegionCache, RegionStore, DEFAULT_GEOMETRY_CAPACITY, DEFAULT_REGION_CAPACITY};
use crate::income::interpolate::affordability_pct;
use crate::income::threshold::income_for_rent;
use crate::lookup::Lookups;
use crate::types::identifiers::{CountyId, RegionId, TractId};
use crate::types::records::{RankOutcome, RankQuery, RegionGeometry, RegionRecord};

pub use percentile::percentile_rank;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The query façade: static lookups, a dataset store, and the two bounded
/// caches, composed into the rank and affordability operations.
///
/// All methods take `&self`; the caches are mutex-guarded and region
/// payloads are `Arc`-shared, so ranking runs on a snapshot outside any
/// lock. Concurrent misses on the same region may load redundantly; the
/// last writer wins without corrupting eviction order.
pub struct AffordabilityEngine<S> {
    lookups: Lookups,
    store: S,
    regions: Mutex<RegionCache<RegionRecord>>,
    geometries: Mutex<RegionCache<RegionGeometry>>,
}

impl<S: RegionStore> AffordabilityEngine<S> {
    pub fn new(lookups: Lookups, store: S) -> Self {
        Self::with_capacities(
            lookups,
            store,
            DEFAULT_REGION_CAPACITY,
            DEFAULT_GEOMETRY_CAPACITY,
        )
    }

    /// Income-dataset and geometry caches are sized independently; a
    /// region's two datasets age out on their own schedules.
    pub fn with_capacities(
        lookups: Lookups,
        store: S,
        region_capacity: usize,
        geometry_capacity: usize,
    ) -> Self {
        Self {
            lookups,
            store,
            regions: Mutex::new(RegionCache::new(region_capacity)),
            geometries: Mutex::new(RegionCache::new(geometry_capacity)),
        }
    }

    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    /// Rank `query.tract` against every tract in its metropolitan region.
    ///
    /// `None` when the county maps to no region, the region dataset is
    /// unavailable or empty, or the tract is not in the region's list.
    /// Every tract's affordability is recomputed per query under its own
    /// effective threshold; tracts with zero households participate at 0%.
    pub fn rank(&self, query: &RankQuery) -> Option<RankOutcome> {
        let county = query.tract.county();
        let region_ref = self.lookups.region_for_county(&county)?;
        let region = self.region(&region_ref.region_id)?;
        if region.tracts.is_empty() {
            debug!(region = region_ref.region_id.as_str(), "region has no tracts");
            return None;
        }

        let mut percentages = Vec::with_capacity(region.tracts.len());
        let mut target_pct = None;
        for tract in &region.tracts {
            let threshold = self.effective_threshold(&tract.tract_id, query);
            let pct = affordability_pct(threshold, tract.total_households, &tract.bracket_counts);
            if tract.tract_id == query.tract {
                target_pct = Some(pct);
            }
            percentages.push(pct);
        }
        let target = target_pct?;

        Some(RankOutcome {
            percentile: percentile_rank(&mut percentages, target),
            tract_count: region.tracts.len(),
            region_name: region_ref.region_name.clone(),
        })
    }

    /// Affordability percentage for a single tract, without ranking.
    pub fn tract_affordability(&self, tract: &TractId, income_threshold: f64) -> Option<f64> {
        let region_ref = self.lookups.region_for_county(&tract.county())?;
        let region = self.region(&region_ref.region_id)?;
        let record = region.tract(tract)?;
        Some(affordability_pct(
            income_threshold,
            record.total_households,
            &record.bracket_counts,
        ))
    }

    /// The simplified tract geometries for the county's region, served
    /// through the geometry cache.
    pub fn region_geometry(&self, county: &CountyId) -> Option<Arc<RegionGeometry>> {
        let region_ref = self.lookups.region_for_county(county)?;
        let id = &region_ref.region_id;
        if let Some(hit) = lock(&self.geometries).get(id) {
            return Some(hit);
        }
        let geometry = match self.store.load_geometry(id) {
            Ok(Some(geometry)) => geometry,
            Ok(None) => {
                debug!(region = id.as_str(), "region geometry absent from store");
                return None;
            }
            Err(err) => {
                warn!(region = id.as_str(), error = %err, "region geometry load failed");
                return None;
            }
        };
        Some(lock(&self.geometries).insert(id.clone(), geometry))
    }

    /// A tract's effective threshold under mixed-threshold ranking: the
    /// income derived from its ZIP's rent when the query carries a rent
    /// table and the ZIP is covered, the uniform threshold otherwise.
    fn effective_threshold(&self, tract: &TractId, query: &RankQuery) -> f64 {
        let Some(rents) = query.zip_rents.as_deref() else {
            return query.uniform_threshold;
        };
        let Some(zip) = self.lookups.zip_for_tract(tract) else {
            return query.uniform_threshold;
        };
        match rents.rent(zip, query.bedrooms) {
            Some(rent) => income_for_rent(rent),
            None => query.uniform_threshold,
        }
    }

    /// Cached region dataset, loading on miss. Absent datasets and load
    /// failures both surface as `None` and are never negatively cached.
    fn region(&self, id: &RegionId) -> Option<Arc<RegionRecord>> {
        if let Some(hit) = lock(&self.regions).get(id) {
            return Some(hit);
        }
        // Load outside the lock; a racing loader's insert is harmless.
        let record = match self.store.load_region(id) {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(region = id.as_str(), "region dataset absent from store");
                return None;
            }
            Err(err) => {
                warn!(region = id.as_str(), error = %err, "region dataset load failed");
                return None;
            }
        };
        Some(lock(&self.regions).insert(id.clone(), record))
    }
}
