pub mod region_cache;
pub mod store;

pub use region_cache::{RegionCache, DEFAULT_GEOMETRY_CAPACITY, DEFAULT_REGION_CAPACITY};
pub use store::{JsonDirStore, RegionStore, StoreError};
