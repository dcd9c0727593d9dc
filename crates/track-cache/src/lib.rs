//! # Track Cache
//!
//! 參考資料快取與增量重算支援

pub mod attribute_cache;
pub mod clock;
pub mod dirty_tracking;

// Re-export 主要類型
pub use attribute_cache::{AttributeDefinition, AttributeDefinitionCache};
pub use clock::{Clock, SystemClock};
pub use dirty_tracking::DirtyTracker;
