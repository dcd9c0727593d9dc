//! # Track Calculation Engine
//!
//! 生產進度/瑕疵彙總計算引擎

pub mod lead_time;
pub mod pricing;
pub mod rollup;
pub mod stage_rows;

// Re-export 主要類型
pub use lead_time::{LeadTimeDetail, LeadTimeResolver};
pub use pricing::PricingClassifier;
pub use rollup::{AssemblyRollup, RollupCalculator, StageSummary};
pub use stage_rows::{ExternalStageRow, InternalStageRow, StageRow, StageRowBuilder};
