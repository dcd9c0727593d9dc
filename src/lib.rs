//! # Prodtrack
//!
//! 生產進度追蹤計算引擎：逐階段瑕疵/可用量彙總、交期解析、
//! 階段列組裝與定價模型推斷。

// Re-export 主要類型
pub use track_cache::{AttributeDefinition, AttributeDefinitionCache, Clock, DirtyTracker, SystemClock};
pub use track_calc::{
    AssemblyRollup, ExternalStageRow, InternalStageRow, LeadTimeDetail, LeadTimeResolver,
    PricingClassifier, RollupCalculator, StageRow, StageRowBuilder, StageSummary,
};
pub use track_core::{
    ActivityKind, CompanySettings, CostGroup, CostRange, DefectBucket, DefectDisposition,
    ExternalStepStatus, ExternalStepType, LeadTimeSource, PricingFields, PricingModel,
    ProductCosting, ProductInfo, ProductionActivity, Result, Stage, TrackError,
};
