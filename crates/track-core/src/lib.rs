//! # Track Core
//!
//! 生產追蹤核心資料模型與類型定義

pub mod activity;
pub mod external;
pub mod pricing;
pub mod product;
pub mod stage;

// Re-export 主要類型
pub use activity::{ActivityKind, DefectBucket, DefectDisposition, ProductionActivity};
pub use external::{ExternalStepStatus, ExternalStepType};
pub use pricing::{CostGroup, CostRange, PricingFields, PricingModel};
pub use product::{CompanySettings, LeadTimeSource, ProductCosting, ProductInfo};
pub use stage::Stage;

/// 追蹤引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("欄位衝突: {0}")]
    ConflictingFields(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TrackError>;
