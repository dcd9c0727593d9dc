//! 生產階段模型

use serde::{Deserialize, Serialize};

/// 生產階段
///
/// 內部階段依生產流程排序（下單 → 裁剪 → 車縫 → 整燙 → 包裝 → 品檢），
/// `External` 為委外廠商步驟的特殊階段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// 下單
    Order,
    /// 裁剪
    Cut,
    /// 車縫
    Sew,
    /// 整燙
    Finish,
    /// 包裝
    Pack,
    /// 品檢
    Qc,
    /// 委外步驟（非內部產線階段）
    External,
}

impl Stage {
    /// 內部階段（依生產流程順序）
    pub const INTERNAL: [Stage; 6] = [
        Stage::Order,
        Stage::Cut,
        Stage::Sew,
        Stage::Finish,
        Stage::Pack,
        Stage::Qc,
    ];

    /// 檢查是否為內部產線階段
    pub fn is_internal(&self) -> bool {
        !matches!(self, Stage::External)
    }

    /// 顯示標籤
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Order => "Ordered",
            Stage::Cut => "Cut",
            Stage::Sew => "Sewn",
            Stage::Finish => "Finished",
            Stage::Pack => "Packed",
            Stage::Qc => "QC Passed",
            Stage::External => "External",
        }
    }
}
