//! 委外步驟模型

use serde::{Deserialize, Serialize};

/// 委外步驟類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalStepType {
    /// 染整
    Dye,
    /// 印花
    Print,
    /// 水洗
    Wash,
    /// 刺繡
    Embroidery,
    /// 其他委外
    Other,
}

/// 委外步驟狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalStepStatus {
    /// 尚未發出
    Pending,
    /// 已發出
    Sent,
    /// 運送中
    InTransit,
    /// 已收回（終態）
    Received,
    /// 取消
    Cancelled,
}

impl ExternalStepStatus {
    /// 檢查是否為收回終態（終態不再計入逾期）
    pub fn is_received(&self) -> bool {
        matches!(self, ExternalStepStatus::Received)
    }

    /// 檢查是否仍在廠商手上
    pub fn is_outstanding(&self) -> bool {
        matches!(
            self,
            ExternalStepStatus::Sent | ExternalStepStatus::InTransit
        )
    }
}
