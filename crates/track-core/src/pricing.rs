//! 定價模型與欄位配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 定價模型
///
/// 每個產品恰好對應五種模型之一，由已填寫的選填欄位推斷。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingModel {
    /// 曲線定價（以 MOQ 基準價錨定）
    CurveSellAtMoq,
    /// 階梯成本 + 固定售價
    TieredCostPlusFixedSell,
    /// 階梯成本 + 毛利率
    TieredCostPlusMargin,
    /// 單一成本 + 固定售價
    CostPlusFixedSell,
    /// 單一成本 + 毛利率
    CostPlusMargin,
}

/// 成本階梯區間
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    /// 區間起始數量
    pub min_quantity: Decimal,

    /// 區間單位成本
    pub unit_cost: Decimal,
}

impl CostRange {
    /// 創建新的成本區間
    pub fn new(min_quantity: Decimal, unit_cost: Decimal) -> Self {
        Self {
            min_quantity,
            unit_cost,
        }
    }
}

/// 成本群組（多個產品共用的階梯成本）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostGroup {
    /// 群組ID
    pub id: Option<i64>,

    /// 階梯成本區間
    pub cost_ranges: Vec<CostRange>,
}

/// 定價欄位配置
///
/// 推斷定價模型的輸入：哪些選填欄位已填寫決定模型歸類。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingFields {
    /// 顯式指定的定價模型（優先於推斷）
    pub pricing_model: Option<PricingModel>,

    /// 定價規格表ID
    pub pricing_spec_id: Option<i64>,

    /// MOQ 基準售價
    pub baseline_price_at_moq: Option<Decimal>,

    /// 產品自帶的階梯成本區間
    pub cost_price_ranges: Vec<CostRange>,

    /// 共用成本群組（已載入）
    pub cost_group: Option<CostGroup>,

    /// 共用成本群組ID（未載入時的外鍵）
    pub cost_group_id: Option<i64>,

    /// 手動售價
    pub manual_sale_price: Option<Decimal>,

    /// 手動毛利率（%）
    pub manual_margin_percent: Option<Decimal>,
}

impl PricingFields {
    /// 建構器模式：設置手動售價
    pub fn with_manual_sale_price(mut self, price: Decimal) -> Self {
        self.manual_sale_price = Some(price);
        self
    }

    /// 建構器模式：設置手動毛利率
    pub fn with_manual_margin_percent(mut self, percent: Decimal) -> Self {
        self.manual_margin_percent = Some(percent);
        self
    }

    /// 建構器模式：設置定價規格表
    pub fn with_pricing_spec_id(mut self, id: i64) -> Self {
        self.pricing_spec_id = Some(id);
        self
    }

    /// 建構器模式：設置成本群組ID
    pub fn with_cost_group_id(mut self, id: i64) -> Self {
        self.cost_group_id = Some(id);
        self
    }

    /// 建構器模式：設置 MOQ 基準售價
    pub fn with_baseline_price_at_moq(mut self, price: Decimal) -> Self {
        self.baseline_price_at_moq = Some(price);
        self
    }

    /// 檢查是否存在階梯成本配置
    ///
    /// 三者任一成立即視為階梯成本：產品自帶區間、已載入群組的區間、群組外鍵。
    pub fn has_tiered_cost(&self) -> bool {
        !self.cost_price_ranges.is_empty()
            || self
                .cost_group
                .as_ref()
                .is_some_and(|g| !g.cost_ranges.is_empty())
            || self.cost_group_id.is_some()
    }
}
