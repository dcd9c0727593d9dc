//! 產品與交期來源模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 交期來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadTimeSource {
    /// 成本單
    Costing,
    /// 產品
    Product,
    /// 公司預設
    Company,
}

/// 產品成本單（交期候選的最高優先來源）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCosting {
    /// 交期（天）
    pub lead_time_days: Option<i64>,

    /// 供應商名稱
    pub vendor_name: Option<String>,

    /// 單位成本
    pub unit_cost: Option<Decimal>,
}

impl ProductCosting {
    /// 建構器模式：設置交期
    pub fn with_lead_time_days(mut self, days: i64) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    /// 建構器模式：設置供應商
    pub fn with_vendor(mut self, vendor: String) -> Self {
        self.vendor_name = Some(vendor);
        self
    }
}

/// 產品主檔（交期候選的次要來源）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInfo {
    /// 產品ID
    pub product_id: Option<i64>,

    /// 產品名稱
    pub name: Option<String>,

    /// 交期（天）
    pub lead_time_days: Option<i64>,
}

impl ProductInfo {
    /// 建構器模式：設置交期
    pub fn with_lead_time_days(mut self, days: i64) -> Self {
        self.lead_time_days = Some(days);
        self
    }
}

/// 公司設定（交期候選的最後備援）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanySettings {
    /// 預設交期（天）
    pub default_lead_time_days: Option<i64>,
}

impl CompanySettings {
    /// 建構器模式：設置預設交期
    pub fn with_default_lead_time_days(mut self, days: i64) -> Self {
        self.default_lead_time_days = Some(days);
        self
    }
}
