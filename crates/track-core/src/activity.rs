//! 生產活動記錄模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stage::Stage;

/// 活動類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// 正常產出
    Normal,
    /// 返工
    Rework,
    /// 瑕疵
    Defect,
}

/// 瑕疵處置方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectDisposition {
    /// 未處置（不從可用量扣除）
    None,
    /// 留樣
    Sample,
    /// 待審
    Review,
    /// 報廢
    Scrap,
    /// 次品出貨
    OffSpec,
}

/// 生產活動記錄
///
/// 由上游生產登錄流程建立，持久化後不可變更。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionActivity {
    /// 記錄ID
    pub id: Uuid,

    /// 組件ID
    pub assembly_id: String,

    /// 生產階段
    pub stage: Stage,

    /// 活動類型
    pub kind: ActivityKind,

    /// 瑕疵處置（非瑕疵記錄為 None）
    pub disposition: DefectDisposition,

    /// 瑕疵原因ID
    pub defect_reason_id: Option<i64>,

    /// 數量（缺漏時以零計）
    pub quantity: Option<Decimal>,

    /// 登錄日期
    pub logged_date: Option<NaiveDate>,

    /// 來源單據
    pub source_ref: Option<String>,
}

impl ProductionActivity {
    /// 創建新的活動記錄
    pub fn new(assembly_id: String, stage: Stage, kind: ActivityKind, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            assembly_id,
            stage,
            kind,
            disposition: DefectDisposition::None,
            defect_reason_id: None,
            quantity: Some(quantity),
            logged_date: None,
            source_ref: None,
        }
    }

    /// 建構器模式：設置瑕疵處置與原因
    pub fn with_defect(mut self, disposition: DefectDisposition, reason_id: Option<i64>) -> Self {
        self.kind = ActivityKind::Defect;
        self.disposition = disposition;
        self.defect_reason_id = reason_id;
        self
    }

    /// 建構器模式：設置登錄日期
    pub fn with_logged_date(mut self, date: NaiveDate) -> Self {
        self.logged_date = Some(date);
        self
    }

    /// 建構器模式：設置來源單據
    pub fn with_source_ref(mut self, source_ref: String) -> Self {
        self.source_ref = Some(source_ref);
        self
    }

    /// 建構器模式：清除數量（模擬上游缺漏資料）
    pub fn with_missing_quantity(mut self) -> Self {
        self.quantity = None;
        self
    }

    /// 實際數量（缺漏以零計）
    pub fn qty(&self) -> Decimal {
        self.quantity.unwrap_or(Decimal::ZERO)
    }

    /// 檢查是否為計入扣除的瑕疵（處置非 None）
    pub fn is_counted_defect(&self) -> bool {
        self.kind == ActivityKind::Defect && self.disposition != DefectDisposition::None
    }
}

/// 瑕疵分組桶
///
/// 聚合鍵為 (原因ID, 處置方式)，數量為累計值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectBucket {
    /// 瑕疵原因ID
    pub reason_id: Option<i64>,

    /// 處置方式
    pub disposition: DefectDisposition,

    /// 累計數量
    pub quantity: Decimal,
}

impl DefectBucket {
    /// 創建新的分組桶
    pub fn new(reason_id: Option<i64>, disposition: DefectDisposition, quantity: Decimal) -> Self {
        Self {
            reason_id,
            disposition,
            quantity,
        }
    }

    /// 檢查聚合鍵是否相符
    pub fn matches(&self, reason_id: Option<i64>, disposition: DefectDisposition) -> bool {
        self.reason_id == reason_id && self.disposition == disposition
    }
}
