//! 階段列組裝
//!
//! 將上游算出的原始數字組裝為統一的顯示/決策結構：
//! 內部階段列或委外步驟列，兩者以標記聯集區分。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use track_core::{
    ExternalStepStatus, ExternalStepType, LeadTimeSource, ProductionActivity, Stage,
};

use crate::lead_time::LeadTimeDetail;
use crate::rollup::RollupCalculator;

/// 階段列（標記聯集：每列恰為兩種形態之一）
#[derive(Debug, Clone)]
pub enum StageRow {
    /// 內部產線階段
    Internal(InternalStageRow),
    /// 委外步驟
    External(ExternalStageRow),
}

/// 內部階段列
///
/// `total` 恆等於 `breakdown` 的加總（建構時計算，不另外傳入）。
#[derive(Debug, Clone)]
pub struct InternalStageRow {
    /// 階段
    pub stage: Stage,
    /// 顯示標籤
    pub label: String,
    /// 逐尺寸數量
    pub breakdown: Vec<Decimal>,
    /// 數量合計
    pub total: Decimal,
    /// 逐尺寸損耗
    pub loss: Option<Vec<Decimal>>,
    /// 損耗合計
    pub loss_total: Option<Decimal>,
    /// 已登錄瑕疵合計
    pub logged_defect_total: Option<Decimal>,
    /// 顯示提示
    pub hint: Option<String>,
}

impl InternalStageRow {
    /// 建構器模式：設置逐尺寸損耗（合計隨之計算）
    pub fn with_loss(mut self, loss: Vec<Decimal>) -> Self {
        self.loss_total = Some(loss.iter().copied().sum());
        self.loss = Some(loss);
        self
    }

    /// 建構器模式：設置已登錄瑕疵合計
    pub fn with_logged_defect_total(mut self, total: Decimal) -> Self {
        self.logged_defect_total = Some(total);
        self
    }

    /// 建構器模式：設置顯示提示
    pub fn with_hint(mut self, hint: String) -> Self {
        self.hint = Some(hint);
        self
    }
}

/// 委外步驟列的逐尺寸數量與狀態輸入
#[derive(Debug, Clone)]
pub struct ExternalRowSpec {
    /// 委外步驟類型
    pub step_type: ExternalStepType,
    /// 此產品是否預期有這個步驟
    pub expected: bool,
    /// 步驟狀態
    pub status: ExternalStepStatus,
    /// 預計到貨日
    pub eta_date: Option<NaiveDate>,
    /// 廠商名稱
    pub vendor: Option<String>,
    /// 交期為推估值（低信心）
    pub low_confidence: bool,
    /// 解析後的交期
    pub lead_time: LeadTimeDetail,
    /// 逐尺寸發出量
    pub sent: Vec<Decimal>,
    /// 逐尺寸收回量
    pub received: Vec<Decimal>,
    /// 逐尺寸損耗量
    pub loss: Vec<Decimal>,
}

impl ExternalRowSpec {
    /// 創建新的委外列輸入
    pub fn new(step_type: ExternalStepType, status: ExternalStepStatus) -> Self {
        Self {
            step_type,
            expected: true,
            status,
            eta_date: None,
            vendor: None,
            low_confidence: false,
            lead_time: LeadTimeDetail::unresolved(),
            sent: Vec::new(),
            received: Vec::new(),
            loss: Vec::new(),
        }
    }

    /// 建構器模式：設置預計到貨日
    pub fn with_eta(mut self, eta: NaiveDate) -> Self {
        self.eta_date = Some(eta);
        self
    }

    /// 建構器模式：設置廠商
    pub fn with_vendor(mut self, vendor: String) -> Self {
        self.vendor = Some(vendor);
        self
    }

    /// 建構器模式：設置解析後的交期
    pub fn with_lead_time(mut self, detail: LeadTimeDetail) -> Self {
        self.lead_time = detail;
        self
    }

    /// 建構器模式：標記為低信心推估
    pub fn as_low_confidence(mut self) -> Self {
        self.low_confidence = true;
        self
    }

    /// 建構器模式：設置逐尺寸數量
    pub fn with_quantities(
        mut self,
        sent: Vec<Decimal>,
        received: Vec<Decimal>,
        loss: Vec<Decimal>,
    ) -> Self {
        self.sent = sent;
        self.received = received;
        self.loss = loss;
        self
    }
}

/// 委外步驟列數量合計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalTotals {
    /// 發出合計
    pub sent: Decimal,
    /// 收回合計
    pub received: Decimal,
    /// 未回合計
    pub net: Decimal,
    /// 損耗合計
    pub loss: Decimal,
}

/// 委外步驟列
///
/// 對帳規則：net[i] = sent[i] − received[i] − loss[i]，
/// 故對所有 i 恆有 net[i] + loss[i] ≤ sent[i]
/// （已收回或在途的數量不會同時算進未回與損耗）。
#[derive(Debug, Clone)]
pub struct ExternalStageRow {
    /// 委外步驟類型
    pub step_type: ExternalStepType,
    /// 此產品是否預期有這個步驟
    pub expected: bool,
    /// 步驟狀態
    pub status: ExternalStepStatus,
    /// 預計到貨日
    pub eta_date: Option<NaiveDate>,
    /// 是否逾期（相對於業務基準日）
    pub is_late: bool,
    /// 廠商名稱
    pub vendor: Option<String>,
    /// 交期為推估值（低信心）
    pub low_confidence: bool,
    /// 交期（天）
    pub lead_time_days: Option<i64>,
    /// 交期來源
    pub lead_time_source: Option<LeadTimeSource>,
    /// 逐尺寸發出量
    pub sent: Vec<Decimal>,
    /// 逐尺寸收回量
    pub received: Vec<Decimal>,
    /// 逐尺寸未回量
    pub net: Vec<Decimal>,
    /// 逐尺寸損耗量
    pub loss: Vec<Decimal>,
    /// 數量合計
    pub totals: ExternalTotals,
}

/// 階段列組裝器
pub struct StageRowBuilder;

impl StageRowBuilder {
    /// 組裝內部階段列
    ///
    /// 合計由 breakdown 加總而得，確保 total == Σ breakdown。
    pub fn internal(stage: Stage, breakdown: Vec<Decimal>) -> InternalStageRow {
        let total = breakdown.iter().copied().sum();

        InternalStageRow {
            stage,
            label: stage.label().to_string(),
            breakdown,
            total,
            loss: None,
            loss_total: None,
            logged_defect_total: None,
            hint: None,
        }
    }

    /// 由逐尺寸活動清單組裝內部階段列
    ///
    /// `size_buckets[i]` 為第 i 個尺寸的活動記錄；
    /// breakdown 取各尺寸可用量，loss 取各尺寸已處置瑕疵量。
    pub fn internal_from_activities(
        stage: Stage,
        size_buckets: &[Vec<ProductionActivity>],
    ) -> InternalStageRow {
        let breakdown: Vec<Decimal> = size_buckets
            .iter()
            .map(|acts| RollupCalculator::usable_for_stage(acts, stage))
            .collect();

        let loss: Vec<Decimal> = size_buckets
            .iter()
            .map(|acts| RollupCalculator::scrapped_for_stage(acts, stage))
            .collect();

        let logged_defect_total = loss.iter().copied().sum();

        Self::internal(stage, breakdown)
            .with_loss(loss)
            .with_logged_defect_total(logged_defect_total)
    }

    /// 組裝委外步驟列
    ///
    /// `as_of` 為業務基準日（逾期判定以日為粒度，由呼叫端注入，
    /// 不讀牆上時鐘）：ETA 嚴格早於基準日且狀態尚未收回才算逾期。
    pub fn external(spec: ExternalRowSpec, as_of: NaiveDate) -> ExternalStageRow {
        let len = spec.sent.len().max(spec.received.len()).max(spec.loss.len());

        let sent = Self::padded(&spec.sent, len);
        // 收回與損耗為實物數量，負值視為零，否則對帳不變式不成立
        let received: Vec<Decimal> = Self::padded(&spec.received, len)
            .into_iter()
            .map(|q| q.max(Decimal::ZERO))
            .collect();
        let loss: Vec<Decimal> = Self::padded(&spec.loss, len)
            .into_iter()
            .map(|q| q.max(Decimal::ZERO))
            .collect();

        let net: Vec<Decimal> = (0..len)
            .map(|i| sent[i] - received[i] - loss[i])
            .collect();

        let totals = ExternalTotals {
            sent: sent.iter().copied().sum(),
            received: received.iter().copied().sum(),
            net: net.iter().copied().sum(),
            loss: loss.iter().copied().sum(),
        };

        let is_late = match spec.eta_date {
            Some(eta) => eta < as_of && !spec.status.is_received(),
            None => false,
        };

        tracing::debug!(
            step_type = ?spec.step_type,
            status = ?spec.status,
            is_late,
            sent_total = %totals.sent,
            "組裝委外步驟列"
        );

        ExternalStageRow {
            step_type: spec.step_type,
            expected: spec.expected,
            status: spec.status,
            eta_date: spec.eta_date,
            is_late,
            vendor: spec.vendor,
            low_confidence: spec.low_confidence,
            lead_time_days: spec.lead_time.value,
            lead_time_source: spec.lead_time.source,
            sent,
            received,
            net,
            loss,
            totals,
        }
    }

    fn padded(values: &[Decimal], len: usize) -> Vec<Decimal> {
        let mut out = values.to_vec();
        out.resize(len, Decimal::ZERO);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use track_core::{ActivityKind, DefectDisposition};

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn test_internal_total_equals_breakdown_sum() {
        let row = StageRowBuilder::internal(Stage::Cut, vec![d(10), d(20), d(15)]);

        assert_eq!(row.total, d(45));
        assert_eq!(row.label, "Cut");
        assert_eq!(row.loss, None);
        assert_eq!(row.hint, None);
    }

    #[test]
    fn test_internal_with_loss() {
        let row = StageRowBuilder::internal(Stage::Sew, vec![d(30), d(40)])
            .with_loss(vec![d(2), d(3)])
            .with_hint("含返工".to_string());

        assert_eq!(row.loss_total, Some(d(5)));
        assert_eq!(row.loss, Some(vec![d(2), d(3)]));
        assert_eq!(row.hint, Some("含返工".to_string()));
    }

    #[test]
    fn test_internal_from_activities() {
        // 兩個尺寸：S 尺寸 50 良品 + 5 報廢，M 尺寸 60 良品
        let size_s = vec![
            ProductionActivity::new("ASM-1".to_string(), Stage::Sew, ActivityKind::Normal, d(50)),
            ProductionActivity::new("ASM-1".to_string(), Stage::Sew, ActivityKind::Defect, d(5))
                .with_defect(DefectDisposition::Scrap, Some(1)),
        ];
        let size_m = vec![ProductionActivity::new(
            "ASM-1".to_string(),
            Stage::Sew,
            ActivityKind::Normal,
            d(60),
        )];

        let row = StageRowBuilder::internal_from_activities(Stage::Sew, &[size_s, size_m]);

        assert_eq!(row.breakdown, vec![d(45), d(60)]);
        assert_eq!(row.total, d(105));
        assert_eq!(row.loss, Some(vec![d(5), d(0)]));
        assert_eq!(row.logged_defect_total, Some(d(5)));
    }

    #[test]
    fn test_external_net_reconciliation() {
        let spec = ExternalRowSpec::new(ExternalStepType::Dye, ExternalStepStatus::InTransit)
            .with_quantities(
                vec![d(100), d(80)],
                vec![d(60), d(80)],
                vec![d(5), d(0)],
            );

        let row = StageRowBuilder::external(spec, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());

        // net[i] = sent[i] - received[i] - loss[i]
        assert_eq!(row.net, vec![d(35), d(0)]);
        // 不變式：net[i] + loss[i] ≤ sent[i]
        for i in 0..row.sent.len() {
            assert!(row.net[i] + row.loss[i] <= row.sent[i]);
        }
        assert_eq!(row.totals.sent, d(180));
        assert_eq!(row.totals.net, d(35));
        assert_eq!(row.totals.loss, d(5));
    }

    #[test]
    fn test_external_pads_uneven_arrays() {
        let spec = ExternalRowSpec::new(ExternalStepType::Print, ExternalStepStatus::Sent)
            .with_quantities(vec![d(40), d(40), d(20)], vec![d(10)], vec![]);

        let row = StageRowBuilder::external(spec, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());

        assert_eq!(row.received, vec![d(10), d(0), d(0)]);
        assert_eq!(row.net, vec![d(30), d(40), d(20)]);
        assert_eq!(row.totals.received, d(10));
    }

    #[test]
    fn test_is_late_day_granularity() {
        let as_of = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();

        // ETA 早於基準日且尚未收回：逾期
        let late = StageRowBuilder::external(
            ExternalRowSpec::new(ExternalStepType::Wash, ExternalStepStatus::InTransit)
                .with_eta(NaiveDate::from_ymd_opt(2026, 5, 9).unwrap()),
            as_of,
        );
        assert!(late.is_late);

        // ETA 等於基準日：當天不算逾期
        let due_today = StageRowBuilder::external(
            ExternalRowSpec::new(ExternalStepType::Wash, ExternalStepStatus::InTransit)
                .with_eta(as_of),
            as_of,
        );
        assert!(!due_today.is_late);

        // 已收回：即使 ETA 已過也不算逾期
        let received = StageRowBuilder::external(
            ExternalRowSpec::new(ExternalStepType::Wash, ExternalStepStatus::Received)
                .with_eta(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()),
            as_of,
        );
        assert!(!received.is_late);

        // 無 ETA：無從判定，不標逾期
        let no_eta = StageRowBuilder::external(
            ExternalRowSpec::new(ExternalStepType::Wash, ExternalStepStatus::Sent),
            as_of,
        );
        assert!(!no_eta.is_late);
    }

    #[test]
    fn test_external_carries_lead_time_detail() {
        let detail = LeadTimeDetail {
            value: Some(9),
            source: Some(LeadTimeSource::Product),
        };
        let spec = ExternalRowSpec::new(ExternalStepType::Embroidery, ExternalStepStatus::Pending)
            .with_lead_time(detail)
            .with_vendor("EMB-SHOP-C".to_string())
            .as_low_confidence();

        let row = StageRowBuilder::external(spec, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());

        assert_eq!(row.lead_time_days, Some(9));
        assert_eq!(row.lead_time_source, Some(LeadTimeSource::Product));
        assert_eq!(row.vendor, Some("EMB-SHOP-C".to_string()));
        assert!(row.low_confidence);
    }

    #[test]
    fn test_stage_row_union_discriminates() {
        let rows = vec![
            StageRow::Internal(StageRowBuilder::internal(Stage::Pack, vec![d(5)])),
            StageRow::External(StageRowBuilder::external(
                ExternalRowSpec::new(ExternalStepType::Other, ExternalStepStatus::Pending),
                NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            )),
        ];

        assert!(matches!(rows[0], StageRow::Internal(_)));
        assert!(matches!(rows[1], StageRow::External(_)));
    }
}
