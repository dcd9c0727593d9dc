//! 交期解析
//!
//! 依固定優先序（成本單 > 產品 > 公司預設）挑選有效交期。

use chrono::{Duration, NaiveDate};
use track_core::{CompanySettings, LeadTimeSource, ProductCosting, ProductInfo};

/// 交期解析結果
///
/// 同時攜帶數值與來源；若無任何候選合格，兩者皆為 None。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadTimeDetail {
    /// 交期（天）
    pub value: Option<i64>,

    /// 提供該值的來源
    pub source: Option<LeadTimeSource>,
}

impl LeadTimeDetail {
    /// 無合格候選的空結果
    pub fn unresolved() -> Self {
        Self {
            value: None,
            source: None,
        }
    }
}

/// 交期解析器
pub struct LeadTimeResolver;

impl LeadTimeResolver {
    /// 解析有效交期（含來源）
    ///
    /// 候選依固定優先序評估：成本單 > 產品 > 公司預設。
    /// 候選合格條件：值存在且嚴格大於零（零與負值視為未設定）。
    /// 相同輸入必得相同輸出：無隱藏狀態、無隨機性。
    pub fn resolve_detail(
        costing: Option<&ProductCosting>,
        product: Option<&ProductInfo>,
        company: Option<&CompanySettings>,
    ) -> LeadTimeDetail {
        let candidates = [
            (
                costing.and_then(|c| c.lead_time_days),
                LeadTimeSource::Costing,
            ),
            (
                product.and_then(|p| p.lead_time_days),
                LeadTimeSource::Product,
            ),
            (
                company.and_then(|c| c.default_lead_time_days),
                LeadTimeSource::Company,
            ),
        ];

        for (raw, source) in candidates {
            if let Some(days) = raw {
                if days > 0 {
                    return LeadTimeDetail {
                        value: Some(days),
                        source: Some(source),
                    };
                }
            }
        }

        LeadTimeDetail::unresolved()
    }

    /// 解析有效交期（僅回傳天數）
    pub fn resolve_days(
        costing: Option<&ProductCosting>,
        product: Option<&ProductInfo>,
        company: Option<&CompanySettings>,
    ) -> Option<i64> {
        Self::resolve_detail(costing, product, company).value
    }

    /// 由起算日與解析結果推算預計到貨日
    pub fn eta_from(start: NaiveDate, detail: &LeadTimeDetail) -> Option<NaiveDate> {
        detail
            .value
            .and_then(|days| start.checked_add_signed(Duration::days(days)))
    }
}
