//! 定價模型推斷
//!
//! 依已填寫的選填欄位將產品歸入五種定價模型之一。
//! 階梯為全函式：任何輸入恰好對應一個模型。

use track_core::{PricingFields, PricingModel, Result, TrackError};

/// 定價模型分類器
pub struct PricingClassifier;

impl PricingClassifier {
    /// 推斷定價模型（首個命中的規則生效）
    ///
    /// 1. 顯式指定的模型 → 原樣回傳
    /// 2. 有定價規格表或 MOQ 基準價 → CurveSellAtMoq
    /// 3. 有階梯成本且有手動售價 → TieredCostPlusFixedSell
    /// 4. 僅有階梯成本 → TieredCostPlusMargin
    /// 5. 僅有手動售價 → CostPlusFixedSell
    /// 6. 其餘 → CostPlusMargin
    pub fn resolve_model(fields: &PricingFields) -> PricingModel {
        if let Some(model) = fields.pricing_model {
            return model;
        }

        if fields.pricing_spec_id.is_some() || fields.baseline_price_at_moq.is_some() {
            return PricingModel::CurveSellAtMoq;
        }

        let tiered = fields.has_tiered_cost();
        let manual = fields.manual_sale_price.is_some();

        match (tiered, manual) {
            (true, true) => PricingModel::TieredCostPlusFixedSell,
            (true, false) => PricingModel::TieredCostPlusMargin,
            (false, true) => PricingModel::CostPlusFixedSell,
            (false, false) => PricingModel::CostPlusMargin,
        }
    }

    /// 驗證手動售價與手動毛利率互斥
    ///
    /// 兩者同時填寫屬使用者輸入錯誤，呼叫端應以表單驗證失敗呈現（非重試）。
    pub fn assert_manual_price_exclusivity(fields: &PricingFields) -> Result<()> {
        if fields.manual_sale_price.is_some() && fields.manual_margin_percent.is_some() {
            return Err(TrackError::ConflictingFields(
                "手動售價與手動毛利率不可同時設定".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use track_core::{CostGroup, CostRange};

    #[test]
    fn test_explicit_model_wins() {
        let fields = PricingFields {
            pricing_model: Some(PricingModel::CostPlusMargin),
            pricing_spec_id: Some(9), // 即使有規格表也不推斷
            ..Default::default()
        };

        assert_eq!(
            PricingClassifier::resolve_model(&fields),
            PricingModel::CostPlusMargin
        );
    }

    #[test]
    fn test_pricing_spec_beats_manual_price() {
        // 優先序測試：規格表存在時即使也有手動售價仍歸曲線定價
        let fields = PricingFields::default()
            .with_pricing_spec_id(9)
            .with_manual_sale_price(Decimal::from(12));

        assert_eq!(
            PricingClassifier::resolve_model(&fields),
            PricingModel::CurveSellAtMoq
        );
    }

    #[test]
    fn test_baseline_at_moq_implies_curve() {
        let fields = PricingFields::default().with_baseline_price_at_moq(Decimal::from(45));

        assert_eq!(
            PricingClassifier::resolve_model(&fields),
            PricingModel::CurveSellAtMoq
        );
    }

    #[test]
    fn test_tiered_cost_with_manual_price() {
        let fields = PricingFields::default()
            .with_cost_group_id(3)
            .with_manual_sale_price(Decimal::from(12));

        assert_eq!(
            PricingClassifier::resolve_model(&fields),
            PricingModel::TieredCostPlusFixedSell
        );
    }

    #[test]
    fn test_tiered_cost_alone() {
        let fields = PricingFields {
            cost_group: Some(CostGroup {
                id: Some(3),
                cost_ranges: vec![CostRange::new(Decimal::from(100), Decimal::from(8))],
            }),
            ..Default::default()
        };

        assert_eq!(
            PricingClassifier::resolve_model(&fields),
            PricingModel::TieredCostPlusMargin
        );
    }

    #[test]
    fn test_manual_price_alone() {
        let fields = PricingFields::default().with_manual_sale_price(Decimal::from(12));

        assert_eq!(
            PricingClassifier::resolve_model(&fields),
            PricingModel::CostPlusFixedSell
        );
    }

    #[test]
    fn test_default_is_cost_plus_margin() {
        assert_eq!(
            PricingClassifier::resolve_model(&PricingFields::default()),
            PricingModel::CostPlusMargin
        );
    }

    #[test]
    fn test_own_ranges_count_as_tiered() {
        let fields = PricingFields {
            cost_price_ranges: vec![CostRange::new(Decimal::from(50), Decimal::from(10))],
            ..Default::default()
        };

        assert_eq!(
            PricingClassifier::resolve_model(&fields),
            PricingModel::TieredCostPlusMargin
        );
    }

    #[test]
    fn test_manual_price_exclusivity_conflict() {
        let fields = PricingFields::default()
            .with_manual_sale_price(Decimal::from(12))
            .with_manual_margin_percent(Decimal::from(30));

        let err = PricingClassifier::assert_manual_price_exclusivity(&fields).unwrap_err();
        assert!(matches!(err, TrackError::ConflictingFields(_)));
    }

    #[test]
    fn test_manual_price_exclusivity_ok() {
        let fields = PricingFields::default().with_manual_sale_price(Decimal::from(12));
        assert!(PricingClassifier::assert_manual_price_exclusivity(&fields).is_ok());

        let fields = PricingFields::default().with_manual_margin_percent(Decimal::from(30));
        assert!(PricingClassifier::assert_manual_price_exclusivity(&fields).is_ok());

        assert!(
            PricingClassifier::assert_manual_price_exclusivity(&PricingFields::default()).is_ok()
        );
    }
}
