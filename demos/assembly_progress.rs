//! 組件生產進度示例

use chrono::NaiveDate;
use rust_decimal::Decimal;
use track_calc::stage_rows::ExternalRowSpec;
use track_calc::{LeadTimeResolver, PricingClassifier, RollupCalculator, StageRowBuilder};
use track_core::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== 組件生產進度示例 ===\n");

    // 生產活動記錄（由上游登錄流程產生）
    let activities = vec![
        ProductionActivity::new(
            "ASM-HOODIE-01".to_string(),
            Stage::Order,
            ActivityKind::Normal,
            Decimal::from(300),
        ),
        ProductionActivity::new(
            "ASM-HOODIE-01".to_string(),
            Stage::Cut,
            ActivityKind::Normal,
            Decimal::from(296),
        ),
        ProductionActivity::new(
            "ASM-HOODIE-01".to_string(),
            Stage::Sew,
            ActivityKind::Normal,
            Decimal::from(280),
        ),
        ProductionActivity::new(
            "ASM-HOODIE-01".to_string(),
            Stage::Sew,
            ActivityKind::Defect,
            Decimal::from(9),
        )
        .with_defect(DefectDisposition::Scrap, Some(4)),
    ];

    // 逐階段彙總
    let rollup = RollupCalculator::assembly_rollup("ASM-HOODIE-01", &activities);
    println!("逐階段彙總：");
    for summary in &rollup.stages {
        println!(
            "  {:<10} 投入 {:>5}  可用 {:>5}  瑕疵 {:>4}",
            summary.stage.label(),
            summary.attempted,
            summary.usable,
            summary.scrapped
        );
    }

    // 交期解析與委外步驟列
    let costing = ProductCosting::default()
        .with_lead_time_days(10)
        .with_vendor("DYE-HOUSE-A".to_string());
    let detail = LeadTimeResolver::resolve_detail(Some(&costing), None, None);
    println!("\n染整交期：{:?} 天（來源 {:?}）", detail.value, detail.source);

    let as_of = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    let row = StageRowBuilder::external(
        ExternalRowSpec::new(ExternalStepType::Dye, ExternalStepStatus::InTransit)
            .with_vendor("DYE-HOUSE-A".to_string())
            .with_lead_time(detail)
            .with_eta(NaiveDate::from_ymd_opt(2026, 6, 12).unwrap())
            .with_quantities(
                vec![Decimal::from(150), Decimal::from(146)],
                vec![Decimal::from(60), Decimal::from(0)],
                vec![Decimal::from(2), Decimal::from(0)],
            ),
        as_of,
    );
    println!(
        "委外染整：發出 {}  收回 {}  未回 {}  損耗 {}  逾期 {}",
        row.totals.sent, row.totals.received, row.totals.net, row.totals.loss, row.is_late
    );

    // 定價模型推斷
    let pricing = PricingFields::default()
        .with_cost_group_id(3)
        .with_manual_sale_price(Decimal::from(35));
    PricingClassifier::assert_manual_price_exclusivity(&pricing)?;
    println!(
        "\n定價模型：{:?}",
        PricingClassifier::resolve_model(&pricing)
    );

    Ok(())
}
