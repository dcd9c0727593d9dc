//! 瑕疵/可用量彙總計算

use rust_decimal::Decimal;
use track_core::{ActivityKind, DefectBucket, ProductionActivity, Stage};

/// 單一階段的彙總結果
#[derive(Debug, Clone)]
pub struct StageSummary {
    /// 階段
    pub stage: Stage,
    /// 總投入量（不分活動類型）
    pub attempted: Decimal,
    /// 可用量（良品減已處置瑕疵；允許為負，反映資料不一致）
    pub usable: Decimal,
    /// 已處置瑕疵量
    pub scrapped: Decimal,
    /// 瑕疵分組（依首次出現順序）
    pub buckets: Vec<DefectBucket>,
}

/// 整個組件的逐階段彙總
#[derive(Debug, Clone)]
pub struct AssemblyRollup {
    /// 組件ID
    pub assembly_id: String,
    /// 各內部階段的彙總（依生產流程順序）
    pub stages: Vec<StageSummary>,
}

impl AssemblyRollup {
    /// 查找指定階段的彙總
    pub fn stage(&self, stage: Stage) -> Option<&StageSummary> {
        self.stages.iter().find(|s| s.stage == stage)
    }
}

/// 彙總計算器
///
/// 所有函式皆為純函式：不做 I/O、不持有狀態、不拋出例外。
/// 缺漏數量以零計，負的可用量照實呈現（不截斷）。
pub struct RollupCalculator;

impl RollupCalculator {
    /// 計算階段總投入量（不分活動類型的無條件加總）
    pub fn attempts_for_stage(activities: &[ProductionActivity], stage: Stage) -> Decimal {
        activities
            .iter()
            .filter(|a| a.stage == stage)
            .map(|a| a.qty())
            .sum()
    }

    /// 計算階段可用量
    ///
    /// 良品量（normal + rework）減去已處置瑕疵量（kind = defect 且處置非 none）。
    /// 結果可能為負：代表扣除量超過產出量的資料不一致，照實回傳。
    pub fn usable_for_stage(activities: &[ProductionActivity], stage: Stage) -> Decimal {
        let produced: Decimal = activities
            .iter()
            .filter(|a| {
                a.stage == stage
                    && matches!(a.kind, ActivityKind::Normal | ActivityKind::Rework)
            })
            .map(|a| a.qty())
            .sum();

        let removed = Self::scrapped_for_stage(activities, stage);

        produced - removed
    }

    /// 計算階段已處置瑕疵量（kind = defect 且處置非 none）
    pub fn scrapped_for_stage(activities: &[ProductionActivity], stage: Stage) -> Decimal {
        activities
            .iter()
            .filter(|a| a.stage == stage && a.is_counted_defect())
            .map(|a| a.qty())
            .sum()
    }

    /// 依 (原因ID, 處置方式) 分組瑕疵
    ///
    /// 輸出保持聚合鍵首次出現的順序（不排序），供快照測試使用。
    pub fn defects_by_reason_and_disposition(
        activities: &[ProductionActivity],
        stage: Stage,
    ) -> Vec<DefectBucket> {
        let mut buckets: Vec<DefectBucket> = Vec::new();

        for activity in activities {
            if activity.stage != stage || !activity.is_counted_defect() {
                continue;
            }

            match buckets
                .iter()
                .position(|b| b.matches(activity.defect_reason_id, activity.disposition))
            {
                Some(index) => buckets[index].quantity += activity.qty(),
                None => buckets.push(DefectBucket::new(
                    activity.defect_reason_id,
                    activity.disposition,
                    activity.qty(),
                )),
            }
        }

        buckets
    }

    /// 計算單一階段的完整彙總
    pub fn stage_summary(activities: &[ProductionActivity], stage: Stage) -> StageSummary {
        StageSummary {
            stage,
            attempted: Self::attempts_for_stage(activities, stage),
            usable: Self::usable_for_stage(activities, stage),
            scrapped: Self::scrapped_for_stage(activities, stage),
            buckets: Self::defects_by_reason_and_disposition(activities, stage),
        }
    }

    /// 計算整個組件的逐階段彙總（依生產流程順序）
    pub fn assembly_rollup(assembly_id: &str, activities: &[ProductionActivity]) -> AssemblyRollup {
        tracing::debug!(
            assembly_id,
            activity_count = activities.len(),
            "計算組件逐階段彙總"
        );

        AssemblyRollup {
            assembly_id: assembly_id.to_string(),
            stages: Stage::INTERNAL
                .iter()
                .map(|&stage| Self::stage_summary(activities, stage))
                .collect(),
        }
    }
}
