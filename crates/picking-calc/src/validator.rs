//! 候選揀貨解驗證器
//!
//! 驗證依成本由低到高分五個階段進行，每個階段掃過全部揀貨記錄後才進入下一階段：
//!
//! 1. 引用完整性：訂單、物料、揀貨員都必須存在
//! 2. 數量為正
//! 3. 每個 (訂單, 物料) 的累計揀取量不超過需求
//! 4. 每個 (揀貨員, 物料) 的累計取用量不超過庫存
//! 5. 波次件數上下限
//!
//! `validate` 在第一個違規處停止；`collect_violations` 走完全部階段並回報所有違規，
//! 之後的階段會略過前兩階段已判定無效的記錄。

use crate::{PickingTally, ValidationError, WaveSummary};
use picking_core::{EntityKind, Instance, Picking, ValidationConfig, WaveBoundsScope};
use std::collections::HashSet;

/// 違規收集器
struct ViolationSink {
    fail_fast: bool,
    violations: Vec<ValidationError>,
}

impl ViolationSink {
    fn new(fail_fast: bool) -> Self {
        Self {
            fail_fast,
            violations: Vec::new(),
        }
    }

    /// 記錄一筆違規，回傳是否應立即停止
    fn push(&mut self, violation: ValidationError) -> bool {
        self.violations.push(violation);
        self.fail_fast
    }
}

/// 揀貨驗證器
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// 創建新的驗證器
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// 驗證候選解，於第一個違規處停止
    ///
    /// 通過時回傳波次摘要。不會修改實例。
    ///
    /// 需求檢查先於庫存檢查，同一筆記錄同時超揀與超取時只回報
    /// `DemandExceeded`；需要同時看到 `StockExceeded` 請改用 [`Self::collect_violations`]。
    pub fn validate(
        &self,
        instance: &Instance,
        pickings: &[Picking],
    ) -> Result<WaveSummary, ValidationError> {
        tracing::debug!("開始驗證：揀貨記錄 {} 筆，{}", pickings.len(), instance);

        let mut sink = ViolationSink::new(true);
        let tally = self.run(instance, pickings, &mut sink);

        match sink.violations.into_iter().next() {
            Some(violation) => {
                tracing::warn!("候選解被拒絕: {}", violation);
                Err(violation)
            }
            None => {
                let summary = WaveSummary::from_tally(&tally, pickings.len());
                tracing::debug!(
                    "驗證通過：總件數 {}，出勤揀貨員 {} 位",
                    summary.total_units,
                    summary.active_runners()
                );
                Ok(summary)
            }
        }
    }

    /// 走完全部階段，依階段順序回傳所有違規；空集合代表通過
    pub fn collect_violations(
        &self,
        instance: &Instance,
        pickings: &[Picking],
    ) -> Vec<ValidationError> {
        let mut sink = ViolationSink::new(false);
        self.run(instance, pickings, &mut sink);

        if !sink.violations.is_empty() {
            tracing::info!("候選解共有 {} 筆違規", sink.violations.len());
        }
        sink.violations
    }

    fn run(
        &self,
        instance: &Instance,
        pickings: &[Picking],
        sink: &mut ViolationSink,
    ) -> PickingTally {
        let mut tally = PickingTally::new(instance.num_runners());
        // 前兩階段判定有效的記錄，才參與後續的容量累計
        let mut usable = vec![true; pickings.len()];

        // Step 1: 引用完整性
        tracing::trace!("Step 1: 引用完整性");
        for (position, picking) in pickings.iter().enumerate() {
            if let Some(target) = Self::missing_reference(instance, picking) {
                usable[position] = false;
                if sink.push(ValidationError::Reference {
                    position,
                    picking: *picking,
                    target,
                }) {
                    return tally;
                }
            }
        }

        // Step 2: 數量為正
        tracing::trace!("Step 2: 數量檢查");
        for (position, picking) in pickings.iter().enumerate() {
            if picking.quantity() == 0 {
                usable[position] = false;
                if sink.push(ValidationError::InvalidQuantity {
                    position,
                    picking: *picking,
                }) {
                    return tally;
                }
            }
        }

        let usable_pickings = || {
            pickings
                .iter()
                .zip(usable.iter())
                .filter(|(_, ok)| **ok)
                .map(|(picking, _)| picking)
        };

        // Step 3: 需求不可超揀
        tracing::trace!("Step 3: 需求檢查");
        let mut reported = HashSet::new();
        for picking in usable_pickings() {
            let requested = tally.take_demand(picking);
            let available = instance
                .orders()
                .get(picking.order_index())
                .map(|order| order.demand_for(picking.item()))
                .unwrap_or(0);

            if requested > u64::from(available)
                && reported.insert((picking.order_index(), picking.item()))
                && sink.push(ValidationError::DemandExceeded {
                    order: picking.order_index(),
                    item: picking.item(),
                    requested,
                    available,
                })
            {
                return tally;
            }
        }

        // Step 4: 庫存不可超取
        tracing::trace!("Step 4: 庫存檢查");
        let mut reported = HashSet::new();
        for picking in usable_pickings() {
            tally.load_runner(picking);
            let requested = tally.draw_stock(picking);
            let available = instance
                .runners()
                .get(picking.runner_index())
                .map(|runner| runner.stock_for(picking.item()))
                .unwrap_or(0);

            if requested > u64::from(available)
                && reported.insert((picking.runner_index(), picking.item()))
                && sink.push(ValidationError::StockExceeded {
                    runner: picking.runner_index(),
                    item: picking.item(),
                    requested,
                    available,
                })
            {
                return tally;
            }
        }

        // Step 5: 波次上下限
        tracing::trace!("Step 5: 波次上下限（{:?}）", self.config.bounds_scope);
        let (lb, ub) = (instance.lb(), instance.ub());
        match self.config.bounds_scope {
            WaveBoundsScope::PerRunner => {
                for (runner, &total) in tally.runner_loads().iter().enumerate() {
                    if self.out_of_bounds(total, lb, ub)
                        && sink.push(ValidationError::WaveSizeOutOfBounds { runner, total, lb, ub })
                    {
                        break;
                    }
                }
            }
            WaveBoundsScope::Wave => {
                let total = tally.total_units();
                if self.out_of_bounds(total, lb, ub) {
                    sink.push(ValidationError::WaveTotalOutOfBounds { total, lb, ub });
                }
            }
        }

        tally
    }

    /// 回傳第一個不存在的引用目標（依訂單、物料、揀貨員順序）
    fn missing_reference(instance: &Instance, picking: &Picking) -> Option<EntityKind> {
        if picking.order_index() >= instance.num_orders() {
            Some(EntityKind::Order)
        } else if !instance.contains_item(picking.item()) {
            Some(EntityKind::Item)
        } else if picking.runner_index() >= instance.num_runners() {
            Some(EntityKind::Runner)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, total: u64, lb: u64, ub: u64) -> bool {
        total > ub || (total < lb && self.config.enforces_lower_bound(total))
    }
}

/// 以預設配置驗證候選解的便捷介面
pub trait InstanceValidation {
    /// 驗證揀貨記錄，於第一個違規處停止
    fn validate(&self, pickings: &[Picking]) -> Result<WaveSummary, ValidationError>;
}

impl InstanceValidation for Instance {
    fn validate(&self, pickings: &[Picking]) -> Result<WaveSummary, ValidationError> {
        Validator::default().validate(self, pickings)
    }
}
