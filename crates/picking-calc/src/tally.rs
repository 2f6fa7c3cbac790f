//! 揀貨彙總
//!
//! 驗證時逐筆累計的執行總量：每個 (訂單, 物料) 已揀件數、每個
//! (揀貨員, 物料) 已取用件數，以及每位揀貨員的搬運總件數。
//! 每次驗證各自建立一份，彼此不共享。

use picking_core::{Item, Picking};
use std::collections::HashMap;

/// 揀貨執行總量
#[derive(Debug, Clone, Default)]
pub struct PickingTally {
    demand_taken: HashMap<(usize, Item), u64>,
    stock_taken: HashMap<(usize, Item), u64>,
    runner_loads: Vec<u64>,
}

impl PickingTally {
    /// 創建空的彙總，預留 `num_runners` 位揀貨員的負載欄位
    pub fn new(num_runners: usize) -> Self {
        Self {
            demand_taken: HashMap::new(),
            stock_taken: HashMap::new(),
            runner_loads: vec![0; num_runners],
        }
    }

    /// 累計訂單端的揀取量，回傳該 (訂單, 物料) 的最新總量
    pub fn take_demand(&mut self, picking: &Picking) -> u64 {
        let taken = self
            .demand_taken
            .entry((picking.order_index(), picking.item()))
            .or_insert(0);
        *taken += u64::from(picking.quantity());
        *taken
    }

    /// 累計揀貨員端的取用量，回傳該 (揀貨員, 物料) 的最新總量
    pub fn draw_stock(&mut self, picking: &Picking) -> u64 {
        let drawn = self
            .stock_taken
            .entry((picking.runner_index(), picking.item()))
            .or_insert(0);
        *drawn += u64::from(picking.quantity());
        *drawn
    }

    /// 累計揀貨員負載，回傳該揀貨員的最新負載
    ///
    /// 負載欄位固定為建立時的揀貨員人數；超出範圍的揀貨員不計入，回傳 `None`。
    pub fn load_runner(&mut self, picking: &Picking) -> Option<u64> {
        let load = self.runner_loads.get_mut(picking.runner_index())?;
        *load += u64::from(picking.quantity());
        Some(*load)
    }

    /// 同時累計訂單、庫存與負載三項
    pub fn record(&mut self, picking: &Picking) {
        self.take_demand(picking);
        self.draw_stock(picking);
        self.load_runner(picking);
    }

    /// 由揀貨記錄一次建立彙總
    pub fn from_pickings(num_runners: usize, pickings: &[Picking]) -> Self {
        let mut tally = Self::new(num_runners);
        for picking in pickings {
            tally.record(picking);
        }
        tally
    }

    /// 某訂單某物料已揀件數
    pub fn picked_for_order(&self, order: usize, item: Item) -> u64 {
        self.demand_taken.get(&(order, item)).copied().unwrap_or(0)
    }

    /// 某揀貨員某物料已取用件數
    pub fn drawn_from_runner(&self, runner: usize, item: Item) -> u64 {
        self.stock_taken.get(&(runner, item)).copied().unwrap_or(0)
    }

    /// 某揀貨員的搬運總件數
    pub fn runner_load(&self, runner: usize) -> u64 {
        self.runner_loads.get(runner).copied().unwrap_or(0)
    }

    /// 全部揀貨員負載，索引即揀貨員索引
    pub fn runner_loads(&self) -> &[u64] {
        &self.runner_loads
    }

    /// 波次總件數
    pub fn total_units(&self) -> u64 {
        self.runner_loads.iter().sum()
    }
}
