//! 波次選擇評估
//!
//! 以「選中的訂單」與「選中的揀貨員」描述一個波次，不細到逐筆揀貨。
//! 可行條件：選中揀貨員的庫存逐物料覆蓋選中訂單的需求，
//! 且選中訂單的總件數落在 `[lb, ub]`。目標值為總件數除以揀貨員人數。

use picking_core::{Instance, Item, Picking};
use std::collections::{BTreeMap, BTreeSet};

/// 波次選擇
#[derive(Debug, Clone)]
pub struct WaveSelection<'a> {
    instance: &'a Instance,
    orders: BTreeSet<usize>,
    runners: BTreeSet<usize>,
}

impl<'a> WaveSelection<'a> {
    /// 創建新的波次選擇，重複的索引會合併
    pub fn new<O, R>(instance: &'a Instance, orders: O, runners: R) -> picking_core::Result<Self>
    where
        O: IntoIterator<Item = usize>,
        R: IntoIterator<Item = usize>,
    {
        let orders = orders
            .into_iter()
            .map(|i| instance.get_order_by_index(i).map(|order| order.index()))
            .collect::<picking_core::Result<BTreeSet<_>>>()?;
        let runners = runners
            .into_iter()
            .map(|i| instance.get_runner_by_index(i).map(|runner| runner.index()))
            .collect::<picking_core::Result<BTreeSet<_>>>()?;

        Ok(Self {
            instance,
            orders,
            runners,
        })
    }

    /// 由揀貨記錄推導波次選擇（取所有被引用的訂單與揀貨員）
    pub fn from_pickings(
        instance: &'a Instance,
        pickings: &[Picking],
    ) -> picking_core::Result<Self> {
        Self::new(
            instance,
            pickings.iter().map(Picking::order_index),
            pickings.iter().map(Picking::runner_index),
        )
    }

    pub fn selected_orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.orders.iter().copied()
    }

    pub fn selected_runners(&self) -> impl Iterator<Item = usize> + '_ {
        self.runners.iter().copied()
    }

    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn num_runners(&self) -> usize {
        self.runners.len()
    }

    /// 選中訂單的需求總件數
    pub fn total_units(&self) -> u64 {
        self.orders
            .iter()
            .map(|&i| self.instance.orders()[i].total_items())
            .sum()
    }

    /// 選中訂單逐物料的需求合計
    pub fn demand_by_item(&self) -> BTreeMap<Item, u64> {
        let mut demand = BTreeMap::new();
        for &i in &self.orders {
            for (&item, &quantity) in self.instance.orders()[i].items() {
                *demand.entry(item).or_insert(0) += u64::from(quantity);
            }
        }
        demand
    }

    /// 選中揀貨員逐物料的庫存合計
    pub fn stock_by_item(&self) -> BTreeMap<Item, u64> {
        let mut stock = BTreeMap::new();
        for &i in &self.runners {
            for (&item, &quantity) in self.instance.runners()[i].stock() {
                *stock.entry(item).or_insert(0) += u64::from(quantity);
            }
        }
        stock
    }

    /// 庫存未能覆蓋的需求（只列出缺口大於 0 的物料）
    pub fn uncovered_by_item(&self) -> BTreeMap<Item, u64> {
        let stock = self.stock_by_item();
        self.demand_by_item()
            .into_iter()
            .filter_map(|(item, demand)| {
                let available = stock.get(&item).copied().unwrap_or(0);
                (demand > available).then(|| (item, demand - available))
            })
            .collect()
    }

    /// 庫存扣除需求後的餘裕（只列出餘裕大於 0 的物料）
    pub fn slack_by_item(&self) -> BTreeMap<Item, u64> {
        let demand = self.demand_by_item();
        self.stock_by_item()
            .into_iter()
            .filter_map(|(item, stock)| {
                let needed = demand.get(&item).copied().unwrap_or(0);
                (stock > needed).then(|| (item, stock - needed))
            })
            .collect()
    }

    /// 檢查波次是否可行
    pub fn is_feasible(&self) -> bool {
        let total = self.total_units();
        total >= self.instance.lb()
            && total <= self.instance.ub()
            && self.uncovered_by_item().is_empty()
    }

    /// 目標值：總件數 / 揀貨員人數；未選任何揀貨員時為 0
    pub fn objective_value(&self) -> f64 {
        if self.runners.is_empty() {
            return 0.0;
        }
        self.total_units() as f64 / self.runners.len() as f64
    }

    /// 不可行程度：下限缺口 + 上限超出 + 各物料未覆蓋需求之和；可行時為 0
    pub fn infeasibility_cost(&self) -> u64 {
        let total = self.total_units();
        let below = self.instance.lb().saturating_sub(total);
        let above = total.saturating_sub(self.instance.ub());
        let uncovered: u64 = self.uncovered_by_item().values().sum();
        below + above + uncovered
    }
}

impl std::fmt::Display for WaveSelection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WaveSelection(orders={:?}, runners={:?}, units={}, objective={:.2})",
            self.orders,
            self.runners,
            self.total_units(),
            self.objective_value()
        )
    }
}
