//! 訂單模型

use crate::Item;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 訂單
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// 訂單索引（即在實例中的位置）
    index: usize,

    /// 需求：物料 -> 需求數量
    items: HashMap<Item, u32>,
}

impl Order {
    /// 創建新的訂單
    pub fn new(index: usize, items: HashMap<Item, u32>) -> Self {
        Self { index, items }
    }

    /// 由 `(物料編號, 數量)` 配對創建訂單，重複物料的數量會累加
    pub fn from_pairs<I>(index: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut items = HashMap::new();
        for (id, quantity) in pairs {
            *items.entry(Item::new(id)).or_insert(0) += quantity;
        }
        Self::new(index, items)
    }

    /// 訂單索引
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// 需求映射（唯讀）
    #[inline]
    pub fn items(&self) -> &HashMap<Item, u32> {
        &self.items
    }

    /// 需求總件數，每次呼叫重新計算
    pub fn total_items(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// 某物料的需求數量（未列出者為 0）
    pub fn demand_for(&self, item: Item) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    /// 檢查訂單是否沒有任何需求
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self.items.iter().collect();
        entries.sort();
        write!(f, "Order(id={}, items={{", self.index)?;
        for (n, (item, quantity)) in entries.into_iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", item.id(), quantity)?;
        }
        write!(f, "}})")
    }
}
