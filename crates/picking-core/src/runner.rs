//! 揀貨員模型

use crate::Item;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 揀貨員
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    /// 揀貨員索引（即在實例中的位置）
    index: usize,

    /// 庫存：物料 -> 可用數量
    stock: HashMap<Item, u32>,
}

impl Runner {
    /// 創建新的揀貨員
    pub fn new(index: usize, stock: HashMap<Item, u32>) -> Self {
        Self { index, stock }
    }

    /// 由 `(物料編號, 數量)` 配對創建揀貨員，重複物料的數量會累加
    pub fn from_pairs<I>(index: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut stock = HashMap::new();
        for (id, quantity) in pairs {
            *stock.entry(Item::new(id)).or_insert(0) += quantity;
        }
        Self::new(index, stock)
    }

    /// 揀貨員索引
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// 庫存映射（唯讀）
    #[inline]
    pub fn stock(&self) -> &HashMap<Item, u32> {
        &self.stock
    }

    /// 某物料的庫存數量（未列出者為 0）
    pub fn stock_for(&self, item: Item) -> u32 {
        self.stock.get(&item).copied().unwrap_or(0)
    }

    /// 檢查是否能供應指定數量的物料
    pub fn can_fulfill(&self, item: Item, quantity: u32) -> bool {
        self.stock_for(item) >= quantity
    }
}

impl std::fmt::Display for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self.stock.iter().collect();
        entries.sort();
        write!(f, "Runner(id={}, stock={{", self.index)?;
        for (n, (item, quantity)) in entries.into_iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", item.id(), quantity)?;
        }
        write!(f, "}})")
    }
}
