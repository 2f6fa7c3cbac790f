//! 揀貨記錄模型

use crate::Item;
use serde::{Deserialize, Serialize};

/// 揀貨記錄：揀貨員 `runner_index` 為訂單 `order_index` 揀取 `quantity` 件物料 `item`
///
/// 建構時不做任何檢查，引用與數量的合法性由驗證器負責。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Picking {
    order_index: usize,
    item: Item,
    quantity: u32,
    runner_index: usize,
}

impl Picking {
    /// 創建新的揀貨記錄
    pub fn new(order_index: usize, item_id: u32, quantity: u32, runner_index: usize) -> Self {
        Self {
            order_index,
            item: Item::new(item_id),
            quantity,
            runner_index,
        }
    }

    #[inline]
    pub fn order_index(&self) -> usize {
        self.order_index
    }

    #[inline]
    pub fn item(&self) -> Item {
        self.item
    }

    #[inline]
    pub fn item_id(&self) -> u32 {
        self.item.id()
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn runner_index(&self) -> usize {
        self.runner_index
    }
}

impl std::fmt::Display for Picking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Picking(order={}, item={}, qty={}, runner={})",
            self.order_index,
            self.item.id(),
            self.quantity,
            self.runner_index
        )
    }
}
