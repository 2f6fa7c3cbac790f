//! 問題實例（聚合根）
//!
//! `Instance` 在載入時一次建構完成，之後唯讀。建構函式負責檢查載入端的
//! 前置條件：物料種類數為正、`lb <= ub`、訂單與揀貨員的索引等於其位置、
//! 所有引用的物料都落在 `[0, num_items)`，以及每筆需求數量至少為 1。
//! 透過 serde 反序列化的實例走同一組檢查。

use crate::{EntityKind, Item, Order, PickingError, Runner};
use serde::{Deserialize, Serialize};

/// 揀貨波次問題實例
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    orders: Vec<Order>,
    runners: Vec<Runner>,
    num_items: u32,
    lb: u64,
    ub: u64,
}

/// 未經檢查的實例資料（反序列化中介）
#[derive(Deserialize)]
struct RawInstance {
    orders: Vec<Order>,
    runners: Vec<Runner>,
    num_items: u32,
    lb: u64,
    ub: u64,
}

impl TryFrom<RawInstance> for Instance {
    type Error = PickingError;

    fn try_from(raw: RawInstance) -> crate::Result<Self> {
        Self::new(raw.orders, raw.runners, raw.num_items, raw.lb, raw.ub)
    }
}

impl Instance {
    /// 創建新的實例並檢查載入前置條件
    pub fn new(
        orders: Vec<Order>,
        runners: Vec<Runner>,
        num_items: u32,
        lb: u64,
        ub: u64,
    ) -> crate::Result<Self> {
        if num_items == 0 {
            return Err(PickingError::EmptyItemUniverse);
        }
        if lb > ub {
            return Err(PickingError::InvalidBounds { lb, ub });
        }

        for (position, order) in orders.iter().enumerate() {
            if order.index() != position {
                return Err(PickingError::IndexMismatch {
                    entity: EntityKind::Order,
                    position,
                    index: order.index(),
                });
            }
            for (&item, &quantity) in order.items() {
                if !item.is_within(num_items) {
                    return Err(PickingError::ItemOutOfRange {
                        entity: EntityKind::Order,
                        index: position,
                        item,
                        num_items,
                    });
                }
                if quantity == 0 {
                    return Err(PickingError::ZeroDemand {
                        order: position,
                        item,
                    });
                }
            }
        }

        for (position, runner) in runners.iter().enumerate() {
            if runner.index() != position {
                return Err(PickingError::IndexMismatch {
                    entity: EntityKind::Runner,
                    position,
                    index: runner.index(),
                });
            }
            if let Some(&item) = runner.stock().keys().find(|item| !item.is_within(num_items)) {
                return Err(PickingError::ItemOutOfRange {
                    entity: EntityKind::Runner,
                    index: position,
                    item,
                    num_items,
                });
            }
        }

        Ok(Self {
            orders,
            runners,
            num_items,
            lb,
            ub,
        })
    }

    /// 從 JSON 字串載入實例
    ///
    /// 格式錯誤回傳 `PickingError::Json`；前置條件不符則回傳與 `new` 相同的錯誤。
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let raw: RawInstance = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// 序列化為 JSON 字串
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 依索引取得訂單
    pub fn get_order_by_index(&self, index: usize) -> crate::Result<&Order> {
        self.orders.get(index).ok_or(PickingError::IndexOutOfRange {
            entity: EntityKind::Order,
            index,
            len: self.orders.len(),
        })
    }

    /// 依索引取得揀貨員
    pub fn get_runner_by_index(&self, index: usize) -> crate::Result<&Runner> {
        self.runners.get(index).ok_or(PickingError::IndexOutOfRange {
            entity: EntityKind::Runner,
            index,
            len: self.runners.len(),
        })
    }

    #[inline]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[inline]
    pub fn runners(&self) -> &[Runner] {
        &self.runners
    }

    #[inline]
    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn num_runners(&self) -> usize {
        self.runners.len()
    }

    /// 物料種類數，合法物料編號為 `[0, num_items)`
    #[inline]
    pub fn num_items(&self) -> u32 {
        self.num_items
    }

    /// 波次件數下限
    #[inline]
    pub fn lb(&self) -> u64 {
        self.lb
    }

    /// 波次件數上限
    #[inline]
    pub fn ub(&self) -> u64 {
        self.ub
    }

    /// 檢查物料是否屬於本實例的物料範圍
    #[inline]
    pub fn contains_item(&self, item: Item) -> bool {
        item.is_within(self.num_items)
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Instance(orders={}, runners={}, num_items={}, lb={}, ub={})",
            self.orders.len(),
            self.runners.len(),
            self.num_items,
            self.lb,
            self.ub
        )
    }
}
