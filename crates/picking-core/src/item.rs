//! 物料模型

use serde::{Deserialize, Serialize};

/// 物料
///
/// 僅承載物料編號的值類型。兩個 `Item` 相等若且唯若編號相同，
/// 因此可直接作為 `HashMap` 的鍵或 `HashSet` 的成員。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(u32);

impl Item {
    /// 創建新的物料
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// 物料編號
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }

    /// 檢查物料是否落在 `[0, num_items)` 內
    #[inline]
    pub fn is_within(&self, num_items: u32) -> bool {
        self.0 < num_items
    }
}

impl From<u32> for Item {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<Item> for u32 {
    fn from(item: Item) -> Self {
        item.0
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item(id={})", self.0)
    }
}
