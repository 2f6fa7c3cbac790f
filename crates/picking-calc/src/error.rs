//! 驗證錯誤

use picking_core::{EntityKind, Item, Picking};

/// 候選解驗證失敗的原因
///
/// 驗證失敗屬於一般的負面結果，不可重試，原樣回報給呼叫端。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("第 {position} 筆揀貨記錄 {picking} 引用了不存在的{target}")]
    Reference {
        position: usize,
        picking: Picking,
        target: EntityKind,
    },

    #[error("第 {position} 筆揀貨記錄 {picking} 的數量必須至少為 1")]
    InvalidQuantity { position: usize, picking: Picking },

    #[error("訂單 {order} 的 {item} 累計揀取 {requested} 件，超過需求 {available} 件")]
    DemandExceeded {
        order: usize,
        item: Item,
        requested: u64,
        available: u32,
    },

    #[error("揀貨員 {runner} 的 {item} 累計取用 {requested} 件，超過庫存 {available} 件")]
    StockExceeded {
        runner: usize,
        item: Item,
        requested: u64,
        available: u32,
    },

    #[error("揀貨員 {runner} 搬運 {total} 件，不在 [{lb}, {ub}] 範圍內")]
    WaveSizeOutOfBounds {
        runner: usize,
        total: u64,
        lb: u64,
        ub: u64,
    },

    #[error("波次總件數 {total} 不在 [{lb}, {ub}] 範圍內")]
    WaveTotalOutOfBounds { total: u64, lb: u64, ub: u64 },
}

impl ValidationError {
    /// 觸發此錯誤的揀貨記錄位置（僅適用於逐筆檢查的錯誤）
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Reference { position, .. } | Self::InvalidQuantity { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }

    /// 檢查是否為容量類限制（需求、庫存、波次上下限）
    pub fn is_capacity_violation(&self) -> bool {
        matches!(
            self,
            Self::DemandExceeded { .. }
                | Self::StockExceeded { .. }
                | Self::WaveSizeOutOfBounds { .. }
                | Self::WaveTotalOutOfBounds { .. }
        )
    }
}
