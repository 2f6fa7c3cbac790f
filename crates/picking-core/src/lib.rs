//! # Picking Core
//!
//! 揀貨波次的核心資料模型與類型定義

pub mod config;
pub mod instance;
pub mod item;
pub mod order;
pub mod picking;
pub mod runner;

// Re-export 主要類型
pub use config::{ValidationConfig, WaveBoundsScope};
pub use instance::Instance;
pub use item::Item;
pub use order::Order;
pub use picking::Picking;
pub use runner::Runner;

/// 實體種類（用於錯誤訊息）
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EntityKind {
    /// 訂單
    Order,
    /// 揀貨員
    Runner,
    /// 物料
    Item,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Order => write!(f, "訂單"),
            Self::Runner => write!(f, "揀貨員"),
            Self::Item => write!(f, "物料"),
        }
    }
}

/// 揀貨模型錯誤類型
///
/// 索引查詢失敗與實例載入前置條件不符都歸在此處；
/// 候選解的驗證失敗另見 `picking_calc::ValidationError`。
#[derive(Debug, thiserror::Error)]
pub enum PickingError {
    #[error("{entity}索引 {index} 超出範圍（共 {len} 筆）")]
    IndexOutOfRange {
        entity: EntityKind,
        index: usize,
        len: usize,
    },

    #[error("下限 {lb} 大於上限 {ub}")]
    InvalidBounds { lb: u64, ub: u64 },

    #[error("物料種類數必須為正整數")]
    EmptyItemUniverse,

    #[error("{entity}位於第 {position} 筆，但索引為 {index}")]
    IndexMismatch {
        entity: EntityKind,
        position: usize,
        index: usize,
    },

    #[error("{entity} {index} 引用的物料 {item} 不在 [0, {num_items}) 範圍內")]
    ItemOutOfRange {
        entity: EntityKind,
        index: usize,
        item: Item,
        num_items: u32,
    },

    #[error("訂單 {order} 對物料 {item} 的需求數量為 0")]
    ZeroDemand { order: usize, item: Item },

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PickingError>;
