//! # Picking Calculation Engine
//!
//! 候選揀貨解的驗證與波次評估

pub mod batch;
pub mod error;
pub mod selection;
pub mod tally;
pub mod validator;

// Re-export 主要類型
pub use batch::BatchValidator;
pub use error::ValidationError;
pub use selection::WaveSelection;
pub use tally::PickingTally;
pub use validator::{InstanceValidation, Validator};

use serde::Serialize;

/// 單一揀貨員在本波次的負載
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunnerLoad {
    pub runner_index: usize,
    pub units: u64,
}

/// 驗證通過時的波次摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveSummary {
    /// 有出勤的揀貨員負載，依索引排序
    pub runner_loads: Vec<RunnerLoad>,

    /// 本波次揀取總件數
    pub total_units: u64,

    /// 揀貨記錄筆數
    pub num_pickings: usize,
}

impl WaveSummary {
    /// 由彙總結果建立摘要
    pub fn from_tally(tally: &PickingTally, num_pickings: usize) -> Self {
        let runner_loads = tally
            .runner_loads()
            .iter()
            .enumerate()
            .filter(|(_, units)| **units > 0)
            .map(|(runner_index, &units)| RunnerLoad {
                runner_index,
                units,
            })
            .collect();

        Self {
            runner_loads,
            total_units: tally.total_units(),
            num_pickings,
        }
    }

    /// 出勤揀貨員人數
    pub fn active_runners(&self) -> usize {
        self.runner_loads.len()
    }

    /// 指定揀貨員的負載（閒置者為 0）
    pub fn load_of(&self, runner_index: usize) -> u64 {
        self.runner_loads
            .iter()
            .find(|load| load.runner_index == runner_index)
            .map(|load| load.units)
            .unwrap_or(0)
    }

    /// 平均每位出勤揀貨員的件數；沒有出勤者時為 0
    pub fn units_per_runner(&self) -> f64 {
        if self.runner_loads.is_empty() {
            return 0.0;
        }
        self.total_units as f64 / self.runner_loads.len() as f64
    }
}
