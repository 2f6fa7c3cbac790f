//! 驗證配置模型

use serde::{Deserialize, Serialize};

/// 波次件數上下限 `[lb, ub]` 的適用範圍
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaveBoundsScope {
    /// 每位揀貨員各自的搬運總件數需落在 `[lb, ub]`
    #[default]
    PerRunner,
    /// 整個波次的揀貨總件數需落在 `[lb, ub]`
    Wave,
}

/// 候選解驗證配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// 閒置揀貨員（沒有任何揀貨記錄）是否免除下限檢查
    ///
    /// - true: 只有實際出勤的揀貨員需滿足 `lb`（預設）
    /// - false: 每位揀貨員都必須至少搬運 `lb` 件
    ///
    /// 僅在 `bounds_scope` 為 `PerRunner` 時有意義。
    pub idle_runners_exempt: bool,

    /// 上下限的適用範圍
    pub bounds_scope: WaveBoundsScope,
}

impl ValidationConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            idle_runners_exempt: true,
            bounds_scope: WaveBoundsScope::PerRunner,
        }
    }

    /// 建構器模式：設置閒置揀貨員是否免除下限
    pub fn with_idle_runners_exempt(mut self, exempt: bool) -> Self {
        self.idle_runners_exempt = exempt;
        self
    }

    /// 建構器模式：設置上下限的適用範圍
    ///
    /// # 範例
    /// ```
    /// # use picking_core::{ValidationConfig, WaveBoundsScope};
    /// let config = ValidationConfig::new().with_bounds_scope(WaveBoundsScope::Wave);
    /// assert_eq!(config.bounds_scope, WaveBoundsScope::Wave);
    /// ```
    pub fn with_bounds_scope(mut self, scope: WaveBoundsScope) -> Self {
        self.bounds_scope = scope;
        self
    }

    /// 檢查某位揀貨員的負載是否需要套用下限
    pub fn enforces_lower_bound(&self, load: u64) -> bool {
        load > 0 || !self.idle_runners_exempt
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new()
    }
}
