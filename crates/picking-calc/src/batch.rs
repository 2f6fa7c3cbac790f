//! 批次平行驗證
//!
//! 求解器搜尋時常需同時評估大量候選解。實例建構後唯讀，
//! 每次驗證各自持有彙總結構，因此可直接以 rayon 平行處理。

use crate::{ValidationError, Validator, WaveSummary};
use picking_core::{Instance, Picking};
use rayon::prelude::*;

/// 批次驗證器
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchValidator {
    validator: Validator,
}

impl BatchValidator {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// 平行驗證多組候選解，結果順序與輸入一致
    pub fn validate_all<C>(
        &self,
        instance: &Instance,
        candidates: &[C],
    ) -> Vec<Result<WaveSummary, ValidationError>>
    where
        C: AsRef<[Picking]> + Sync,
    {
        tracing::info!("批次驗證開始：候選解 {} 組", candidates.len());
        let start_time = std::time::Instant::now();

        let results: Vec<_> = candidates
            .par_iter()
            .map(|candidate| self.validator.validate(instance, candidate.as_ref()))
            .collect();

        tracing::info!(
            "批次驗證完成：可行 {} 組，耗時 {:?}",
            results.iter().filter(|r| r.is_ok()).count(),
            start_time.elapsed()
        );

        results
    }

    /// 找出平均每位揀貨員件數最高的可行候選解
    ///
    /// 回傳 `(候選解位置, 摘要)`；沒有可行解時為 `None`。
    /// 平手時取位置較前者。
    pub fn best_feasible<C>(
        &self,
        instance: &Instance,
        candidates: &[C],
    ) -> Option<(usize, WaveSummary)>
    where
        C: AsRef<[Picking]> + Sync,
    {
        self.validate_all(instance, candidates)
            .into_iter()
            .enumerate()
            .filter_map(|(position, result)| result.ok().map(|summary| (position, summary)))
            .fold(None::<(usize, WaveSummary)>, |best, (position, summary)| {
                match best {
                    Some((kept, current))
                        if current.units_per_runner() >= summary.units_per_runner() =>
                    {
                        Some((kept, current))
                    }
                    _ => Some((position, summary)),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picking_core::{Order, Runner};

    fn instance() -> Instance {
        Instance::new(
            vec![Order::from_pairs(0, [(0, 6)]), Order::from_pairs(1, [(1, 4)])],
            vec![
                Runner::from_pairs(0, [(0, 6), (1, 4)]),
                Runner::from_pairs(1, [(0, 6)]),
            ],
            2,
            0,
            10,
        )
        .unwrap()
    }

    #[test]
    fn test_validate_all_preserves_order() {
        let candidates = vec![
            vec![Picking::new(0, 0, 6, 0)],
            vec![Picking::new(0, 0, 7, 0)],
            vec![],
            vec![Picking::new(5, 0, 1, 0)],
        ];

        let results = BatchValidator::default().validate_all(&instance(), &candidates);

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ValidationError::DemandExceeded { .. })));
        assert!(results[2].is_ok());
        assert!(matches!(results[3], Err(ValidationError::Reference { .. })));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let instance = instance();
        let candidates: Vec<Vec<Picking>> = (0..64u32)
            .map(|q| vec![Picking::new(0, 0, q % 8, q as usize % 3)])
            .collect();

        let batch = BatchValidator::default().validate_all(&instance, &candidates);
        let sequential: Vec<_> = candidates
            .iter()
            .map(|c| Validator::default().validate(&instance, c))
            .collect();

        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_best_feasible() {
        let candidates = vec![
            // 兩位揀貨員共 10 件，平均 5
            vec![Picking::new(0, 0, 6, 1), Picking::new(1, 1, 4, 0)],
            // 一位揀貨員 10 件，平均 10
            vec![Picking::new(0, 0, 6, 0), Picking::new(1, 1, 4, 0)],
            // 超揀，不可行
            vec![Picking::new(0, 0, 9, 0)],
        ];

        let (position, summary) = BatchValidator::default()
            .best_feasible(&instance(), &candidates)
            .unwrap();

        assert_eq!(position, 1);
        assert_eq!(summary.total_units, 10);
        assert_eq!(summary.active_runners(), 1);
    }

    #[test]
    fn test_best_feasible_none() {
        let candidates = vec![vec![Picking::new(0, 0, 0, 0)]];
        assert!(BatchValidator::default().best_feasible(&instance(), &candidates).is_none());
    }
}
