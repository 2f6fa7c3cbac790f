//! 批次驗證範例
//!
//! 從 JSON 載入實例，平行驗證多組候選解並挑出最佳者

use picking::*;
use tracing_subscriber::EnvFilter;

const INSTANCE_JSON: &str = r#"{
    "orders": [
        {"index": 0, "items": {"0": 4, "2": 1}},
        {"index": 1, "items": {"1": 3}},
        {"index": 2, "items": {"0": 2, "1": 1}}
    ],
    "runners": [
        {"index": 0, "stock": {"0": 6, "1": 2}},
        {"index": 1, "stock": {"1": 4, "2": 1}},
        {"index": 2, "stock": {"0": 1, "2": 3}}
    ],
    "num_items": 3,
    "lb": 2,
    "ub": 8
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===== Batch Validation Example =====\n");

    let instance = Instance::from_json_str(INSTANCE_JSON)?;
    println!("Loaded {}\n", instance);

    let candidates = vec![
        vec![
            Picking::new(0, 0, 4, 0),
            Picking::new(0, 2, 1, 1),
            Picking::new(1, 1, 3, 1),
        ],
        vec![
            Picking::new(0, 0, 4, 0),
            Picking::new(0, 2, 1, 2),
            Picking::new(2, 0, 2, 0),
            Picking::new(2, 1, 1, 0),
        ],
        vec![Picking::new(1, 1, 3, 0)],
        vec![Picking::new(0, 0, 1, 2)],
    ];
    tracing::info!("載入實例，候選解 {} 組待驗證", candidates.len());

    // 以波次總量套用上下限
    let validator =
        Validator::new(ValidationConfig::new().with_bounds_scope(WaveBoundsScope::Wave));
    let batch = BatchValidator::new(validator);

    for (position, result) in batch.validate_all(&instance, &candidates).iter().enumerate() {
        match result {
            Ok(summary) => println!(
                "Candidate {}: OK, {} units over {} runners",
                position,
                summary.total_units,
                summary.active_runners()
            ),
            Err(err) => println!("Candidate {}: rejected ({})", position, err),
        }
    }

    match batch.best_feasible(&instance, &candidates) {
        Some((position, summary)) => println!(
            "\nBest candidate: {} ({:.2} units per runner)",
            position,
            summary.units_per_runner()
        ),
        None => println!("\nNo feasible candidate"),
    }

    Ok(())
}
