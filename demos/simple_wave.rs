//! 單一波次驗證範例
//!
//! 展示從建立實例、提交揀貨記錄到取得驗證結果的流程

use picking::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===== Wave Picking Validation Example =====\n");

    // 步驟 1: 建立實例
    println!("[1] Create Instance");
    let instance = Instance::new(
        vec![
            Order::from_pairs(0, [(3, 5)]),
            Order::from_pairs(1, [(7, 4), (1, 2)]),
        ],
        vec![
            Runner::from_pairs(0, [(3, 3), (1, 2)]),
            Runner::from_pairs(1, [(3, 2), (7, 4)]),
            Runner::from_pairs(2, [(7, 1)]),
        ],
        10,
        5,
        10,
    )?;
    println!("    {}", instance);
    tracing::info!(
        "實例建立完成：訂單 {} 張，揀貨員 {} 位",
        instance.num_orders(),
        instance.num_runners()
    );
    for order in instance.orders() {
        println!("    {} -> {} units", order, order.total_items());
    }
    for runner in instance.runners() {
        println!("    {}", runner);
    }
    println!();

    // 步驟 2: 可行的揀貨記錄
    println!("[2] Validate Feasible Candidate");
    let pickings = vec![
        Picking::new(0, 3, 3, 0),
        Picking::new(0, 3, 2, 1),
        Picking::new(1, 7, 4, 1),
        Picking::new(1, 1, 2, 0),
    ];
    for picking in &pickings {
        println!("    {}", picking);
    }

    let summary = instance.validate(&pickings)?;
    println!("    Total units: {}", summary.total_units);
    for load in &summary.runner_loads {
        println!("    Runner {}: {} units", load.runner_index, load.units);
    }
    println!("    Units per runner: {:.2}\n", summary.units_per_runner());

    // 步驟 3: 超揀的揀貨記錄
    println!("[3] Audit Infeasible Candidate");
    let pickings = vec![
        Picking::new(0, 3, 6, 0),
        Picking::new(1, 7, 2, 2),
        Picking::new(1, 1, 1, 4),
    ];

    let violations = Validator::default().collect_violations(&instance, &pickings);
    tracing::info!("稽核完成：違規 {} 筆", violations.len());
    for violation in &violations {
        println!("    - {}", violation);
    }

    // 步驟 4: 波次層級評估
    println!("\n[4] Evaluate Wave Selection");
    let selection = WaveSelection::new(&instance, [0, 1], [0, 1])?;
    println!("    {}", selection);
    println!("    Feasible: {}", selection.is_feasible());
    println!("    Infeasibility cost: {}", selection.infeasibility_cost());

    Ok(())
}
