//! 集成測試

use picking::*;
use rstest::rstest;

/// 三位揀貨員、三張訂單的小型倉庫
///
/// - 訂單 0: 物料3 x5
/// - 訂單 1: 物料7 x4、物料1 x2
/// - 訂單 2: 物料1 x6
/// - 揀貨員 0: 物料3 x3、物料1 x8
/// - 揀貨員 1: 物料3 x2、物料7 x4
/// - 揀貨員 2: 物料7 x4
fn warehouse(lb: u64, ub: u64) -> Instance {
    Instance::new(
        vec![
            Order::from_pairs(0, [(3, 5)]),
            Order::from_pairs(1, [(7, 4), (1, 2)]),
            Order::from_pairs(2, [(1, 6)]),
        ],
        vec![
            Runner::from_pairs(0, [(3, 3), (1, 8)]),
            Runner::from_pairs(1, [(3, 2), (7, 4)]),
            Runner::from_pairs(2, [(7, 4)]),
        ],
        10,
        lb,
        ub,
    )
    .unwrap()
}

#[test]
fn test_full_wave_accepted() {
    // 場景：三張訂單全部揀完，兩位揀貨員出勤
    let instance = warehouse(5, 20);
    let pickings = vec![
        Picking::new(0, 3, 3, 0),
        Picking::new(0, 3, 2, 1),
        Picking::new(1, 7, 4, 1),
        Picking::new(1, 1, 2, 0),
        Picking::new(2, 1, 6, 0),
    ];

    let summary = instance.validate(&pickings).unwrap();

    assert_eq!(summary.total_units, 17);
    assert_eq!(summary.active_runners(), 2);
    assert_eq!(summary.load_of(0), 11);
    assert_eq!(summary.load_of(1), 6);
    assert_eq!(summary.load_of(2), 0);
    assert!(Validator::default().collect_violations(&instance, &pickings).is_empty());

    // 同一組揀貨記錄在波次層級也可行
    let selection = WaveSelection::from_pickings(&instance, &pickings).unwrap();
    assert!(selection.is_feasible());
    assert_eq!(selection.total_units(), summary.total_units);
}

#[test]
fn test_split_then_over_pick() {
    let instance = warehouse(0, 20);
    let mut pickings = vec![Picking::new(0, 3, 3, 0), Picking::new(0, 3, 2, 1)];
    assert!(instance.validate(&pickings).is_ok());

    pickings.push(Picking::new(0, 3, 1, 0));
    let err = instance.validate(&pickings).unwrap_err();

    assert_eq!(
        err,
        ValidationError::DemandExceeded {
            order: 0,
            item: Item::new(3),
            requested: 6,
            available: 5,
        }
    );
    assert!(err.is_capacity_violation());
}

#[test]
fn test_stock_exceeded_with_ample_demand() {
    let instance = Instance::new(
        vec![Order::from_pairs(0, [(7, 10)])],
        vec![Runner::from_pairs(0, [(7, 4)])],
        8,
        0,
        20,
    )
    .unwrap();

    let err = instance.validate(&[Picking::new(0, 7, 5, 0)]).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::StockExceeded {
            runner: 0,
            requested: 5,
            available: 4,
            ..
        }
    ));
}

#[rstest]
#[case(9, false)]
#[case(10, true)]
#[case(15, true)]
#[case(20, true)]
#[case(21, false)]
#[case(25, false)]
fn test_wave_size_table(#[case] units: u32, #[case] accepted: bool) {
    let instance = Instance::new(
        vec![Order::from_pairs(0, [(0, 50)])],
        vec![
            Runner::from_pairs(0, [(0, 50)]),
            Runner::from_pairs(1, [(0, 50)]),
            Runner::from_pairs(2, [(0, 50)]),
        ],
        1,
        10,
        20,
    )
    .unwrap();

    let result = instance.validate(&[Picking::new(0, 0, units, 1)]);
    assert_eq!(result.is_ok(), accepted, "units = {}", units);
}

#[test]
fn test_reference_error_independent_of_quantity() {
    let instance = warehouse(0, 20);

    for quantity in [0, 1, 1_000] {
        let err = instance
            .validate(&[Picking::new(0, 3, quantity, 99)])
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Reference {
                position: 0,
                target: EntityKind::Runner,
                ..
            }
        ));
    }
}

#[test]
fn test_empty_candidate_always_valid() {
    for (lb, ub) in [(0, 0), (10, 20), (100, 100)] {
        let summary = warehouse(lb, ub).validate(&[]).unwrap();
        assert_eq!(summary.total_units, 0);
    }
}

#[test]
fn test_lookup_failure_is_distinct_from_validation() {
    let instance = warehouse(0, 20);

    let lookup = instance.get_order_by_index(3).unwrap_err();
    assert!(matches!(lookup, PickingError::IndexOutOfRange { entity: EntityKind::Order, .. }));

    let runner = instance.get_runner_by_index(1).unwrap();
    assert_eq!(runner.index(), 1);
    assert!(runner.can_fulfill(Item::new(7), 4));
}

#[test]
fn test_instance_from_json_and_batch() {
    let json = r#"{
        "orders": [
            {"index": 0, "items": {"0": 4}},
            {"index": 1, "items": {"1": 2, "0": 1}}
        ],
        "runners": [
            {"index": 0, "stock": {"0": 5}},
            {"index": 1, "stock": {"1": 2}}
        ],
        "num_items": 2,
        "lb": 1,
        "ub": 5
    }"#;
    let instance = Instance::from_json_str(json).unwrap();
    assert_eq!(instance.to_string(), "Instance(orders=2, runners=2, num_items=2, lb=1, ub=5)");
    assert_eq!(instance.get_order_by_index(1).unwrap().total_items(), 3);

    let candidates = vec![
        vec![Picking::new(0, 0, 4, 0), Picking::new(1, 0, 1, 0), Picking::new(1, 1, 2, 1)],
        vec![Picking::new(0, 0, 4, 0), Picking::new(1, 0, 1, 0)],
        vec![Picking::new(0, 0, 4, 0), Picking::new(1, 0, 2, 0)],
    ];

    let results = BatchValidator::default().validate_all(&instance, &candidates);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(matches!(results[2], Err(ValidationError::DemandExceeded { order: 1, .. })));

    let (best, summary) = BatchValidator::default()
        .best_feasible(&instance, &candidates)
        .unwrap();
    assert_eq!(best, 1);
    assert_eq!(summary.units_per_runner(), 5.0);
}

#[test]
fn test_summary_serializes_to_json() {
    let instance = warehouse(0, 20);
    let summary = instance.validate(&[Picking::new(2, 1, 6, 0)]).unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_units"], 6);
    assert_eq!(json["runner_loads"][0]["runner_index"], 0);
    assert_eq!(json["runner_loads"][0]["units"], 6);
}
