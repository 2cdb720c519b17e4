//! 수리 계산 엔진 회귀·성질 테스트.
use std::collections::HashMap;

use system_head_calculator::catalog::{find_material, materials};
use system_head_calculator::hydraulics::{
    aggregate, compute_run, fluid_properties, FluidSpec, PipeRun, RunResult, SystemTotals,
};

fn run_for(material_name: &str, nominal_in: f64, length_ft: f64) -> PipeRun {
    PipeRun {
        id: "test-run".to_string(),
        material: find_material(material_name).expect("material"),
        nominal_size_in: nominal_in,
        length_ft,
        fitting_counts: HashMap::new(),
    }
}

#[test]
fn every_catalog_size_yields_a_result() {
    let water = fluid_properties(&FluidSpec::Water);
    for material in materials() {
        for size in material.sizes {
            let run = run_for(material.name, size.nominal_in, 50.0);
            let result = compute_run(&run, 10.0, &water)
                .unwrap_or_else(|| panic!("{} {}", material.name, size.nominal_in));
            assert_eq!(result.inner_diameter_in, size.inner_diameter_in);
        }
    }
}

#[test]
fn missing_nominal_size_returns_none() {
    // PVC Sch. 40 테이블에는 1인치가 없다.
    let water = fluid_properties(&FluidSpec::Water);
    let run = run_for("PVC Sch. 40", 1.0, 50.0);
    assert!(compute_run(&run, 10.0, &water).is_none());
}

#[test]
fn copper_one_inch_regression() {
    // Copper 1" (내경 1.025), 100 ft, 20 GPM, 물, 피팅 없음. 최초 검증 실행에서 고정한 기준값.
    let water = fluid_properties(&FluidSpec::Water);
    let run = run_for("Copper", 1.0, 100.0);
    let r = compute_run(&run, 20.0, &water).expect("copper 1in");
    assert!((r.velocity_ft_per_s - 7.776282516191542).abs() < 1e-9);
    assert!((r.head_loss_ft - 0.1095170750641758).abs() < 1e-9);
    assert!((r.pressure_drop_psi - 0.04736248439608723).abs() < 1e-9);
    assert_eq!(r.total_k, 0.0);
}

#[test]
fn steel_glycol_with_fittings_regression() {
    // Steel 2" (내경 2.067), 50 ft, 30 GPM, 글리콜 30% (C=110, 비중 1.06),
    // 90° 엘보 2개 + 볼밸브 1개 → K = 1.45.
    let props = fluid_properties(&FluidSpec::Glycol { percent: 30.0 });
    let mut run = run_for("Steel", 2.0, 50.0);
    run.fitting_counts.insert("90° Elbow", 2);
    run.fitting_counts.insert("Ball Valve", 1);
    let r = compute_run(&run, 30.0, &props).expect("steel 2in");
    assert!((r.total_k - 1.45).abs() < 1e-12);
    assert!((r.velocity_ft_per_s - 2.8683362854440593).abs() < 1e-9);
    assert!((r.head_loss_ft - 0.19134263611812755).abs() < 1e-9);
    assert!((r.pressure_drop_psi - 0.08789005085692658).abs() < 1e-9);
}

#[test]
fn velocity_scales_linearly_with_flow() {
    let water = fluid_properties(&FluidSpec::Water);
    let run = run_for("Copper", 1.5, 80.0);
    let base = compute_run(&run, 12.0, &water).expect("base");
    let doubled = compute_run(&run, 24.0, &water).expect("doubled");
    assert!((doubled.velocity_ft_per_s - 2.0 * base.velocity_ft_per_s).abs() < 1e-9);
}

#[test]
fn zero_flow_gives_zero_losses() {
    let water = fluid_properties(&FluidSpec::Water);
    let mut run = run_for("Steel", 1.0, 120.0);
    run.fitting_counts.insert("Check Valve", 3);
    let r = compute_run(&run, 0.0, &water).expect("zero flow");
    assert_eq!(r.velocity_ft_per_s, 0.0);
    assert_eq!(r.head_loss_ft, 0.0);
    assert_eq!(r.pressure_drop_psi, 0.0);
}

#[test]
fn head_loss_is_non_negative() {
    let water = fluid_properties(&FluidSpec::Water);
    for flow in [0.0, 0.5, 5.0, 50.0, 500.0] {
        let run = run_for("CPVC Sch. 80", 4.0, 250.0);
        let r = compute_run(&run, flow, &water).expect("cpvc 4in");
        assert!(r.head_loss_ft >= 0.0, "flow={flow}");
        assert!(r.pressure_drop_psi >= 0.0, "flow={flow}");
    }
}

#[test]
fn compute_run_is_deterministic() {
    let props = fluid_properties(&FluidSpec::Glycol { percent: 15.0 });
    let mut run = run_for("Copper", 0.75, 33.5);
    run.fitting_counts.insert("Tee (Branch)", 2);
    let first = compute_run(&run, 7.3, &props).expect("first");
    let second = compute_run(&run, 7.3, &props).expect("second");
    assert_eq!(first, second);
}

#[test]
fn aggregate_of_empty_is_zero() {
    let totals = aggregate(std::iter::empty::<Option<&RunResult>>());
    assert_eq!(totals, SystemTotals::ZERO);
}

#[test]
fn aggregate_takes_max_velocity_and_sums_losses() {
    // 직렬 런에서 유속은 합산되지 않고 최대값, 손실은 합산이어야 한다.
    let a = RunResult {
        inner_diameter_in: 1.0,
        velocity_ft_per_s: 3.0,
        head_loss_ft: 1.0,
        pressure_drop_psi: 0.4,
        total_k: 0.7,
        length_ft: 10.0,
    };
    let b = RunResult {
        inner_diameter_in: 2.0,
        velocity_ft_per_s: 5.0,
        head_loss_ft: 2.0,
        pressure_drop_psi: 0.9,
        total_k: 1.8,
        length_ft: 20.0,
    };
    let totals = aggregate([Some(&a), None, Some(&b)]);
    assert!((totals.velocity_ft_per_s - 5.0).abs() < 1e-12);
    assert!((totals.head_loss_ft - 3.0).abs() < 1e-12);
    assert!((totals.pressure_drop_psi - 1.3).abs() < 1e-12);
    assert!((totals.total_k - 2.5).abs() < 1e-12);
    assert!((totals.length_ft - 30.0).abs() < 1e-12);
}
