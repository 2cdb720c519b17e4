//! 세션(런 수명주기·집계) 테스트.
use std::collections::HashMap;

use system_head_calculator::hydraulics::FluidSpec;
use system_head_calculator::session::{RunDraft, Session, SessionError};

fn draft(material: &str, nominal_in: f64, length_ft: f64) -> RunDraft {
    RunDraft {
        material_name: material.to_string(),
        nominal_size_in: nominal_in,
        length_ft,
        fitting_counts: HashMap::new(),
    }
}

#[test]
fn add_and_remove_run() {
    let mut session = Session::new();
    session.set_flow_gpm(20.0);

    let id = session.add_run(draft("Copper", 1.0, 100.0)).expect("add");
    assert_eq!(session.runs().len(), 1);
    assert!(session.results()[0].is_some());

    assert!(session.remove_run(&id));
    assert!(session.runs().is_empty());
    assert!(!session.remove_run(&id));
}

#[test]
fn run_ids_are_unique() {
    let mut session = Session::new();
    let a = session.add_run(draft("Copper", 1.0, 10.0)).expect("a");
    let b = session.add_run(draft("Steel", 2.0, 10.0)).expect("b");
    assert_ne!(a, b);
}

#[test]
fn rejects_unknown_material() {
    let mut session = Session::new();
    match session.add_run(draft("Cast Iron", 1.0, 10.0)) {
        Err(SessionError::UnknownMaterial(name)) => assert_eq!(name, "Cast Iron"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn rejects_size_missing_from_material_table() {
    let mut session = Session::new();
    match session.add_run(draft("Copper", 3.0, 10.0)) {
        Err(SessionError::InvalidSize { material, .. }) => assert_eq!(material, "Copper"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn rejects_non_positive_length() {
    let mut session = Session::new();
    assert!(matches!(
        session.add_run(draft("Copper", 1.0, 0.0)),
        Err(SessionError::InvalidLength(_))
    ));
    assert!(matches!(
        session.add_run(draft("Copper", 1.0, -3.0)),
        Err(SessionError::InvalidLength(_))
    ));
}

#[test]
fn totals_use_max_velocity_and_summed_losses() {
    let mut session = Session::new();
    session.set_flow_gpm(20.0);
    session.set_fluid(FluidSpec::Water);

    // 같은 유량에서 내경이 작은 런이 병목(최대 유속)이 된다.
    session.add_run(draft("Copper", 1.0, 100.0)).expect("1in");
    session.add_run(draft("Copper", 2.0, 100.0)).expect("2in");

    let results = session.results();
    let small = results[0].as_ref().expect("small");
    let large = results[1].as_ref().expect("large");
    assert!(small.velocity_ft_per_s > large.velocity_ft_per_s);

    let totals = session.totals();
    assert!((totals.velocity_ft_per_s - small.velocity_ft_per_s).abs() < 1e-12);
    assert!(
        (totals.head_loss_ft - (small.head_loss_ft + large.head_loss_ft)).abs() < 1e-12
    );
    assert!((totals.length_ft - 200.0).abs() < 1e-12);
}

#[test]
fn empty_session_totals_are_zero() {
    let session = Session::new();
    let totals = session.totals();
    assert_eq!(totals.velocity_ft_per_s, 0.0);
    assert_eq!(totals.head_loss_ft, 0.0);
    assert_eq!(totals.pressure_drop_psi, 0.0);
    assert_eq!(totals.total_k, 0.0);
    assert_eq!(totals.length_ft, 0.0);
}

#[test]
fn changing_fluid_changes_results() {
    let mut session = Session::new();
    session.set_flow_gpm(20.0);
    session.add_run(draft("Copper", 1.0, 100.0)).expect("add");

    let water_loss = session.results()[0].as_ref().expect("water").head_loss_ft;
    session.set_fluid(FluidSpec::Glycol { percent: 50.0 });
    let glycol_loss = session.results()[0].as_ref().expect("glycol").head_loss_ft;

    // C가 낮아지면(140 → 90) 마찰손실이 커져야 한다.
    assert!(glycol_loss > water_loss);
}
