//! 유체 물성(글리콜 농도 구간) 테스트.
use system_head_calculator::hydraulics::{fluid_properties, FluidSpec};

#[test]
fn water_properties_are_fixed() {
    let props = fluid_properties(&FluidSpec::Water);
    assert_eq!(props.roughness_c, 140.0);
    assert_eq!(props.density, 0.998);
}

#[test]
fn glycol_25_percent_uses_30_band() {
    let props = fluid_properties(&FluidSpec::Glycol { percent: 25.0 });
    assert_eq!(props.roughness_c, 110.0);
    assert_eq!(props.density, 1.06);
}

#[test]
fn glycol_55_percent_uses_fallback_band() {
    let props = fluid_properties(&FluidSpec::Glycol { percent: 55.0 });
    assert_eq!(props.roughness_c, 90.0);
    assert_eq!(props.density, 1.10);
}

#[test]
fn band_upper_bounds_are_inclusive() {
    assert_eq!(
        fluid_properties(&FluidSpec::Glycol { percent: 10.0 }).roughness_c,
        130.0
    );
    assert_eq!(
        fluid_properties(&FluidSpec::Glycol { percent: 20.0 }).roughness_c,
        120.0
    );
    assert_eq!(
        fluid_properties(&FluidSpec::Glycol { percent: 30.0 }).roughness_c,
        110.0
    );
    assert_eq!(
        fluid_properties(&FluidSpec::Glycol { percent: 40.0 }).roughness_c,
        100.0
    );
    assert_eq!(
        fluid_properties(&FluidSpec::Glycol { percent: 40.001 }).roughness_c,
        90.0
    );
}

#[test]
fn out_of_range_percentages_clamp_to_nearest_band() {
    // 음수는 첫 구간, 60 초과도 마지막 구간으로 처리한다 (의도된 관용).
    let negative = fluid_properties(&FluidSpec::Glycol { percent: -5.0 });
    assert_eq!(negative.roughness_c, 130.0);
    assert_eq!(negative.density, 1.01);

    let high = fluid_properties(&FluidSpec::Glycol { percent: 95.0 });
    assert_eq!(high.roughness_c, 90.0);
    assert_eq!(high.density, 1.10);
}
