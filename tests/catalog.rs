//! 정적 카탈로그 무결성 테스트.
use std::collections::HashSet;

use system_head_calculator::catalog::{
    default_k, find_fitting, find_material, fitting_types, materials,
};

#[test]
fn material_names_are_unique() {
    let mut seen = HashSet::new();
    for material in materials() {
        assert!(seen.insert(material.name), "duplicate: {}", material.name);
    }
}

#[test]
fn size_tables_are_ascending_and_positive() {
    for material in materials() {
        let mut prev = 0.0;
        for size in material.sizes {
            assert!(size.nominal_in > prev, "{} sizes", material.name);
            assert!(size.inner_diameter_in > 0.0);
            prev = size.nominal_in;
        }
    }
}

#[test]
fn material_lookup_is_case_insensitive() {
    assert!(find_material("copper").is_some());
    assert!(find_material("  STEEL ").is_some());
    assert!(find_material("titanium").is_none());
}

#[test]
fn fitting_catalog_has_eight_entries() {
    assert_eq!(fitting_types().len(), 8);
}

#[test]
fn fitting_default_k_lookup() {
    assert_eq!(default_k("Check Valve"), 2.0);
    assert_eq!(default_k("ball valve"), 0.05);
    // 목록에 없는 피팅은 0으로 간주한다.
    assert_eq!(default_k("Butterfly Valve"), 0.0);
    assert!(find_fitting("Reducer").is_some());
}
