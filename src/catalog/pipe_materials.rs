/// 배관 재질별 Hazen-Williams 조도계수 C와 호칭경-내경 테이블을 제공한다.
/// 내경 값은 인치 기준이며 설계 시 제조사 규격으로 검증해야 한다.

#[derive(Debug, Clone, Copy)]
pub struct SizeEntry {
    /// 호칭경 [in]
    pub nominal_in: f64,
    /// 실제 내경 [in]
    pub inner_diameter_in: f64,
}

impl SizeEntry {
    pub const fn new(nominal_in: f64, inner_diameter_in: f64) -> Self {
        Self {
            nominal_in,
            inner_diameter_in,
        }
    }
}

#[derive(Debug)]
pub struct PipeMaterialData {
    pub name: &'static str,
    /// Hazen-Williams 조도계수 C
    pub hazen_williams_c: f64,
    /// 호칭경 오름차순 테이블
    pub sizes: &'static [SizeEntry],
}

impl PipeMaterialData {
    /// 호칭경에 해당하는 내경을 조회한다. 테이블에 없으면 None.
    pub fn inner_diameter_in(&self, nominal_in: f64) -> Option<f64> {
        self.sizes
            .iter()
            .find(|s| s.nominal_in == nominal_in)
            .map(|s| s.inner_diameter_in)
    }
}

pub fn materials() -> &'static [PipeMaterialData] {
    MATERIALS
}

pub fn find_material(name: &str) -> Option<&'static PipeMaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
}

static MATERIALS: &[PipeMaterialData] = &[
    PipeMaterialData {
        name: "Copper",
        hazen_williams_c: 140.0,
        sizes: &[
            SizeEntry::new(0.5, 0.545),
            SizeEntry::new(0.75, 0.785),
            SizeEntry::new(1.0, 1.025),
            SizeEntry::new(1.25, 1.265),
            SizeEntry::new(1.5, 1.585),
            SizeEntry::new(2.0, 2.045),
        ],
    },
    PipeMaterialData {
        name: "PVC Sch. 40",
        hazen_williams_c: 150.0,
        sizes: &[
            SizeEntry::new(2.0, 2.067),
            SizeEntry::new(3.0, 3.068),
            SizeEntry::new(4.0, 4.026),
        ],
    },
    PipeMaterialData {
        name: "CPVC Sch. 80",
        hazen_williams_c: 130.0,
        sizes: &[
            SizeEntry::new(2.0, 1.913),
            SizeEntry::new(3.0, 2.864),
            SizeEntry::new(4.0, 3.786),
            SizeEntry::new(6.0, 5.709),
            SizeEntry::new(8.0, 7.625),
        ],
    },
    PipeMaterialData {
        name: "Steel",
        hazen_williams_c: 120.0,
        sizes: &[
            SizeEntry::new(0.5, 0.622),
            SizeEntry::new(0.75, 0.824),
            SizeEntry::new(1.0, 1.049),
            SizeEntry::new(1.25, 1.38),
            SizeEntry::new(1.5, 1.61),
            SizeEntry::new(2.0, 2.067),
        ],
    },
];
