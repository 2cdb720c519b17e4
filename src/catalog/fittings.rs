/// 피팅 종류별 기본 손실계수(K) 테이블을 제공한다.
/// 값은 ASHRAE/Crane TP-410 계열의 대표값이며 상세 설계 시 제조사 데이터로 대체한다.

#[derive(Debug, Clone, Copy)]
pub struct FittingData {
    pub name: &'static str,
    /// 기본 손실계수 K (무차원)
    pub default_k: f64,
}

impl FittingData {
    pub const fn new(name: &'static str, default_k: f64) -> Self {
        Self { name, default_k }
    }
}

pub fn fitting_types() -> &'static [FittingData] {
    FITTINGS
}

pub fn find_fitting(name: &str) -> Option<&'static FittingData> {
    FITTINGS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
}

/// 피팅 이름으로 기본 K 값을 조회한다. 목록에 없으면 0으로 간주한다.
pub fn default_k(name: &str) -> f64 {
    find_fitting(name).map(|f| f.default_k).unwrap_or(0.0)
}

static FITTINGS: &[FittingData] = &[
    FittingData::new("90° Elbow", 0.7),
    FittingData::new("45° Elbow", 0.4),
    FittingData::new("Tee (Run)", 0.6),
    FittingData::new("Tee (Branch)", 1.8),
    FittingData::new("Ball Valve", 0.05),
    FittingData::new("Gate Valve", 0.15),
    FittingData::new("Check Valve", 2.0),
    FittingData::new("Reducer", 0.4),
];
