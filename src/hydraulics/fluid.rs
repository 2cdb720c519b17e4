/// 유체 종류와 글리콜 농도에 따른 물성(조도계수, 비중) 조회를 제공한다.

/// 시스템 유체 사양.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FluidSpec {
    /// 물 (농도 무관)
    Water,
    /// 물-글리콜 혼합액. 농도는 중량 % (설계 범위 0~60).
    Glycol { percent: f64 },
}

/// 계산에 사용하는 유도 물성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Hazen-Williams 계산에 적용할 유효 조도계수 C
    pub roughness_c: f64,
    /// 물 기준 비중 (무차원)
    pub density: f64,
}

/// 글리콜 농도 구간 테이블의 한 구간.
#[derive(Debug, Clone, Copy)]
struct GlycolBand {
    /// 구간 상한 농도 [%] (상한 포함)
    max_percent: f64,
    roughness_c: f64,
    density: f64,
}

/// 농도 오름차순 구간 테이블. 첫 번째로 매칭되는 구간을 사용한다.
static GLYCOL_BANDS: &[GlycolBand] = &[
    GlycolBand {
        max_percent: 10.0,
        roughness_c: 130.0,
        density: 1.01,
    },
    GlycolBand {
        max_percent: 20.0,
        roughness_c: 120.0,
        density: 1.03,
    },
    GlycolBand {
        max_percent: 30.0,
        roughness_c: 110.0,
        density: 1.06,
    },
    GlycolBand {
        max_percent: 40.0,
        roughness_c: 100.0,
        density: 1.08,
    },
];

/// 40% 초과(범위 밖 포함)에 적용하는 최고 농도 구간 물성.
const GLYCOL_FALLBACK: FluidProperties = FluidProperties {
    roughness_c: 90.0,
    density: 1.10,
};

const WATER: FluidProperties = FluidProperties {
    roughness_c: 140.0,
    density: 0.998,
};

/// 유체 사양에서 물성을 구한다.
///
/// 글리콜 농도가 모델링 구간(0~40%) 밖이면 가장 가까운 구간으로 처리한다.
/// 음수는 첫 구간, 40% 초과는 마지막 구간. 오류를 내지 않는다.
pub fn fluid_properties(spec: &FluidSpec) -> FluidProperties {
    match spec {
        FluidSpec::Water => WATER,
        FluidSpec::Glycol { percent } => GLYCOL_BANDS
            .iter()
            .find(|band| *percent <= band.max_percent)
            .map(|band| FluidProperties {
                roughness_c: band.roughness_c,
                density: band.density,
            })
            .unwrap_or(GLYCOL_FALLBACK),
    }
}
