use std::collections::HashMap;

use crate::catalog::{fitting_types, PipeMaterialData};

use super::fluid::FluidProperties;

/// GPM → ft³/s 환산계수
pub const GPM_PER_CFS: f64 = 448.831;
/// 표준 중력가속도 [ft/s²]
pub const GRAVITY_FT_PER_S2: f64 = 32.174;
/// 기준 물 밀도 [lb/ft³]
pub const WATER_DENSITY_LB_PER_FT3: f64 = 62.4;
/// Hazen-Williams 미국 관용단위 경험 상수 (유량 GPM, 내경 in 기준)
pub const HAZEN_WILLIAMS_COEFF_US: f64 = 4.52;

/// 사용자 정의 배관 런 하나.
#[derive(Debug, Clone)]
pub struct PipeRun {
    /// 런 식별 토큰 (세션 내 유일)
    pub id: String,
    pub material: &'static PipeMaterialData,
    /// 호칭경 [in]. 재질 테이블의 키여야 유효하다.
    pub nominal_size_in: f64,
    /// 배관 길이 [ft]
    pub length_ft: f64,
    /// 피팅 이름 → 개수. 없는 항목은 0개로 취급한다.
    pub fitting_counts: HashMap<&'static str, u32>,
}

/// 런 하나의 수리 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub inner_diameter_in: f64,
    pub velocity_ft_per_s: f64,
    /// 총 수두손실 [ft of fluid] (마찰 + 피팅)
    pub head_loss_ft: f64,
    pub pressure_drop_psi: f64,
    /// 피팅 손실계수 합계 (무차원)
    pub total_k: f64,
    /// 집계용으로 런에서 복사한 길이 [ft]
    pub length_ft: f64,
}

/// 배관 런 하나의 유속·수두손실·압력강하를 계산한다.
///
/// Hazen-Williams 식 (100ft당 손실):
///   hL_100 = 4.52 · Q^1.85 / (C^1.85 · d^4.87)   [Q: GPM, d: in]
/// 피팅 손실: hL = ΣK · v² / (2g)
///
/// 호칭경이 재질 테이블에 없으면 불완전한 런으로 보고 None을 반환한다
/// (집계에서 제외될 뿐 오류가 아니다). 유량·길이 0 같은 퇴화 입력은
/// 0에 가까운 결과를 낼 뿐 실패하지 않는다.
pub fn compute_run(run: &PipeRun, flow_gpm: f64, fluid: &FluidProperties) -> Option<RunResult> {
    let d_in = run.material.inner_diameter_in(run.nominal_size_in)?;

    let d_ft = d_in / 12.0;
    let area_ft2 = std::f64::consts::PI * (d_ft / 2.0) * (d_ft / 2.0);
    let q_cfs = flow_gpm / GPM_PER_CFS;
    let velocity = q_cfs / area_ft2;

    let c = fluid.roughness_c;
    let hl_per_100ft =
        (HAZEN_WILLIAMS_COEFF_US * flow_gpm.powf(1.85)) / (c.powf(1.85) * d_in.powf(4.87));
    let pipe_hl = hl_per_100ft * run.length_ft / 100.0;

    let mut total_k = 0.0;
    for fitting in fitting_types() {
        let count = run.fitting_counts.get(fitting.name).copied().unwrap_or(0);
        total_k += f64::from(count) * fitting.default_k;
    }
    let fitting_hl = total_k * velocity * velocity / (2.0 * GRAVITY_FT_PER_S2);

    let head_loss = pipe_hl + fitting_hl;
    let psi_drop = head_loss * fluid.density * WATER_DENSITY_LB_PER_FT3 / 144.0;

    Some(RunResult {
        inner_diameter_in: d_in,
        velocity_ft_per_s: velocity,
        head_loss_ft: head_loss,
        pressure_drop_psi: psi_drop,
        total_k,
        length_ft: run.length_ft,
    })
}
