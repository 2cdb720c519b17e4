use std::collections::HashMap;

use crate::catalog::{find_material, PipeMaterialData};
use crate::hydraulics::{
    aggregate, compute_run, fluid_properties, FluidSpec, PipeRun, RunResult, SystemTotals,
};

/// 런 추가 시 발생 가능한 입력 오류를 표현한다.
#[derive(Debug)]
pub enum SessionError {
    /// 카탈로그에 없는 재질 이름
    UnknownMaterial(String),
    /// 선택한 재질에 없는 호칭경
    InvalidSize { material: &'static str, nominal_in: f64 },
    /// 0 이하의 배관 길이
    InvalidLength(f64),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::UnknownMaterial(name) => {
                write!(f, "카탈로그에 없는 재질입니다: {name}")
            }
            SessionError::InvalidSize {
                material,
                nominal_in,
            } => write!(f, "{material} 재질에 없는 호칭경입니다: {nominal_in}"),
            SessionError::InvalidLength(len) => {
                write!(f, "배관 길이는 0보다 커야 합니다: {len}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// 런 추가 전의 사용자 입력 초안.
#[derive(Debug, Clone)]
pub struct RunDraft {
    pub material_name: String,
    pub nominal_size_in: f64,
    pub length_ft: f64,
    pub fitting_counts: HashMap<&'static str, u32>,
}

/// 세션 상태. 유량·유체 사양·배관 런 목록을 소유한다.
///
/// 계산 엔진은 순수 함수이므로 결과는 저장하지 않고 입력이 바뀔 때마다
/// `results`/`totals`로 다시 구한다. 세션은 프로세스 종료 시 사라지며
/// 어디에도 저장되지 않는다.
#[derive(Debug)]
pub struct Session {
    flow_gpm: f64,
    fluid: FluidSpec,
    runs: Vec<PipeRun>,
    next_run_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            flow_gpm: 0.0,
            fluid: FluidSpec::Water,
            runs: Vec::new(),
            next_run_id: 1,
        }
    }

    pub fn flow_gpm(&self) -> f64 {
        self.flow_gpm
    }

    pub fn set_flow_gpm(&mut self, flow_gpm: f64) {
        self.flow_gpm = flow_gpm;
    }

    pub fn fluid(&self) -> FluidSpec {
        self.fluid
    }

    pub fn set_fluid(&mut self, fluid: FluidSpec) {
        self.fluid = fluid;
    }

    pub fn runs(&self) -> &[PipeRun] {
        &self.runs
    }

    /// 초안을 검증해 런으로 추가하고 부여된 id를 반환한다.
    ///
    /// 재질·호칭경·길이를 카탈로그 기준으로 검사하므로 이 경로로 만들어진
    /// 런은 `compute_run`에서 항상 Some을 낸다.
    pub fn add_run(&mut self, draft: RunDraft) -> Result<String, SessionError> {
        let material = find_material(&draft.material_name)
            .ok_or_else(|| SessionError::UnknownMaterial(draft.material_name.clone()))?;
        validate_draft(material, &draft)?;

        let id = self.allocate_run_id();
        self.runs.push(PipeRun {
            id: id.clone(),
            material,
            nominal_size_in: draft.nominal_size_in,
            length_ft: draft.length_ft,
            fitting_counts: draft.fitting_counts,
        });
        Ok(id)
    }

    /// id가 일치하는 런을 제거한다. 없는 id는 무시하고 false를 반환한다.
    pub fn remove_run(&mut self, id: &str) -> bool {
        let before = self.runs.len();
        self.runs.retain(|r| r.id != id);
        self.runs.len() != before
    }

    /// 런별 계산 결과. 불완전한 런은 None 자리로 유지해 런 목록과 1:1 대응한다.
    pub fn results(&self) -> Vec<Option<RunResult>> {
        let props = fluid_properties(&self.fluid());
        self.runs
            .iter()
            .map(|run| compute_run(run, self.flow_gpm, &props))
            .collect()
    }

    /// 시스템 합계 (유속은 최대, 손실류는 합산).
    pub fn totals(&self) -> SystemTotals {
        let results = self.results();
        aggregate(results.iter().map(|r| r.as_ref()))
    }

    fn allocate_run_id(&mut self) -> String {
        let id = format!("run-{}", self.next_run_id);
        self.next_run_id += 1;
        id
    }
}

fn validate_draft(material: &'static PipeMaterialData, draft: &RunDraft) -> Result<(), SessionError> {
    if material.inner_diameter_in(draft.nominal_size_in).is_none() {
        return Err(SessionError::InvalidSize {
            material: material.name,
            nominal_in: draft.nominal_size_in,
        });
    }
    if !draft.length_ft.is_finite() || draft.length_ft <= 0.0 {
        return Err(SessionError::InvalidLength(draft.length_ft));
    }
    Ok(())
}
