use super::pipe_run::RunResult;

/// 전체 시스템 집계 결과.
///
/// 직렬 배관에서 유속은 합산되지 않으므로 최대값(병목 구간)을 취하고,
/// 수두손실·압력강하·K·길이는 합산한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemTotals {
    /// 런 중 최대 유속 [ft/s]
    pub velocity_ft_per_s: f64,
    pub head_loss_ft: f64,
    pub pressure_drop_psi: f64,
    pub total_k: f64,
    pub length_ft: f64,
}

impl SystemTotals {
    pub const ZERO: Self = Self {
        velocity_ft_per_s: 0.0,
        head_loss_ft: 0.0,
        pressure_drop_psi: 0.0,
        total_k: 0.0,
        length_ft: 0.0,
    };
}

/// 런별 결과를 시스템 합계로 집계한다. None(불완전한 런)은 0 기여로 건너뛴다.
pub fn aggregate<'a, I>(results: I) -> SystemTotals
where
    I: IntoIterator<Item = Option<&'a RunResult>>,
{
    let mut totals = SystemTotals::ZERO;
    for result in results.into_iter().flatten() {
        totals.velocity_ft_per_s = totals.velocity_ft_per_s.max(result.velocity_ft_per_s);
        totals.head_loss_ft += result.head_loss_ft;
        totals.pressure_drop_psi += result.pressure_drop_psi;
        totals.total_k += result.total_k;
        totals.length_ft += result.length_ft;
    }
    totals
}
