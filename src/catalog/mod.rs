//! 계산에 사용하는 정적 카탈로그(배관 재질, 피팅 K값) 모음.
//! 프로세스 시작 시 고정되며 런타임에 변경되지 않는다.

pub mod fittings;
pub mod pipe_materials;

pub use fittings::*;
pub use pipe_materials::*;
