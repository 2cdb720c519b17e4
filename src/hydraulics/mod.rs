//! 수리 계산 엔진 모음. 순수 함수만 포함하며 I/O와 상태가 없다.

pub mod fluid;
pub mod pipe_run;
pub mod system;

pub use fluid::*;
pub use pipe_run::*;
pub use system::*;
