//! 병뚜껑 재활용 추정 계산 모듈.

pub mod estimator;
pub mod period;

pub use estimator::*;
pub use period::{Period, UnknownPeriod};
