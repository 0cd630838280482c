//! 이상기체 밀도 계산 모듈.

pub mod density;

pub use density::{
    compute, DensityEngine, DensityError, DensityInputs, DensityResult, RawDensityInputs,
    TemperatureGuard, GAS_CONSTANT,
};
