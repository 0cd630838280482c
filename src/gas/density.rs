use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::conversion::ConversionError;
use crate::units::pressure::to_kpa;
use crate::units::temperature::to_kelvin;
use crate::units::{PressureUnit, TemperatureUnit};

/// 일반 기체상수 [J/(mol·K)]
pub const GAS_CONSTANT: f64 = 8.314;

const PA_PER_KPA: f64 = 1000.0;
const G_PER_KG: f64 = 1000.0;

/// 밀도 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityInputs {
    pub pressure: f64,
    pub pressure_unit: PressureUnit,
    pub temperature: f64,
    pub temperature_unit: TemperatureUnit,
    /// 분자량 [g/mol]
    pub molecular_weight_g_per_mol: f64,
    /// 압축계수 Z [-]
    pub compressibility_factor: f64,
}

/// 단위를 태그 문자열로 받는 입력. 폼/CLI 처럼 단위를 문자열로 전달하는 호출자용이다.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDensityInputs {
    pub pressure: f64,
    pub pressure_unit: String,
    pub temperature: f64,
    pub temperature_unit: String,
    pub molecular_weight_g_per_mol: f64,
    pub compressibility_factor: f64,
}

/// 밀도 계산 결과. 계산에 사용된 SI 환산값을 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityResult {
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 절대압 [Pa]
    pub pressure_pa: f64,
    /// 온도 [K]
    pub temperature_k: f64,
    /// 분자량 [kg/mol]
    pub molecular_weight_kg_per_mol: f64,
}

/// 밀도 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DensityError {
    #[error("입력값이 올바르지 않습니다: {field} = {value} (0보다 커야 합니다)")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("단위 변환 오류 ({operation}): {unit}")]
    UnitConversion {
        unit: String,
        operation: &'static str,
        #[source]
        source: ConversionError,
    },
    #[error("계산 중 오류가 발생했습니다: {0}")]
    Computation(String),
}

/// 온도 사전 검사 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureGuard {
    /// 입력 단위 그대로의 값이 0 이하이면 거부한다. -10 °C 처럼 물리적으로 유효한 값도 거부된다.
    #[default]
    RawValue,
    /// 켈빈으로 환산한 값이 0 이하일 때만 거부한다.
    Absolute,
}

/// 단위를 SI 로 정규화한 뒤 이상기체 식으로 밀도를 계산한다.
///
/// `ρ = P·M / (Z·R·T)`, P[Pa], M[kg/mol], R = 8.314 J/(mol·K), T[K].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DensityEngine {
    guard: TemperatureGuard,
}

impl DensityEngine {
    pub fn new(guard: TemperatureGuard) -> Self {
        Self { guard }
    }

    pub fn guard(&self) -> TemperatureGuard {
        self.guard
    }

    /// 밀도를 계산한다. 사전 검사에 실패하면 변환을 시작하지 않는다.
    pub fn compute(&self, inputs: &DensityInputs) -> Result<DensityResult, DensityError> {
        self.check_raw(
            inputs.pressure,
            inputs.temperature,
            inputs.molecular_weight_g_per_mol,
            inputs.compressibility_factor,
        )?;
        self.evaluate(inputs)
    }

    /// 단위 태그 문자열을 해석해 밀도를 계산한다.
    ///
    /// 원시값 검사가 먼저 수행되므로, 값이 잘못된 경우 단위 태그는 해석되지 않는다.
    pub fn compute_raw(&self, inputs: &RawDensityInputs) -> Result<DensityResult, DensityError> {
        self.check_raw(
            inputs.pressure,
            inputs.temperature,
            inputs.molecular_weight_g_per_mol,
            inputs.compressibility_factor,
        )?;
        let pressure_unit: PressureUnit =
            inputs
                .pressure_unit
                .parse()
                .map_err(|source| DensityError::UnitConversion {
                    unit: inputs.pressure_unit.clone(),
                    operation: "pressure to kPa",
                    source,
                })?;
        let temperature_unit: TemperatureUnit =
            inputs
                .temperature_unit
                .parse()
                .map_err(|source| DensityError::UnitConversion {
                    unit: inputs.temperature_unit.clone(),
                    operation: "temperature to K",
                    source,
                })?;
        self.evaluate(&DensityInputs {
            pressure: inputs.pressure,
            pressure_unit,
            temperature: inputs.temperature,
            temperature_unit,
            molecular_weight_g_per_mol: inputs.molecular_weight_g_per_mol,
            compressibility_factor: inputs.compressibility_factor,
        })
    }

    fn check_raw(
        &self,
        pressure: f64,
        temperature: f64,
        molecular_weight: f64,
        z: f64,
    ) -> Result<(), DensityError> {
        let reject = |field: &'static str, value: f64| {
            warn!(field, value, "density input rejected");
            Err(DensityError::InvalidInput { field, value })
        };
        if !z.is_finite() || z <= 0.0 {
            return reject("compressibility_factor", z);
        }
        if !temperature.is_finite() {
            return reject("temperature", temperature);
        }
        if self.guard == TemperatureGuard::RawValue && temperature <= 0.0 {
            return reject("temperature", temperature);
        }
        if !molecular_weight.is_finite() || molecular_weight <= 0.0 {
            return reject("molecular_weight", molecular_weight);
        }
        if !pressure.is_finite() {
            return reject("pressure", pressure);
        }
        Ok(())
    }

    fn evaluate(&self, inputs: &DensityInputs) -> Result<DensityResult, DensityError> {
        let pressure_pa = to_kpa(inputs.pressure, inputs.pressure_unit) * PA_PER_KPA;
        let temperature_k = to_kelvin(inputs.temperature, inputs.temperature_unit);
        if !pressure_pa.is_finite() || !temperature_k.is_finite() {
            return Err(DensityError::Computation(format!(
                "non-finite SI conversion (P={pressure_pa} Pa, T={temperature_k} K)"
            )));
        }
        if self.guard == TemperatureGuard::Absolute && temperature_k <= 0.0 {
            warn!(temperature_k, "absolute temperature is not positive");
            return Err(DensityError::InvalidInput {
                field: "temperature",
                value: inputs.temperature,
            });
        }
        let molecular_weight_kg_per_mol = inputs.molecular_weight_g_per_mol / G_PER_KG;

        let density = (pressure_pa * molecular_weight_kg_per_mol)
            / (inputs.compressibility_factor * GAS_CONSTANT * temperature_k);
        if !density.is_finite() {
            return Err(DensityError::Computation(format!(
                "non-finite density (P={pressure_pa} Pa, T={temperature_k} K, \
                 M={molecular_weight_kg_per_mol} kg/mol, Z={})",
                inputs.compressibility_factor
            )));
        }
        debug!(
            density,
            pressure_pa, temperature_k, molecular_weight_kg_per_mol, "ideal gas density computed"
        );
        Ok(DensityResult {
            density_kg_per_m3: density,
            pressure_pa,
            temperature_k,
            molecular_weight_kg_per_mol,
        })
    }
}

/// 기본 검사 방식(`TemperatureGuard::RawValue`)으로 밀도를 계산한다.
pub fn compute(inputs: &DensityInputs) -> Result<DensityResult, DensityError> {
    DensityEngine::default().compute(inputs)
}
