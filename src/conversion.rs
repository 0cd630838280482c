use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 지원 목록에 없는 단위 문자열
    #[error("알 수 없는 {quantity} 단위: {unit}")]
    UnknownUnit { unit: String, quantity: QuantityKind },
    /// 인식은 하지만 변환식이 없는 단위 조합
    #[error("{quantity} 변환은 지원하지 않습니다: {from} -> {to}")]
    NotImplemented {
        quantity: QuantityKind,
        from: String,
        to: String,
    },
}

impl ConversionError {
    fn unknown(unit: &str, quantity: QuantityKind) -> Self {
        ConversionError::UnknownUnit {
            unit: unit.to_string(),
            quantity,
        }
    }
}

// 태그는 대소문자를 구분한다. `bar`, `kpa` 등은 지원 단위가 아니다.
impl FromStr for PressureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PressureUnit::ALL
            .into_iter()
            .find(|u| u.tag() == s)
            .ok_or_else(|| ConversionError::unknown(s, QuantityKind::Pressure))
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemperatureUnit::ALL
            .into_iter()
            .find(|u| u.tag() == s)
            .ok_or_else(|| ConversionError::unknown(s, QuantityKind::Temperature))
    }
}

impl FromStr for DensityUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DensityUnit::ALL
            .into_iter()
            .find(|u| u.tag() == s)
            .ok_or_else(|| ConversionError::unknown(s, QuantityKind::Density))
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for DensityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 문자열 단위 태그로 압력을 변환한다.
pub fn convert_pressure_str(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from: PressureUnit = from.parse()?;
    let to: PressureUnit = to.parse()?;
    Ok(convert_pressure(value, from, to))
}

/// 문자열 단위 태그로 온도를 변환한다.
pub fn convert_temperature_str(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from: TemperatureUnit = from.parse()?;
    let to: TemperatureUnit = to.parse()?;
    Ok(convert_temperature(value, from, to))
}

/// 문자열 단위 태그로 밀도를 변환한다.
///
/// 같은 태그끼리는 조회 없이 값을 그대로 돌려준다.
pub fn convert_density_str(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }
    let from: DensityUnit = from.parse()?;
    let to: DensityUnit = to.parse()?;
    convert_density(value, from, to)
}

/// 물리량 종류와 문자열 단위명으로 변환한다.
///
/// 단위 태그 예시: 압력 `barg`, `kg/cm2`, `pasig`, `kPa`, `pascal`, `mmH2O`,
/// 온도 `C`, `F`, `K`, `R`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Pressure => convert_pressure_str(value, from_unit_str, to_unit_str),
        QuantityKind::Temperature => convert_temperature_str(value, from_unit_str, to_unit_str),
        QuantityKind::Density => convert_density_str(value, from_unit_str, to_unit_str),
    }
}
