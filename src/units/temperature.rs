use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
    #[serde(rename = "R")]
    Rankine,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Rankine,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Rankine => "R",
        }
    }
}

const KELVIN_OFFSET: f64 = 273.15;

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value + KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        TemperatureUnit::Kelvin => value,
        // 랭킨과 켈빈은 영점이 같으므로 배율만 적용
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_k - KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value_k - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let k = to_kelvin(value, from);
    from_kelvin(k, to)
}
