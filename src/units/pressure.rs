use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 kPa(절대압)이다.
/// barg 만 게이지 단위이며 대기압(101.325 kPa)을 더해 절대압으로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "barg")]
    Barg,
    #[serde(rename = "kg/cm2")]
    KgPerCm2,
    /// psi 게이지 표기지만 대기압 보정 없이 배율만 적용한다.
    #[serde(rename = "pasig")]
    Psig,
    #[serde(rename = "kPa")]
    KiloPascal,
    #[serde(rename = "pascal")]
    Pascal,
    #[serde(rename = "mmH2O")]
    MmH2O,
}

impl PressureUnit {
    /// 지원하는 모든 압력 단위 (선택 목록 표시 순서).
    pub const ALL: [PressureUnit; 6] = [
        PressureUnit::Barg,
        PressureUnit::KgPerCm2,
        PressureUnit::Psig,
        PressureUnit::KiloPascal,
        PressureUnit::Pascal,
        PressureUnit::MmH2O,
    ];

    /// 단위 식별 태그.
    pub fn tag(self) -> &'static str {
        match self {
            PressureUnit::Barg => "barg",
            PressureUnit::KgPerCm2 => "kg/cm2",
            PressureUnit::Psig => "pasig",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Pascal => "pascal",
            PressureUnit::MmH2O => "mmH2O",
        }
    }
}

/// 표준 대기압 [kPa]
pub const ATM_KPA: f64 = 101.325;
const KPA_PER_BAR: f64 = 100.0;
const KPA_PER_KG_CM2: f64 = 98.0665;
const KPA_PER_PSI: f64 = 0.00689476;
const PA_PER_KPA: f64 = 1000.0;
const KPA_PER_MMH2O: f64 = 0.00980638;

/// 주어진 압력을 kPa 로 변환한다.
pub fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        // 게이지 → 절대압
        PressureUnit::Barg => value * KPA_PER_BAR + ATM_KPA,
        PressureUnit::KgPerCm2 => value * KPA_PER_KG_CM2,
        PressureUnit::Psig => value * KPA_PER_PSI,
        PressureUnit::KiloPascal => value,
        PressureUnit::Pascal => value / PA_PER_KPA,
        PressureUnit::MmH2O => value * KPA_PER_MMH2O,
    }
}

/// kPa 값을 원하는 단위로 변환한다. `to_kpa`의 역변환이다.
pub fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Barg => (value_kpa - ATM_KPA) / KPA_PER_BAR,
        PressureUnit::KgPerCm2 => value_kpa / KPA_PER_KG_CM2,
        PressureUnit::Psig => value_kpa / KPA_PER_PSI,
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::Pascal => value_kpa * PA_PER_KPA,
        PressureUnit::MmH2O => value_kpa / KPA_PER_MMH2O,
    }
}

/// 압력을 원하는 단위로 변환한다. 단위 간 직접 변환 없이 항상 kPa 를 거친다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let kpa = to_kpa(value, from);
    from_kpa(kpa, to)
}
