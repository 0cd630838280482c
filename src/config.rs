use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::gas::TemperatureGuard;
use crate::units::{PressureUnit, TemperatureUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 입력 기본값과 계산/표시 옵션을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_pressure_unit: PressureUnit,
    pub default_temperature_unit: TemperatureUnit,
    pub default_pressure: f64,
    pub default_temperature: f64,
    /// [g/mol]
    pub default_molecular_weight: f64,
    pub default_compressibility: f64,
    pub temperature_guard: TemperatureGuard,
    /// 밀도 표시 소수점 자릿수
    pub density_decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_pressure_unit: PressureUnit::KiloPascal,
            default_temperature_unit: TemperatureUnit::Kelvin,
            default_pressure: 100.0,
            default_temperature: 298.15,
            default_molecular_weight: 28.01,
            default_compressibility: 1.0,
            temperature_guard: TemperatureGuard::RawValue,
            density_decimals: 3,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드한다. 파일이 없으면 기본 설정을 반환한다(파일은 만들지 않는다).
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        info!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}
