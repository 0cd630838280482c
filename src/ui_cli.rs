use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::gas::{DensityEngine, DensityInputs, TemperatureGuard};
use crate::quantity::QuantityKind;
use crate::report::format_density_report;
use crate::units::{DensityUnit, PressureUnit, TemperatureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DensityCalculation,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Ideal Gas Density Calculator ===");
    println!("1) 밀도 계산");
    println!("2) 단위 변환기");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::DensityCalculation),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 밀도 계산 메뉴를 처리한다. 빈 입력은 설정의 기본값을 사용한다.
pub fn handle_density(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 이상기체 밀도 계산 --");
    let pressure = read_f64_or("압력 값", cfg.default_pressure)?;
    let pressure_unit = read_pressure_unit(cfg.default_pressure_unit)?;
    let temperature = read_f64_or("온도 값", cfg.default_temperature)?;
    let temperature_unit = read_temperature_unit(cfg.default_temperature_unit)?;
    let molecular_weight = read_f64_or("분자량 [g/mol]", cfg.default_molecular_weight)?;
    let z = read_f64_or("압축계수 Z", cfg.default_compressibility)?;

    let engine = DensityEngine::new(cfg.temperature_guard);
    let result = engine.compute(&DensityInputs {
        pressure,
        pressure_unit,
        temperature,
        temperature_unit,
        molecular_weight_g_per_mol: molecular_weight,
        compressibility_factor: z,
    })?;
    println!("{}", format_density_report(&result, cfg.density_decimals));
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 압력  2) 온도  3) 밀도");
    println!("참고: barg 는 게이지압(대기압 101.325 kPa 보정), kPa 는 절대압으로 처리됩니다.");
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        match sel.trim() {
            "1" => break QuantityKind::Pressure,
            "2" => break QuantityKind::Temperature,
            "3" => break QuantityKind::Density,
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    println!("{kind} 변환은 기준 단위 {} 를 거쳐 수행됩니다.", kind.base_unit());
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line(&format!("입력 단위({}): ", unit_hint(kind)))?;
    let to_unit = read_line(&format!("변환 단위({}): ", unit_hint(kind)))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 온도 검사 방식: {:?}", cfg.temperature_guard);
    println!("1) 입력값 그대로 검사 (0 이하 거부)  2) 켈빈 환산값 검사");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.temperature_guard = match sel.trim() {
        "1" => TemperatureGuard::RawValue,
        "2" => TemperatureGuard::Absolute,
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            cfg.temperature_guard
        }
    };
    println!("온도 검사 방식이 {:?} 로 설정되었습니다.", cfg.temperature_guard);
    Ok(())
}

fn unit_hint(kind: QuantityKind) -> String {
    let tags: Vec<&str> = match kind {
        QuantityKind::Pressure => PressureUnit::ALL.iter().map(|u| u.tag()).collect(),
        QuantityKind::Temperature => TemperatureUnit::ALL.iter().map(|u| u.tag()).collect(),
        QuantityKind::Density => DensityUnit::ALL.iter().map(|u| u.tag()).collect(),
    };
    tags.join(", ")
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 입력이 끝나면(EOF) `UnexpectedEof` 오류를 반환한다.
fn read_line_from(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_f64_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_pressure_unit(default: PressureUnit) -> Result<PressureUnit, AppError> {
    println!("압력 단위: 1=barg 2=kg/cm2 3=pasig 4=kPa 5=pascal 6=mmH2O");
    let sel = read_line(&format!("선택 [{default}]: "))?;
    let unit = match sel.trim() {
        "1" => PressureUnit::Barg,
        "2" => PressureUnit::KgPerCm2,
        "3" => PressureUnit::Psig,
        "4" => PressureUnit::KiloPascal,
        "5" => PressureUnit::Pascal,
        "6" => PressureUnit::MmH2O,
        _ => default,
    };
    Ok(unit)
}

fn read_temperature_unit(default: TemperatureUnit) -> Result<TemperatureUnit, AppError> {
    println!("온도 단위: 1=°C 2=°F 3=K 4=R");
    let sel = read_line(&format!("선택 [{default}]: "))?;
    let unit = match sel.trim() {
        "1" => TemperatureUnit::Celsius,
        "2" => TemperatureUnit::Fahrenheit,
        "3" => TemperatureUnit::Kelvin,
        "4" => TemperatureUnit::Rankine,
        _ => default,
    };
    Ok(unit)
}
