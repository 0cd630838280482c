use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::gas::DensityError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("밀도 계산 오류: {0}")]
    Density(#[from] DensityError),
}

/// 대화형 CLI 메인 루프를 실행한다. 종료 시 설정을 저장한다.
///
/// 계산 오류는 메시지만 출력하고 메뉴로 돌아간다. 입력이 끝나면(EOF) 정상 종료한다.
pub fn run_interactive(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu() {
            Ok(choice) => choice,
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                MenuChoice::Exit
            }
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::DensityCalculation => ui_cli::handle_density(config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(),
            MenuChoice::Settings => ui_cli::handle_settings(config),
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            // 입력이 끝나면 설정을 저장하고 종료한다.
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                config.save(config_path)?;
                break;
            }
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => println!("오류: {e}"),
        }
    }
    Ok(())
}
