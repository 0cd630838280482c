use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gas_density_calculator::app::{self, AppError};
use gas_density_calculator::config::{self, Config, DEFAULT_CONFIG_PATH};
use gas_density_calculator::conversion;
use gas_density_calculator::gas::{DensityEngine, RawDensityInputs, TemperatureGuard};
use gas_density_calculator::quantity::QuantityKind;
use gas_density_calculator::report::format_density_report;

#[derive(Parser)]
#[command(name = "gas_density_calculator")]
#[command(about = "Ideal gas density calculator with pressure/temperature unit conversion", long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ideal gas density
    Density {
        /// Pressure value
        #[arg(long, allow_negative_numbers = true)]
        pressure: Option<f64>,
        /// Pressure unit (barg, kg/cm2, pasig, kPa, pascal, mmH2O)
        #[arg(long)]
        pressure_unit: Option<String>,
        /// Temperature value
        #[arg(long, allow_negative_numbers = true)]
        temperature: Option<f64>,
        /// Temperature unit (C, F, K, R)
        #[arg(long)]
        temperature_unit: Option<String>,
        /// Molecular weight [g/mol]
        #[arg(long, allow_negative_numbers = true)]
        molecular_weight: Option<f64>,
        /// Compressibility factor Z
        #[arg(long, allow_negative_numbers = true)]
        z: Option<f64>,
        /// Temperature precondition check
        #[arg(long, value_enum)]
        guard: Option<GuardArg>,
    },
    /// Convert a value between units of the same quantity
    Convert {
        #[arg(value_enum)]
        quantity: QuantityArg,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// Run the interactive menu (default)
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum QuantityArg {
    Pressure,
    Temperature,
    Density,
}

impl From<QuantityArg> for QuantityKind {
    fn from(value: QuantityArg) -> Self {
        match value {
            QuantityArg::Pressure => QuantityKind::Pressure,
            QuantityArg::Temperature => QuantityKind::Temperature,
            QuantityArg::Density => QuantityKind::Density,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GuardArg {
    Raw,
    Absolute,
}

impl From<GuardArg> for TemperatureGuard {
    fn from(value: GuardArg) -> Self {
        match value {
            GuardArg::Raw => TemperatureGuard::RawValue,
            GuardArg::Absolute => TemperatureGuard::Absolute,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Density {
            pressure,
            pressure_unit,
            temperature,
            temperature_unit,
            molecular_weight,
            z,
            guard,
        } => {
            let inputs = RawDensityInputs {
                pressure: pressure.unwrap_or(cfg.default_pressure),
                pressure_unit: pressure_unit
                    .unwrap_or_else(|| cfg.default_pressure_unit.to_string()),
                temperature: temperature.unwrap_or(cfg.default_temperature),
                temperature_unit: temperature_unit
                    .unwrap_or_else(|| cfg.default_temperature_unit.to_string()),
                molecular_weight_g_per_mol: molecular_weight
                    .unwrap_or(cfg.default_molecular_weight),
                compressibility_factor: z.unwrap_or(cfg.default_compressibility),
            };
            print_density(&cfg, guard, &inputs)?;
        }
        Commands::Convert {
            quantity,
            value,
            from,
            to,
        } => {
            let result = conversion::convert(quantity.into(), value, &from, &to)?;
            println!("{result} {to}");
        }
        Commands::Interactive => app::run_interactive(&mut cfg, &cli.config)?,
    }
    Ok(())
}

fn print_density(
    cfg: &Config,
    guard: Option<GuardArg>,
    inputs: &RawDensityInputs,
) -> Result<(), AppError> {
    let guard = guard.map_or(cfg.temperature_guard, TemperatureGuard::from);
    let result = DensityEngine::new(guard).compute_raw(inputs)?;
    println!("{}", format_density_report(&result, cfg.density_decimals));
    Ok(())
}
