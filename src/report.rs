//! 계산 결과를 사람이 읽을 수 있는 문자열로 만든다.

use std::fmt::Write;

use crate::gas::{DensityResult, GAS_CONSTANT};

/// 밀도와 SI 환산 입력값을 여러 줄 보고서로 만든다.
pub fn format_density_report(result: &DensityResult, density_decimals: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "계산된 밀도: {:.*} kg/m³",
        density_decimals, result.density_kg_per_m3
    );
    let _ = writeln!(out, "SI 단위 환산 입력값:");
    let _ = writeln!(out, "- 압력 (P): {:.2} Pa", result.pressure_pa);
    let _ = writeln!(out, "- 온도 (T): {:.2} K", result.temperature_k);
    let _ = writeln!(
        out,
        "- 분자량 (MW): {:.4} kg/mol",
        result.molecular_weight_kg_per_mol
    );
    let _ = write!(out, "- 기체상수 (R): {GAS_CONSTANT} J/(mol·K)");
    out
}
