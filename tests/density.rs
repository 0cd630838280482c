//! 이상기체 밀도 계산 회귀 테스트.
use gas_density_calculator::conversion::ConversionError;
use gas_density_calculator::gas::{
    compute, DensityEngine, DensityError, DensityInputs, RawDensityInputs, TemperatureGuard,
};
use gas_density_calculator::units::{PressureUnit, TemperatureUnit};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.3e}, tol {tol})"
    );
}

fn air(pressure_kpa: f64, temperature_k: f64) -> DensityInputs {
    DensityInputs {
        pressure: pressure_kpa,
        pressure_unit: PressureUnit::KiloPascal,
        temperature: temperature_k,
        temperature_unit: TemperatureUnit::Kelvin,
        molecular_weight_g_per_mol: 28.97,
        compressibility_factor: 1.0,
    }
}

#[test]
fn air_at_100_kpa_and_0_c() {
    let res = compute(&air(100.0, 273.15)).expect("density");
    assert_close("rho", res.density_kg_per_m3, 1.2754, 1e-3);
}

#[test]
fn air_at_one_atmosphere_and_0_c() {
    let res = compute(&air(101.325, 273.15)).expect("density");
    let expected = 101_325.0 * 0.02897 / (8.314 * 273.15);
    assert_close("rho", res.density_kg_per_m3, expected, 1e-12);
    assert_close("rho approx", res.density_kg_per_m3, 1.2926, 1e-3);
}

#[test]
fn result_carries_si_intermediates() {
    let res = compute(&DensityInputs {
        pressure: 0.0,
        pressure_unit: PressureUnit::Barg,
        temperature: 25.0,
        temperature_unit: TemperatureUnit::Celsius,
        molecular_weight_g_per_mol: 16.04,
        compressibility_factor: 0.998,
    })
    .expect("density");
    assert_close("P", res.pressure_pa, 101_325.0, 1e-9);
    assert_close("T", res.temperature_k, 298.15, 1e-9);
    assert_close("MW", res.molecular_weight_kg_per_mol, 0.01604, 1e-15);
    let expected = 101_325.0 * 0.01604 / (0.998 * 8.314 * 298.15);
    assert_close("rho", res.density_kg_per_m3, expected, 1e-12);
}

#[test]
fn compressibility_scales_density_inversely() {
    let ideal = compute(&air(500.0, 300.0)).expect("ideal");
    let real = compute(&DensityInputs {
        compressibility_factor: 0.8,
        ..air(500.0, 300.0)
    })
    .expect("real");
    assert_close(
        "ratio",
        real.density_kg_per_m3 / ideal.density_kg_per_m3,
        1.25,
        1e-12,
    );
}

#[test]
fn zero_compressibility_is_invalid() {
    let err = compute(&DensityInputs {
        compressibility_factor: 0.0,
        ..air(101.325, 273.15)
    })
    .unwrap_err();
    assert_eq!(
        err,
        DensityError::InvalidInput {
            field: "compressibility_factor",
            value: 0.0
        }
    );
}

#[test]
fn negative_raw_temperature_is_rejected_in_any_unit() {
    for unit in TemperatureUnit::ALL {
        let err = compute(&DensityInputs {
            temperature: -10.0,
            temperature_unit: unit,
            ..air(101.325, 273.15)
        })
        .unwrap_err();
        assert_eq!(
            err,
            DensityError::InvalidInput {
                field: "temperature",
                value: -10.0
            },
            "unit {unit}"
        );
    }
}

#[test]
fn absolute_guard_accepts_negative_celsius() {
    let engine = DensityEngine::new(TemperatureGuard::Absolute);
    let res = engine
        .compute(&DensityInputs {
            temperature: -10.0,
            temperature_unit: TemperatureUnit::Celsius,
            ..air(101.325, 273.15)
        })
        .expect("263.15 K is valid");
    assert_close("T", res.temperature_k, 263.15, 1e-9);

    let err = engine
        .compute(&DensityInputs {
            temperature: -300.0,
            temperature_unit: TemperatureUnit::Celsius,
            ..air(101.325, 273.15)
        })
        .unwrap_err();
    assert!(matches!(
        err,
        DensityError::InvalidInput {
            field: "temperature",
            ..
        }
    ));
}

#[test]
fn non_positive_molecular_weight_is_invalid() {
    let err = compute(&DensityInputs {
        molecular_weight_g_per_mol: 0.0,
        ..air(101.325, 273.15)
    })
    .unwrap_err();
    assert!(matches!(
        err,
        DensityError::InvalidInput {
            field: "molecular_weight",
            ..
        }
    ));
}

#[test]
fn nan_pressure_is_invalid() {
    let err = compute(&air(f64::NAN, 273.15)).unwrap_err();
    assert!(matches!(
        err,
        DensityError::InvalidInput {
            field: "pressure",
            ..
        }
    ));
}

#[test]
fn overflow_surfaces_as_computation_error() {
    let err = compute(&DensityInputs {
        molecular_weight_g_per_mol: f64::MAX,
        ..air(f64::MAX, 1.0)
    })
    .unwrap_err();
    assert!(matches!(err, DensityError::Computation(_)), "{err:?}");
}

#[test]
fn unknown_unit_tag_becomes_unit_conversion_error() {
    let engine = DensityEngine::default();
    let err = engine
        .compute_raw(&RawDensityInputs {
            pressure: 1.0,
            pressure_unit: "bar".to_string(),
            temperature: 300.0,
            temperature_unit: "K".to_string(),
            molecular_weight_g_per_mol: 28.97,
            compressibility_factor: 1.0,
        })
        .unwrap_err();
    match err {
        DensityError::UnitConversion {
            unit,
            operation,
            source,
        } => {
            assert_eq!(unit, "bar");
            assert_eq!(operation, "pressure to kPa");
            assert!(matches!(source, ConversionError::UnknownUnit { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn raw_guard_runs_before_unit_parsing() {
    let err = DensityEngine::default()
        .compute_raw(&RawDensityInputs {
            pressure: 1.0,
            pressure_unit: "bar".to_string(),
            temperature: -10.0,
            temperature_unit: "C".to_string(),
            molecular_weight_g_per_mol: 28.97,
            compressibility_factor: 1.0,
        })
        .unwrap_err();
    assert!(matches!(err, DensityError::InvalidInput { .. }));
}

#[test]
fn raw_inputs_match_typed_inputs() {
    let raw = DensityEngine::default()
        .compute_raw(&RawDensityInputs {
            pressure: 5.0,
            pressure_unit: "kg/cm2".to_string(),
            temperature: 80.0,
            temperature_unit: "F".to_string(),
            molecular_weight_g_per_mol: 44.01,
            compressibility_factor: 0.99,
        })
        .expect("raw");
    let typed = compute(&DensityInputs {
        pressure: 5.0,
        pressure_unit: PressureUnit::KgPerCm2,
        temperature: 80.0,
        temperature_unit: TemperatureUnit::Fahrenheit,
        molecular_weight_g_per_mol: 44.01,
        compressibility_factor: 0.99,
    })
    .expect("typed");
    assert_eq!(raw, typed);
}

#[test]
fn repeated_computation_is_bit_identical() {
    let inputs = DensityInputs {
        pressure: 3.7,
        pressure_unit: PressureUnit::Barg,
        temperature: 451.0,
        temperature_unit: TemperatureUnit::Rankine,
        molecular_weight_g_per_mol: 2.016,
        compressibility_factor: 1.0006,
    };
    let a = compute(&inputs).expect("first");
    let b = compute(&inputs).expect("second");
    assert_eq!(a.density_kg_per_m3.to_bits(), b.density_kg_per_m3.to_bits());
    assert_eq!(a, b);
}

#[test]
fn overflowing_temperature_conversion_is_a_computation_error() {
    for unit in [TemperatureUnit::Fahrenheit, TemperatureUnit::Rankine] {
        let err = compute(&DensityInputs {
            temperature: 1e308,
            temperature_unit: unit,
            ..air(101.325, 273.15)
        })
        .unwrap_err();
        assert!(matches!(err, DensityError::Computation(_)), "{unit}: {err:?}");
    }
}

#[test]
fn overflowing_pressure_conversion_is_a_computation_error() {
    let err = compute(&DensityInputs {
        pressure: 1e307,
        pressure_unit: PressureUnit::Barg,
        ..air(101.325, 273.15)
    })
    .unwrap_err();
    assert!(matches!(err, DensityError::Computation(_)), "{err:?}");
}

#[test]
fn unknown_temperature_tag_becomes_unit_conversion_error() {
    let err = DensityEngine::default()
        .compute_raw(&RawDensityInputs {
            pressure: 101.325,
            pressure_unit: "kPa".to_string(),
            temperature: 300.0,
            temperature_unit: "kelvin".to_string(),
            molecular_weight_g_per_mol: 28.97,
            compressibility_factor: 1.0,
        })
        .unwrap_err();
    match err {
        DensityError::UnitConversion {
            unit,
            operation,
            source,
        } => {
            assert_eq!(unit, "kelvin");
            assert_eq!(operation, "temperature to K");
            assert!(matches!(source, ConversionError::UnknownUnit { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn negative_absolute_pressure_is_passed_through() {
    let res = compute(&DensityInputs {
        pressure: -2.0,
        pressure_unit: PressureUnit::Barg,
        ..air(101.325, 273.15)
    })
    .expect("density");
    assert!(res.pressure_pa < 0.0);
    assert!(res.density_kg_per_m3 < 0.0);
}
