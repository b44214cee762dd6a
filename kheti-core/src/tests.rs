//! Testes integrados do motor de interpretação

use crate::*;

// ═══════════════════════════════════════════════════════════════════════════════
// PROPRIEDADES DA CALIBRAÇÃO
// ═══════════════════════════════════════════════════════════════════════════════

/// Grade determinística de leituras cobrindo dentro e fora dos limites
fn raw_grid() -> Vec<f64> {
    (-20..=60).map(|i| i as f64 * 100.0 + 0.37).collect()
}

const BOUND_PAIRS: [(f64, f64); 6] = [
    (3500.0, 1500.0),
    (1500.0, 3500.0),
    (4095.0, 0.0),
    (0.0, 1.0),
    (-250.0, 250.0),
    (1e-6, 2e-6),
];

#[test]
fn test_calibration_always_in_range() {
    for (dry, wet) in BOUND_PAIRS {
        for raw in raw_grid() {
            let pct = calibrate(raw, dry, wet);
            assert!(pct.is_finite());
            assert!((0.0..=100.0).contains(&pct), "calibrate({raw}, {dry}, {wet}) = {pct}");
        }
    }
}

#[test]
fn test_calibration_endpoints_in_both_orientations() {
    for (dry, wet) in BOUND_PAIRS {
        assert!(calibrate(dry, dry, wet).abs() < 1e-9);
        assert!((calibrate(wet, dry, wet) - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_calibration_monotonic_and_flat_outside() {
    for (dry, wet) in BOUND_PAIRS {
        let cal = MoistureCalibration::new(dry, wet);
        let mut previous: Option<f64> = None;
        let mut readings = raw_grid();
        // Percorrer do lado seco para o lado molhado
        if cal.is_inverse() {
            readings.reverse();
        }
        for raw in readings {
            let pct = cal.percentage(raw);
            if let Some(prev) = previous {
                assert!(pct >= prev, "not monotonic at raw={raw} for ({dry}, {wet})");
            }
            previous = Some(pct);
        }
    }

    let cal = MoistureCalibration::new(3500.0, 1500.0);
    assert_eq!(cal.percentage(3600.0), cal.percentage(100_000.0));
    assert_eq!(cal.percentage(1400.0), cal.percentage(-100_000.0));
}

#[test]
fn test_referential_transparency() {
    for raw in raw_grid() {
        assert_eq!(calibrate(raw, 3500.0, 1500.0).to_bits(), calibrate(raw, 3500.0, 1500.0).to_bits());
        assert_eq!(classify_temperature(raw / 100.0), classify_temperature(raw / 100.0));
        assert_eq!(classify_humidity(raw / 50.0), classify_humidity(raw / 50.0));
        assert_eq!(classify_ph(raw / 300.0), classify_ph(raw / 300.0));
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLASSIFICADORES TOTAIS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_classifiers_are_ordered() {
    // Rótulos só avançam à medida que o valor cresce
    let mut last = TemperatureBand::Cold;
    for i in -100..=600 {
        let band = TemperatureBand::classify(i as f64 / 10.0);
        assert!(band as u8 >= last as u8);
        last = band;
    }

    let mut last = PhBand::VeryAcidic;
    for i in 0..=140 {
        let band = PhBand::classify(i as f64 / 10.0);
        assert!(band.is_valid());
        assert!(band as u8 >= last as u8);
        last = band;
    }
}

#[test]
fn test_weather_lookup_never_fails() {
    for code in -200..=200 {
        let (description, _) = describe_weather(code);
        assert!(!description.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PIPELINE COMPLETO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_snapshot_interpretation_pipeline() {
    let mut snapshot = SensorSnapshot::default();
    for (kind, value) in [
        ("temperature", 36.2),
        ("humidity", 41.0),
        ("moisture", 1000.0),
        ("ph", 5.2),
    ] {
        snapshot.set(kind.parse().unwrap(), Some(value));
    }

    let result = interpret(&snapshot, Some(&MoistureCalibration::default()));
    assert_eq!(result.temperature.unwrap().band.label(), "Hot");
    assert_eq!(result.humidity.unwrap().band.label(), "Optimal");
    assert_eq!(result.soil_moisture, Some(100.0));
    assert_eq!(result.ph.unwrap().band.label(), "Very Acidic");
}

#[test]
fn test_interpretation_serializes_labels() {
    let snapshot = SensorSnapshot::default().with(SensorKind::Humidity, 85.0);
    let result = interpret(&snapshot, None);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"Very Humid\""));
}
