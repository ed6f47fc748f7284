//! Design Workflow Tests
//!
//! Worked examples from pole entry through coefficients, export and saved
//! state.

use allpass_core::filter::{PlotDisplay, PlotOptions};
use allpass_core::frequency::FrequencyUnit;
use allpass_core::poles::PoleSource;
use allpass_core::{AllpassError, AllpassFilter, DesignOptions, DesignState, Pole, PoleId, PoleSet};
use approx::assert_relative_eq;
use num_complex::Complex64;

fn assert_coeffs(actual: &[Complex64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(a.re, *e, epsilon = 1e-15);
        assert_relative_eq!(a.im, 0.0, epsilon = 1e-15);
    }
}

// ============================================================================
// Coefficient Scenarios
// ============================================================================

#[test]
fn test_single_real_pole() {
    let options = DesignOptions {
        enforce_real_output: false,
        ..Default::default()
    };
    let filter = AllpassFilter::from_positions(&[Complex64::new(0.5, 0.0)], options).unwrap();

    assert_coeffs(&filter.feedback().to_vec(), &[1.0, -0.5]);
    assert_coeffs(&filter.feedforward().to_vec(), &[-0.5, 1.0]);
}

#[test]
fn test_conjugate_pair_from_enforcement() {
    let mut poles = PoleSet::new();
    poles.push(Pole::new(PoleId(42), Complex64::new(0.0, 0.5))).unwrap();
    let filter = AllpassFilter::new(&poles, DesignOptions::default()).unwrap();

    let effective = filter.effective_poles();
    assert_eq!(effective.len(), 2);
    assert_eq!(effective[0].position, Complex64::new(0.0, 0.5));
    assert_eq!(effective[1].position, Complex64::new(0.0, -0.5));
    assert_eq!(effective[1].source, PoleSource::Conjugate(0));
    assert_eq!(poles.source_id(effective[1].source), Some(PoleId(42)));

    assert_coeffs(&filter.feedback().to_vec(), &[1.0, 0.0, 0.25]);
    assert_coeffs(&filter.feedforward().to_vec(), &[0.25, 0.0, 1.0]);
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_text() {
    let filter = AllpassFilter::from_positions(&[Complex64::new(0.0, 0.5)], DesignOptions::default()).unwrap();
    let table = filter.coefficients();

    assert_eq!(table.ntaps(), 3);
    assert_eq!(
        table.export_text(),
        "feedforward coefficients: 0.25, 0, 1\nfeedback coefficients: 1, 0, 0.25"
    );

    let rendered = table.to_string();
    assert_eq!(rendered.lines().count(), 4);
    assert!(rendered.contains("0.250000"));
}

#[test]
fn test_export_complex_coefficients() {
    let options = DesignOptions {
        enforce_real_output: false,
        ..Default::default()
    };
    let filter = AllpassFilter::from_positions(&[Complex64::new(0.5, 0.0), Complex64::new(0.0, 0.5)], options).unwrap();
    let text = filter.coefficients().export_text();

    // a = [1, -0.5 - 0.5i, 0.25i], b = [-0.25i, -0.5 + 0.5i, 1]
    assert_eq!(
        text,
        "feedforward coefficients: 0 - 0.25i, -0.5 + 0.5i, 1\nfeedback coefficients: 1, -0.5 - 0.5i, 0 + 0.25i"
    );
}

// ============================================================================
// Saved State
// ============================================================================

#[test]
fn test_state_roundtrip_rebuilds_same_filter() {
    let poles = PoleSet::from_poles(vec![
        Pole::from_polar(PoleId(1), 0.9, 45.0),
        Pole::new(PoleId(2), Complex64::new(-0.25, 0.0)),
    ])
    .unwrap();
    let state = DesignState::new(
        poles,
        DesignOptions::default(),
        PlotOptions {
            display: PlotDisplay::Phase,
            resolution: 128,
            x_units: FrequencyUnit::Hz,
            ..Default::default()
        },
    );

    let json = state.to_json().unwrap();
    assert!(json.contains("\"enforceRealOutput\": true"));
    assert!(json.contains("\"plotOptions\""));

    let loaded = DesignState::from_json(&json).unwrap();
    let before = state.filter().unwrap();
    let after = loaded.filter().unwrap();

    assert_eq!(loaded.frequency_axis().npoints(), 128);
    for (x, y) in before.feedback().iter().zip(after.feedback().iter()) {
        assert_relative_eq!(x.re, y.re, epsilon = 1e-12);
        assert_relative_eq!(x.im, y.im, epsilon = 1e-12);
    }
}

#[test]
fn test_plot_from_state() {
    let json = r#"{
        "poles": [{"id": 1, "pos": {"real": 0.3, "imag": 0.6}}],
        "options": {
            "plotOptions": {"display": "group-delay", "resolution": 64, "delayUnits": "seconds"}
        }
    }"#;
    let state = DesignState::from_json(json).unwrap();
    let analysis = state.filter().unwrap().analyze(&state.frequency_axis()).unwrap();
    let series = analysis.plot_series(&state.plot_options);

    assert_eq!(series.x.len(), 64);
    assert_eq!(series.y_label, "group delay (s)");
    for (y, gd) in series.y.iter().zip(analysis.group_delay.iter()) {
        assert_relative_eq!(*y, gd / 48_000.0, epsilon = 1e-15);
    }
}

#[test]
fn test_zero_sample_rate_never_reaches_plot() {
    let json = r#"{
        "poles": [{"id": 1, "pos": {"real": 0.5, "imag": 0.0}}],
        "options": {"sampleRate": 0, "plotOptions": {"display": "group-delay", "delayUnits": "seconds"}}
    }"#;
    assert!(matches!(
        DesignState::from_json(json),
        Err(AllpassError::InvalidSampleRate { .. })
    ));

    let options = DesignOptions {
        sample_rate: 0.0,
        ..Default::default()
    };
    assert!(AllpassFilter::from_positions(&[Complex64::new(0.5, 0.0)], options).is_err());
}

#[test]
fn test_duplicate_pole_ids_rejected() {
    let mut poles = PoleSet::new();
    poles.push(Pole::new(PoleId(1), Complex64::new(0.2, 0.0))).unwrap();
    assert!(poles.push(Pole::new(PoleId(1), Complex64::new(0.3, 0.0))).is_err());

    let json = r#"{"poles": [
        {"id": 9, "pos": {"real": 0.2, "imag": 0.1}},
        {"id": 9, "pos": {"real": 0.3, "imag": 0.0}}
    ]}"#;
    assert!(matches!(
        DesignState::from_json(json),
        Err(AllpassError::DuplicatePoleId { id: PoleId(9) })
    ));
}
