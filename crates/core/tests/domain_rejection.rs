//! Input Domain Tests
//!
//! Out-of-range and non-finite inputs must come back as errors naming the input, never as a
//! panic or a silently clamped number.
//!
//! Run tests with: cargo test --test `domain_rejection`

mod common;

use fwi_core::{
    compute_bui, compute_dc, compute_dmc, compute_dsr, compute_ffmc, compute_fwi,
    compute_hourly_ffmc, compute_isi, run_daily_pipeline, FireCodeState, FwiError,
    HourlyObservation, KilometersPerHour, PipelineOptions, WeatherObservation,
};

fn noon() -> WeatherObservation {
    WeatherObservation::new(17.0, 42.0, 25.0, 0.0, 49.75, 7)
}

fn rejected_input(result: fwi_core::Result<impl std::fmt::Debug>) -> &'static str {
    match result {
        Err(FwiError::OutOfDomain { input, .. } | FwiError::NonFinite { input, .. }) => input,
        other => panic!("expected a domain error, got {other:?}"),
    }
}

#[test]
fn test_pipeline_names_each_bad_field() {
    let options = PipelineOptions::default();
    let cases: [(&str, fn(&mut WeatherObservation)); 7] = [
        ("temperature", |obs| obs.temperature = f64::NAN.into()),
        ("relative_humidity", |obs| obs.relative_humidity = (-1.0).into()),
        ("relative_humidity", |obs| obs.relative_humidity = 100.01.into()),
        ("wind_speed", |obs| obs.wind_speed = (-5.0).into()),
        ("precipitation", |obs| obs.precipitation = f64::INFINITY.into()),
        ("latitude", |obs| obs.latitude = 90.5.into()),
        ("latitude", |obs| obs.latitude = (-91.0).into()),
    ];

    for (expected, corrupt) in cases {
        let mut obs = noon();
        corrupt(&mut obs);
        let result = run_daily_pipeline(&FireCodeState::STARTUP, &obs, &options);
        assert_eq!(rejected_input(result), expected);
    }
}

#[test]
fn test_pipeline_rejects_bad_month() {
    for month in [0, 13, 255] {
        let mut obs = noon();
        obs.month = month;
        let err = run_daily_pipeline(&FireCodeState::STARTUP, &obs, &PipelineOptions::default())
            .unwrap_err();
        assert_eq!(err, FwiError::InvalidMonth { month });
        assert!(err.is_domain_error());
    }
}

#[test]
fn test_pipeline_rejects_bad_previous_codes() {
    let options = PipelineOptions::default();
    let cases = [
        (FireCodeState::new(-0.1, 6.0, 15.0), "ffmc"),
        (FireCodeState::new(101.1, 6.0, 15.0), "ffmc"),
        (FireCodeState::new(85.0, -6.0, 15.0), "dmc"),
        (FireCodeState::new(85.0, 6.0, f64::NAN), "dc"),
    ];
    for (state, expected) in cases {
        assert_eq!(
            rejected_input(run_daily_pipeline(&state, &noon(), &options)),
            expected
        );
    }
}

#[test]
fn test_inclusive_bounds_are_accepted() {
    let options = PipelineOptions::default();
    let edges = [
        WeatherObservation::new(-40.0, 0.0, 0.0, 0.0, -90.0, 1),
        WeatherObservation::new(45.0, 100.0, 120.0, 150.0, 90.0, 12),
    ];
    for obs in edges {
        for state in [
            FireCodeState::new(0.0, 0.0, 0.0),
            FireCodeState::new(101.0, 300.0, 1000.0),
        ] {
            let today = run_daily_pipeline(&state, &obs, &options).unwrap();
            assert!((0.0..=101.0).contains(&today.state.ffmc));
            assert!(today.state.dmc >= 0.0);
            assert!(today.state.dc >= 0.0);
            assert!(today.indices.isi >= 0.0);
            assert!(today.indices.bui >= 0.0);
            assert!(today.indices.fwi >= 0.0);
            assert!(today.indices.dsr >= 0.0);
        }
    }
}

#[test]
fn test_individual_stages_reject_their_inputs() {
    assert_eq!(rejected_input(compute_ffmc(150.0, &noon())), "ffmc");
    assert_eq!(rejected_input(compute_dmc(-1.0, &noon(), true)), "dmc");
    assert_eq!(rejected_input(compute_dc(f64::NEG_INFINITY, &noon(), true)), "dc");
    assert_eq!(
        rejected_input(compute_isi(85.0, KilometersPerHour::new(f64::NAN), false)),
        "wind_speed"
    );
    assert_eq!(rejected_input(compute_bui(10.0, -0.5)), "dc");
    assert_eq!(rejected_input(compute_fwi(-2.0, 10.0)), "isi");
    assert_eq!(rejected_input(compute_fwi(2.0, -10.0)), "bui");
    assert_eq!(rejected_input(compute_dsr(f64::NAN)), "fwi");
}

#[test]
fn test_stages_only_check_fields_they_read() {
    // FFMC and ISI never look at latitude or month
    let mut obs = noon();
    obs.latitude = 200.0.into();
    obs.month = 0;
    assert!(compute_ffmc(85.0, &obs).is_ok());

    // DC does not use humidity
    let mut obs = noon();
    obs.relative_humidity = 180.0.into();
    assert!(compute_dc(15.0, &obs, true).is_ok());
    assert_eq!(rejected_input(compute_dmc(6.0, &obs, true)), "relative_humidity");
}

#[test]
fn test_hourly_rejections() {
    let hour = HourlyObservation::new(20.0, 30.0, 10.0, 0.0);
    assert_eq!(
        compute_hourly_ffmc(85.0, &hour, 0.0),
        Err(FwiError::InvalidTimeStep { hours: 0.0 })
    );
    let wet = HourlyObservation::new(20.0, 30.0, 10.0, -0.1);
    assert_eq!(rejected_input(compute_hourly_ffmc(85.0, &wet, 1.0)), "precipitation");
}

#[test]
fn test_error_messages_name_input_and_range() {
    let mut obs = noon();
    obs.relative_humidity = 150.0.into();
    let err = run_daily_pipeline(&FireCodeState::STARTUP, &obs, &PipelineOptions::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "relative_humidity = 150 is outside its valid range [0, 100]"
    );
}
