use practime::engine::practice::{
    PracticeParameters, PracticeResult, RawPracticeInput, ValidationErrorKind, calculate,
    sweep_step_sizes,
};

fn input(a: f64, b: f64, s: f64, beats: f64, reps: f64, sets: f64) -> RawPracticeInput {
    RawPracticeInput {
        start_tempo: a,
        end_tempo: b,
        step_size: s,
        beats_per_phrase: beats,
        repetitions: reps,
        sets,
    }
}

fn kind(raw: RawPracticeInput) -> ValidationErrorKind {
    calculate(&raw).expect_err("input should be rejected").kind()
}

#[test]
fn validation_scenarios() {
    assert_eq!(
        kind(input(0.0, 120.0, 5.0, 4.0, 2.0, 1.0)),
        ValidationErrorKind::NonPositiveTempo
    );
    assert_eq!(
        kind(input(120.0, 100.0, 5.0, 4.0, 2.0, 1.0)),
        ValidationErrorKind::InvalidTempoRange
    );
    assert_eq!(
        kind(input(60.0, 120.0, 0.0, 4.0, 2.0, 1.0)),
        ValidationErrorKind::NonPositiveStep
    );
    assert_eq!(
        kind(input(60.0, 120.0, 5.0, 0.0, 2.0, 1.0)),
        ValidationErrorKind::NonPositiveCount
    );
}

#[test]
fn step_count_and_end_tempo_bounds() {
    for &(a, b, s) in &[
        (60.0, 120.0, 10.0),
        (60.0, 100.0, 7.0),
        (72.5, 141.0, 2.25),
        (100.0, 101.0, 5.0),
        (40.0, 208.0, 0.5),
    ] {
        let params = PracticeParameters::new(a, b, s, 4, 4, 1).unwrap();
        let n = params.step_count();
        let end = params.actual_end_tempo();

        assert_eq!(n as f64, ((b - a) / s).floor());
        assert_eq!(end, a + n as f64 * s);
        assert!(a <= end && end <= b, "{a}..{b} step {s}: end {end}");
        assert!(end < b + s);
    }
}

#[test]
fn single_step_boundary() {
    let result = calculate(&input(100.0, 101.0, 5.0, 4.0, 4.0, 2.0)).unwrap();
    assert_eq!(result.step_count, 0);
    assert_eq!(result.exact_seconds, result.time_constant / 100.0 * 2.0);
    assert!(result.approx_seconds.is_finite());
    assert!(result.error_rate_percent.abs() < 1e-10);
}

#[test]
fn approximation_error_stays_small_for_an_octave() {
    for s in [30.0, 20.0, 15.0, 12.0, 10.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.5] {
        let result = calculate(&input(60.0, 120.0, s, 4.0, 2.0, 3.0)).unwrap();
        assert!(
            result.error_rate_percent.abs() < 2.0,
            "step {s}: error {}%",
            result.error_rate_percent
        );
    }
}

#[test]
fn approximation_error_settles_as_steps_shrink() {
    let points = sweep_step_sizes(
        &input(60.0, 120.0, 1.0, 4.0, 2.0, 3.0),
        &[20.0, 10.0, 2.0, 1.0, 0.5],
    );
    let errors: Vec<f64> = points
        .iter()
        .map(|p| p.result().expect("valid step").error_rate_percent)
        .collect();

    let coarse_change = (errors[1] - errors[0]).abs();
    let mid_change = (errors[3] - errors[2]).abs();
    let fine_change = (errors[4] - errors[3]).abs();
    assert!(mid_change < coarse_change);
    assert!(fine_change < mid_change);
}

#[test]
fn concurrent_calls_agree_bit_for_bit() {
    let raw = input(63.0, 177.0, 0.75, 3.0, 5.0, 2.0);
    let expected = calculate(&raw).unwrap();

    let results: Vec<PracticeResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| calculate(&raw).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(
            result.exact_seconds.to_bits(),
            expected.exact_seconds.to_bits()
        );
        assert_eq!(
            result.approx_seconds.to_bits(),
            expected.approx_seconds.to_bits()
        );
    }
}
