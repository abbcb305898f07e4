use approx::assert_relative_eq;

use pkform_core::Problem;

use crate::LengthMismatch;

use super::{Action, Error, Event, solve, solve_checked, solve_into, solve_observed, solve_problem};

#[test]
fn solves_three_variable_square() {
    let x = solve(&[1.0; 3], &[2.0; 3], 10.0, 1.5, 3).expect("should solve");

    assert_relative_eq!(x[0], 7.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(x[1], 1.5_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(x[2], 1.5_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn single_variable_ignores_k() {
    for k in [-3.0, 0.0, 2.5, 1e6] {
        let x = solve(&[2.0], &[3.0], 54.0, k, 1).expect("should solve");

        assert_eq!(x.len(), 1);
        assert_relative_eq!(x[0], 3.0, epsilon = 1e-12);
    }
}

#[test]
fn first_variable_absorbs_residual() {
    let a = [0.5, 2.0, 4.0, 1.5];
    let p = [3.0, 1.0, 2.0, 0.5];
    let (b, k) = (40.0, 3.0);

    let x = solve(&a, &p, b, k, 4).expect("should solve");

    assert_relative_eq!(a[0] * x[0].powf(p[0]), b - 3.0 * k, epsilon = 1e-12);
    for i in 1..4 {
        assert_relative_eq!(a[i] * x[i].powf(p[i]), k, epsilon = 1e-12);
    }
}

#[test]
fn matches_formula_bit_for_bit() {
    let a = [1.5, 0.25, 3.0];
    let p = [2.5, 1.5, 4.0];
    let (b, k) = (17.0, 1.25);

    let x = solve(&a, &p, b, k, 3).expect("should solve");

    assert_eq!(x[0].to_bits(), ((b - 2.0 * k) / a[0]).powf(1.0 / p[0]).to_bits());
    assert_eq!(x[1].to_bits(), (k / a[1]).powf(1.0 / p[1]).to_bits());
    assert_eq!(x[2].to_bits(), (k / a[2]).powf(1.0 / p[2]).to_bits());
}

#[test]
fn negative_residual_under_square_root_is_nan() {
    // b − (n−1)·k = 1 − 2·2 < 0
    let x = solve(&[1.0; 3], &[2.0; 3], 1.0, 2.0, 3).expect("degeneracy is not an error");

    assert!(x[0].is_nan());
    assert_relative_eq!(x[1], 2.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn zero_coefficient_propagates_infinity() {
    let x = solve(&[0.0, 1.0], &[2.0, 2.0], 5.0, 1.0, 2).expect("degeneracy is not an error");

    assert_eq!(x[0], f64::INFINITY);
    assert_relative_eq!(x[1], 1.0);
}

#[test]
fn errors_on_zero_size() {
    let result = solve(&[], &[], 1.0, 1.0, 0);
    assert_eq!(result, Err(Error::InvalidSize { n: 0 }));
}

#[test]
fn size_is_checked_before_lengths() {
    let result = solve(&[1.0], &[2.0], 1.0, 1.0, 0);
    assert_eq!(result, Err(Error::InvalidSize { n: 0 }));
}

#[test]
fn errors_on_mismatched_lengths() {
    let result = solve(&[1.0, 1.0], &[2.0, 2.0, 2.0], 1.0, 1.0, 3);
    assert_eq!(
        result,
        Err(Error::LengthMismatch(LengthMismatch {
            input: "coefficients",
            expected: 3,
            actual: 2,
        }))
    );

    let result = solve(&[1.0, 1.0], &[2.0], 1.0, 1.0, 2);
    assert!(matches!(
        result,
        Err(Error::LengthMismatch(LengthMismatch {
            input: "exponents",
            ..
        }))
    ));
}

#[test]
fn solve_into_fills_buffer() {
    let mut x = [0.0; 4];
    solve_into(&[1.0; 4], &[2.0; 4], 25.0, 4.0, &mut x).expect("should solve");

    assert_relative_eq!(x[0], 13.0_f64.sqrt(), epsilon = 1e-12);
    assert!(x[1..].iter().all(|&xi| (xi - 2.0).abs() < 1e-12));
}

#[test]
fn solve_into_leaves_buffer_on_error() {
    let mut x = [7.0; 2];
    let result = solve_into(&[1.0; 3], &[2.0; 2], 1.0, 1.0, &mut x);

    assert!(matches!(result, Err(Error::LengthMismatch(_))));
    assert_eq!(x, [7.0; 2]);

    let result = solve_into(&[], &[], 1.0, 1.0, &mut []);
    assert_eq!(result, Err(Error::InvalidSize { n: 0 }));
}

#[test]
fn solve_problem_matches_slices() {
    let problem = Problem::new(vec![1.0, 2.0, 0.5], vec![2.0, 3.0, 1.0], 12.0).unwrap();

    let from_problem = solve_problem(&problem, 1.0);
    let from_slices = solve(problem.coefficients(), problem.exponents(), 12.0, 1.0, 3).unwrap();

    assert_eq!(from_problem, from_slices);
}

#[test]
fn observer_sees_every_variable() {
    let mut events = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        events.push(*event);
        None
    };

    let x = solve_observed(&[1.0; 3], &[2.0; 3], 10.0, 2.0, 3, observer).expect("should solve");

    assert_eq!(events.len(), 3);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.index, i);
        assert_eq!(event.value.to_bits(), x[i].to_bits());
        assert!(event.is_finite());
    }
    assert_relative_eq!(events[0].share, 6.0);
    assert_relative_eq!(events[1].share, 2.0);
}

#[test]
fn observer_can_stop_on_non_finite_value() {
    let mut calls = 0usize;
    let observer = |event: &Event| {
        calls += 1;
        if event.is_finite() {
            None
        } else {
            Some(Action::StopEarly)
        }
    };

    // x_1 = (1/0)^(1/2) = inf
    let result = solve_observed(&[1.0, 0.0, 1.0], &[2.0; 3], 10.0, 1.0, 3, observer);

    assert_eq!(result, Err(Error::StoppedByObserver { index: 1 }));
    assert_eq!(calls, 2);
}

#[test]
fn checked_solve_reports_verification() {
    let checked = solve_checked(&[1.0; 3], &[2.0; 3], 10.0, 1.5, 3).expect("should solve");

    assert!(checked.is_valid());
    assert!(checked.verification.error < 1e-10);
    assert_relative_eq!(checked.verification.constraint_value, 10.0, epsilon = 1e-12);
}

#[test]
fn checked_solve_flags_degenerate_solution() {
    let checked = solve_checked(&[1.0; 2], &[2.0; 2], 1.0, 5.0, 2).expect("should solve");

    assert!(checked.x[0].is_nan());
    assert!(!checked.is_valid());
}
