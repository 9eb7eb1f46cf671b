//! Integration tests for the Gaussian elimination solver
//!
//! Randomised systems are generated from a fixed seed and checked by
//! substituting the solution back into the original equations.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use math_audio_equations::{
    AugmentedSystem, EquationSystem, SolverError, gauss_solve, residuals, solve, solve_batch,
};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random diagonally dominant system of order `n`
fn random_system(rng: &mut StdRng, n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut coefficients = vec![vec![0.0; n]; n];
    for (i, row) in coefficients.iter_mut().enumerate() {
        for value in row.iter_mut() {
            *value = rng.random_range(-10.0..10.0);
        }
        let off_diagonal: f64 = row.iter().map(|a: &f64| a.abs()).sum();
        row[i] = off_diagonal + rng.random_range(1.0..5.0);
        if rng.random_range(0..2) == 1 {
            row[i] = -row[i];
        }
    }
    let constants = (0..n).map(|_| rng.random_range(-100.0..100.0)).collect();
    (coefficients, constants)
}

#[test]
fn test_substitution_reproduces_constants() {
    let mut rng = StdRng::seed_from_u64(42);

    for n in 1..=8 {
        for _ in 0..25 {
            let (coefficients, constants) = random_system(&mut rng, n);
            let solution = solve(&coefficients, &constants).expect("system is non-singular");
            assert_eq!(solution.len(), n);

            let r = residuals(&coefficients, &constants, solution.values()).unwrap();
            for (residual, c) in r.iter().zip(&constants) {
                assert!(
                    residual.abs() <= 1e-9 * c.abs().max(1.0),
                    "n = {}: residual {} for constant {}",
                    n,
                    residual,
                    c
                );
            }
        }
    }
}

#[test]
fn test_known_solution_under_row_permutation() {
    let coefficients = vec![
        vec![2.0, -1.0, 0.0, 3.0],
        vec![1.0, 4.0, -2.0, 0.0],
        vec![0.0, 1.0, 5.0, -1.0],
        vec![3.0, 0.0, 1.0, 2.0],
    ];
    let x = [1.0, -2.0, 0.5, 3.0];
    let constants: Vec<f64> = coefficients
        .iter()
        .map(|row| row.iter().zip(&x).map(|(a, xi)| a * xi).sum())
        .collect();

    // Reordering the equations must not reorder the unknowns
    let orders = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];
    for order in orders {
        let permuted: Vec<Vec<f64>> = order.iter().map(|&i| coefficients[i].clone()).collect();
        let permuted_constants: Vec<f64> = order.iter().map(|&i| constants[i]).collect();

        let solution = solve(&permuted, &permuted_constants).unwrap();
        for (value, expected) in solution.values().iter().zip(&x) {
            assert_relative_eq!(*value, *expected, epsilon = 1e-10);
        }
    }
}

#[test]
fn test_identity_returns_constants() {
    for n in 1..=6 {
        let a = Array2::<f64>::eye(n);
        let b = Array1::from_iter((0..n).map(|i| i as f64 * 1.5 - 2.0));

        let x = gauss_solve(&a, &b).unwrap();
        for i in 0..n {
            assert_abs_diff_eq!(x[i], b[i], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_solution_sign_follows_constants() {
    // 2x = 6 must give +3: constants are negated on the way in and back out
    let solution = solve(&[vec![2.0]], &[6.0]).unwrap();
    assert_eq!(solution.values(), &[3.0]);

    let solution = solve(&[vec![1.0, 0.0], vec![0.0, -1.0]], &[-4.0, 4.0]).unwrap();
    assert_abs_diff_eq!(solution[0], -4.0, epsilon = 1e-15);
    assert_abs_diff_eq!(solution[1], -4.0, epsilon = 1e-15);
}

#[test]
fn test_singular_systems() {
    // Two identical equations
    let result = solve(&[vec![1.0, 1.0], vec![1.0, 1.0]], &[2.0, 2.0]);
    assert!(matches!(result, Err(SolverError::SingularMatrix { .. })));

    // Inconsistent equations
    let result = solve(&[vec![1.0, 2.0], vec![2.0, 4.0]], &[1.0, 5.0]);
    assert!(result.unwrap_err().is_singular());

    // Third equation is the sum of the first two
    let result = solve(
        &[
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0],
            vec![1.0, 3.0, 7.0],
        ],
        &[1.0, 2.0, 3.0],
    );
    assert!(result.unwrap_err().is_singular());

    for n in 1..=6 {
        let zeros = vec![vec![0.0; n]; n];
        let result = solve(&zeros, &vec![1.0; n]);
        assert_eq!(result, Err(SolverError::SingularMatrix { pivot: 0 }));
    }
}

#[test]
fn test_invalid_dimensions() {
    assert!(solve::<f64>(&[], &[]).unwrap_err().is_dimension_error());
    assert!(
        AugmentedSystem::<f64>::from_rows(&[])
            .unwrap_err()
            .is_dimension_error()
    );
    assert!(
        solve(&[vec![1.0, 2.0], vec![3.0, 4.0]], &[1.0, 2.0, 3.0])
            .unwrap_err()
            .is_dimension_error()
    );
    assert!(
        gauss_solve(&Array2::<f64>::zeros((0, 0)), &Array1::zeros(0))
            .unwrap_err()
            .is_dimension_error()
    );
}

#[test]
fn test_step_by_step_matches_solve() {
    let mut rng = StdRng::seed_from_u64(7);
    let (coefficients, constants) = random_system(&mut rng, 5);

    let mut system = AugmentedSystem::new(&coefficients, &constants).unwrap();
    assert_eq!(system.order(), 5);
    system.forward_eliminate().unwrap();

    let m = system.matrix();
    for i in 0..5 {
        for j in 0..i {
            assert_eq!(m.get(i, j).unwrap(), 0.0);
        }
    }

    system.back_substitute().unwrap();
    let stepwise = system.into_solution();
    let direct = solve(&coefficients, &constants).unwrap();
    assert_eq!(stepwise, direct);
}

#[test]
fn test_batch_matches_individual_solves() {
    let mut rng = StdRng::seed_from_u64(1234);
    let systems: Vec<EquationSystem> = (0..32)
        .map(|k| {
            let (coefficients, constants) = random_system(&mut rng, 2 + k % 4);
            EquationSystem::new(coefficients, constants)
        })
        .collect();

    let batch = solve_batch(&systems);
    for (system, result) in systems.iter().zip(batch) {
        assert_eq!(result, system.solve());
    }
}
