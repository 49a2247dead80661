//! End-to-end scenarios with literal inputs: full `Driver` runs against the
//! textbook objectives in `testfunctions.rs`.

mod testfunctions;

use descent_core::core::{Driver, Settings, Vector};
use descent_core::method::direction::{Bfgs, Lbfgs, ModifiedNewton, PureNewton};
use descent_core::method::harness::LineSearchHarness;
use descent_core::method::linesearch::{Backtracking, Bisection};

use testfunctions::{BiggsExp6, Rosenbrock};

#[test]
fn scenario_1_rosenbrock_2d_bfgs_bisection() {
    let driver = Driver::new(
        Box::new(Rosenbrock),
        Vector::from_vec(vec![-1.2, 1.0]),
        Settings::new().with_grad_abs_tol(1e-6),
        Some(Box::new(LineSearchHarness::new(Bfgs::new(), Bisection::new()))),
    )
    .unwrap();
    let result = driver.run().unwrap();

    assert!(result.status().is_success());
    let grad_norm = result.g_star().map(|g| g.norm() / (g.len() as f64).sqrt()).unwrap_or(0.0);
    assert!(grad_norm <= 1e-6 * 10.0);
    let x = result.x_star();
    assert!((x[0] - 1.0).abs() <= 1e-4 * 10.0);
    assert!((x[1] - 1.0).abs() <= 1e-4 * 10.0);
}

#[test]
fn scenario_2_rosenbrock_4d_bfgs_bisection() {
    let driver = Driver::new(
        Box::new(Rosenbrock),
        Vector::from_vec(vec![-150.0, 100.0, 5.0, -6.0]),
        Settings::new().with_grad_abs_tol(1e-12).with_max_iterations(5000),
        Some(Box::new(LineSearchHarness::new(Bfgs::new(), Bisection::new()))),
    )
    .unwrap();
    let result = driver.run().unwrap();

    assert!(result.f_star() <= 1e-4 || result.status().is_success());
}

#[test]
fn scenario_3_gradient_descent_backtracking_is_deterministic() {
    let run = || {
        let driver = Driver::new(
            Box::new(Rosenbrock),
            Vector::from_vec(vec![15.0, 10.0]),
            Settings::new().with_max_iterations(2000),
            Some(Box::new(LineSearchHarness::new(
                descent_core::method::direction::GradientDescent::new(),
                Backtracking::new().with_c1(0.1),
            ))),
        )
        .unwrap();
        driver.run().unwrap()
    };

    let a = run();
    let b = run();
    assert_eq!(a.x_star(), b.x_star());
    assert_eq!(a.f_star(), b.f_star());
}

#[test]
fn scenario_4_biggs_exp6_lbfgs() {
    let driver = Driver::new(
        Box::new(BiggsExp6),
        Vector::from_vec(vec![1.0, 2.0, 1.0, 1.0, 1.0, 1.0]),
        Settings::new().with_grad_abs_tol(1e-8).with_max_iterations(2000),
        Some(Box::new(LineSearchHarness::new(Lbfgs::new(), Bisection::new()))),
    )
    .unwrap();
    let result = driver.run().unwrap();

    assert!(result.f_star() < 1e-4);
}

#[test]
fn scenario_5_pure_newton_converges_quadratically() {
    let driver = Driver::new(
        Box::new(Rosenbrock),
        Vector::from_vec(vec![1.2, 1.2]),
        Settings::new().with_grad_abs_tol(1e-10),
        Some(Box::new(PureNewton::new())),
    )
    .unwrap();
    let result = driver.run().unwrap();

    assert!(result.status().is_success());
    assert!(result.stats().major_iters() < 10);
}

#[test]
fn scenario_6_modified_newton_handles_indefinite_hessian() {
    let driver = Driver::new(
        Box::new(Rosenbrock),
        Vector::from_vec(vec![-1.2, 1.0]),
        Settings::new().with_grad_abs_tol(1e-6).with_max_iterations(500),
        Some(Box::new(LineSearchHarness::new(
            ModifiedNewton::new(),
            Bisection::new(),
        ))),
    )
    .unwrap();
    let result = driver.run().unwrap();

    assert!(result.status().is_success());
}
