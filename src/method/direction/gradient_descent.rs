//! Gradient descent.

use crate::core::errors::{descent_error, Error};
use crate::core::linalg::{dot, norm2, Vector};
use crate::core::location::Location;
use crate::method::direction::DirectionEngine;
use crate::method::stepseed::{Quadratic, StepSeeder};

/// `d = -g`, with the initial step for each new direction proposed by a
/// [`StepSeeder`] (default [`Quadratic`]).
pub struct GradientDescent<S: StepSeeder = Quadratic> {
    seeder: S,
    x_prev: Option<Vector>,
    d_prev: Option<Vector>,
    g_prev_dot_d_prev: Option<f64>,
    f_prev: Option<f64>,
}

impl GradientDescent<Quadratic> {
    pub fn new() -> Self {
        GradientDescent::with_seeder(Quadratic::new())
    }
}

impl Default for GradientDescent<Quadratic> {
    fn default() -> Self {
        GradientDescent::new()
    }
}

impl<S: StepSeeder> GradientDescent<S> {
    pub fn with_seeder(seeder: S) -> Self {
        GradientDescent {
            seeder,
            x_prev: None,
            d_prev: None,
            g_prev_dot_d_prev: None,
            f_prev: None,
        }
    }
}

impl<S: StepSeeder> DirectionEngine for GradientDescent<S> {
    fn name(&self) -> &'static str {
        "GradientDescent"
    }

    fn init_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "gradient descent requires a gradient"))?;
        let d = -g;
        let alpha0 = self.seeder.seed_initial(g);
        self.x_prev = Some(loc.x().clone());
        self.d_prev = Some(d.clone());
        self.g_prev_dot_d_prev = Some(dot(g, &d));
        self.f_prev = Some(loc.f());
        Ok((d, alpha0))
    }

    fn next_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "gradient descent requires a gradient"))?;
        let d = -g;

        let x_prev = self
            .x_prev
            .as_ref()
            .ok_or_else(|| descent_error!(MethodError, "init_direction was not called"))?;
        let d_prev = self.d_prev.as_ref().expect("set alongside x_prev");
        let alpha_prev = norm2(&(loc.x() - x_prev)) / norm2(d_prev);

        let alpha0 = self.seeder.seed_next(
            self.f_prev.expect("set alongside x_prev"),
            loc.f(),
            self.g_prev_dot_d_prev.expect("set alongside x_prev"),
            alpha_prev,
        );

        self.x_prev = Some(loc.x().clone());
        self.d_prev = Some(d.clone());
        self.g_prev_dot_d_prev = Some(dot(g, &d));
        self.f_prev = Some(loc.f());

        Ok((d, alpha0))
    }
}
