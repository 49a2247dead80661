//! BFGS (full inverse-Hessian).

use crate::core::errors::{descent_error, Error};
use crate::core::linalg::{dot, identity, inner, mul_vec, norm2, sym_rank_one, sym_rank_two, Matrix, Vector};
use crate::core::location::Location;
use crate::method::direction::DirectionEngine;

/// Maintains a dense symmetric inverse-Hessian approximation `H`, updated
/// via the combined rank-one/rank-two BFGS formula.
pub struct Bfgs {
    h: Option<Matrix>,
    x_prev: Option<Vector>,
    g_prev: Option<Vector>,
    first_update_pending: bool,
}

impl Bfgs {
    pub fn new() -> Self {
        Bfgs {
            h: None,
            x_prev: None,
            g_prev: None,
            first_update_pending: true,
        }
    }
}

impl Default for Bfgs {
    fn default() -> Self {
        Bfgs::new()
    }
}

impl DirectionEngine for Bfgs {
    fn name(&self) -> &'static str {
        "BFGS"
    }

    fn init_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        let n = loc.n();
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "BFGS requires a gradient"))?;
        self.h = Some(identity(n));
        self.first_update_pending = true;
        let d = -g;
        let alpha0 = 1.0 / norm2(&d);
        self.x_prev = Some(loc.x().clone());
        self.g_prev = Some(g.clone());
        Ok((d, alpha0))
    }

    fn next_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        let n = loc.n();
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "BFGS requires a gradient"))?
            .clone();
        let x = loc.x().clone();
        let x_prev = self
            .x_prev
            .take()
            .ok_or_else(|| descent_error!(MethodError, "init_direction was not called"))?;
        let g_prev = self.g_prev.take().expect("set alongside x_prev");

        let s = &x - &x_prev;
        let y = &g - &g_prev;
        let sy = dot(&s, &y);

        if sy > 0.0 {
            if self.first_update_pending {
                let yy = dot(&y, &y);
                if yy > 0.0 {
                    self.h = Some(identity(n) * (sy / yy));
                }
                self.first_update_pending = false;
            }

            let h = self.h.clone().expect("initialized in init_direction");
            let mut hy = Vector::zeros(n);
            mul_vec(&h, &y, &mut hy);
            let yhy = inner(&y, &h, &y);
            let rho = 1.0 / sy;
            let coeff = (1.0 + yhy * rho) * rho;

            let mut h_new = h;
            sym_rank_one(&mut h_new, coeff, &s);
            sym_rank_two(&mut h_new, -rho, &hy, &s);
            self.h = Some(h_new);
        }

        let h = self.h.as_ref().expect("initialized in init_direction");
        let mut d = Vector::zeros(n);
        mul_vec(h, &g, &mut d);
        d = -d;

        self.x_prev = Some(x);
        self.g_prev = Some(g);

        Ok((d, 1.0))
    }
}
