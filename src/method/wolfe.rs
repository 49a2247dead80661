//! Wolfe predicates: pure functions over scalars.
//!
//! Callers are responsible for `g0 < 0`, `alpha > 0`, `0 < c1 < c2 < 1`;
//! these functions check only the inequality named, exactly as the
//! specification's contract states.

/// Armijo / sufficient-decrease condition: `f(alpha) <= f0 + c1*alpha*g0`.
pub fn armijo(f_alpha: f64, f0: f64, g0: f64, alpha: f64, c1: f64) -> bool {
    f_alpha <= f0 + c1 * alpha * g0
}

/// Weak Wolfe: Armijo AND `g(alpha) >= c2*g0`.
pub fn weak_wolfe(f_alpha: f64, f0: f64, g0: f64, g_alpha: f64, alpha: f64, c1: f64, c2: f64) -> bool {
    armijo(f_alpha, f0, g0, alpha, c1) && g_alpha >= c2 * g0
}

/// Strong Wolfe: Armijo AND `|g(alpha)| <= c2*|g0|`.
pub fn strong_wolfe(
    f_alpha: f64,
    f0: f64,
    g0: f64,
    g_alpha: f64,
    alpha: f64,
    c1: f64,
    c2: f64,
) -> bool {
    armijo(f_alpha, f0, g0, alpha, c1) && g_alpha.abs() <= c2 * g0.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armijo_accepts_sufficient_decrease() {
        // f0=10, g0=-2, c1=0.1, alpha=1 -> threshold = 10 - 0.2 = 9.8
        assert!(armijo(9.5, 10.0, -2.0, 1.0, 0.1));
        assert!(!armijo(9.9, 10.0, -2.0, 1.0, 0.1));
    }

    #[test]
    fn weak_wolfe_requires_curvature() {
        assert!(weak_wolfe(9.0, 10.0, -2.0, -1.0, 1.0, 0.1, 0.5));
        assert!(!weak_wolfe(9.0, 10.0, -2.0, -1.5, 1.0, 0.1, 0.5));
    }

    #[test]
    fn strong_wolfe_bounds_curvature_magnitude() {
        assert!(strong_wolfe(9.0, 10.0, -2.0, 0.5, 1.0, 0.1, 0.9));
        assert!(!strong_wolfe(9.0, 10.0, -2.0, -2.5, 1.0, 0.1, 0.9));
    }
}
