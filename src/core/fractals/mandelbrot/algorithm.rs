use crate::core::fractals::mandelbrot::params::IterationParams;
use num_complex::Complex64;

pub const ESCAPE_RADIUS: f64 = 2.0;

/// Number of steps of `z = z² + c` survived before `|z| >= 2`, capped at
/// `max_iterations`.
///
/// `c = x + yi` and the orbit starts at `params.z0()`. The modulus is tested
/// before each step, so a seed already outside the escape radius returns 0.
/// A return value equal to `max_iterations` means the orbit never escaped.
#[inline]
#[must_use]
pub fn iterations_until_divergence(x: f64, y: f64, params: IterationParams) -> u32 {
    let c = Complex64::new(x, y);
    let mut z = params.z0();

    for iteration in 0..params.max_iterations() {
        if z.norm() >= ESCAPE_RADIUS {
            return iteration;
        }
        z = z * z + c;
    }

    params.max_iterations()
}
