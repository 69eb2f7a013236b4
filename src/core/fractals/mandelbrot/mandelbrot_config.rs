use num_complex::Complex64;

use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::params::IterationParams;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 640;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;
pub const DEFAULT_DISTANCE_PER_PIXEL: f64 = 0.009155;
pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;

/// Starting parameters for a session, before they are validated into a
/// [`Viewport`] and [`IterationParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub width: u32,
    pub height: u32,
    pub center: Complex64,
    pub distance_per_pixel: f64,
    pub max_iterations: u32,
    pub z0: Complex64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center: Complex64::new(DEFAULT_CENTER_X, DEFAULT_CENTER_Y),
            distance_per_pixel: DEFAULT_DISTANCE_PER_PIXEL,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            z0: Complex64::new(0.0, 0.0),
        }
    }
}

impl MandelbrotConfig {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(self.width, self.height, self.center, self.distance_per_pixel)
    }

    #[must_use]
    pub fn iteration_params(&self) -> IterationParams {
        IterationParams::new(self.max_iterations, self.z0)
    }
}
