use num_complex::Complex64;

/// Per-frame iteration settings.
///
/// `z0` seeds the orbit. Zero gives the classic Mandelbrot set; any other seed
/// gives the Julia-style variant of the same recurrence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationParams {
    max_iterations: u32,
    z0: Complex64,
}

impl IterationParams {
    #[must_use]
    pub const fn new(max_iterations: u32, z0: Complex64) -> Self {
        Self { max_iterations, z0 }
    }

    #[must_use]
    pub const fn mandelbrot(max_iterations: u32) -> Self {
        Self::new(max_iterations, Complex64::new(0.0, 0.0))
    }

    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub const fn z0(&self) -> Complex64 {
        self.z0
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        if self.z0 == Complex64::new(0.0, 0.0) {
            "Mandelbrot"
        } else {
            "Mandelbrot (seeded z0)"
        }
    }

    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }
}
