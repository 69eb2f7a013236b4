use num_complex::Complex64;
use thiserror::Error;

/// Scale applied to `distance_per_pixel` for one zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 0.75;
/// Scale applied to `distance_per_pixel` for one zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 1.25;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("distance per pixel must be positive and finite: {0}")]
    InvalidDistancePerPixel(f64),
    #[error("viewport centre must be finite: ({real}, {imag})")]
    NonFiniteCentre { real: f64, imag: f64 },
    #[error("{width}x{height} frame at {distance_per_pixel} per pixel does not fit in f64")]
    FrameOverflow {
        width: u32,
        height: u32,
        distance_per_pixel: f64,
    },
}

/// A pixel grid laid over the complex plane.
///
/// Pixel `(i, j)` maps to `top_left + (i, j) * distance_per_pixel`, where
/// `top_left` sits half the grid to the left of and above `center`. Rows grow
/// along the positive imaginary axis.
///
/// Viewports are values: every navigation method returns a new one and the
/// previous frame is invalidated by the caller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    center: Complex64,
    distance_per_pixel: f64,
}

impl Viewport {
    pub fn new(
        width: u32,
        height: u32,
        center: Complex64,
        distance_per_pixel: f64,
    ) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if !distance_per_pixel.is_finite() || distance_per_pixel <= 0.0 {
            return Err(ViewportError::InvalidDistancePerPixel(distance_per_pixel));
        }

        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(ViewportError::NonFiniteCentre {
                real: center.re,
                imag: center.im,
            });
        }

        let viewport = Self {
            width,
            height,
            center,
            distance_per_pixel,
        };

        if !viewport.corners_are_finite() {
            return Err(ViewportError::FrameOverflow {
                width,
                height,
                distance_per_pixel,
            });
        }

        Ok(viewport)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn center(&self) -> Complex64 {
        self.center
    }

    #[must_use]
    pub fn distance_per_pixel(&self) -> f64 {
        self.distance_per_pixel
    }

    /// World coordinate of pixel `(0, 0)`.
    #[must_use]
    pub fn top_left(&self) -> Complex64 {
        Complex64::new(
            self.center.re - (f64::from(self.width) / 2.0) * self.distance_per_pixel,
            self.center.im - (f64::from(self.height) / 2.0) * self.distance_per_pixel,
        )
    }

    /// World coordinate of pixel `(i, j)`. Does not check bounds.
    #[inline]
    #[must_use]
    pub fn pixel_to_complex(&self, i: u32, j: u32) -> Complex64 {
        let top_left = self.top_left();

        Complex64::new(
            top_left.re + f64::from(i) * self.distance_per_pixel,
            top_left.im + f64::from(j) * self.distance_per_pixel,
        )
    }

    #[must_use]
    pub fn contains_pixel(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Translates the centre by a pixel delta, or `None` if the moved frame
    /// would leave the finite plane.
    #[must_use]
    pub fn panned(&self, dx_pixels: i64, dy_pixels: i64) -> Option<Self> {
        let offset = Complex64::new(
            dx_pixels as f64 * self.distance_per_pixel,
            dy_pixels as f64 * self.distance_per_pixel,
        );

        Self::new(
            self.width,
            self.height,
            self.center + offset,
            self.distance_per_pixel,
        )
        .ok()
    }

    /// Moves the centre onto a clicked pixel, or `None` if the pixel is off-screen.
    ///
    /// The offset is measured from the integer half-size of the grid, so for odd
    /// dimensions the middle pixel is the one rounded down.
    #[must_use]
    pub fn recentered_on_pixel(&self, x: i64, y: i64) -> Option<Self> {
        if !self.contains_pixel(x, y) {
            return None;
        }

        let dx = x - i64::from(self.width / 2);
        let dy = y - i64::from(self.height / 2);

        self.panned(dx, dy)
    }

    #[must_use]
    pub fn zoomed_in(&self) -> Self {
        self.scaled(ZOOM_IN_FACTOR)
    }

    #[must_use]
    pub fn zoomed_out(&self) -> Self {
        self.scaled(ZOOM_OUT_FACTOR)
    }

    /// Same centre and scale on a grid of a different size.
    pub fn resized(&self, width: u32, height: u32) -> Result<Self, ViewportError> {
        Self::new(width, height, self.center, self.distance_per_pixel)
    }

    // zooming saturates: a scale that underflows to zero or overflows the
    // frame leaves the viewport as it was
    fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.width,
            self.height,
            self.center,
            self.distance_per_pixel * factor,
        )
        .unwrap_or(*self)
    }

    fn corners_are_finite(&self) -> bool {
        let top_left = self.top_left();
        let bottom_right = Complex64::new(
            top_left.re + f64::from(self.width) * self.distance_per_pixel,
            top_left.im + f64::from(self.height) * self.distance_per_pixel,
        );

        top_left.is_finite() && bottom_right.is_finite()
    }
}
