use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::iterations_until_divergence;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_scheme_factory;
use crate::core::fractals::mandelbrot::params::IterationParams;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderFrameError {
    /// The caller skipped the resize-or-reuse step before rendering.
    #[error("buffer {buffer_width}x{buffer_height} vs frame {viewport_width}x{viewport_height}")]
    BufferSizeMismatch {
        buffer_width: u32,
        buffer_height: u32,
        viewport_width: u32,
        viewport_height: u32,
    },
    /// The frame was abandoned; buffer contents are partial and should be discarded.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// Renders one frame into `buffer`, colouring with `palette` when present and
/// with the two-tone default otherwise.
///
/// `buffer` must already match the viewport (see [`PixelBuffer::ensure_size`]).
pub fn render(
    viewport: &Viewport,
    params: IterationParams,
    palette: Option<&Palette>,
    buffer: &mut PixelBuffer,
) -> Result<(), RenderFrameError> {
    let colour_map = mandelbrot_colour_scheme_factory(palette, params.max_iterations());

    render_frame(viewport, params, &colour_map, buffer)
}

/// Renders rows in parallel on the rayon pool.
///
/// For cancel-aware rendering, use [`render_frame_cancelable`].
pub fn render_frame<CMap>(
    viewport: &Viewport,
    params: IterationParams,
    colour_map: &CMap,
    buffer: &mut PixelBuffer,
) -> Result<(), RenderFrameError>
where
    CMap: ColourMap + Sync,
{
    render_frame_cancelable(viewport, params, colour_map, buffer, &NeverCancel)
}

/// Like [`render_frame`], but polls `cancel` at the start of every row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// Returns [`RenderFrameError::Cancelled`] as soon as a worker sees the token set.
pub fn render_frame_cancelable<CMap, C>(
    viewport: &Viewport,
    params: IterationParams,
    colour_map: &CMap,
    buffer: &mut PixelBuffer,
    cancel: &C,
) -> Result<(), RenderFrameError>
where
    CMap: ColourMap + Sync,
    C: CancelToken,
{
    check_buffer_size(viewport, buffer)?;

    let walk = RowWalk::new(viewport);

    // each row is a disjoint slice, so workers never share output bytes
    buffer
        .buffer_mut()
        .par_chunks_mut(walk.row_bytes)
        .enumerate()
        .try_for_each(|(j, row)| walk.render_row_cancelable(j, row, params, colour_map, cancel))?;

    Ok(())
}

/// Single-threaded row-major walk, producing the same bytes as [`render_frame`].
pub fn render_frame_serial<CMap: ColourMap>(
    viewport: &Viewport,
    params: IterationParams,
    colour_map: &CMap,
    buffer: &mut PixelBuffer,
) -> Result<(), RenderFrameError> {
    check_buffer_size(viewport, buffer)?;

    let walk = RowWalk::new(viewport);

    for (j, row) in buffer.buffer_mut().chunks_exact_mut(walk.row_bytes).enumerate() {
        walk.render_row(j, row, params, colour_map);
    }

    Ok(())
}

fn check_buffer_size(viewport: &Viewport, buffer: &PixelBuffer) -> Result<(), RenderFrameError> {
    if buffer.matches(viewport) {
        return Ok(());
    }

    Err(RenderFrameError::BufferSizeMismatch {
        buffer_width: buffer.width(),
        buffer_height: buffer.height(),
        viewport_width: viewport.width(),
        viewport_height: viewport.height(),
    })
}

/// Per-frame constants shared by every row.
struct RowWalk {
    left: f64,
    top: f64,
    distance_per_pixel: f64,
    row_bytes: usize,
}

impl RowWalk {
    fn new(viewport: &Viewport) -> Self {
        let top_left = viewport.top_left();

        Self {
            left: top_left.re,
            top: top_left.im,
            distance_per_pixel: viewport.distance_per_pixel(),
            row_bytes: viewport.width() as usize * BYTES_PER_PIXEL,
        }
    }

    #[inline]
    fn row_imag(&self, j: usize) -> f64 {
        self.top + j as f64 * self.distance_per_pixel
    }

    #[inline]
    fn render_pixel<CMap: ColourMap>(
        &self,
        i: usize,
        y: f64,
        pixel: &mut [u8],
        params: IterationParams,
        colour_map: &CMap,
    ) {
        let x = self.left + i as f64 * self.distance_per_pixel;
        let iterations = iterations_until_divergence(x, y, params);

        pixel.copy_from_slice(&colour_map.map(iterations).to_rgba());
    }

    fn render_row<CMap: ColourMap>(
        &self,
        j: usize,
        row: &mut [u8],
        params: IterationParams,
        colour_map: &CMap,
    ) {
        let y = self.row_imag(j);

        for (i, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            self.render_pixel(i, y, pixel, params, colour_map);
        }
    }

    fn render_row_cancelable<CMap: ColourMap, C: CancelToken>(
        &self,
        j: usize,
        row: &mut [u8],
        params: IterationParams,
        colour_map: &CMap,
        cancel: &C,
    ) -> Result<(), Cancelled> {
        let y = self.row_imag(j);

        for (i, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            self.render_pixel(i, y, pixel, params, colour_map);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::CancelFlag;
    use crate::core::data::colour::Colour;
    use num_complex::Complex64;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubColourMapGreyscale {}

    impl ColourMap for StubColourMapGreyscale {
        fn map(&self, iterations: u32) -> Colour {
            let level = iterations.min(255) as u8;

            Colour::new(level, level, level, 255)
        }

        fn display_name(&self) -> &str {
            "Stub greyscale"
        }
    }

    fn create_viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height, Complex64::new(-0.5, 0.0), 3.0 / f64::from(width)).unwrap()
    }

    // centre (0, 0) with unit spacing, so pixel (2, 2) sits on the origin
    fn create_unit_viewport() -> Viewport {
        Viewport::new(4, 4, Complex64::new(0.0, 0.0), 1.0).unwrap()
    }

    #[test]
    fn test_default_colours_for_in_set_and_escaped_pixels() {
        let viewport = create_unit_viewport();
        let params = IterationParams::mandelbrot(10);
        let mut buffer = PixelBuffer::for_viewport(&viewport);

        render(&viewport, params, None, &mut buffer).unwrap();

        // (0, 0) in the plane never escapes
        assert_eq!(buffer.pixel(2, 2), Some(Colour::new(255, 255, 255, 255)));
        // (-2, -2) escapes after one step
        assert_eq!(buffer.pixel(0, 0), Some(Colour::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_palette_colours_wrap_by_iteration_count() {
        let viewport = create_unit_viewport();
        let params = IterationParams::mandelbrot(10);
        let palette = Palette::new(vec![
            Colour::new(10, 0, 0, 255),
            Colour::new(20, 0, 0, 255),
            Colour::new(30, 0, 0, 255),
        ])
        .unwrap();
        let mut buffer = PixelBuffer::for_viewport(&viewport);

        render(&viewport, params, Some(&palette), &mut buffer).unwrap();

        // (-2, -2) escapes at 1
        assert_eq!(buffer.pixel(0, 0), Some(Colour::new(20, 0, 0, 255)));
        // (1, 0) escapes at 2
        assert_eq!(buffer.pixel(3, 2), Some(Colour::new(30, 0, 0, 255)));
        // the origin hits the cap of 10, and 10 % 3 == 1
        assert_eq!(buffer.pixel(2, 2), Some(Colour::new(20, 0, 0, 255)));
    }

    #[test]
    fn test_each_pixel_matches_evaluator_at_viewport_coordinate() {
        let viewport = create_viewport(23, 17);
        let params = IterationParams::mandelbrot(64);
        let mut buffer = PixelBuffer::for_viewport(&viewport);

        render_frame(&viewport, params, &StubColourMapGreyscale {}, &mut buffer).unwrap();

        for j in 0..viewport.height() {
            for i in 0..viewport.width() {
                let c = viewport.pixel_to_complex(i, j);
                let level = iterations_until_divergence(c.re, c.im, params) as u8;

                assert_eq!(
                    buffer.pixel(i, j),
                    Some(Colour::new(level, level, level, 255)),
                    "pixel ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let viewport = create_viewport(101, 67);
        let params = IterationParams::mandelbrot(128);
        let colour_map = StubColourMapGreyscale {};
        let mut serial = PixelBuffer::for_viewport(&viewport);
        let mut parallel = PixelBuffer::for_viewport(&viewport);

        render_frame_serial(&viewport, params, &colour_map, &mut serial).unwrap();
        render_frame(&viewport, params, &colour_map, &mut parallel).unwrap();

        assert_eq!(parallel.buffer(), serial.buffer());
    }

    #[test]
    fn test_rendering_twice_is_byte_identical() {
        let viewport = create_viewport(64, 48);
        let params = IterationParams::mandelbrot(256);
        let mut first = PixelBuffer::for_viewport(&viewport);
        let mut second = PixelBuffer::for_viewport(&viewport);

        render(&viewport, params, None, &mut first).unwrap();
        render(&viewport, params, None, &mut second).unwrap();
        assert_eq!(first.buffer(), second.buffer());

        render(&viewport, params, None, &mut first).unwrap();
        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn test_single_pixel_viewport() {
        let viewport = Viewport::new(1, 1, Complex64::new(0.0, 0.0), 0.01).unwrap();
        let params = IterationParams::mandelbrot(20);
        let mut buffer = PixelBuffer::for_viewport(&viewport);

        render(&viewport, params, None, &mut buffer).unwrap();

        // pixel (0, 0) is half a pixel up and left of the origin, still in the set
        assert_eq!(buffer.pixel(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_seeded_params_change_the_frame() {
        let viewport = create_viewport(32, 32);
        let mut mandelbrot = PixelBuffer::for_viewport(&viewport);
        let mut seeded = PixelBuffer::for_viewport(&viewport);

        render(&viewport, IterationParams::mandelbrot(64), None, &mut mandelbrot).unwrap();
        render(
            &viewport,
            IterationParams::new(64, Complex64::new(0.4, 0.3)),
            None,
            &mut seeded,
        )
        .unwrap();

        assert_ne!(mandelbrot.buffer(), seeded.buffer());
    }

    #[test]
    fn test_buffer_size_mismatch_returns_err() {
        let viewport = create_viewport(10, 10);
        let mut buffer = PixelBuffer::new(10, 9);

        let result = render(&viewport, IterationParams::mandelbrot(10), None, &mut buffer);

        assert_eq!(
            result,
            Err(RenderFrameError::BufferSizeMismatch {
                buffer_width: 10,
                buffer_height: 9,
                viewport_width: 10,
                viewport_height: 10,
            })
        );
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_serial_buffer_size_mismatch_returns_err() {
        let viewport = create_viewport(10, 10);
        let mut buffer = PixelBuffer::new(9, 10);

        let result = render_frame_serial(
            &viewport,
            IterationParams::mandelbrot(10),
            &StubColourMapGreyscale {},
            &mut buffer,
        );

        assert!(matches!(result, Err(RenderFrameError::BufferSizeMismatch { .. })));
    }

    #[test]
    fn test_cancelable_produces_same_results_when_not_cancelled() {
        let viewport = create_viewport(40, 30);
        let params = IterationParams::mandelbrot(64);
        let colour_map = StubColourMapGreyscale {};
        let mut serial = PixelBuffer::for_viewport(&viewport);
        let mut cancelable = PixelBuffer::for_viewport(&viewport);

        render_frame_serial(&viewport, params, &colour_map, &mut serial).unwrap();
        render_frame_cancelable(&viewport, params, &colour_map, &mut cancelable, &CancelFlag::new())
            .unwrap();

        assert_eq!(cancelable.buffer(), serial.buffer());
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let viewport = create_viewport(40, 30);
        let mut buffer = PixelBuffer::for_viewport(&viewport);
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = render_frame_cancelable(
            &viewport,
            IterationParams::mandelbrot(64),
            &StubColourMapGreyscale {},
            &mut buffer,
            &cancel_token,
        );

        assert_eq!(result, Err(RenderFrameError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let viewport = create_viewport(2, 5);
        let mut buffer = PixelBuffer::for_viewport(&viewport);
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = render_frame_cancelable(
            &viewport,
            IterationParams::mandelbrot(8),
            &StubColourMapGreyscale {},
            &mut buffer,
            &cancel_token,
        );

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        // 3000 pixels per row polls at 0, 1024 and 2048
        let viewport = create_viewport(3000, 2);
        let mut buffer = PixelBuffer::for_viewport(&viewport);
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = render_frame_cancelable(
            &viewport,
            IterationParams::mandelbrot(4),
            &StubColourMapGreyscale {},
            &mut buffer,
            &cancel_token,
        );

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_render_frame_error_displays_mismatch() {
        let err = RenderFrameError::BufferSizeMismatch {
            buffer_width: 1,
            buffer_height: 2,
            viewport_width: 3,
            viewport_height: 4,
        };

        assert_eq!(err.to_string(), "buffer 1x2 vs frame 3x4");
        assert_eq!(RenderFrameError::Cancelled(Cancelled).to_string(), "render cancelled");
    }
}
