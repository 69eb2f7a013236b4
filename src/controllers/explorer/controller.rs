use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use crate::controllers::explorer::navigation::NavigationCommand;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame_cancelable};
use crate::core::data::palette::Palette;
use crate::core::data::pixel_buffer::{BufferAllocation, PixelBuffer};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_scheme_factory;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::params::IterationParams;

/// Caller-side state around the renderer.
///
/// Holds the current view, the palette and the reused frame buffer, and tracks
/// whether the last frame is stale. Navigation only marks the frame dirty;
/// nothing is computed until [`redraw_if_needed`](Self::redraw_if_needed).
pub struct ExplorerController<P: FilePresenterPort> {
    presenter: P,
    home: Viewport,
    viewport: Viewport,
    params: IterationParams,
    palette: Option<Palette>,
    buffer: PixelBuffer,
    needs_redraw: bool,
    frames_rendered: u64,
}

impl<P: FilePresenterPort> ExplorerController<P> {
    pub fn new(
        presenter: P,
        viewport: Viewport,
        params: IterationParams,
        palette: Option<Palette>,
    ) -> Self {
        Self {
            presenter,
            home: viewport,
            viewport,
            params,
            palette,
            buffer: PixelBuffer::for_viewport(&viewport),
            needs_redraw: true,
            frames_rendered: 0,
        }
    }

    pub fn from_config(
        presenter: P,
        config: &MandelbrotConfig,
        palette: Option<Palette>,
    ) -> Result<Self, ViewportError> {
        Ok(Self::new(presenter, config.viewport()?, config.iteration_params(), palette))
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn params(&self) -> IterationParams {
        self.params
    }

    #[must_use]
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// The most recent frame. Stale while [`needs_redraw`](Self::needs_redraw) is set.
    #[must_use]
    pub fn frame(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Applies one navigation step and marks the frame dirty if the view changed.
    pub fn apply(&mut self, command: NavigationCommand) -> Result<(), ViewportError> {
        let viewport = match command {
            NavigationCommand::Pan { dx, dy } => match self.viewport.panned(dx, dy) {
                Some(viewport) => viewport,
                None => {
                    debug!("ignoring pan by ({}, {}) that leaves the finite plane", dx, dy);
                    return Ok(());
                }
            },
            NavigationCommand::Click { x, y } => match self.viewport.recentered_on_pixel(x, y) {
                Some(viewport) => viewport,
                None => {
                    debug!("ignoring click outside the viewport at ({}, {})", x, y);
                    return Ok(());
                }
            },
            NavigationCommand::ZoomIn => self.viewport.zoomed_in(),
            NavigationCommand::ZoomOut => self.viewport.zoomed_out(),
            NavigationCommand::Resize { width, height } => self.viewport.resized(width, height)?,
            NavigationCommand::SetMaxIterations(max_iterations) => {
                let params = self.params.with_max_iterations(max_iterations);

                if params != self.params {
                    self.params = params;
                    self.needs_redraw = true;
                }
                return Ok(());
            }
            NavigationCommand::ResetView => {
                self.home.resized(self.viewport.width(), self.viewport.height())?
            }
        };

        if viewport != self.viewport {
            self.viewport = viewport;
            self.needs_redraw = true;
        }

        Ok(())
    }

    pub fn redraw_if_needed(&mut self) -> Result<bool, RenderFrameError> {
        self.redraw_if_needed_cancelable(&NeverCancel)
    }

    /// Re-renders the frame when it is stale.
    ///
    /// Returns `Ok(false)` when the current frame was still valid. A cancelled
    /// render leaves the frame marked dirty so the next call starts over.
    pub fn redraw_if_needed_cancelable<C: CancelToken>(
        &mut self,
        cancel: &C,
    ) -> Result<bool, RenderFrameError> {
        if !self.needs_redraw {
            return Ok(false);
        }

        if self.buffer.ensure_viewport(&self.viewport) == BufferAllocation::Reallocated {
            debug!(
                "reallocated frame buffer for {}x{}",
                self.viewport.width(),
                self.viewport.height()
            );
        }

        let colour_map =
            mandelbrot_colour_scheme_factory(self.palette.as_ref(), self.params.max_iterations());
        let start = Instant::now();

        render_frame_cancelable(
            &self.viewport,
            self.params,
            &colour_map,
            &mut self.buffer,
            cancel,
        )?;

        self.needs_redraw = false;
        self.frames_rendered += 1;

        debug!(
            "rendered {}x{} {} frame with {} colours in {:?}",
            self.viewport.width(),
            self.viewport.height(),
            self.params.display_name(),
            colour_map.kind(),
            start.elapsed()
        );

        Ok(true)
    }

    /// Hands the current frame to the presenter. A path without an extension
    /// gets the presenter's one.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let mut filepath = filepath.as_ref().to_path_buf();

        if filepath.extension().is_none() {
            filepath.set_extension(self.presenter.extension());
        }

        self.presenter.present(&self.buffer, &filepath)?;
        info!("saved frame to {}", filepath.display());

        Ok(filepath)
    }

    /// One-line summary of the view, in the spirit of an on-screen debug overlay.
    #[must_use]
    pub fn status_line(&self) -> String {
        let center = self.viewport.center();

        format!(
            "C: ({:.8}, {:.8}) iter: {} d/p: {}",
            center.re,
            center.im,
            self.params.max_iterations(),
            self.viewport.distance_per_pixel()
        )
    }
}
