//! Caller-side session around the renderer.
//!
//! The core renders whatever it is handed; this layer decides when a new
//! frame is needed, translates navigation input into new viewports and passes
//! finished frames to a presenter.

mod controller;
pub mod navigation;

pub use controller::ExplorerController;
pub use navigation::{NavigationCommand, NavigationParseError};
