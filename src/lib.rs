//! Retained-mode pane hierarchy for a terminal cell surface.
//!
//! A [`PaneTree`] organizes the screen into nested rectangular panes,
//! composites them back to front every frame and routes polled mouse input
//! to the single pane that owns the pointer, synthesizing press, release,
//! hold, move, enter and exit events per pane.

pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod pane;
pub mod runner;
pub mod shape;
pub mod surface;
pub mod theme;
pub mod tracing_sub;
pub mod ui;

pub use error::{BackendError, PaneError};
pub use geometry::{PaneRect, Point, Size};
pub use pane::{DynamicPane, DynamicPaneConfig, PaneConfig, PaneEvent, PaneId, PaneTree};
pub use surface::{Blend, Surface, SurfaceFlags};
