//! Shared crate-wide constants.

use std::time::Duration;

/// Frame interval used when the caller does not pick one (~60 fps).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Height in rows of a dynamic pane's drag ribbon when none is given.
pub const DEFAULT_RIBBON_HEIGHT: u16 = 1;

/// Upper bound on the number of draggable windows the demo will open.
pub const MAX_DEMO_WINDOWS: usize = 8;
