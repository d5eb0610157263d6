use std::time::Duration;

use crate::drivers::{InputDriver, OutputDriver};
use crate::error::BackendError;
use crate::event_loop::{ControlFlow, FrameLoop};
use crate::pane::PaneTree;

/// Take over the display, run `tree` until `paint` returns
/// [`ControlFlow::Quit`], then restore the display. The display is restored
/// even when a frame fails; the frame error wins over a restore error.
pub fn run_panes<I, O, F>(
    output: O,
    input: I,
    tree: &mut PaneTree,
    interval: Duration,
    paint: F,
) -> Result<(), BackendError>
where
    I: InputDriver,
    O: OutputDriver,
    F: FnMut(&mut PaneTree, &mut I) -> ControlFlow,
{
    let mut frames = FrameLoop::new(input, output, interval);
    frames.output().enter()?;
    tracing::debug!(panes = tree.len(), "entering frame loop");
    let result = frames.run(tree, paint);
    let restored = frames.output().exit();
    tracing::debug!(ok = result.is_ok(), "left frame loop");
    result.and(restored)
}
