use std::time::{Duration, Instant};

use crate::drivers::{InputDriver, OutputDriver};
use crate::error::BackendError;
use crate::pane::PaneTree;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// Fixed-rate frame driver for a pane tree.
///
/// Each frame runs the same synchronous sequence:
/// 1. **Sample**: pump the input driver and take a single snapshot.
/// 2. **Route**: hit-test and fire handlers across the tree.
/// 3. **Update**: apply drag motion.
/// 4. **Paint**: blank every surface, let the application paint, then
///    composite the tree and present the root surface.
///
/// Routing for a frame always completes before that frame's update and
/// draw, so handlers may restructure the tree freely.
pub struct FrameLoop<I, O> {
    input: I,
    output: O,
    interval: Duration,
}

impl<I: InputDriver, O: OutputDriver> FrameLoop<I, O> {
    pub fn new(input: I, output: O, interval: Duration) -> Self {
        Self {
            input,
            output,
            interval,
        }
    }

    pub fn input(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output(&mut self) -> &mut O {
        &mut self.output
    }

    /// Run a single frame. `paint` is called after blanking and before
    /// compositing; its return value decides whether the loop continues.
    pub fn frame<F>(&mut self, tree: &mut PaneTree, paint: &mut F) -> Result<ControlFlow, BackendError>
    where
        F: FnMut(&mut PaneTree, &mut I) -> ControlFlow,
    {
        self.input.pump()?;
        let snapshot = self.input.snapshot()?;
        tree.route_pointer(&snapshot);
        tree.update(&snapshot);
        tree.blank();
        let flow = paint(tree, &mut self.input);
        tree.draw();
        let origin = tree.position(tree.root());
        self.output.present(tree.root_surface(), origin)?;
        Ok(flow)
    }

    /// Run frames until `paint` asks to quit, sleeping out the remainder of
    /// each frame interval.
    pub fn run<F>(&mut self, tree: &mut PaneTree, mut paint: F) -> Result<(), BackendError>
    where
        F: FnMut(&mut PaneTree, &mut I) -> ControlFlow,
    {
        loop {
            let started = Instant::now();
            if let ControlFlow::Quit = self.frame(tree, &mut paint)? {
                return Ok(());
            }
            let remaining = self.interval.saturating_sub(started.elapsed());
            if !remaining.is_zero() {
                std::thread::sleep(remaining);
            }
        }
    }
}
