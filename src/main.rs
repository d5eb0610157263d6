use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;
use ratatui::style::Color;

use term_panes::constants::{DEFAULT_FRAME_INTERVAL, DEFAULT_RIBBON_HEIGHT, MAX_DEMO_WINDOWS};
use term_panes::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use term_panes::drivers::{MouseButton, OutputDriver};
use term_panes::event_loop::ControlFlow;
use term_panes::runner::run_panes;
use term_panes::shape::{circle, isosceles_triangle};
use term_panes::tracing_sub::{self, LogTarget};
use term_panes::{DynamicPane, DynamicPaneConfig, PaneError, PaneEvent, PaneTree, Size, theme};

const WINDOW_SIZE: (u16, u16) = (26, 10);

#[derive(Parser, Debug)]
#[command(
    name = "term-panes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Draggable pane playground for the terminal",
    long_about = indoc! {"
        Opens a handful of draggable panes on a desktop pane.

        Press a pane's top ribbon with the left button to raise it and drag
        it around. Dropping a pane with its center outside the desktop puts
        it back in the middle. Left-clicking a pane's body counts clicks.

        Quit with Ctrl+Q or Ctrl+C.
    "}
)]
struct DemoCli {
    /// Target frames per second [default: about 60].
    #[arg(short = 'f', long = "fps", value_name = "FPS")]
    target_fps: Option<f64>,

    /// Number of draggable panes to open.
    #[arg(short = 'w', long = "windows", value_name = "COUNT", default_value_t = 3)]
    windows: usize,

    /// Height in rows of each pane's drag ribbon.
    #[arg(
        short = 'r',
        long = "ribbon-height",
        value_name = "ROWS",
        default_value_t = DEFAULT_RIBBON_HEIGHT
    )]
    ribbon_height: u16,

    /// Append debug logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

struct DemoConfig {
    frame_interval: Duration,
    windows: usize,
    ribbon_height: u16,
    log_file: Option<PathBuf>,
}

impl TryFrom<&DemoCli> for DemoConfig {
    type Error = String;

    fn try_from(cli: &DemoCli) -> Result<Self, Self::Error> {
        let frame_interval = match cli.target_fps {
            None => DEFAULT_FRAME_INTERVAL,
            Some(fps) if (1.0..=240.0).contains(&fps) => Duration::from_secs_f64(1.0 / fps),
            Some(_) => return Err("fps must be between 1 and 240".to_string()),
        };
        if !(1..=MAX_DEMO_WINDOWS).contains(&cli.windows) {
            return Err(format!("windows must be between 1 and {MAX_DEMO_WINDOWS}"));
        }
        if cli.ribbon_height == 0 || cli.ribbon_height >= WINDOW_SIZE.1 {
            return Err(format!(
                "ribbon height must be between 1 and {}",
                WINDOW_SIZE.1 - 1
            ));
        }
        Ok(Self {
            frame_interval,
            windows: cli.windows,
            ribbon_height: cli.ribbon_height,
            log_file: cli.log_file.clone(),
        })
    }
}

struct DemoWindow {
    title: String,
    handle: DynamicPane,
    clicks: Rc<Cell<u32>>,
}

const PALETTE: [Color; 4] = [Color::Cyan, Color::Green, Color::Magenta, Color::Yellow];

fn main() -> Result<(), PaneError> {
    let cli = DemoCli::parse();
    let config = DemoConfig::try_from(&cli).map_err(PaneError::Configuration)?;
    if let Some(path) = &config.log_file {
        tracing_sub::init(&LogTarget::File(path.clone()))?;
    }

    let output = ConsoleOutputDriver::new()?;
    let mut tree = PaneTree::master(output.size()?, theme::desktop())?;
    let windows = open_windows(&mut tree, &config)?;

    run_panes(
        output,
        ConsoleInputDriver::new(),
        &mut tree,
        config.frame_interval,
        |tree, input| {
            paint(tree, &windows);
            if input.take_quit_request() {
                ControlFlow::Quit
            } else {
                ControlFlow::Continue
            }
        },
    )?;
    Ok(())
}

fn open_windows(tree: &mut PaneTree, config: &DemoConfig) -> Result<Vec<DemoWindow>, PaneError> {
    let root = tree.root();
    let mut windows = Vec::with_capacity(config.windows);
    for index in 0..config.windows {
        let accent = PALETTE[index % PALETTE.len()];
        let content_height = WINDOW_SIZE.1 - config.ribbon_height;
        let decoration = if index % 2 == 0 {
            circle(content_height.min(WINDOW_SIZE.0), accent)
        } else {
            isosceles_triangle(Size::new(content_height * 2, content_height), accent)
        };
        let offset = i32::try_from(index).unwrap_or(i32::MAX).saturating_mul(4);
        let handle = tree.add_dynamic(
            root,
            DynamicPaneConfig::new(WINDOW_SIZE, config.ribbon_height)
                .at((2 + offset * 2, 1 + offset))
                .blanking(Color::Black)
                .background(decoration),
        )?;

        let content = handle.content;
        tree.on(content, PaneEvent::Enter, |tree, id, _| {
            tree.set_blanking_color(id, theme::hover())
        });
        tree.on(content, PaneEvent::Exit, |tree, id, _| {
            tree.set_blanking_color(id, Color::Black)
        });
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        tree.on(content, PaneEvent::Press(MouseButton::Left), move |tree, id, _| {
            counter.set(counter.get() + 1);
            if let Some(window) = tree.parent(id) {
                tree.raise(window);
            }
        });

        windows.push(DemoWindow {
            title: format!("pane {}", index + 1),
            handle,
            clicks,
        });
    }
    Ok(windows)
}

fn paint(tree: &mut PaneTree, windows: &[DemoWindow]) {
    let root = tree.root();
    let bottom = tree.size(root).height.saturating_sub(1);
    tree.surface_mut(root)
        .print(1, bottom, "drag ribbons to move · ctrl+q quits", Color::Gray);

    for window in windows {
        let ribbon = window.handle.ribbon;
        let dragging = tree.is_dragging(window.handle.pane);
        let surface = tree.surface_mut(ribbon);
        if dragging {
            surface.fill(theme::dragging());
        }
        let fg = if dragging { Color::White } else { Color::Black };
        surface.print(1, 0, &window.title, fg);

        let label = format!("clicks: {}", window.clicks.get());
        let content = tree.surface_mut(window.handle.content);
        let y = content.size().height.saturating_sub(1);
        content.print(1, y, &label, Color::White);
    }
}
