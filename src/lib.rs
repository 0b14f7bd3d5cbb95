//! Render integer rectangles as an HTML table grid.
//!
//! The pipeline is: read lines, parse them into [`Rectangle`]s, optionally
//! pull far-apart rectangles together, then emit a table in which covered
//! cells are black.

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod parser;
pub mod renderer;

use std::path::{Path, PathBuf};

use log::info;

pub use config::GridConfig;
pub use error::{RectGridError, Result};
pub use geometry::{CanvasExtremePoints, Rectangle};
pub use layout::{LayoutMode, adjust_rectangles, apply_layout};
pub use parser::{parse_rectangle, parse_rectangles, read_rectangles};
pub use renderer::TableRenderer;

pub const DEFAULT_OUTPUT: &str = "output.html";

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: GridConfig,
    pub mode: LayoutMode,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            config: GridConfig::default(),
            mode: LayoutMode::default(),
        }
    }
}

/// How a run ended without a fatal error
#[derive(Debug)]
pub enum RunOutcome {
    Written(PathBuf),
    /// The input could not be read; nothing was written
    InputUnreadable(String),
}

/// Rectangles in, HTML out.
pub fn render_rectangles(rects: &[Rectangle], config: &GridConfig, mode: LayoutMode) -> Result<String> {
    let placed = apply_layout(rects, mode, config.max_gap)?;
    TableRenderer::new(config).render(&placed)
}

/// Read, lay out, render and write. A missing or unreadable input becomes
/// [`RunOutcome::InputUnreadable`]; every other failure is returned as an error.
pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    let rects = match read_rectangles(&options.input) {
        Ok(rects) => rects,
        Err(e) if e.is_recoverable() => return Ok(RunOutcome::InputUnreadable(e.to_string())),
        Err(e) => return Err(e),
    };

    let html = render_rectangles(&rects, &options.config, options.mode)?;
    write_html(&options.output, &html)?;
    info!("wrote {} bytes to {}", html.len(), options.output.display());

    Ok(RunOutcome::Written(options.output.clone()))
}

fn write_html(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).map_err(RectGridError::Write)
}
