use log::debug;

use crate::config::GridConfig;
use crate::error::{RectGridError, Result};
use crate::geometry::{CanvasExtremePoints, Rectangle};

const TABLE_OPEN: &str = "<html><body><table border='1' cellpadding='0' cellspacing='0'>";
const TABLE_CLOSE: &str = "</table></body></html>";
const CELL_BORDER: &str = "border: 1px solid rgba(0, 0, 0, 0.1);";
const FILLED: &str = " background-color: black;";

/// Renders rectangle coverage as an HTML table, one cell per grid point.
pub struct TableRenderer {
    min_cell_size: i32,
    max_table_width: i32,
}

impl TableRenderer {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            min_cell_size: config.min_cell_size,
            max_table_width: config.max_table_width,
        }
    }

    pub fn render(&self, rects: &[Rectangle]) -> Result<String> {
        let canvas = CanvasExtremePoints::from_rectangles(rects).ok_or(RectGridError::EmptyInput)?;
        let cell_size = self.cell_size(&canvas)?;
        debug!(
            "canvas {:?}: {}x{} cells of {}px",
            canvas,
            canvas.cells_x(),
            canvas.cells_y(),
            cell_size
        );

        let style = format!(
            "width: {}px; height: {}px; {}",
            cell_size, cell_size, CELL_BORDER
        );

        let mut html = String::from(TABLE_OPEN);
        for y in canvas.min_y..=canvas.max_y {
            html.push_str("<tr>");
            for x in canvas.min_x..=canvas.max_x {
                let fill = if is_covered(rects, x, y) { FILLED } else { "" };
                html.push_str(&format!("<td style='{}{}'></td>", style, fill));
            }
            html.push_str("</tr>");
        }
        html.push_str(TABLE_CLOSE);

        Ok(html)
    }

    /// Pixel size of one cell: the larger grid side fits in `max_table_width`
    /// and no cell exceeds `min_cell_size`. Never below 1.
    pub fn cell_size(&self, canvas: &CanvasExtremePoints) -> Result<i32> {
        let cells_x = canvas.cells_x();
        let cells_y = canvas.cells_y();
        if cells_x <= 0 || cells_y <= 0 {
            return Err(RectGridError::DegenerateGrid { cells_x, cells_y });
        }

        let fit = i64::from(self.max_table_width) / cells_x.max(cells_y);
        let size = fit.min(i64::from(self.min_cell_size)).max(1);
        // size is bounded by min_cell_size, so it fits in i32
        Ok(size as i32)
    }
}

fn is_covered(rects: &[Rectangle], x: i32, y: i32) -> bool {
    rects.iter().any(|rect| rect.contains(x, y))
}
