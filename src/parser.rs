use std::path::Path;

use log::{debug, trace};

use crate::error::{RectGridError, Result};
use crate::geometry::Rectangle;

/// Parse one `x1, y1, x2, y2` line.
pub fn parse_rectangle(line: &str) -> Result<Rectangle> {
    let invalid = || RectGridError::InvalidFormat {
        line: line.to_string(),
    };

    let coords = line
        .split(',')
        .map(|token| token.trim().parse::<i32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>>>()?;

    match coords.as_slice() {
        &[x1, y1, x2, y2] => Ok(Rectangle::new(x1, y1, x2, y2)),
        _ => Err(invalid()),
    }
}

/// Parse every non-blank line in order. The first bad line fails the whole input.
pub fn parse_rectangles(content: &str) -> Result<Vec<Rectangle>> {
    let mut rects = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            trace!("skipping blank line {}", index + 1);
            continue;
        }
        rects.push(parse_rectangle(line)?);
    }
    debug!("parsed {} rectangles", rects.len());
    Ok(rects)
}

pub fn read_rectangles(path: &Path) -> Result<Vec<Rectangle>> {
    let content = std::fs::read_to_string(path).map_err(RectGridError::FileRead)?;
    parse_rectangles(&content)
}
