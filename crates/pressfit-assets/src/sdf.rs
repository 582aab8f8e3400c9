//! SDF text asset parser.
//!
//! Format, by physical line after stripping `#`-comments:
//! ```text
//! 0: bbox min        (3 floats)
//! 1: bbox max        (3 floats)
//! 2: cell size       (1 float)
//! 3: resolution      (3 floats, truncated to integers)
//! 4: cell count      (1 float)
//! 5…: distances      (whitespace-separated, appended in file order)
//! ```

use std::path::Path;

use pressfit_field::SdfGrid;
use pressfit_types::{PressfitError, PressfitResult};

/// Loads and parses an SDF asset from disk. Fatal on any format error.
pub fn load_sdf(path: &Path) -> PressfitResult<SdfGrid> {
    let text = std::fs::read_to_string(path)?;
    parse_sdf(&text)
}

/// Parses SDF text into a validated [`SdfGrid`].
pub fn parse_sdf(text: &str) -> PressfitResult<SdfGrid> {
    let mut header: Vec<Vec<f32>> = Vec::with_capacity(5);
    let mut distances: Vec<f32> = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let values = parse_line(raw, line_no)?;

        // Blank and comment-only lines carry no values and are skipped.
        if values.is_empty() {
            continue;
        }

        if header.len() < 5 {
            header.push(values);
        } else {
            distances.extend(values);
        }
    }

    if header.len() < 5 {
        return Err(PressfitError::InvalidAsset(format!(
            "Expected 5 header lines, found {}",
            header.len()
        )));
    }

    let bbox_min = take3(&header[0], 0)?;
    let bbox_max = take3(&header[1], 1)?;
    let cell_size = take1(&header[2], 2)?;
    let res_floats = take3(&header[3], 3)?;
    let declared_cells = take1(&header[4], 4)?;

    // Resolution floats are truncated, not rounded.
    let resolution = [
        res_floats[0] as u32,
        res_floats[1] as u32,
        res_floats[2] as u32,
    ];

    let expected = resolution.iter().map(|&r| r as usize).product::<usize>();
    if declared_cells as usize != expected {
        return Err(PressfitError::InvalidAsset(format!(
            "Declared cell count {} does not match resolution {:?} ({} cells)",
            declared_cells, resolution, expected
        )));
    }

    SdfGrid::new(bbox_min, bbox_max, cell_size, resolution, distances)
}

/// Strips the trailing `#`-comment and parses the remaining tokens.
fn parse_line(raw: &str, line_no: usize) -> PressfitResult<Vec<f32>> {
    let content = match raw.find('#') {
        Some(pos) => &raw[..pos],
        None => raw,
    };

    content
        .split_whitespace()
        .map(|token| {
            token.parse::<f32>().map_err(|_| {
                PressfitError::InvalidAsset(format!(
                    "Non-numeric token '{token}' on line {line_no}"
                ))
            })
        })
        .collect()
}

fn take3(values: &[f32], line_no: usize) -> PressfitResult<[f32; 3]> {
    if values.len() < 3 {
        return Err(PressfitError::InvalidAsset(format!(
            "Header line {line_no} needs 3 values, found {}",
            values.len()
        )));
    }
    Ok([values[0], values[1], values[2]])
}

fn take1(values: &[f32], line_no: usize) -> PressfitResult<f32> {
    values.first().copied().ok_or_else(|| {
        PressfitError::InvalidAsset(format!("Header line {line_no} needs a value"))
    })
}
