//! NOFF point-cloud parser.
//!
//! OFF-style layout: a header keyword line, a counts line, then one vertex
//! per line. The first three floats of a vertex line are the position;
//! three more, when present, are the outward surface normal.

use std::path::Path;

use pressfit_types::{PressfitError, PressfitResult};

use crate::point_cloud::{PointCloud, SurfacePoint};

/// Loads and parses a NOFF point cloud from disk. Fatal on format errors.
pub fn load_noff(path: &Path) -> PressfitResult<PointCloud> {
    let text = std::fs::read_to_string(path)?;
    parse_noff(&text)
}

/// Parses NOFF text into a [`PointCloud`].
pub fn parse_noff(text: &str) -> PressfitResult<PointCloud> {
    let mut lines = text.lines();

    let _header = lines
        .next()
        .ok_or_else(|| PressfitError::InvalidAsset("Missing NOFF header line".into()))?;

    let counts_line = lines
        .next()
        .ok_or_else(|| PressfitError::InvalidAsset("Missing NOFF counts line".into()))?;
    let vertex_count = counts_line
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(|| {
            PressfitError::InvalidAsset(format!("Unreadable NOFF counts line: '{counts_line}'"))
        })?;

    let mut points = Vec::with_capacity(vertex_count);
    for (line_no, raw) in lines.enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if points.len() == vertex_count {
            break;
        }

        let values: Vec<f32> = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f32>().map_err(|_| {
                    PressfitError::InvalidAsset(format!(
                        "Non-numeric token '{token}' on vertex line {line_no}"
                    ))
                })
            })
            .collect::<PressfitResult<_>>()?;

        if values.len() < 3 {
            return Err(PressfitError::InvalidAsset(format!(
                "Vertex line {line_no} needs at least 3 values, found {}",
                values.len()
            )));
        }

        let local_normal = if values.len() >= 6 {
            [values[3], values[4], values[5]]
        } else {
            [0.0, 0.0, 0.0]
        };

        points.push(SurfacePoint {
            local_position: [values[0], values[1], values[2]],
            local_normal,
        });
    }

    if points.len() < vertex_count {
        return Err(PressfitError::InvalidAsset(format!(
            "NOFF declares {vertex_count} vertices but only {} were present",
            points.len()
        )));
    }

    Ok(PointCloud { points })
}
