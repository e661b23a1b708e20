//! Text rendering of the 12 pitch classes on a unit circle.

use std::f64::consts::PI;

use crate::names::Naming;

const WIDTH: usize = 41;
const HEIGHT: usize = 21;

/// Draw the pitch classes at their clock positions around a circle.
///
/// Pitch class 0 sits at three o'clock and the others proceed counter
/// clockwise, the usual unit circle orientation.
pub fn pitch_class_circle(naming: Naming) -> String {
    let mut grid = vec![vec![' '; WIDTH]; HEIGHT];
    let cx = (WIDTH / 2) as f64;
    let cy = (HEIGHT / 2) as f64;
    // Terminal cells are taller than wide, so the x radius is stretched
    let rx = cx - 5.0;
    let ry = cy - 2.0;

    for step in 0..120 {
        let theta = 2.0 * PI * f64::from(step) / 120.0;
        let x = (cx + rx * theta.cos()).round() as usize;
        let y = (cy - ry * theta.sin()).round() as usize;
        grid[y][x] = '.';
    }

    for pc in 0..12 {
        let theta = 2.0 * PI * (pc as f64) / 12.0;
        let x = (cx + (rx + 3.0) * theta.cos()).round() as usize;
        let y = (cy - (ry + 1.0) * theta.sin()).round() as usize;
        for (i, ch) in naming.name(pc).chars().enumerate() {
            if x + i < WIDTH {
                grid[y][x + i] = ch;
            }
        }
    }

    let mut out = String::new();
    for row in &grid {
        let line: String = row.iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
