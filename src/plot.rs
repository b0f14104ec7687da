//! ASCII plots of real-valued sequences.
//!
//! A [`Plot`] maps a sequence of any length onto a fixed grid of `height` rows by `width`
//! columns. Each column takes the nearest earlier sample of the sequence, and the sample is
//! marked in the row closest to its value, with the maximum at the top row and the minimum at
//! the bottom row. Rendered rows carry a 9 character value axis on the left. Labels too wide
//! for fixed notation switch to exponent notation so the axis keeps its width.

use crate::error::Error;
use crate::types::Sample;

/// Width of the value axis printed in front of every row.
pub const LABEL_WIDTH: usize = 9;

// Room for the value itself, ahead of the " |" separator.
const VALUE_WIDTH: usize = LABEL_WIDTH - 2;

const MARK: char = '*';
const BLANK: char = ' ';

/// Plot dimensions in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: usize,
    height: usize,
}

impl Geometry {
    /// Create a geometry of `width` columns by `height` rows. At least one column and two rows
    /// are needed to map values onto rows.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width < 1 || height < 2 {
            return Err(Error::InvalidGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 70,
            height: 15,
        }
    }
}

/// A rendered grid of marks along with the value range it was scaled to.
#[derive(Debug, Clone)]
pub struct Plot {
    geometry: Geometry,
    v_min: Sample,
    v_max: Sample,
    // Indexed [row][column], row 0 at the top.
    marks: Vec<Vec<bool>>,
}

impl Plot {
    /// Scale `values` onto a grid of the given geometry.
    pub fn new(values: &[Sample], geometry: Geometry) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::EmptySignal);
        }

        let v_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let v_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // A flat sequence still needs a divisor, it all lands on the top row.
        let v_range = if v_max != v_min { v_max - v_min } else { 1.0 };

        let Geometry { width, height } = geometry;
        let last_row = (height - 1) as f64;

        let resampled: Vec<Sample> = (0..width)
            .map(|col| values[resample_index(col, values.len(), width)])
            .collect();

        let marks = (0..height)
            .map(|row| {
                resampled
                    .iter()
                    .map(|&val| {
                        let val_row = (v_max - val) / v_range * last_row;
                        (val_row - row as f64).abs() < 0.5
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            geometry,
            v_min,
            v_max,
            marks,
        })
    }

    /// The smallest plotted value, labelled on the bottom row.
    pub fn v_min(&self) -> Sample {
        self.v_min
    }

    /// The largest plotted value, labelled on the top row.
    pub fn v_max(&self) -> Sample {
        self.v_max
    }

    /// The value labelled on the middle row.
    pub fn midpoint(&self) -> Sample {
        (self.v_max + self.v_min) / 2.0
    }

    /// Whether the cell at `row`, `col` holds a mark. Out of range cells are blank.
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Text lines for the grid: one per row with its axis label, followed by the axis rule.
    pub fn lines(&self) -> Vec<String> {
        let Geometry { width, height } = self.geometry;
        let mut lines: Vec<String> = (0..height)
            .map(|row| {
                let mut line = self.label(row);
                debug_assert_eq!(line.chars().count(), LABEL_WIDTH);
                line.extend((0..width).map(|col| if self.is_marked(row, col) { MARK } else { BLANK }));
                line
            })
            .collect();

        lines.push(format!("{:>LABEL_WIDTH$}{}", "+", "-".repeat(width)));
        lines
    }

    fn label(&self, row: usize) -> String {
        let height = self.geometry.height;
        if row == 0 {
            value_label(self.v_max())
        } else if row == height - 1 {
            value_label(self.v_min())
        } else if row == height / 2 {
            value_label(self.midpoint())
        } else {
            format!("{:>LABEL_WIDTH$}", "|")
        }
    }
}

/// Source index shown in column `col` of `width` columns: the nearest sample at or before the
/// column's position, never past the last sample.
fn resample_index(col: usize, len: usize, width: usize) -> usize {
    (col * len / width).min(len - 1)
}

/// A value right aligned in the label field, with two decimals where they fit and exponent form
/// otherwise.
fn value_label(value: Sample) -> String {
    let fixed = format!("{value:.2}");
    let text = if fixed.len() <= VALUE_WIDTH {
        fixed
    } else {
        let exp = format!("{value:.1e}");
        if exp.len() <= VALUE_WIDTH {
            exp
        } else {
            format!("{value:.0e}")
        }
    };
    format!("{text:>VALUE_WIDTH$} |")
}

/// Render `values` as plot lines, see [`Plot::lines`].
pub fn render(values: &[Sample], geometry: Geometry) -> Result<Vec<String>, Error> {
    Ok(Plot::new(values, geometry)?.lines())
}

/// Render `values` as plot lines preceded by a title banner.
pub fn render_titled(title: &str, values: &[Sample], geometry: Geometry) -> Result<Vec<String>, Error> {
    let mut lines = vec![String::new(), format!("  === {title} ==="), String::new()];
    lines.extend(render(values, geometry)?);
    Ok(lines)
}
