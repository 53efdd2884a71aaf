use std::fmt;
use std::ops::Range;

use yansi::Color::{Blue, Red};

use crate::format::F64Formatter;
use crate::plot::Scale;
use crate::stats::Stats;

/// Options for building a `LogXyPlot`.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Number of "columns" to display.  On a log axis the first columns are
    /// sparse; columns with no sample in them are bridged by the line.
    pub width: usize,
    /// Number of "rows" to display.
    pub height: usize,
    /// Scale of the y-axis.  The x-axis is always logarithmic.
    pub y_scale: Scale,
    /// `precision` is an Option with the number of decimals to display.  If
    /// "None" is used, human units will be used, with an heuristic based on the
    /// input data for deciding the units and the decimal places.
    pub precision: Option<usize>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            width: 110,
            height: 40,
            y_scale: Scale::Linear,
            precision: None,
        }
    }
}

#[derive(Debug)]
/// A struct holding data to plot samples against their index, the index being
/// laid out on a logarithmic axis.
///
/// The x value of a sample is its zero-based position in the input.  Index 0
/// has no logarithm, so the first sample never shows up in the drawing (it
/// still counts for the stats).
pub struct LogXyPlot {
    /// Average of the samples falling in each column, if any.
    columns: Vec<Option<f64>>,
    /// Lower bound of each row, ascending.
    y_axis: Vec<f64>,
    y_range: Range<f64>,
    last_index: usize,
    stats: Stats,
    options: PlotOptions,
}

impl LogXyPlot {
    /// Creates a LogXyPlot from a vector of numerical data.
    pub fn new(vec: &[f64], options: PlotOptions) -> LogXyPlot {
        let mut plot = LogXyPlot {
            columns: Vec::new(),
            y_axis: Vec::new(),
            y_range: f64::NAN..f64::NAN,
            last_index: 0,
            stats: Stats::new(vec, options.precision),
            options,
        };
        plot.load(vec);
        plot
    }

    fn load(&mut self, vec: &[f64]) {
        let y_scale = self.options.y_scale;
        let points: Vec<(usize, f64)> = vec
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .filter(|(_, y)| y_scale.accepts(*y))
            .collect();
        if let Some(first) = vec.first() {
            debug!("Sample {} at index 0 has no place on a log scale", first);
        }
        let dropped = vec.len().saturating_sub(1) - points.len();
        if dropped > 0 {
            debug!("{} samples cannot be drawn on a {} scale", dropped, y_scale);
        }
        let last_index = match points.last() {
            Some((x, _)) => *x,
            None => return,
        };

        let width = self.options.width.max(1);
        let x_range = 1.0..last_index as f64;
        let mut sums = vec![(0.0, 0_usize); width];
        for (x, y) in points.iter() {
            if let Some(column) = Scale::Log.cell(*x as f64, &x_range, width) {
                sums[column].0 += y;
                sums[column].1 += 1;
            }
        }
        self.columns = sums
            .into_iter()
            .map(|(sum, count)| match count {
                0 => None,
                _ => Some(sum / count as f64),
            })
            .collect();

        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, y)| {
                (min.min(*y), max.max(*y))
            });
        self.y_range = min..max;
        self.y_axis = y_scale.bounds(&self.y_range, self.options.height.max(1));
        self.last_index = last_index;
    }

    /// Row of every column between the first and last drawn ones, and whether
    /// a sample fell in it.  Empty columns get the value found on a straight
    /// line (in the y scale) between their drawn neighbours.
    fn trace(&self) -> Vec<Option<(usize, bool)>> {
        let mut trace = vec![None; self.columns.len()];
        let mut previous: Option<(usize, f64)> = None;
        for (x, column) in self.columns.iter().enumerate() {
            let value = match column {
                Some(value) => *value,
                None => continue,
            };
            if let Some((from, start)) = previous {
                for (gap, cell) in trace.iter_mut().enumerate().take(x).skip(from + 1) {
                    let t = (gap - from) as f64 / (x - from) as f64;
                    let bridged = self.options.y_scale.interpolate(start, value, t);
                    *cell = Some((row_of(&self.y_axis, bridged), false));
                }
            }
            trace[x] = Some((row_of(&self.y_axis, value), true));
            previous = Some((x, value));
        }
        trace
    }

    /// Characters of the plot, indexed by row (lowest first) and column.
    /// Samples are `●`, bridged columns `·`, and jumps of more than one row
    /// between neighbouring columns are filled with `│`.
    fn grid(&self) -> Vec<Vec<char>> {
        let mut grid = vec![vec![' '; self.columns.len()]; self.y_axis.len()];
        let mut last_row: Option<usize> = None;
        for (x, cell) in self.trace().into_iter().enumerate() {
            match cell {
                Some((row, sampled)) => {
                    if let Some(previous) = last_row {
                        for line in grid
                            .iter_mut()
                            .take(previous.max(row))
                            .skip(previous.min(row) + 1)
                        {
                            line[x] = '│';
                        }
                    }
                    grid[row][x] = if sampled { '●' } else { '·' };
                    last_row = Some(row);
                }
                None => last_row = None,
            }
        }
        grid
    }
}

impl fmt::Display for LogXyPlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.stats)?;
        if self.columns.is_empty() {
            return writeln!(f, "No data to plot");
        }
        writeln!(
            f,
            "X = sample index ({} scale); Y = sample value ({} scale)",
            Blue.paint(Scale::Log),
            Blue.paint(self.options.y_scale),
        )?;
        let f64fmt = match self.options.precision {
            None => F64Formatter::new_with_range(self.y_range.clone()),
            Some(n) => F64Formatter::new(n),
        };
        let y_width = self
            .y_axis
            .iter()
            .map(|v| f64fmt.format(*v).len())
            .max()
            .unwrap_or(0);
        let grid = self.grid();
        for (row, bound) in grid.iter().zip(self.y_axis.iter()).rev() {
            writeln!(
                f,
                "[{}] {}",
                Blue.paint(format!("{:>width$}", f64fmt.format(*bound), width = y_width)),
                Red.paint(row.iter().collect::<String>()),
            )?;
        }
        print_x_axis(f, self.columns.len(), self.last_index, y_width)
    }
}

/// Row holding `value`: the last row whose lower bound is not above it.  The
/// first row takes anything below its bound, the last one anything above.
fn row_of(y_axis: &[f64], value: f64) -> usize {
    y_axis.iter().rposition(|bound| *bound <= value).unwrap_or(0)
}

/// Writes the powers of ten below the columns where they land.
fn print_x_axis(
    f: &mut fmt::Formatter,
    width: usize,
    last_index: usize,
    y_width: usize,
) -> fmt::Result {
    let x_range = 1.0..last_index as f64;
    let mut axis = vec![' '; width];
    let mut free = 0;
    let mut decade: usize = 1;
    while decade <= last_index {
        let label = decade.to_string();
        if let Some(column) = Scale::Log.cell(decade as f64, &x_range, width) {
            let start = column.min(width.saturating_sub(label.len()));
            if start >= free && start + label.len() <= width {
                for (offset, c) in label.chars().enumerate() {
                    axis[start + offset] = c;
                }
                free = start + label.len() + 1;
            }
        }
        decade = match decade.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }
    let axis: String = axis.into_iter().collect();
    writeln!(
        f,
        "{:pad$}{}",
        "",
        Blue.paint(axis.trim_end()),
        pad = y_width + 3
    )
}
