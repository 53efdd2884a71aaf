use std::fmt;
use std::ops::Range;

/// How values are laid out along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    /// Position proportional to the value.
    #[default]
    Linear,
    /// Position proportional to the logarithm of the value.  Values that are
    /// zero or negative have no position.
    Log,
}

impl Scale {
    /// Whether `value` can be placed on an axis with this scale.
    pub fn accepts(self, value: f64) -> bool {
        value.is_finite() && (self == Scale::Linear || value > 0.0)
    }

    /// Relative position of `value` inside `range`, 0.0 being the start and
    /// 1.0 the end.  A range with a single value maps everything to 0.0.
    pub fn position(self, value: f64, range: &Range<f64>) -> Option<f64> {
        if !self.accepts(value) || !self.accepts(range.start) || !self.accepts(range.end) {
            return None;
        }
        let (value, start, end) = match self {
            Scale::Linear => (value, range.start, range.end),
            Scale::Log => (value.ln(), range.start.ln(), range.end.ln()),
        };
        if end == start {
            Some(0.0)
        } else {
            Some((value - start) / (end - start))
        }
    }

    /// Index of the cell holding `value` when `range` is split in `cells`
    /// cells of the same size (in this scale).  Values past the end of the
    /// range are clamped into the last cell.
    pub fn cell(self, value: f64, range: &Range<f64>, cells: usize) -> Option<usize> {
        if cells == 0 {
            return None;
        }
        self.position(value, range)
            .map(|p| ((p.max(0.0) * cells as f64) as usize).min(cells - 1))
    }

    /// Lower bounds of `cells` cells of the same size (in this scale)
    /// covering `range`, in ascending order.  The first bound is exactly
    /// `range.start`.
    pub fn bounds(self, range: &Range<f64>, cells: usize) -> Vec<f64> {
        let mut bounds: Vec<f64> = match self {
            Scale::Linear => {
                let step = (range.end - range.start) / cells as f64;
                (0..cells).map(|i| range.start + step * i as f64).collect()
            }
            Scale::Log => {
                let start = range.start.ln();
                let step = (range.end.ln() - start) / cells as f64;
                (0..cells).map(|i| (start + step * i as f64).exp()).collect()
            }
        };
        if let Some(first) = bounds.first_mut() {
            *first = range.start;
        }
        bounds
    }

    /// Value found at `t` (0.0 to 1.0) of the way from `from` to `to`, moving
    /// in a straight line in this scale.
    pub fn interpolate(self, from: f64, to: f64, t: f64) -> f64 {
        match self {
            Scale::Linear => from + (to - from) * t,
            Scale::Log => (from.ln() + (to.ln() - from.ln()) * t).exp(),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scale::Linear => write!(f, "linear"),
            Scale::Log => write!(f, "log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn accepts() {
        assert!(Scale::Linear.accepts(0.0));
        assert!(Scale::Linear.accepts(-3.0));
        assert!(!Scale::Linear.accepts(f64::NAN));
        assert!(!Scale::Linear.accepts(f64::INFINITY));
        assert!(Scale::Log.accepts(0.5));
        assert!(!Scale::Log.accepts(0.0));
        assert!(!Scale::Log.accepts(-1.0));
    }

    #[test]
    fn linear_position() {
        let range = 10.0..20.0;
        assert_float_eq!(Scale::Linear.position(10.0, &range).unwrap(), 0.0, abs <= 0.0);
        assert_float_eq!(Scale::Linear.position(15.0, &range).unwrap(), 0.5, abs <= 0.0);
        assert_float_eq!(Scale::Linear.position(20.0, &range).unwrap(), 1.0, abs <= 0.0);
        assert_eq!(Scale::Linear.position(7.0, &(7.0..7.0)), Some(0.0));
    }

    #[test]
    fn log_position() {
        let range = 1.0..1000.0;
        assert_float_eq!(Scale::Log.position(1.0, &range).unwrap(), 0.0, abs <= 0.0);
        assert_float_eq!(Scale::Log.position(10.0, &range).unwrap(), 1.0 / 3.0, abs <= 1e-12);
        assert_float_eq!(Scale::Log.position(100.0, &range).unwrap(), 2.0 / 3.0, abs <= 1e-12);
        assert_float_eq!(Scale::Log.position(1000.0, &range).unwrap(), 1.0, abs <= 1e-12);
    }

    #[test]
    fn log_has_no_zero() {
        assert_eq!(Scale::Log.position(0.0, &(1.0..10.0)), None);
        assert_eq!(Scale::Log.cell(0.0, &(1.0..10.0), 5), None);
        assert_eq!(Scale::Log.position(5.0, &(0.0..10.0)), None);
    }

    #[test]
    fn cells() {
        let range = 1.0..5.0;
        let cells: Vec<Option<usize>> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .iter()
            .map(|x| Scale::Log.cell(*x, &range, 4))
            .collect();
        assert_eq!(cells, [Some(0), Some(1), Some(2), Some(3), Some(3)]);
        assert_eq!(Scale::Linear.cell(3.0, &(1.0..5.0), 4), Some(2));
        assert_eq!(Scale::Linear.cell(3.0, &(1.0..5.0), 0), None);
        assert_eq!(Scale::Linear.cell(9.0, &(1.0..5.0), 4), Some(3));
        assert_eq!(Scale::Linear.cell(0.0, &(1.0..5.0), 4), Some(0));
    }

    #[test]
    fn bounds() {
        let linear = Scale::Linear.bounds(&(-1.0..4.0), 5);
        assert_eq!(linear, [-1.0, 0.0, 1.0, 2.0, 3.0]);
        let log = Scale::Log.bounds(&(1.0..1000.0), 3);
        assert_eq!(log.len(), 3);
        assert_float_eq!(log[0], 1.0, rmax <= f64::EPSILON);
        assert_float_eq!(log[1], 10.0, rmax <= 1e-12);
        assert_float_eq!(log[2], 100.0, rmax <= 1e-12);
    }

    #[test]
    fn log_bounds_start_at_range_start() {
        for start in [3.0, 10.0, 0.1, 22.0] {
            let bounds = Scale::Log.bounds(&(start..start * 1000.0), 4);
            assert_eq!(bounds[0], start);
        }
        assert!(Scale::Log.bounds(&(1.0..2.0), 0).is_empty());
    }

    #[test]
    fn interpolate() {
        assert_float_eq!(Scale::Linear.interpolate(1.0, 9.0, 0.25), 3.0, abs <= 0.0);
        assert_float_eq!(Scale::Linear.interpolate(4.0, -4.0, 0.5), 0.0, abs <= 0.0);
        assert_float_eq!(Scale::Log.interpolate(1.0, 100.0, 0.5), 10.0, rmax <= 1e-12);
        assert_float_eq!(Scale::Log.interpolate(2.0, 2000.0, 0.0), 2.0, rmax <= 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(Scale::Linear.to_string(), "linear");
        assert_eq!(Scale::Log.to_string(), "log");
    }
}
