use std::fmt;

use yansi::Color::Blue;

use crate::format::F64Formatter;

#[derive(Debug)]
/// A struct holding statistical data regarding a unsorted set of numerical
/// values.
///
/// Only finite values take part in the figures; `NaN` and infinities are
/// counted apart.
pub struct Stats {
    /// Minimum of the finite input values.
    pub min: f64,
    /// Maximum of the finite input values.
    pub max: f64,
    /// Average of the finite input values.
    pub avg: f64,
    /// Standard deviation of the finite input values.
    pub std: f64,
    /// Variance of the finite input values.
    pub var: f64,
    /// Number of samples of the input values, finite or not.
    pub samples: usize,
    /// Number of finite samples.
    pub finite: usize,
    precision: Option<usize>, // If None, then human friendly display will be used
}

impl Stats {
    /// Creates a Stats struct from a vector of numerical data.
    ///
    /// `precision` is an Option with the number of decimals to display.  If
    /// "None" is used, human units will be used, with an heuristic based on the
    /// input data for deciding the units and the decimal places.
    ///
    /// An input with no finite value leaves every figure as `NaN`.
    pub fn new(vec: &[f64], precision: Option<usize>) -> Self {
        let finite: Vec<f64> = vec.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self {
                min: f64::NAN,
                max: f64::NAN,
                avg: f64::NAN,
                std: f64::NAN,
                var: f64::NAN,
                samples: vec.len(),
                finite: 0,
                precision,
            };
        }
        let mut max = finite[0];
        let mut min = max;
        let mut temp: f64 = 0.0;
        let avg = finite.iter().sum::<f64>() / finite.len() as f64;
        for val in finite.iter() {
            max = max.max(*val);
            min = min.min(*val);
            temp += (avg - *val).powi(2);
        }
        let var = temp / finite.len() as f64;
        Self {
            min,
            max,
            avg,
            std: var.sqrt(),
            var,
            samples: vec.len(),
            finite: finite.len(),
            precision,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.finite == 0 {
            return writeln!(
                f,
                "Samples = {}; no finite values",
                Blue.paint(self.samples.to_string())
            );
        }
        let formatter = match self.precision {
            None => F64Formatter::new_with_range(self.min..self.max),
            Some(n) => F64Formatter::new(n),
        };
        write!(
            f,
            "Samples = {len}; Min = {min}; Max = {max}",
            len = Blue.paint(self.samples.to_string()),
            min = Blue.paint(formatter.format(self.min)),
            max = Blue.paint(formatter.format(self.max)),
        )?;
        if self.finite < self.samples {
            write!(
                f,
                "; Non-finite = {}",
                Blue.paint((self.samples - self.finite).to_string())
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Average = {avg}; Variance = {var}; STD = {std}",
            avg = Blue.paint(formatter.format(self.avg)),
            var = Blue.paint(format!("{:.3}", self.var)),
            std = Blue.paint(format!("{:.3}", self.std)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use serial_test::serial;
    use yansi::Paint;

    #[test]
    fn basic_test() {
        let stats = Stats::new(&[1.1, 3.3, 2.2], Some(3));
        assert_eq!(3_usize, stats.samples);
        assert_eq!(3_usize, stats.finite);
        assert_float_eq!(stats.avg, 2.2, rmax <= f64::EPSILON);
        assert_float_eq!(stats.min, 1.1, rmax <= f64::EPSILON);
        assert_float_eq!(stats.max, 3.3, rmax <= f64::EPSILON);
        assert_float_eq!(stats.var, 0.8066, abs <= 0.0001);
        assert_float_eq!(stats.std, 0.8981, abs <= 0.0001);
    }

    #[test]
    fn non_finite_values_are_left_out() {
        let stats = Stats::new(&[f64::NAN, 1.0, f64::INFINITY, 3.0], None);
        assert_eq!(4_usize, stats.samples);
        assert_eq!(2_usize, stats.finite);
        assert_float_eq!(stats.avg, 2.0, rmax <= f64::EPSILON);
        assert_float_eq!(stats.min, 1.0, rmax <= f64::EPSILON);
        assert_float_eq!(stats.max, 3.0, rmax <= f64::EPSILON);
    }

    #[test]
    fn empty_input() {
        let stats = Stats::new(&[], None);
        assert_eq!(0_usize, stats.samples);
        assert_eq!(0_usize, stats.finite);
        assert!(stats.avg.is_nan());
    }

    #[test]
    #[serial]
    fn test_display() {
        let stats = Stats::new(&[1.1, 3.3, 2.2], Some(3));
        Paint::disable();
        let display = format!("{stats}");
        assert!(display.contains("Samples = 3"));
        assert!(display.contains("Min = 1.100"));
        assert!(display.contains("Max = 3.300"));
        assert!(display.contains("Average = 2.200"));
        assert!(!display.contains("Non-finite"));
    }

    #[test]
    #[serial]
    fn test_display_non_finite() {
        let stats = Stats::new(&[1.0, f64::NAN, 2.0], Some(1));
        Paint::disable();
        let display = format!("{stats}");
        assert!(display.contains("Samples = 3; Min = 1.0; Max = 2.0; Non-finite = 1\n"));
    }

    #[test]
    #[serial]
    fn test_display_nothing_finite() {
        Paint::disable();
        assert_eq!(
            format!("{}", Stats::new(&[], None)),
            "Samples = 0; no finite values\n"
        );
        assert_eq!(
            format!("{}", Stats::new(&[f64::NAN], None)),
            "Samples = 1; no finite values\n"
        );
    }

    #[test]
    #[serial]
    fn test_big_num() {
        let stats = Stats::new(&[123456789.1234, 123456788.1234], None);
        Paint::disable();
        let display = format!("{stats}");
        assert!(display.contains("Samples = 2"));
        assert!(display.contains("Min = 123456788.123"));
        assert!(display.contains("Max = 123456789.123"));
    }
}
