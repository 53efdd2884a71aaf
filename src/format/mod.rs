use std::ops::Range;

// Units-based suffixes for human formatting.
const UNITS: &[&str] = &["", " K", " M", " G", " T", " P", " E", " Z", " Y"];

#[derive(Debug)]
pub struct F64Formatter {
    /// Decimals digits to be used
    decimals: usize,
    /// Number of times the value will be divided by 1000
    divisor: u8,
}

impl F64Formatter {
    /// Initializes a new `F64Formatter` with a fixed number of decimals and no
    /// units.
    pub fn new(decimals: usize) -> F64Formatter {
        F64Formatter {
            decimals,
            divisor: 0,
        }
    }

    /// Initializes a new `F64Formatter` for formatting numbers in the
    /// provided range.
    ///
    /// The wider the range, the fewer decimals get printed; ranges spanning
    /// thousands are printed in K, M, G... units.
    pub fn new_with_range(range: Range<f64>) -> F64Formatter {
        let span = (range.end - range.start).abs();
        if span == 0.0 || !span.is_finite() {
            return F64Formatter::new(3);
        }
        let magnitude = span.log10() as i64;
        if magnitude <= 0 {
            F64Formatter::new((-magnitude as usize).min(8) + 3)
        } else {
            F64Formatter {
                decimals: magnitude.rem_euclid(3) as usize,
                divisor: ((magnitude - 1) / 3).min(5) as u8,
            }
        }
    }

    pub fn format(&self, number: f64) -> String {
        format!(
            "{:.*}{}",
            self.decimals,
            number / 1000_f64.powi(self.divisor.into()),
            UNITS[self.divisor as usize]
        )
    }
}
