use std::io::{self, BufRead};
use std::ops::RangeInclusive;

use derive_builder::Builder;
use regex::Regex;

use crate::read::open_file;

/// Loads a sequence of samples, one per input line.
///
/// Lines that do not hold a number are skipped; the reason is only reported
/// through a `debug` log record.  Anything Rust's `f64` parser accepts is a
/// sample, so `NaN` and `inf` make it into the sequence.
#[derive(Debug, Default, Builder)]
pub struct DataReader {
    /// Keep only the values inside this range, both ends included.
    #[builder(setter(strip_option), default)]
    range: Option<RangeInclusive<f64>>,
    /// Capture values with this regex instead of reading whole lines.
    #[builder(setter(strip_option), default)]
    regex: Option<Regex>,
}

impl DataReader {
    /// Read samples from `path`, or from stdin if `path` is "-".
    pub fn read(&self, path: &str) -> io::Result<Vec<f64>> {
        Ok(self.read_from(open_file(path)?))
    }

    /// Read samples from any buffered input until it is exhausted.
    pub fn read_from<R: BufRead>(&self, input: R) -> Vec<f64> {
        let mut vec: Vec<f64> = Vec::new();
        for line in input.lines() {
            match line {
                Ok(as_string) => {
                    if let Some(n) = self.parse_line(&as_string) {
                        match &self.range {
                            Some(range) => {
                                if range.contains(&n) {
                                    vec.push(n);
                                }
                            }
                            _ => vec.push(n),
                        }
                    }
                }
                Err(error) => debug!("Cannot read line: {}", error),
            }
        }
        vec
    }

    fn parse_line(&self, line: &str) -> Option<f64> {
        match &self.regex {
            Some(re) => Self::parse_regex(re, line),
            None => Self::parse_float(line),
        }
    }

    fn parse_float(line: &str) -> Option<f64> {
        match line.trim().parse::<f64>() {
            Ok(n) => Some(n),
            Err(parse_error) => {
                debug!("Cannot parse float ({}) at '{}'", parse_error, line);
                None
            }
        }
    }

    fn parse_regex(re: &Regex, line: &str) -> Option<f64> {
        match re.captures(line) {
            Some(cap) => {
                if let Some(name) = cap.name("value") {
                    Self::parse_float(name.as_str())
                } else if let Some(capture) = cap.get(1) {
                    Self::parse_float(capture.as_str())
                } else {
                    None
                }
            }
            None => {
                debug!("Regex does not match '{}'", line);
                None
            }
        }
    }
}
