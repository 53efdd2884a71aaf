//! # Getting Started
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! logxplot = "*"
//! ```
//!
//! ```rust,no_run
//! use logxplot::plot::{LogXyPlot, PlotOptions};
//!
//! let samples = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0];
//! // Plot the samples against their index, with the index on a logarithmic
//! // axis, 40 columns wide and 10 rows high
//! let options = PlotOptions { width: 40, height: 10, ..Default::default() };
//! print!("{}", LogXyPlot::new(&samples, options));
//! ```

#[macro_use]
extern crate log;

mod format;
pub mod plot;
pub mod read;
pub mod stats;
