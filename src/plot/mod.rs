pub use self::axis::Scale;
pub use self::xy::{LogXyPlot, PlotOptions};

mod axis;
mod xy;
