pub use self::samples::{DataReader, DataReaderBuilder, DataReaderBuilderError};

mod samples;

use std::fs::File;
use std::io::{self, BufReader};

/// Return io::BufRead from a path, falling back to using stdin if path is "-".
fn open_file(path: &str) -> io::Result<Box<dyn io::BufRead>> {
    match path {
        "-" => Ok(Box::new(BufReader::new(io::stdin()))),
        _ => Ok(Box::new(BufReader::new(File::open(path)?))),
    }
}
