#[macro_use]
extern crate log;

use std::env;
use std::str::FromStr;

use clap::ArgMatches;
use regex::Regex;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use yansi::Paint;

use logxplot::plot::{LogXyPlot, PlotOptions, Scale};
use logxplot::read::{DataReader, DataReaderBuilder};

mod app;

/// Sets up color choices and verbosity for both the plot and the logger.
fn configure_output(option: &str, verbose: bool) {
    let mut color_choice = ColorChoice::Auto;
    match option {
        "no" => {
            Paint::disable();
            color_choice = ColorChoice::Never;
        }
        "auto" => match env::var("TERM") {
            Ok(value) if value == "dumb" => {
                Paint::disable();
                color_choice = ColorChoice::Never;
            }
            _ => {
                if !atty::is(atty::Stream::Stdout) {
                    Paint::disable();
                }
            }
        },
        _ => {
            Paint::enable();
            color_choice = ColorChoice::Always;
        }
    };
    if let Err(error) = TermLogger::init(
        if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        ConfigBuilder::new()
            .set_time_level(LevelFilter::Off)
            .set_thread_level(LevelFilter::Off)
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        color_choice,
    ) {
        eprintln!("Could not set up logging: {}", error);
    }
}

/// Parses an optional argument, exiting with clap's usage error if the value
/// is malformed.
fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Option<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    if !matches.is_present(name) {
        return None;
    }
    Some(matches.value_of_t(name).unwrap_or_else(|error| error.exit()))
}

fn get_reader(matches: &ArgMatches) -> DataReader {
    let mut builder = DataReaderBuilder::default();
    if matches.is_present("min") || matches.is_present("max") {
        let min = parse_arg(matches, "min").unwrap_or(f64::NEG_INFINITY);
        let max = parse_arg(matches, "max").unwrap_or(f64::INFINITY);
        if min > max {
            error!("Minimum should be smaller than maximum");
            std::process::exit(1);
        }
        builder.range(min..=max);
    }
    if let Some(string) = matches.value_of("regex") {
        match Regex::new(string) {
            Ok(re) => {
                builder.regex(re);
            }
            _ => {
                error!("Failed to parse regex {}", string);
                std::process::exit(1);
            }
        };
    }
    match builder.build() {
        Ok(reader) => reader,
        Err(error) => {
            error!("{}", error);
            std::process::exit(1);
        }
    }
}

fn plot(matches: &ArgMatches) {
    let reader = get_reader(matches);
    let input = matches.value_of("input").unwrap_or("-");
    let vec = match reader.read(input) {
        Ok(vec) => vec,
        Err(error) => {
            error!("Could not open {}: {}", input, error);
            std::process::exit(1);
        }
    };
    if vec.is_empty() {
        warn!("No data to process");
    }
    let options = PlotOptions {
        width: parse_arg(matches, "width").unwrap_or(110),
        height: parse_arg(matches, "height").unwrap_or(40),
        y_scale: if matches.is_present("log-y") {
            Scale::Log
        } else {
            Scale::Linear
        },
        precision: parse_arg(matches, "precision"),
    };
    print!("{}", LogXyPlot::new(&vec, options));
}

fn main() {
    let matches = app::get_app().get_matches();
    configure_output(
        matches.value_of("color").unwrap_or("auto"),
        matches.is_present("verbose"),
    );
    plot(&matches);
}
