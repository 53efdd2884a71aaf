use clap::{self, Arg, Command};

fn add_input(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("input")
            .help("Input file")
            .default_value("-")
            .long_help("If not present or a single dash, standard input will be used"),
    )
}

fn add_min_max(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("max")
            .long("max")
            .short('M')
            .help("Filter out values bigger than this")
            .takes_value(true),
    )
    .arg(
        Arg::new("min")
            .long("min")
            .short('m')
            .help("Filter out values smaller than this")
            .takes_value(true),
    )
}

fn add_regex(app: Command<'static>) -> Command<'static> {
    const LONG_RE_ABOUT: &str = "\
A regular expression used for capturing the values to be plotted inside input
lines.

By default this will use a capture group named `value`.  If not present, it will
use first capture group.

If no regex is used, a number per line is expected (something that can be parsed
as float).  Lines that do not hold a number are skipped.
";
    app.arg(
        Arg::new("regex")
            .long("regex")
            .short('R')
            .help("Use a regex to capture input values")
            .long_help(LONG_RE_ABOUT)
            .takes_value(true),
    )
}

fn add_dimensions(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("width")
            .long("width")
            .short('w')
            .help("Use this many characters as terminal width")
            .default_value("110")
            .takes_value(true),
    )
    .arg(
        Arg::new("height")
            .long("height")
            .short('H')
            .help("Use that many `rows` for the plot")
            .default_value("40")
            .takes_value(true),
    )
}

fn add_scales(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("log-y")
            .long("log-y")
            .short('y')
            .help("Use a logarithmic scale for sample values too")
            .long_help(
                "Use a logarithmic scale for sample values too.  Samples that are zero or \
                 negative will not be drawn.",
            ),
    )
    .arg(
        Arg::new("precision")
            .long("precision")
            .short('p')
            .help("Show that many decimals in labels (default: use human units)")
            .takes_value(true),
    )
}

pub fn get_app() -> Command<'static> {
    let app = Command::new("logxplot")
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .long_about(
            "Plot numeric samples, one per input line, against their index.  The \
             index axis uses a logarithmic scale, so the first sample (index 0) is \
             never drawn.",
        )
        .max_term_width(100)
        .arg(
            Arg::new("color")
                .short('c')
                .long("color")
                .help("Use colors in the output")
                .possible_values(["auto", "no", "yes"])
                .default_value("auto")
                .takes_value(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Be more verbose")
                .takes_value(false),
        );
    add_input(add_regex(add_min_max(add_scales(add_dimensions(app)))))
}
