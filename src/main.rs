//! Command-line front end for keysort
//!
//! Parses flags into a [`SortConfig`], sets up logging and hands over to the
//! library.

use std::process;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

use keysort::{
    config::{ModeFlags, SortConfig, SortConfigBuilder, DEFAULT_DELIMITER},
    error::SortResult,
    sort,
};

fn main() {
    let matches = build_cli().get_matches();

    let result = parse_config_from_matches(&matches).and_then(|config| {
        init_logging(config.debug);
        sort(&config)
    });
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("keysort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over the `--debug` default
fn init_logging(debug: bool) {
    let default_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn build_cli() -> Command {
    Command::new("keysort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("keysort [OPTION]...")
        .about("Sort lines of text by a delimited column")
        .disable_help_flag(true) // -h is human-numeric sort
        .disable_version_flag(true)

        // Sort modes
        .arg(Arg::new("numeric-sort")
            .short('n')
            .long("numeric-sort")
            .help("Compare according to numerical value")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("month-sort")
            .short('M')
            .long("month-sort")
            .help("Compare by three-letter month names (Jan..Dec)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("human-numeric-sort")
            .short('h')
            .long("human-numeric-sort")
            .help("Compare numbers with K, M, G, T suffixes (e.g., 2K 1.5M)")
            .action(ArgAction::SetTrue))

        // Sort modifiers
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Reverse the result of comparisons")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("unique")
            .short('u')
            .long("unique")
            .help("Drop repeated lines, keeping the first")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("ignore-trailing-space")
            .short('b')
            .long("ignore-trailing-space")
            .help("Strip trailing spaces from every line")
            .action(ArgAction::SetTrue))

        // Column selection
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .help("Sort by column N, counting from 1; a missing column means the whole line")
            .value_name("N")
            .default_value("1")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(isize)))
        .arg(Arg::new("delimiter")
            .short('d')
            .long("delimiter")
            .help("Column separator string")
            .value_name("SEP")
            .default_value(DEFAULT_DELIMITER))

        // I/O
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .help("Read lines from FILE instead of standard input")
            .value_name("FILE"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write result to FILE instead of standard output")
            .value_name("FILE"))

        // Operation modes
        .arg(Arg::new("check")
            .short('c')
            .long("check")
            .help("Check whether input is sorted; do not sort")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Log sort decisions to stderr")
            .action(ArgAction::SetTrue))

        .arg(Arg::new("help")
            .long("help")
            .help("Display this help and exit")
            .action(ArgAction::Help))
        .arg(Arg::new("version")
            .long("version")
            .help("Output version information and exit")
            .action(ArgAction::Version))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<SortConfig> {
    let flags = ModeFlags {
        month: matches.get_flag("month-sort"),
        numeric: matches.get_flag("numeric-sort"),
        human_numeric: matches.get_flag("human-numeric-sort"),
    };

    let mut builder = SortConfigBuilder::new().mode_flags(flags);

    if let Some(&column) = matches.get_one::<isize>("key") {
        builder = builder.column_from_one(column);
    }
    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        builder = builder.delimiter(delimiter);
    }

    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if matches.get_flag("unique") {
        builder = builder.unique();
    }
    if matches.get_flag("ignore-trailing-space") {
        builder = builder.ignore_trailing_space();
    }
    if matches.get_flag("check") {
        builder = builder.check();
    }
    if matches.get_flag("debug") {
        builder = builder.debug();
    }

    if let Some(input) = matches.get_one::<String>("input") {
        builder = builder.input_file(input.clone());
    }
    if let Some(output) = matches.get_one::<String>("output") {
        builder = builder.output_file(output.clone());
    }

    builder.build()
}
