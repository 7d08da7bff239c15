//! Command-line interface for swiftmock
//! This binary reads Swift sources, finds protocols marked for mocking and writes mock classes for them.
//!
//! Usage:
//!   swiftmock generate-mock `<input>` [`<output>`] [--config `<file>`] [--marker `<name>`] [--suffix `<text>`]
//!   swiftmock print-names `<path>`                         - List declared and extended types
//!   swiftmock inspect `<path>` --transform `<name>`        - Print an intermediate stage as JSON
//!   swiftmock inspect --list-transforms                    - List available transforms

mod transforms;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::process;
use swiftmock_config::{Loader, PROJECT_CONFIG_FILE};
use swiftmock_parser::swift::generation::{MockGenerator, MockOptions};
use swiftmock_parser::swift::loader::{LoaderError, SourceLoader};
use swiftmock_parser::swift::parsing::format_source_context;
use swiftmock_parser::swift::transforms::TransformError;
use tracing::{info, warn};

fn build_cli() -> Command {
    Command::new("swiftmock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates mock classes for Swift protocols")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Raise log verbosity (-v for info, -vv for debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("generate-mock")
                .visible_alias("generate_mock")
                .about("Generate mocks for every protocol conforming to the marker")
                .arg(
                    Arg::new("input")
                        .help("Swift source file to read")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .help("File to write the mocks to (stdout when omitted)")
                        .index(2),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("marker")
                        .long("marker")
                        .help("Conformance that selects protocols for mocking"),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .help("Appended to the protocol name to name the mock class"),
                ),
        )
        .subcommand(
            Command::new("print-names")
                .visible_alias("print_name")
                .about("Print the classes, structs, enums, extensions and protocols a file declares")
                .arg(
                    Arg::new("path")
                        .help("Swift source file to read")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print an intermediate pipeline stage")
                .arg(
                    Arg::new("path")
                        .help("Swift source file to read")
                        .required_unless_present("list-transforms")
                        .index(1),
                )
                .arg(
                    Arg::new("transform")
                        .long("transform")
                        .short('t')
                        .help("Transform to apply (see --list-transforms)")
                        .default_value("declarations-json"),
                )
                .arg(
                    Arg::new("list-transforms")
                        .long("list-transforms")
                        .help("List available transforms")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    // -v is global, so subcommand matches see it wherever it was given
    let verbosity = matches
        .subcommand()
        .map(|(_, sub)| sub.get_count("verbose"))
        .unwrap_or(0)
        .max(matches.get_count("verbose"));
    init_tracing(verbosity);

    match matches.subcommand() {
        Some(("generate-mock", sub)) => handle_generate_command(sub),
        Some(("print-names", sub)) => handle_print_names_command(sub),
        Some(("inspect", sub)) => handle_inspect_command(sub),
        _ => {
            let _ = build_cli().print_help();
            process::exit(1);
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = format!("swiftmock={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the generate-mock command
fn handle_generate_command(matches: &ArgMatches) {
    let input = required_arg(matches, "input");
    let options = load_options(matches);

    let loader = SourceLoader::from_path(input).unwrap_or_else(|e| report_parse_failure(input, "", e));
    let declarations = loader
        .declarations()
        .unwrap_or_else(|e| report_parse_failure(input, loader.source_ref(), e));

    let generator = MockGenerator::new(options);
    let selected = generator.mockable(&declarations).count();
    if selected == 0 {
        warn!(
            path = input,
            marker = %generator.options().marker,
            "no protocol conforms to the marker"
        );
    }
    let mocks = generator.generate(&declarations);

    match matches.get_one::<String>("output") {
        Some(output) => {
            fs::write(output, &mocks).unwrap_or_else(|e| {
                eprintln!("Could not write output to {} file", output);
                eprintln!("{}", e);
                process::exit(1);
            });
            info!(path = %output, mocks = selected, "wrote mocks");
        }
        None => print!("{}", mocks),
    }
}

/// Handle the print-names command
fn handle_print_names_command(matches: &ArgMatches) {
    let path = required_arg(matches, "path");

    let loader = SourceLoader::from_path(path).unwrap_or_else(|e| report_parse_failure(path, "", e));
    let names = loader
        .type_names()
        .unwrap_or_else(|e| report_parse_failure(path, loader.source_ref(), e));

    info!(path = path, count = names.len(), "listed type names");
    for name in names {
        println!("{}", name);
    }
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) {
    if matches.get_flag("list-transforms") {
        println!("Available transforms:\n");
        for name in transforms::AVAILABLE_TRANSFORMS {
            println!("  {}", name);
        }
        return;
    }

    let path = required_arg(matches, "path");
    let transform = required_arg(matches, "transform");

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        report_parse_failure(path, "", LoaderError::from(e))
    });
    info!(path = path, transform = transform, "inspecting");

    match transforms::execute_transform(&source, transform) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            if e.starts_with("Unknown transform") {
                eprintln!("\nAvailable transforms:");
                for name in transforms::AVAILABLE_TRANSFORMS {
                    eprintln!("  {}", name);
                }
            }
            process::exit(1);
        }
    }
}

/// Layer defaults, the project file, `--config` and flag overrides
fn load_options(matches: &ArgMatches) -> MockOptions {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    for key in ["marker", "suffix"] {
        if let Some(value) = matches.get_one::<String>(key) {
            loader = loader
                .set_override(&format!("mock.{}", key), value.as_str())
                .unwrap_or_else(|e| {
                    eprintln!("Configuration error: {}", e);
                    process::exit(1);
                });
        }
    }

    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    config.mock_options()
}

fn required_arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value,
        None => {
            eprintln!("Missing argument: {}", name);
            process::exit(1);
        }
    }
}

fn report_parse_failure(path: &str, source: &str, err: LoaderError) -> ! {
    eprintln!("Could not parse Swift file at {} path", path);
    eprintln!("{}", err);
    if let LoaderError::TransformError(TransformError::Parse(parse_error)) = &err {
        eprintln!("\n{}", format_source_context(source, parse_error.range()));
    }
    process::exit(1);
}
