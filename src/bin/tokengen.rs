//! Command-line entry point for the token code generator
//! This binary is the build hook: it reads the design-token document once and
//! regenerates the constants file and the type-declaration files.
//!
//! Usage:
//!   tokengen generate [--tokens `<path>`] [--constants `<path>`] [--out-dir `<dir>`] [--split-types]
//!   tokengen generate --config `<config.json>` [--out-dir `<dir>`]

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tokengen::tokengen::pipeline::{
    ArtifactLayout, DirectorySink, GeneratorConfig, Pipeline,
};

fn main() {
    let matches = Command::new("tokengen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates constants and type declarations from a design-token document")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Run the generation pipeline once")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a generation config JSON (overrides the path flags)"),
                )
                .arg(
                    Arg::new("tokens")
                        .long("tokens")
                        .help("Path to the design-token JSON document")
                        .default_value("src/designTokens.json"),
                )
                .arg(
                    Arg::new("constants")
                        .long("constants")
                        .help("Destination path of the generated constants file")
                        .default_value("src/constant.js"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .help("Directory receiving the type-declaration files")
                        .default_value("dist"),
                )
                .arg(
                    Arg::new("split-types")
                        .long("split-types")
                        .help("Emit types.d.ts plus a re-exporting index.d.ts")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("generate", generate_matches)) => {
            handle_generate_command(generate_matches);
        }
        _ => unreachable!(),
    }
}

/// Handle the generate command
fn handle_generate_command(matches: &ArgMatches) {
    let config = match matches.get_one::<String>("config") {
        Some(path) => GeneratorConfig::from_path(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => GeneratorConfig {
            tokens_path: PathBuf::from(matches.get_one::<String>("tokens").unwrap()),
            constants_path: PathBuf::from(matches.get_one::<String>("constants").unwrap()),
            layout: if matches.get_flag("split-types") {
                ArtifactLayout::TypesWithIndex
            } else {
                ArtifactLayout::Combined
            },
        },
    };

    let out_dir = matches.get_one::<String>("out-dir").unwrap();
    let mut sink = DirectorySink::new(out_dir);
    if let Err(e) = Pipeline::new(config).run(&mut sink) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
