// Command-line interface for larkmd
//
// This binary converts Lark document block JSON to Markdown and back.
//
// The conversion core lives in the larkmd-babel crate; this crate is a thin
// shell around it: argument parsing, configuration layering, and file I/O.
// The library itself never touches the filesystem or prints.
//
// Usage:
//  larkmd export <blocks.json> [--highlight] [-o <file>]  - Blocks → Markdown
//  larkmd import <doc.md> [--compact] [-o <file>]         - Markdown → blocks
//
// Configuration:
//
// Settings are layered: embedded defaults, then an optional ./larkmd.toml,
// then a file passed via --config, then command-line flags.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use larkmd_babel::{Block, BlockToMarkdown, ConvertOptions, MarkdownToBlocks};
use larkmd_config::{LarkmdConfig, Loader};
use std::fs;
use std::process;

fn build_cli() -> Command {
    Command::new("larkmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Lark document blocks to and from Markdown")
        .long_about(
            "larkmd is a command-line tool for converting Lark document block\n\
            collections to Markdown and back.\n\n\
            Commands:\n  \
            - export: render a block JSON file to Markdown\n  \
            - import: parse a Markdown file into block JSON\n\n\
            Examples:\n  \
            larkmd export doc.json                  # Markdown to stdout\n  \
            larkmd export doc.json --highlight      # Keep text/background colors\n  \
            larkmd import notes.md -o blocks.json   # Block JSON to a file",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a larkmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .about("Render a block JSON file to Markdown")
                .long_about(
                    "Render a document block collection to Markdown.\n\n\
                    The input is a JSON file holding either a block array or an\n\
                    object with an `items` array (the shape of a block list\n\
                    response). Output goes to stdout by default.\n\n\
                    Examples:\n  \
                    larkmd export doc.json                # To stdout\n  \
                    larkmd export doc.json -o doc.md      # To a file\n  \
                    larkmd export doc.json --highlight    # With color spans",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the block JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("highlight")
                        .long("highlight")
                        .help("Emit <span> highlighting for colored runs")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Parse a Markdown file into block JSON")
                .long_about(
                    "Parse Markdown into a document block collection.\n\n\
                    The result is a JSON block array rooted at a synthetic page\n\
                    block, suitable for a document-write API call. Output goes\n\
                    to stdout by default.\n\n\
                    Examples:\n  \
                    larkmd import notes.md                # Pretty JSON to stdout\n  \
                    larkmd import notes.md --compact      # Single-line JSON\n  \
                    larkmd import notes.md -o blocks.json # To a file",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Emit single-line JSON regardless of configuration")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("export", sub)) => run_export(sub),
        Some(("import", sub)) => run_import(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<LarkmdConfig, Box<dyn std::error::Error>> {
    let mut loader = Loader::new().with_optional_file("larkmd.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

fn run_export(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    let input = matches.get_one::<String>("input").expect("required arg");
    let data = fs::read_to_string(input)?;
    let blocks = read_blocks(&data)?;

    let mut options: ConvertOptions = (&config.convert).into();
    if matches.get_flag("highlight") {
        options.highlight = true;
    }

    let markdown = BlockToMarkdown::new(blocks, options).convert()?;
    write_output(&markdown, matches.get_one::<String>("output"))
}

fn run_import(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    let input = matches.get_one::<String>("input").expect("required arg");
    let data = fs::read(input)?;

    let options: ConvertOptions = (&config.convert).into();
    let blocks = MarkdownToBlocks::new(&data, options, "").convert()?;

    let pretty = config.output.pretty_json && !matches.get_flag("compact");
    let mut json = if pretty {
        serde_json::to_string_pretty(&blocks)?
    } else {
        serde_json::to_string(&blocks)?
    };
    json.push('\n');
    write_output(&json, matches.get_one::<String>("output"))
}

/// Accept either a bare block array or an object wrapping it in `items`
/// (the shape of a block list API response).
fn read_blocks(data: &str) -> Result<Vec<Block>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(data)?;
    let list = match value {
        serde_json::Value::Object(mut map) => match map.remove("items") {
            Some(items) => items,
            None => serde_json::Value::Object(map),
        },
        other => other,
    };
    serde_json::from_value(list)
}

fn write_output(
    content: &str,
    output: Option<&String>,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, content)?,
        None => print!("{content}"),
    }
    Ok(())
}
