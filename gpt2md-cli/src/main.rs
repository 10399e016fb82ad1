// Command-line interface for gpt2md
//
// This binary turns saved ChatGPT conversation pages into Markdown
// transcripts. The conversion and extraction capabilities live in the
// gpt2md crate; this layer reads files, applies configuration, and reports
// results.
//
// Exporting:
//
// Usage:
//  gpt2md <page.html> [--url <URL>] [-o <file>]          - Export a saved page (default)
//  gpt2md export <page.html> [--url <URL>] [-o <file>]   - Same as above (explicit)
//  gpt2md convert <fragment.html>                        - Convert raw markup to stdout
//  gpt2md check <URL>                                    - Validate a conversation URL

use chrono::Utc;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use gpt2md::{export_page, html_to_markdown, page, ExportError, ExportOptions, FilenameStyle};
use gpt2md_config::{Gpt2mdConfig, Loader};
use std::fs;

fn build_cli() -> Command {
    Command::new("gpt2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export saved ChatGPT conversation pages to Markdown")
        .long_about(
            "gpt2md is a command-line tool for working with saved ChatGPT conversation pages.\n\n\
            Commands:\n  \
            - export:  Extract a conversation and write a Markdown transcript (default)\n  \
            - convert: Run the HTML-to-Markdown conversion on a raw fragment\n  \
            - check:   Validate that a URL points to a ChatGPT conversation\n\n\
            Examples:\n  \
            gpt2md conversation.html                                  # Export; filename is generated\n  \
            gpt2md conversation.html --url https://chatgpt.com/c/ID   # Adds header and id\n  \
            gpt2md export conversation.html -o transcript.md          # 'export' is optional\n  \
            gpt2md convert fragment.html                              # Markdown to stdout\n  \
            gpt2md check https://chatgpt.com/c/ID                     # URL validation",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a gpt2md.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .about("Export a saved conversation page to Markdown (default command)")
                .long_about(
                    "Extract the conversation from a saved page and write a Markdown\n\
                    transcript.\n\n\
                    The page is the HTML of a ChatGPT conversation saved from the\n\
                    browser. When --url is given it is checked against the known chat\n\
                    hosts, linked in a metadata header, and mined for the conversation\n\
                    id used in the generated filename.\n\n\
                    Examples:\n  \
                    gpt2md export page.html                                # ChatGPT-<seconds>.md\n  \
                    gpt2md export page.html --url https://chatgpt.com/c/ID # ChatGPT-<id8>-<seconds>.md\n  \
                    gpt2md export page.html -o out.md --json               # Summary as JSON",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the saved conversation page")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Conversation URL, used for validation, the metadata header, and the filename id")
                        .value_hint(ValueHint::Url),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to the generated filename)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the export summary as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("filename-style")
                        .long("filename-style")
                        .value_name("STYLE")
                        .help("Filename convention: unix seconds or calendar date")
                        .value_parser(["epoch", "date"]),
                )
                .arg(
                    Arg::new("no-id")
                        .long("no-id")
                        .help("Leave the conversation id out of the generated filename")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-header")
                        .long("no-header")
                        .help("Skip the source metadata header")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a raw HTML fragment to Markdown on stdout")
                .long_about(
                    "Run the HTML-to-Markdown conversion on a file without any page\n\
                    structure expectations. Useful for inspecting how a single message\n\
                    fragment converts.\n\n\
                    Examples:\n  \
                    gpt2md convert fragment.html             # Markdown to stdout\n  \
                    gpt2md convert fragment.html > out.md    # Redirect to file",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the HTML fragment")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate that a URL points to a ChatGPT conversation")
                .long_about(
                    "Check a URL against the known chat hosts and report the\n\
                    conversation id when the path carries one. Exits non-zero for\n\
                    URLs that do not belong to a conversation page.",
                )
                .arg(
                    Arg::new("url")
                        .help("URL to check")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Url),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "export"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "export"
                && args[1] != "convert"
                && args[1] != "check"
                && args[1] != "help"
            {
                // Inject "export" as the subcommand
                let mut new_args = vec![args[0].clone(), "export".to_string()];
                new_args.extend_from_slice(&args[1..]);

                // Try parsing again with "export" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject export, show original error
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("export", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let url = sub_matches.get_one::<String>("url").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let json = sub_matches.get_flag("json");

            let mut options = export_options_from_config(&config);
            apply_export_overrides(&mut options, sub_matches);

            handle_export_command(input, url, output, json, &options);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_convert_command(input);
        }
        Some(("check", sub_matches)) => {
            let url = sub_matches
                .get_one::<String>("url")
                .expect("url is required");
            handle_check_command(url);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the export command
fn handle_export_command(
    input: &str,
    url: Option<&str>,
    output: Option<&str>,
    json: bool,
    options: &ExportOptions,
) {
    // A URL, when given, must belong to a conversation page before any
    // file work happens.
    if let Some(url) = url {
        if !page::is_conversation_url(url) {
            eprintln!("{}", ExportError::InvalidPage);
            std::process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let mut export = export_page(&source, url, Utc::now(), options).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    // An explicit output path replaces the generated name everywhere,
    // summary included.
    if let Some(path) = output {
        export.filename = path.to_string();
    }

    fs::write(&export.filename, export.markdown.as_bytes()).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {e}", export.filename);
        std::process::exit(1);
    });

    if json {
        let summary = serde_json::to_string_pretty(&export).unwrap_or_else(|e| {
            eprintln!("Error serializing summary: {e}");
            std::process::exit(1);
        });
        println!("{summary}");
    } else {
        println!(
            "Exported {} messages ({} characters) to {}",
            export.message_count, export.character_count, export.filename
        );
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let markdown = html_to_markdown(&source);
    println!("{markdown}");
}

/// Handle the check command
fn handle_check_command(url: &str) {
    if !page::is_conversation_url(url) {
        eprintln!("{}", ExportError::InvalidPage);
        std::process::exit(1);
    }

    match page::conversation_id(url) {
        Some(id) => println!("ok: conversation {id}"),
        None => println!("ok: no conversation id"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Gpt2mdConfig {
    let loader = Loader::new().with_optional_file("gpt2md.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn export_options_from_config(config: &Gpt2mdConfig) -> ExportOptions {
    ExportOptions {
        labels: (&config.labels).into(),
        filename_style: config.export.filename.style.into(),
        include_conversation_id: config.export.filename.include_id,
        source_header: config.export.source_header,
    }
}

fn apply_export_overrides(options: &mut ExportOptions, matches: &ArgMatches) {
    if let Some(style) = matches.get_one::<String>("filename-style") {
        options.filename_style = match style.as_str() {
            "date" => FilenameStyle::Date,
            _ => FilenameStyle::Epoch,
        };
    }
    if matches.get_flag("no-id") {
        options.include_conversation_id = false;
    }
    if matches.get_flag("no-header") {
        options.source_header = false;
    }
}
