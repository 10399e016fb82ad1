use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI from src/main.rs, help texts trimmed.
// We need to duplicate this here since build scripts can't access src/ modules
fn completion_cli() -> Command {
    Command::new("gpt2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export saved ChatGPT conversation pages to Markdown")
        .arg_required_else_help(true)
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
                        .help("Conversation URL")
                        .value_hint(ValueHint::Url),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
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
                        .help("Filename convention")
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
                .arg(
                    Arg::new("url")
                        .help("URL to check")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Url),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "gpt2md", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "gpt2md", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "gpt2md", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
