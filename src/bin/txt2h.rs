use clap::Parser;

use std::io::IsTerminal;
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use txt2h::input::{self, StdioPrompt};
use txt2h::EmbedError;

/// Embed a text file in a C/C++ header as a raw string literal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to convert; prompted for when omitted
    path: Option<String>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    let path = input::resolve_input(args.path, &mut StdioPrompt::stdio())?;

    match txt2h::embed_file(&path) {
        Ok(embedded) => {
            tracing::info!(
                output = %embedded.output.display(),
                identifier = %embedded.identifier,
                bytes = embedded.bytes,
                "done"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ EmbedError::MissingInputFile { .. }) => {
            println!("{err}");
            Ok(ExitCode::from(1))
        }
        Err(err) => Err(err.into()),
    }
}
