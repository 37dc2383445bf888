//! Write the OpenAPI document as pretty-printed JSON.
//!
//! Prints to stdout unless `--output` names a file.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use storefront::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Export the storefront OpenAPI document")]
struct Args {
    /// File to write instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(std::io::Error::other)?;
    match args.output {
        Some(path) => std::fs::write(path, json + "\n"),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")
        }
    }
}
