//! Simple CLI that reads HTML from stdin and outputs the extraction result as JSON.
//!
//! Usage: `extract_stdin [source-id] < page.html`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use rs_cewlio::extract_bytes;
use std::env;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let source = env::args().nth(1).unwrap_or_else(|| "-".to_string());

    let mut html = Vec::new();
    io::stdin().read_to_end(&mut html)?;

    let result = extract_bytes(&html, &source)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
