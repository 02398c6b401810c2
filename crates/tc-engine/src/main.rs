//! transit_catalogue — answer a batch of network queries.
//!
//! Reads one JSON document from stdin, writes the JSON response array to
//! stdout.  Exits non-zero only when the input document cannot be parsed.

use std::io;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    tc_engine::run_document(stdin, stdout).context("answering transit queries")?;

    Ok(())
}
