//! footnotes: developer harness for the footnotes settings and template engines

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
