// src/cli.rs

use std::io::{self, Write};

use color_eyre::eyre::Result;

use crate::{metrics, specs};

/// Fetch the occupancy page, emit one gauge set per location.
/// Any failure propagates to the binary, which exits non-zero.
pub fn run() -> Result<()> {
    let table = specs::occupancy::fetch()?;
    logf!("{} location(s) scraped", table.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    metrics::emit_gauges(&mut out, &table)?;
    out.flush()?;
    Ok(())
}
