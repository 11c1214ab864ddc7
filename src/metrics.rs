// src/metrics.rs
// StatsD line emission. Gauges, since these are point-in-time snapshots.
// Graphite side: statsd.gauges.gym.{name}.{metric}

use std::io::{self, Write};

use crate::params::METRIC_PREFIX;
use crate::specs::occupancy::OccupancyTable;

pub fn occupancy_pc(occupancy: i64, capacity: i64) -> f64 {
    (occupancy as f64 / capacity as f64) * 100.0
}

/// Write the three gauge lines per location, in table order:
/// `gym.{name}.occupancy`, `gym.{name}.capacity`, `gym.{name}.occupancy_pc`.
pub fn emit_gauges<W: Write>(out: &mut W, table: &OccupancyTable) -> io::Result<()> {
    for (name, snap) in table {
        let pc = occupancy_pc(snap.occupancy, snap.capacity);

        writeln!(out, "{METRIC_PREFIX}.{name}.occupancy:{}|g", snap.occupancy)?;
        writeln!(out, "{METRIC_PREFIX}.{name}.capacity:{}|g", snap.capacity)?;
        writeln!(out, "{METRIC_PREFIX}.{name}.occupancy_pc:{pc}|g")?;
    }
    Ok(())
}
