// File: crates/wavelab-demo/src/export.rs
// Summary: CSV dump of the sampled AM polylines (pixel coordinates, one row per sample index).

use std::path::Path;

use anyhow::Result;
use wavelab_core::{sample, AmScene};

/// Write `index,x_px,carrier_y_px,envelope_y_px` rows; returns the row count.
pub fn write_samples(path: &Path, scene: &AmScene, width: u32, height: u32) -> Result<usize> {
    let axes = scene.axes_for(width, height)?;
    let p = &scene.params;
    let carrier = sample(width, &axes, |x| p.modulated_wave(x));
    let envelope = sample(width, &axes, |x| p.envelope(x));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["index", "x_px", "carrier_y_px", "envelope_y_px"])?;
    for (k, (c, e)) in carrier.points.iter().zip(&envelope.points).enumerate() {
        let index = carrier.first_index + k as i64;
        wtr.serialize((index, c.0, c.1, e.1))?;
    }
    wtr.flush()?;
    Ok(carrier.len())
}
