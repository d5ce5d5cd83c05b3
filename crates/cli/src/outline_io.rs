//! Tab-separated outline files: one `x<TAB>y[<TAB>...]` row per point, no header.

use anyhow::{anyhow, bail, Context, Result};
use nucleus_roi::{FieldTable, Polyline};
use polars::prelude::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read the first two columns of a headerless TSV as an outline.
pub fn read_outline(path: &Path) -> Result<Polyline> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_separator(b'\t')
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    if df.width() < 2 {
        bail!(
            "{}: expected at least 2 columns, found {}",
            path.display(),
            df.width()
        );
    }
    tracing::info!(rows = df.height(), cols = df.width(), "outline_read");
    Ok(Polyline::new(column_f64(&df, 0)?, column_f64(&df, 1)?)?)
}

fn column_f64(df: &DataFrame, idx: usize) -> Result<Vec<f64>> {
    let col = df
        .select_at_idx(idx)
        .ok_or_else(|| anyhow!("missing column {idx}"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("no number at row {row}, column {idx}")))
        .collect()
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write (replacing) an outline as `x<TAB>y` rows.
pub fn write_outline(path: &Path, poly: &Polyline) -> Result<()> {
    let mut w = create(path)?;
    poly.write_rows(&mut w)?;
    w.flush()?;
    Ok(())
}

/// Write (replacing) a multi-field table, one tab-separated row per point.
pub fn write_table(path: &Path, table: &FieldTable) -> Result<()> {
    let mut w = create(path)?;
    table.write_rows(&mut w)?;
    w.flush()?;
    Ok(())
}
