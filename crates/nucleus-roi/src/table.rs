//! Per-point tables with any number of fields.
//!
//! Column-major: field `k` holds one value per point. The flat form is
//! `[points, fields, field_1.., field_2.., ...]`; an angle-augmented outline is
//! the three-field table (x, y, angle).

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{Result, RoiError};
use crate::outline::Polyline;

/// Line terminator for exported rows.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator for exported rows.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Where exported rows go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Standard output.
    Console,
    /// Appended to this file, which is created if missing.
    File(PathBuf),
}

impl Sink {
    /// Run `write` against the sink's writer.
    pub fn with_writer<F>(&self, write: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        match self {
            Sink::Console => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                write(&mut lock)?;
                lock.flush()?;
            }
            Sink::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                write(&mut file)?;
                file.flush()?;
            }
        }
        Ok(())
    }
}

/// Columns of equal length, one per field.
///
/// Invariant: at least one field; every field has `len` values.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldTable {
    len: usize,
    fields: Vec<Vec<f64>>,
}

impl FieldTable {
    pub fn from_fields(fields: Vec<Vec<f64>>) -> Result<Self> {
        let len = fields
            .first()
            .map(Vec::len)
            .ok_or_else(|| RoiError::invalid("table needs at least one field"))?;
        if let Some((k, f)) = fields.iter().enumerate().find(|(_, f)| f.len() != len) {
            return Err(RoiError::invalid(format!(
                "field {} has {} values, expected {len}",
                k + 1,
                f.len()
            )));
        }
        Ok(Self { len, fields })
    }

    /// Three-field table of x, y and per-point angle.
    pub fn angle_roi(xs: &[f64], ys: &[f64], angles: &[f64]) -> Result<Self> {
        Self::from_fields(vec![xs.to_vec(), ys.to_vec(), angles.to_vec()])
    }

    /// Decode `[points, fields, blocks..]`.
    pub fn from_flat(flat: &[f64]) -> Result<Self> {
        let (len, count) = match flat {
            [l, c, ..] => (count_of(*l)?, count_of(*c)?),
            _ => return Err(RoiError::invalid("flat table has no header")),
        };
        let expected = len
            .checked_mul(count)
            .and_then(|v| v.checked_add(2))
            .ok_or_else(|| {
                RoiError::invalid(format!("flat table of {len}x{count} is too large"))
            })?;
        if flat.len() != expected {
            return Err(RoiError::invalid(format!(
                "flat table of {len}x{count} must hold {expected} values, got {}",
                flat.len()
            )));
        }
        let fields = (0..count)
            .map(|k| flat[2 + k * len..2 + (k + 1) * len].to_vec())
            .collect();
        Self::from_fields(fields)
    }

    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(2 + self.len * self.fields.len());
        flat.push(self.len as f64);
        flat.push(self.fields.len() as f64);
        for f in &self.fields {
            flat.extend_from_slice(f);
        }
        flat
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field block by 1-based index.
    pub fn field(&self, index: usize) -> Result<&[f64]> {
        index
            .checked_sub(1)
            .and_then(|k| self.fields.get(k))
            .map(Vec::as_slice)
            .ok_or(RoiError::IndexOutOfRange {
                index,
                len: self.fields.len(),
            })
    }

    /// Rotate every field so point `index` comes first. `index == len` is a no-op.
    pub fn rotate_to_index(&self, index: usize) -> Result<Self> {
        if index > self.len {
            return Err(RoiError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let fields = self
            .fields
            .iter()
            .map(|f| {
                let mut f = f.clone();
                f.rotate_left(index);
                f
            })
            .collect();
        Ok(Self {
            len: self.len,
            fields,
        })
    }

    /// All field values of point `index`, in field order.
    pub fn values_at_index(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.len {
            return Err(RoiError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.fields.iter().map(|f| f[index]).collect())
    }

    /// The first two fields as an outline.
    pub fn polyline(&self) -> Result<Polyline> {
        Polyline::new(self.field(1)?.to_vec(), self.field(2)?.to_vec())
    }

    /// One line per point, fields tab-separated, no header, platform line ending.
    pub fn write_rows<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        for i in 0..self.len {
            let mut line = String::new();
            for (k, f) in self.fields.iter().enumerate() {
                if k > 0 {
                    line.push('\t');
                }
                line.push_str(&f[i].to_string());
            }
            line.push_str(LINE_ENDING);
            w.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    pub fn export(&self, sink: &Sink) -> Result<()> {
        tracing::debug!(?sink, points = self.len, "export table");
        sink.with_writer(|w| self.write_rows(w))
    }
}

fn count_of(v: f64) -> Result<usize> {
    if v >= 0.0 && v.is_finite() && v.fract() == 0.0 {
        Ok(v as usize)
    } else {
        Err(RoiError::invalid(format!("{v} is not a count")))
    }
}

impl From<&Polyline> for FieldTable {
    fn from(poly: &Polyline) -> Self {
        Self {
            len: poly.len(),
            fields: vec![poly.xs().to_vec(), poly.ys().to_vec()],
        }
    }
}

impl Polyline {
    /// Write one `x<TAB>y` line per point.
    pub fn write_rows<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        FieldTable::from(self).write_rows(w)
    }

    pub fn export(&self, sink: &Sink) -> Result<()> {
        FieldTable::from(self).export(sink)
    }
}
