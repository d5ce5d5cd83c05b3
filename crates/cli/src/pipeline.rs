//! Ordered outline transforms given on the command line.
//!
//! Syntax: comma-separated steps, arguments after a colon, e.g.
//! `shuffle,trim:0.6,align-x,normalise:100,offset`.

use anyhow::{anyhow, bail, Context, Result};
use nucleus_roi::host::Rotator;
use nucleus_roi::outline::{align_on_axis_x, align_on_axis_y};
use nucleus_roi::record::RecordLog;
use nucleus_roi::{Axis, Polyline};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Shuffle,
    Trim(f64),
    Flip(Axis),
    AlignX,
    AlignY,
    Normalise(f64),
    Offset,
    Swap,
}

impl FromStr for Step {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        let (name, arg) = match s.trim().split_once(':') {
            Some((n, a)) => (n, Some(a)),
            None => (s.trim(), None),
        };
        let number = |what: &str| -> Result<f64> {
            let a = arg.ok_or_else(|| anyhow!("{name} needs a {what}, e.g. {name}:1"))?;
            a.parse::<f64>()
                .with_context(|| format!("parsing {what} {a:?} for {name}"))
        };
        let step = match name {
            "shuffle" => Step::Shuffle,
            "trim" => Step::Trim(number("fraction")?),
            "flip" => Step::Flip(arg.unwrap_or("x").parse()?),
            "align-x" => Step::AlignX,
            "align-y" => Step::AlignY,
            "normalise" | "normalize" => Step::Normalise(number("length")?),
            "offset" => Step::Offset,
            "swap" => Step::Swap,
            other => bail!("unknown step {other:?}"),
        };
        Ok(step)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Shuffle => write!(f, "shuffle"),
            Step::Trim(x) => write!(f, "trim:{x}"),
            Step::Flip(a) => write!(f, "flip:{a}"),
            Step::AlignX => write!(f, "align-x"),
            Step::AlignY => write!(f, "align-y"),
            Step::Normalise(l) => write!(f, "normalise:{l}"),
            Step::Offset => write!(f, "offset"),
            Step::Swap => write!(f, "swap"),
        }
    }
}

pub fn parse_steps(list: &str) -> Result<Vec<Step>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Apply `steps` in order. Alignment angles are recorded as `AX` / `AY`.
pub fn apply<R: Rotator>(
    poly: &Polyline,
    steps: &[Step],
    rotator: &R,
    log: &mut RecordLog,
) -> Result<Polyline> {
    let mut cur = poly.clone();
    for step in steps {
        cur = match *step {
            Step::Shuffle => cur.shuffle()?,
            Step::Trim(fraction) => cur.trim(fraction)?,
            Step::Flip(axis) => cur.flip(axis)?,
            Step::AlignX => {
                let a = align_on_axis_x(&cur, rotator)?;
                log.record("AX", a.angle_deg);
                a.polyline
            }
            Step::AlignY => {
                let a = align_on_axis_y(&cur, rotator)?;
                log.record("AY", a.angle_deg);
                a.polyline
            }
            Step::Normalise(length) => cur.normalise(length, Some(&mut *log))?,
            Step::Offset => cur.offset_to_zero()?,
            Step::Swap => cur.swap_axes(),
        };
        tracing::debug!(%step, points = cur.len(), "step");
    }
    Ok(cur)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucleus_roi::host::CentreRotator;

    #[test]
    fn parses_and_prints_steps() {
        let steps =
            parse_steps("shuffle, trim:0.5,flip:y,align-x,normalize:100,offset,").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Shuffle,
                Step::Trim(0.5),
                Step::Flip(Axis::Y),
                Step::AlignX,
                Step::Normalise(100.0),
                Step::Offset
            ]
        );
        assert_eq!(steps[2].to_string(), "flip:y");
        assert!(parse_steps("trim").is_err());
        assert!(parse_steps("twist").is_err());
        assert!(parse_steps("flip:z").is_err());
    }

    #[test]
    fn apply_runs_in_order_and_logs() {
        let p = Polyline::new(vec![5.0, 6.0, 7.0, 0.0, 1.0, 2.0], vec![0.0; 6]).unwrap();
        let steps = parse_steps("shuffle,align-y,normalise:70,offset").unwrap();
        let mut log = RecordLog::new();
        let out = apply(&p, &steps, &CentreRotator, &mut log).unwrap();
        let want = [0.0, 10.0, 20.0, 50.0, 60.0, 70.0];
        for (got, want) in out.xs().iter().zip(want) {
            assert!((got - want).abs() < 1e-9);
        }
        assert_eq!(log.get("AY"), 0.0);
        assert_eq!(log.get("MY"), 0.0);
        assert_eq!(log.len(), 2);
    }
}
