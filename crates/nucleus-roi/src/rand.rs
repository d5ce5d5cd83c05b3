//! Reproducible synthetic traced outlines.
//!
//! An outline is an open arc (a nucleus edge with one missing stretch) with
//! radial jitter, started at a random vertex so the largest gap sits somewhere
//! in the middle of the point order, as it does for traced selections.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::outline::Polyline;
use crate::Point;

/// Arc sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct OutlineCfg {
    pub points: usize,
    pub radius: f64,
    /// Angular span of the arc in degrees; `360 - sweep` is left open.
    pub sweep_deg: f64,
    /// Radial jitter as a fraction of `radius`. Clamped to [0, 0.2].
    pub radial_jitter: f64,
    pub centre: Point,
}

impl Default for OutlineCfg {
    fn default() -> Self {
        Self {
            points: 60,
            radius: 40.0,
            sweep_deg: 300.0,
            radial_jitter: 0.05,
            centre: Point::new(100.0, 100.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw an open jittered arc, cyclically rotated to a random first vertex.
pub fn draw_outline(cfg: OutlineCfg, tok: ReplayToken) -> Polyline {
    let mut rng = tok.to_std_rng();
    let n = cfg.points.max(3);
    let sweep = cfg.sweep_deg.clamp(1.0, 359.0).to_radians();
    let jitter = cfg.radial_jitter.clamp(0.0, 0.2);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let step = sweep / (n - 1) as f64;
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = phase + k as f64 * step;
            let r = cfg.radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * jitter);
            cfg.centre + Point::new(th.cos(), th.sin()) * r
        })
        .collect();
    pts.rotate_left(rng.gen_range(0..n));
    Polyline::from_points(&pts)
}
