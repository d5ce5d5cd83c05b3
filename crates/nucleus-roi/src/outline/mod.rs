//! Traced outlines (ROIs) and the operations applied to them.
//!
//! Typical order: `shuffle` → `trim` → `flip` / `align_on_axis` →
//! `normalise` → `offset_to_zero`, then measure or export.
//!
//! - `types`: `Polyline`, `Axis`, `AlignCfg`, `ProfileCfg`
//! - `codec`: flat `[n, xs.., ys..]` layout
//! - `transforms`: re-rooting, trim, flip, offset, normalise, resample
//! - `align`: rotation search
//! - `measure`: length, area, centroid, containment
//! - `profile`: interior angle profiles

mod align;
pub mod codec;
mod measure;
mod profile;
mod transforms;
mod types;

pub use align::{align_on_axis, align_on_axis_x, align_on_axis_y, Alignment};
pub use codec::{decode_x, decode_y, encode};
pub use profile::{angle_profile, angle_table, tip_index};
pub use transforms::MAX_Y_RECORD;
pub use types::{AlignCfg, Axis, Polyline, ProfileCfg};
