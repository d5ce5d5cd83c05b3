//! Geometry for traced nucleus outlines (ROIs).
//!
//! An outline is an ordered polyline recovered from a traced selection. The
//! crate re-roots it at its largest gap, trims, flips, rotates it into
//! alignment, normalises its horizontal extent and measures it. Host services
//! (rigid rotation, area measurement, selection display) sit behind the traits
//! in [`host`] so everything runs headless.
//!
//! Layout
//! - `outline`: the `Polyline` type, its flat codec, transforms, alignment
//!   search and angle profiles.
//! - `geom`: distances, line equations, clipping, angles, containment.
//! - `table`: multi-field per-point tables (angle-augmented outlines).
//! - `record`: the explicit name/value record log and output file helpers.
//! - `rand`: reproducible synthetic outlines for tests and benches.

pub mod error;
pub mod geom;
pub mod host;
pub mod outline;
pub mod rand;
pub mod record;
pub mod table;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Result, RoiError};
pub use outline::{AlignCfg, Alignment, Axis, Polyline, ProfileCfg};
pub use table::{FieldTable, Sink};

/// 2D point in image coordinates.
pub type Point = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        angle_at, clip_line_to_box, distance, wrap_index, LineEq,
    };
    pub use crate::host::{
        AreaMeter, CentreRotator, OriginRotator, Rotator, SelectionList, SelectionSink,
        ShoelaceArea, Style,
    };
    pub use crate::outline::{
        align_on_axis, align_on_axis_x, align_on_axis_y, angle_profile, angle_table, tip_index,
        AlignCfg, Alignment, Axis, Polyline, ProfileCfg,
    };
    pub use crate::record::{next_free_path, RecordLog};
    pub use crate::table::{FieldTable, Sink};
    pub use crate::{Point, Result, RoiError};
}
