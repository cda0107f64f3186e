//! # Curves
//!
//! Cubic Bezier evaluation and conversion of curves into extrusion paths.
//!
//! ```text
//! BezierCurve → sample_path → [OrientedFrame] → extrude
//! ```

mod bezier;
mod sampling;


pub use bezier::BezierCurve;
pub use sampling::{sample_path, PathSampleParams};
