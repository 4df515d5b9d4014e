//! OpenTrace Trace Model
//!
//! Defines the data contracts shared by the trajectory engine and its
//! collaborators:
//! - **Geometry:** Screen-space points and the four Bézier control handles
//! - **Parameters:** User-facing tracer sliders and derived flight frame counts
//! - **Tracks:** Frame-indexed track points exchanged with detection and rendering
//! - **Documents:** Serialized trace output and tracer style
//!
//! All coordinates are in source video pixels with Y growing downward.

pub mod control;
pub mod document;
pub mod params;
pub mod point;
pub mod style;
pub mod track;
pub mod video;

pub use control::*;
pub use document::*;
pub use params::*;
pub use point::*;
pub use style::*;
pub use track::*;
pub use video::*;
