//! OpenTrace Trajectory Engine
//!
//! Synthesizes the on-screen flight of a ball from a handful of sliders:
//! - **Geometry:** Place the two interior handles of a cubic Bézier
//! - **Timing:** Split the flight into rise, apex hang, and fall frames
//! - **Generation:** Sample the curve once per video frame within the budget
//! - **Editing:** Apply slider deltas without discarding manual drags
//! - **Session:** Explicit initializing / previewing / committed lifecycle
//!
//! Generation is pure computation over plain data. The only I/O is
//! [`TrajectoryTuning::load`].

pub mod bezier;
pub mod editing;
pub mod generator;
pub mod geometry;
pub mod seed;
pub mod session;
pub mod timing;
pub mod tuning;

pub use generator::{FlightPath, Trajectory, TrajectoryGenerator, TrajectoryRequest};
pub use session::{EditingSession, SessionError, SessionState};
pub use tuning::TrajectoryTuning;
