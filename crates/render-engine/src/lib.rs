//! OpenTrace Render Engine
//!
//! Turns a generated trace into drawing instructions and hands them to a
//! render backend. Rasterization and encoding live behind [`RenderBackend`].
//!
//! # Pipeline Architecture
//!
//! ```text
//! trace.json ──┐
//!              ├── Frame gating (points with frameIndex <= frame)
//! style ───────┘         │
//!                        ├── Gradient + width taper per segment
//!                        │
//!                        ▼
//!                  RenderBackend ── overlay plan JSON / render request
//! ```

pub mod compositor;
pub mod export;

pub use compositor::*;
pub use export::*;
