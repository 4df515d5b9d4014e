//! Bézier control handles for one tracer.
//!
//! A tracer is a single cubic Bézier. `Start` and `End` are pinned to the
//! ball's detected (or tapped) take-off and landing positions; `Launch` and
//! `Descent` are the interior handles that shape the flight.

use serde::{Deserialize, Serialize};

use crate::point::Point2D;

/// Which handle of the curve a control point is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlRole {
    Start,
    Launch,
    Descent,
    End,
}

impl ControlRole {
    /// All roles in curve order.
    pub const ALL: [ControlRole; 4] = [
        ControlRole::Start,
        ControlRole::Launch,
        ControlRole::Descent,
        ControlRole::End,
    ];

    /// Whether this handle is an anchor that slider edits must not move.
    pub fn is_anchor(&self) -> bool {
        matches!(self, ControlRole::Start | ControlRole::End)
    }
}

/// A single drag handle as exposed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub role: ControlRole,
    pub position: Point2D,
}

impl ControlPoint {
    pub fn new(role: ControlRole, position: Point2D) -> Self {
        Self { role, position }
    }
}

/// The complete handle set of a cubic tracer curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    pub start: Point2D,
    pub launch: Point2D,
    pub descent: Point2D,
    pub end: Point2D,
}

impl ControlPoints {
    pub fn new(start: Point2D, launch: Point2D, descent: Point2D, end: Point2D) -> Self {
        Self {
            start,
            launch,
            descent,
            end,
        }
    }

    /// Position of the handle with the given role.
    pub fn get(&self, role: ControlRole) -> Point2D {
        match role {
            ControlRole::Start => self.start,
            ControlRole::Launch => self.launch,
            ControlRole::Descent => self.descent,
            ControlRole::End => self.end,
        }
    }

    /// Overwrite one handle.
    pub fn set(&mut self, role: ControlRole, position: Point2D) {
        match role {
            ControlRole::Start => self.start = position,
            ControlRole::Launch => self.launch = position,
            ControlRole::Descent => self.descent = position,
            ControlRole::End => self.end = position,
        }
    }

    /// Highest interior handle (smallest screen Y).
    pub fn apex_y(&self) -> f64 {
        self.launch.y.min(self.descent.y)
    }

    /// Handles in curve order, for drawing.
    pub fn to_handles(&self) -> Vec<ControlPoint> {
        ControlRole::ALL
            .iter()
            .map(|&role| ControlPoint::new(role, self.get(role)))
            .collect()
    }

    /// Rebuild a handle set from a UI list.
    ///
    /// Returns `None` when the list is not yet initialized: fewer than three
    /// handles, or any role missing. Duplicate roles keep the last entry.
    pub fn from_handles(handles: &[ControlPoint]) -> Option<Self> {
        if handles.len() < 3 {
            return None;
        }

        let find = |role: ControlRole| {
            handles
                .iter()
                .rev()
                .find(|h| h.role == role)
                .map(|h| h.position)
        };

        Some(Self {
            start: find(ControlRole::Start)?,
            launch: find(ControlRole::Launch)?,
            descent: find(ControlRole::Descent)?,
            end: find(ControlRole::End)?,
        })
    }
}
