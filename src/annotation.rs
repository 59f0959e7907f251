//! Annotation types and the closed handle interface.
//!
//! Each annotation owns its geometry and exposes a fixed set of drag
//! handles. A handle update is an explicit method call
//! ([`Editable::apply_handle`]) on the owning annotation — there is no
//! capability probing; an annotation either has a handle role or returns an
//! error for it. [`Annotation`] is a closed enum over the four kinds, with
//! calls dispatched via `enum_dispatch`.

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::DVec2;
use thiserror::Error;

use crate::label::{axis_label, label_anchor};

/// Identifier a [`crate::editor::ChartEditor`] hands out for an inserted
/// annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationId(pub(crate) u64);

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which control of an annotation a drag is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleRole {
    /// The whole annotation's position (markers, text labels)
    Position,
    /// First endpoint of an arrow
    Start,
    /// Second endpoint of an arrow
    End,
    /// Center control of a circle
    Center,
    /// Radius control of a circle
    Radius,
}

/// Errors from annotation editing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The annotation does not expose this handle role
    #[error("annotation has no {0:?} handle")]
    UnknownHandle(HandleRole),
    /// No annotation registered under this id
    #[error("unknown annotation {0}")]
    UnknownAnnotation(AnnotationId),
}

/// Common behavior for all annotations.
#[enum_dispatch]
pub trait Editable {
    /// Every handle this annotation exposes, role plus current position,
    /// in display order.
    fn handles(&self) -> Vec<(HandleRole, DVec2)>;

    /// Current position of one handle.
    fn handle(&self, role: HandleRole) -> Option<DVec2>;

    /// Move one handle and update any dependent geometry.
    fn apply_handle(&mut self, role: HandleRole, pos: DVec2) -> Result<(), EditError>;

    /// Whether a handle participates in grid snapping. Chart-geometry
    /// handles do; free-floating text does not.
    fn snaps(&self, role: HandleRole) -> bool {
        let _ = role;
        true
    }

    /// Label shown next to the annotation, if it has one.
    fn label(&self) -> Option<String> {
        None
    }
}

/// A point marker pinned to a single chart position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: DVec2,
}

impl Marker {
    pub fn new(position: DVec2) -> Marker {
        Marker { position }
    }
}

impl Editable for Marker {
    fn handles(&self) -> Vec<(HandleRole, DVec2)> {
        vec![(HandleRole::Position, self.position)]
    }

    fn handle(&self, role: HandleRole) -> Option<DVec2> {
        match role {
            HandleRole::Position => Some(self.position),
            _ => None,
        }
    }

    fn apply_handle(&mut self, role: HandleRole, pos: DVec2) -> Result<(), EditError> {
        match role {
            HandleRole::Position => {
                self.position = pos;
                Ok(())
            }
            other => Err(EditError::UnknownHandle(other)),
        }
    }
}

/// An arrow with independently draggable endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub start: DVec2,
    pub end: DVec2,
}

impl Arrow {
    pub fn new(start: DVec2, end: DVec2) -> Arrow {
        Arrow { start, end }
    }
}

impl Editable for Arrow {
    fn handles(&self) -> Vec<(HandleRole, DVec2)> {
        vec![(HandleRole::Start, self.start), (HandleRole::End, self.end)]
    }

    fn handle(&self, role: HandleRole) -> Option<DVec2> {
        match role {
            HandleRole::Start => Some(self.start),
            HandleRole::End => Some(self.end),
            _ => None,
        }
    }

    fn apply_handle(&mut self, role: HandleRole, pos: DVec2) -> Result<(), EditError> {
        match role {
            HandleRole::Start => {
                self.start = pos;
                Ok(())
            }
            HandleRole::End => {
                self.end = pos;
                Ok(())
            }
            other => Err(EditError::UnknownHandle(other)),
        }
    }
}

/// A free-floating text annotation. Its position is not chart geometry, so
/// it is the one handle that never snaps to the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub position: DVec2,
    pub text: String,
}

impl TextLabel {
    pub fn new(position: DVec2, text: impl Into<String>) -> TextLabel {
        TextLabel { position, text: text.into() }
    }
}

impl Editable for TextLabel {
    fn handles(&self) -> Vec<(HandleRole, DVec2)> {
        vec![(HandleRole::Position, self.position)]
    }

    fn handle(&self, role: HandleRole) -> Option<DVec2> {
        match role {
            HandleRole::Position => Some(self.position),
            _ => None,
        }
    }

    fn apply_handle(&mut self, role: HandleRole, pos: DVec2) -> Result<(), EditError> {
        match role {
            HandleRole::Position => {
                self.position = pos;
                Ok(())
            }
            other => Err(EditError::UnknownHandle(other)),
        }
    }

    fn snaps(&self, _role: HandleRole) -> bool {
        false
    }

    fn label(&self) -> Option<String> {
        Some(self.text.clone())
    }
}

/// A circle defined by a center handle and a radius handle.
///
/// The radius is derived: it is the distance between the two handles.
/// Dragging the center translates the radius handle by the same delta so
/// the radius is preserved; dragging the radius handle changes only the
/// radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleMarker {
    center: DVec2,
    radius_anchor: DVec2,
}

impl CircleMarker {
    pub fn new(center: DVec2, radius_anchor: DVec2) -> CircleMarker {
        CircleMarker { center, radius_anchor }
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn radius_anchor(&self) -> DVec2 {
        self.radius_anchor
    }

    /// Derived radius: distance from the center to the radius handle.
    pub fn radius(&self) -> f64 {
        self.center.distance(self.radius_anchor)
    }

    /// Where this circle's label should be drawn.
    pub fn label_anchor(&self) -> DVec2 {
        label_anchor(self.center, self.radius())
    }
}

impl Editable for CircleMarker {
    fn handles(&self) -> Vec<(HandleRole, DVec2)> {
        vec![
            (HandleRole::Center, self.center),
            (HandleRole::Radius, self.radius_anchor),
        ]
    }

    fn handle(&self, role: HandleRole) -> Option<DVec2> {
        match role {
            HandleRole::Center => Some(self.center),
            HandleRole::Radius => Some(self.radius_anchor),
            _ => None,
        }
    }

    fn apply_handle(&mut self, role: HandleRole, pos: DVec2) -> Result<(), EditError> {
        match role {
            HandleRole::Center => {
                // cascade: carry the radius handle along with the center
                let delta = pos - self.center;
                self.center = pos;
                self.radius_anchor += delta;
                Ok(())
            }
            HandleRole::Radius => {
                self.radius_anchor = pos;
                Ok(())
            }
            other => Err(EditError::UnknownHandle(other)),
        }
    }

    fn label(&self) -> Option<String> {
        axis_label(self.center)
    }
}

/// Any annotation the editor can hold.
#[enum_dispatch(Editable)]
#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    Marker,
    Arrow,
    TextLabel,
    CircleMarker,
}
