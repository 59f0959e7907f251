//! Smith chart snapping geometry and annotation model.
//!
//! A Smith chart maps complex reflection coefficients (the unit disc of the
//! normalized Γ plane) to impedances via circles of constant resistance and
//! arcs of constant reactance. This crate implements the interactive-editor
//! core for such a chart:
//!
//! - [`GridValueSet`] — the canonical grid of 85 resistance circles and
//!   2 × 85 reactance arcs, generated once from a fixed density schedule
//! - [`snap_to_grid`] — nearest-point snapping of a dragged position onto
//!   that grid, within a tolerance
//! - [`Annotation`] / [`ChartEditor`] — markers, arrows, text labels and
//!   circles with drag handles that route every pointer move through the
//!   snapper
//!
//! Rendering, widget layout and undo are deliberately left to the embedding
//! GUI; the editor only deals in normalized plane coordinates.
//!
//! ```
//! use glam::dvec2;
//! use smithsnap::{ChartEditor, HandleRole, Marker};
//!
//! let mut editor = ChartEditor::new();
//! let id = editor.insert(Marker::new(dvec2(0.0, 0.0)));
//! // a pointer move lands near the r = 1 circle; the marker is pulled onto it
//! let corrected = editor.drag(id, HandleRole::Position, dvec2(0.52, 0.5)).unwrap();
//! assert!(editor.grid().candidates().any(|c| c.offset_of(corrected) < 1e-9));
//! ```
//!
//! The snapper is also usable on its own:
//!
//! ```
//! use glam::dvec2;
//! use smithsnap::{DEFAULT_TOLERANCE, GridValueSet, snap_to_grid};
//!
//! let grid = GridValueSet::generate();
//! let p = snap_to_grid(dvec2(0.5, 0.5), &grid, DEFAULT_TOLERANCE);
//! assert!((p.x - 0.5).abs() < 1e-12 && (p.y - 0.5).abs() < 1e-12);
//! ```

pub mod annotation;
pub mod editor;
pub mod grid;
pub mod label;
mod log;
pub mod snap;
pub mod types;

pub use annotation::{
    Annotation, AnnotationId, Arrow, CircleMarker, EditError, Editable, HandleRole, Marker,
    TextLabel,
};
pub use editor::ChartEditor;
pub use grid::{GridCircle, GridValueSet};
pub use label::{axis_label, label_anchor};
pub use snap::{DEFAULT_TOLERANCE, snap_to_grid};
pub use types::{ArcSign, Reactance, Resistance, ValueError};
