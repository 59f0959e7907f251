//! The drag-handle controller tying annotations to the snapping core.
//!
//! `ChartEditor` owns the one immutable [`GridValueSet`] for the session
//! plus the annotation list; GUI glue feeds it raw pointer positions and
//! draws whatever comes back. There is no global grid state: the grid is a
//! value generated at construction and only ever read.

use glam::DVec2;

use crate::annotation::{Annotation, AnnotationId, Editable, EditError, HandleRole};
use crate::grid::GridValueSet;
use crate::log::debug;
use crate::snap::{DEFAULT_TOLERANCE, snap_to_grid};

/// Editor state: the grid, the snap tolerance, and the annotations in
/// insertion order.
#[derive(Clone, Debug)]
pub struct ChartEditor {
    grid: GridValueSet,
    tolerance: f64,
    annotations: Vec<(AnnotationId, Annotation)>,
    next_id: u64,
}

impl ChartEditor {
    /// Editor over the canonical generated grid with the default tolerance.
    pub fn new() -> ChartEditor {
        ChartEditor::with_grid(GridValueSet::generate())
    }

    /// Editor over a caller-supplied grid.
    pub fn with_grid(grid: GridValueSet) -> ChartEditor {
        ChartEditor {
            grid,
            tolerance: DEFAULT_TOLERANCE,
            annotations: Vec::new(),
            next_id: 0,
        }
    }

    /// Replace the snap tolerance (builder-style).
    pub fn with_tolerance(mut self, tolerance: f64) -> ChartEditor {
        self.tolerance = tolerance;
        self
    }

    pub fn grid(&self) -> &GridValueSet {
        &self.grid
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Add an annotation; returns the id to drag it by.
    pub fn insert(&mut self, annotation: impl Into<Annotation>) -> AnnotationId {
        let id = AnnotationId(self.next_id);
        self.next_id += 1;
        self.annotations.push((id, annotation.into()));
        debug!(%id, "inserted annotation");
        id
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|(aid, _)| *aid == id)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.annotations
            .iter_mut()
            .find(|(aid, _)| *aid == id)
            .map(|(_, a)| a)
    }

    /// Annotations in insertion order.
    pub fn annotations(&self) -> impl Iterator<Item = (AnnotationId, &Annotation)> {
        self.annotations.iter().map(|(id, a)| (*id, a))
    }

    /// Handle a drag-move: snap the raw pointer position to the grid (when
    /// the handle participates in snapping), apply it to the owning
    /// annotation, and return the corrected position for the caller's
    /// rendering layer.
    pub fn drag(
        &mut self,
        id: AnnotationId,
        role: HandleRole,
        pos: DVec2,
    ) -> Result<DVec2, EditError> {
        let annotation = self
            .annotations
            .iter_mut()
            .find(|(aid, _)| *aid == id)
            .map(|(_, a)| a)
            .ok_or(EditError::UnknownAnnotation(id))?;

        let corrected = if annotation.snaps(role) {
            snap_to_grid(pos, &self.grid, self.tolerance)
        } else {
            pos
        };
        annotation.apply_handle(role, corrected)?;
        debug!(%id, ?role, ?corrected, "applied drag");
        Ok(corrected)
    }
}

impl Default for ChartEditor {
    fn default() -> ChartEditor {
        ChartEditor::new()
    }
}
