//! End-to-end properties of the grid generator and snap resolver.

use glam::{DVec2, dvec2};
use smithsnap::{
    ChartEditor, DEFAULT_TOLERANCE, Editable, GridValueSet, HandleRole, Marker, Reactance,
    Resistance, TextLabel, snap_to_grid,
};

fn bits(p: DVec2) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

// ==================== generator shape ====================

#[test]
fn generator_produces_85_values_per_family() {
    let grid = GridValueSet::generate();
    assert_eq!(grid.resistances().len(), 85);
    assert_eq!(grid.reactances().len(), 85);
}

#[test]
fn generator_values_are_positive_and_strictly_increasing() {
    let grid = GridValueSet::generate();
    let mut prev = 0.0;
    for r in grid.resistances() {
        assert!(r.raw() > prev, "{} not > {}", r, prev);
        prev = r.raw();
    }
    for x in grid.reactances() {
        assert!(x.raw() > 0.0);
    }
}

#[test]
fn generator_is_value_identical_across_calls() {
    let a = GridValueSet::generate();
    let b = GridValueSet::generate();
    assert_eq!(a, b);
    for (ra, rb) in a.resistances().iter().zip(b.resistances()) {
        assert_eq!(ra.raw().to_bits(), rb.raw().to_bits());
    }
}

// ==================== snap determinism ====================

#[test]
fn snap_is_bit_reproducible() {
    let grid = GridValueSet::generate();
    for probe in [
        dvec2(0.5, 0.5),
        dvec2(0.31, -0.27),
        dvec2(-0.4, 0.12),
        dvec2(0.98, 0.02),
    ] {
        let a = snap_to_grid(probe, &grid, DEFAULT_TOLERANCE);
        let b = snap_to_grid(probe, &grid, DEFAULT_TOLERANCE);
        assert_eq!(bits(a), bits(b));
    }
}

// ==================== snap geometry ====================

#[test]
fn snapped_points_lie_on_a_candidate_circle() {
    let grid = GridValueSet::generate();
    for probe in [
        dvec2(0.52, 0.5),
        dvec2(0.3, 0.1),
        dvec2(-0.2, -0.35),
        dvec2(0.9, 0.41),
    ] {
        let out = snap_to_grid(probe, &grid, DEFAULT_TOLERANCE);
        if out != probe {
            assert!(
                grid.candidates().any(|c| c.offset_of(out) < 1e-9),
                "{out:?} is on no candidate circle"
            );
        }
    }
}

#[test]
fn point_on_r1_circle_is_a_fixed_point() {
    // (0.5, 0.5) is exactly on the r = 1 circle: distance to its center
    // (0.5, 0) equals the radius 0.5
    let grid = GridValueSet::generate();
    let out = snap_to_grid(dvec2(0.5, 0.5), &grid, DEFAULT_TOLERANCE);
    assert!((out.x - 0.5).abs() < 1e-12);
    assert!((out.y - 0.5).abs() < 1e-12);
}

#[test]
fn point_out_of_tolerance_is_echoed_exactly() {
    let grid = GridValueSet::generate();
    let probe = dvec2(0.5, 10.0);
    let out = snap_to_grid(probe, &grid, DEFAULT_TOLERANCE);
    assert_eq!(bits(out), bits(probe));
}

// ==================== tie-breaking ====================

#[test]
fn resistance_circle_wins_an_exact_tie_with_a_reactance_arc() {
    // the r = 1 circle (center (0.5, 0), radius 0.5) and the x = 2 positive
    // arc (center (1, 0.5), radius 0.5) are both offset from (0.75, 0.25)
    // by identical bits; generation order puts the resistance circle first
    let r = Resistance::try_new(1.0).unwrap();
    let x = Reactance::try_new(2.0).unwrap();
    let grid = GridValueSet::from_values(vec![r], vec![x]);

    let probe = dvec2(0.75, 0.25);
    let out = snap_to_grid(probe, &grid, 0.2);
    let expected = r.circle().project(probe);
    assert_eq!(bits(out), bits(expected));
}

#[test]
fn tie_break_is_order_dependent_not_family_dependent() {
    // same two circles, but offered as the only candidates one at a time:
    // each projects the probe somewhere different, proving the tie above
    // was real
    let r = Resistance::try_new(1.0).unwrap();
    let x = Reactance::try_new(2.0).unwrap();
    let probe = dvec2(0.75, 0.25);

    let only_r = snap_to_grid(probe, &GridValueSet::from_values(vec![r], vec![]), 0.2);
    let only_x = snap_to_grid(probe, &GridValueSet::from_values(vec![], vec![x]), 0.2);
    assert_ne!(bits(only_r), bits(only_x));
}

// ==================== editor flow ====================

#[test]
fn editor_round_trip_matches_direct_snapping() {
    let mut editor = ChartEditor::new();
    let id = editor.insert(Marker::new(dvec2(0.0, 0.0)));
    let probe = dvec2(0.52, 0.5);

    let via_editor = editor.drag(id, HandleRole::Position, probe).unwrap();
    let direct = snap_to_grid(probe, editor.grid(), editor.tolerance());
    assert_eq!(bits(via_editor), bits(direct));
}

#[test]
fn text_labels_are_exempt_from_snapping() {
    let mut editor = ChartEditor::new();
    let marker = editor.insert(Marker::new(dvec2(0.0, 0.0)));
    let text = editor.insert(TextLabel::new(dvec2(0.0, 0.0), "stub line"));
    let probe = dvec2(0.52, 0.5);

    let snapped = editor.drag(marker, HandleRole::Position, probe).unwrap();
    let raw = editor.drag(text, HandleRole::Position, probe).unwrap();
    assert_ne!(bits(snapped), bits(probe));
    assert_eq!(bits(raw), bits(probe));
}

#[test]
fn every_annotation_reports_its_handles() {
    let mut editor = ChartEditor::new();
    editor.insert(Marker::new(dvec2(0.1, 0.1)));
    editor.insert(TextLabel::new(dvec2(0.2, 0.2), "note"));
    for (_, annotation) in editor.annotations() {
        let handles = annotation.handles();
        assert!(!handles.is_empty());
        for (role, pos) in handles {
            assert_eq!(annotation.handle(role), Some(pos));
        }
    }
}
