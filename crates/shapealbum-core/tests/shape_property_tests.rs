/// Property tests for shape validation and snapshot independence
mod common;

use proptest::prelude::*;
use shapealbum_core::errors::AlbumError;
use shapealbum_core::{Shape, ShapeType};

fn shape_type() -> impl Strategy<Value = ShapeType> {
    prop_oneof![Just(ShapeType::Rectangle), Just(ShapeType::Oval)]
}

#[derive(Debug, Clone)]
enum Edit {
    Move(f64, f64),
    Recolor(f64, f64, f64),
    Resize(f64, f64),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6)
            .prop_map(|(x, y)| Edit::Move(x, y)),
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
            .prop_map(|(r, g, b)| Edit::Recolor(r, g, b)),
        (0.1f64..1000.0, 0.1f64..1000.0)
            .prop_map(|(a, b)| Edit::Resize(a, b)),
    ]
}

proptest! {
    #[test]
    fn set_color_fails_iff_out_of_unit_range(
        r in -1.0f64..2.0,
        g in -1.0f64..2.0,
        b in -1.0f64..2.0,
        kind in shape_type(),
    ) {
        let mut shape = Shape::new("S", kind);
        let in_range = |c: f64| (0.0..=1.0).contains(&c);
        let valid = in_range(r) && in_range(g) && in_range(b);

        let result = shape.set_color(r, g, b);

        prop_assert_eq!(result.is_ok(), valid);
        if valid {
            prop_assert_eq!(shape.color().components(), (r, g, b));
        } else {
            let is_invalid_color = matches!(result, Err(AlbumError::InvalidColor { .. }));
            prop_assert!(is_invalid_color);
        }
    }

    #[test]
    fn resize_fails_iff_not_positive(
        first in -100.0f64..100.0,
        second in -100.0f64..100.0,
        kind in shape_type(),
    ) {
        let mut shape = Shape::new("S", kind);
        let result = shape.resize(first, second);

        prop_assert_eq!(result.is_ok(), first > 0.0 && second > 0.0);
        if result.is_ok() {
            prop_assert_eq!(shape.dimensions(), (first, second));
        }
    }

    #[test]
    fn clone_text_matches_after_any_edits(
        edits in prop::collection::vec(edit(), 1..12),
        kind in shape_type(),
    ) {
        let mut shape = Shape::new("S", kind);

        for edit in edits {
            match edit {
                Edit::Move(x, y) => shape.move_to(x, y),
                Edit::Recolor(r, g, b) => shape.set_color(r, g, b).expect("in-range color"),
                Edit::Resize(a, b) => shape.resize(a, b).expect("positive dimensions"),
            }
            let copy = shape.clone();
            prop_assert_eq!(copy.canonical_text(), shape.canonical_text());
        }
    }

    #[test]
    fn duplicate_add_never_changes_registry(
        name in "[A-Za-z][A-Za-z0-9_]{0,8}",
        second_type in prop_oneof![Just("rectangle"), Just("oval"), Just("triangle")],
    ) {
        let mut album = common::fixed_album();
        album.add_shape(&name, "rectangle").expect("first add succeeds");
        let before = album.get_shape(&name).expect("exists").canonical_text();

        let result = album.add_shape(&name, second_type);

        let is_duplicate = matches!(result, Err(AlbumError::DuplicateName { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(album.store().len(), 1);
        let after = album.get_shape(&name).expect("exists").canonical_text();
        prop_assert_eq!(after, before);
    }

    #[test]
    fn snapshot_text_survives_later_moves(
        moves in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..8),
    ) {
        let mut album = common::fixed_album();
        album.add_shape("R", "rectangle").expect("add R");
        let id = album.take_snapshot("base");
        let captured = album.get_snapshot(id.as_str()).expect("exists").to_string();

        for (x, y) in moves {
            album.move_shape("R", x, y).expect("move R");
        }

        let snapshot = album.get_snapshot(id.as_str()).expect("exists");
        prop_assert_eq!(snapshot.to_string(), captured);
    }
}
