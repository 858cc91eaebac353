use macroquad::math::Vec2;
use pixel_canvas::core::{CellCoord, Rgba, MAX_ZOOM, MIN_ZOOM};
use pixel_canvas::input::{handle_event, CanvasEvent};
use pixel_canvas::rendering::{build_scene, DrawCommand};
use pixel_canvas::state::{ApplicationState, Gesture};
use pretty_assertions::assert_eq;

fn run(state: &mut ApplicationState, events: &[CanvasEvent]) {
    for event in events {
        handle_event(state, *event);
    }
}

fn assert_viewport_invariants(state: &ApplicationState) {
    let vp = &state.viewport;
    assert!((MIN_ZOOM..=MAX_ZOOM).contains(&vp.zoom), "zoom {}", vp.zoom);
    assert!(vp.pan.x >= 0.0 && vp.pan.x <= vp.max_pan(), "pan {:?}", vp.pan);
    assert!(vp.pan.y >= 0.0 && vp.pan.y <= vp.max_pan(), "pan {:?}", vp.pan);
}

#[test]
fn first_scroll_up_snaps_to_two_and_keeps_anchor() {
    let mut state = ApplicationState::default();
    let pointer = Vec2::new(200.0, 120.0);
    let anchor = state.viewport.screen_to_grid(pointer);

    run(&mut state, &[CanvasEvent::Wheel { pointer, direction: 1 }]);

    assert_eq!(state.viewport.zoom, 2.0);
    let after = state.viewport.screen_to_grid(pointer);
    assert!((after - anchor).length() < 1e-3, "{after:?} vs {anchor:?}");
    assert_viewport_invariants(&state);
}

#[test]
fn paint_select_and_repaint() {
    let mut state = ApplicationState::new(Rgba::rgb(255, 0, 0), 1.0);
    let cell_10 = Vec2::new(10.5, 10.5);

    run(
        &mut state,
        &[
            CanvasEvent::Click { pointer: cell_10 },
            CanvasEvent::DoubleClick { pointer: cell_10 },
        ],
    );
    assert_eq!(state.cells.get(CellCoord::new(10, 10)), Some(Rgba::rgb(255, 0, 0)));

    state.set_color("#00ff00".parse().unwrap());
    run(&mut state, &[CanvasEvent::DoubleClick { pointer: cell_10 }]);
    assert_eq!(state.cells.get(CellCoord::new(10, 10)), Some(Rgba::rgb(0, 255, 0)));

    run(&mut state, &[CanvasEvent::Click { pointer: Vec2::new(20.5, 3.5) }]);
    assert_eq!(state.selected, Some(CellCoord::new(20, 3)));
    assert_eq!(state.cells.get(CellCoord::new(10, 10)), Some(Rgba::rgb(0, 255, 0)));
    assert_eq!(state.cells.len(), 1);
}

#[test]
fn secondary_drag_pans_only_when_zoomed() {
    let mut state = ApplicationState::new(Rgba::BLACK, 1.0);
    run(
        &mut state,
        &[
            CanvasEvent::SecondaryDown { pointer: Vec2::new(100.0, 100.0) },
            CanvasEvent::Move { pointer: Vec2::new(10.0, 10.0) },
        ],
    );
    assert_eq!(state.gesture, Gesture::Idle);
    assert_eq!(state.viewport.pan, Vec2::ZERO);

    let pointer = Vec2::new(100.0, 100.0);
    run(
        &mut state,
        &[
            CanvasEvent::SecondaryUp,
            CanvasEvent::Wheel { pointer, direction: 1 },
            CanvasEvent::Wheel { pointer, direction: 1 },
        ],
    );
    assert_eq!(state.viewport.zoom, 3.0);
    let start_pan = state.viewport.pan;

    run(
        &mut state,
        &[
            CanvasEvent::SecondaryDown { pointer },
            CanvasEvent::Move { pointer: pointer - Vec2::new(30.0, 0.0) },
        ],
    );
    assert!(state.gesture.is_panning());
    assert_eq!(state.viewport.pan, start_pan + Vec2::new(10.0, 0.0));
    assert_eq!(state.hovered, None);

    // Clicks are suppressed for the duration of the drag
    run(&mut state, &[CanvasEvent::DoubleClick { pointer }]);
    assert!(state.cells.is_empty());

    run(&mut state, &[CanvasEvent::SecondaryUp]);
    assert_eq!(state.gesture, Gesture::Idle);
    assert_viewport_invariants(&state);
}

#[test]
fn clear_leaves_viewport_and_hover() {
    let mut state = ApplicationState::new(Rgba::BLACK, 1.0);
    run(
        &mut state,
        &[
            CanvasEvent::DoubleClick { pointer: Vec2::new(1.5, 1.5) },
            CanvasEvent::DoubleClick { pointer: Vec2::new(5.5, 1.5) },
            CanvasEvent::Wheel { pointer: Vec2::new(50.0, 50.0), direction: 1 },
            CanvasEvent::Move { pointer: Vec2::new(7.0, 7.0) },
        ],
    );
    let viewport = state.viewport;
    let hovered = state.hovered;
    assert!(hovered.is_some());

    run(&mut state, &[CanvasEvent::Clear]);

    assert!(state.cells.is_empty());
    assert_eq!(state.selected, None);
    assert_eq!(state.hovered, hovered);
    assert_eq!(state.viewport, viewport);
}

#[test]
fn zoom_storm_respects_bounds() {
    let mut state = ApplicationState::default();
    let pointers = [Vec2::ZERO, Vec2::new(359.0, 0.0), Vec2::new(180.0, 359.0)];

    for i in 0..25 {
        let pointer = pointers[i % pointers.len()];
        run(&mut state, &[CanvasEvent::Wheel { pointer, direction: 1 }]);
        assert_viewport_invariants(&state);
    }
    assert_eq!(state.viewport.zoom, MAX_ZOOM);

    for i in 0..25 {
        let pointer = pointers[i % pointers.len()];
        run(&mut state, &[CanvasEvent::Wheel { pointer, direction: -1 }]);
        assert_viewport_invariants(&state);
    }
    assert_eq!(state.viewport.zoom, MIN_ZOOM);
    assert_eq!(state.viewport.pan, Vec2::ZERO);
}

#[test]
fn rendered_outlines_follow_the_viewport() {
    let mut state = ApplicationState::new(Rgba::BLACK, 1.0);
    let pointer = Vec2::new(50.5, 50.5);
    run(
        &mut state,
        &[
            CanvasEvent::Wheel { pointer, direction: 1 },
            CanvasEvent::Wheel { pointer, direction: 1 },
            CanvasEvent::Click { pointer },
        ],
    );

    let selected = state.selected.expect("click selects a cell");
    let rect = state.viewport.cell_to_screen_rect(selected);
    assert!(rect.contains(pointer));

    let last = build_scene(&state).pop();
    assert!(matches!(last, Some(DrawCommand::Outline { rect: r, .. }) if r == rect));
}
