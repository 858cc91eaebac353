use macroquad::prelude::*;
use tracing::trace;

use super::click::ClickTracker;
use crate::app::frame_to_canvas;
use super::events::{handle_event, CanvasEvent};
use crate::settings::Settings;
use crate::state::ApplicationState;

/// Polls macroquad input once per frame and turns it into `CanvasEvent`s
pub struct InputDispatcher {
    clicks: ClickTracker,
    pointer_inside: bool,
}

impl InputDispatcher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            clicks: ClickTracker::new(settings.double_click_secs, settings.double_click_slop),
            pointer_inside: false,
        }
    }

    /// Collect this frame's canvas events. `frame` is the on-screen rect the
    /// canvas is clipped to; events outside it are not reported. Pointer
    /// positions are rescaled so the frame spans `GRID_SIZE` canvas units.
    pub fn poll(&mut self, frame: Rect) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let mouse = Vec2::from(mouse_position());
        let pointer = frame_to_canvas(frame, mouse);
        let inside = frame.contains(mouse);

        if self.pointer_inside && !inside {
            events.push(CanvasEvent::Leave);
            self.clicks.reset();
        }
        self.pointer_inside = inside;

        if is_mouse_button_released(MouseButton::Right) {
            events.push(CanvasEvent::SecondaryUp);
        }

        if !inside {
            return events;
        }

        events.push(CanvasEvent::Move { pointer });

        if is_mouse_button_pressed(MouseButton::Left) {
            events.push(CanvasEvent::Click { pointer });
            if self.clicks.press(get_time(), mouse) {
                events.push(CanvasEvent::DoubleClick { pointer });
            }
        }

        if is_mouse_button_pressed(MouseButton::Right) {
            events.push(CanvasEvent::SecondaryDown { pointer });
        }

        let (_scroll_x, scroll_y) = mouse_wheel();
        if scroll_y != 0.0 {
            events.push(CanvasEvent::Wheel {
                pointer,
                direction: if scroll_y > 0.0 { 1 } else { -1 },
            });
        }

        events
    }
}

/// Central input dispatcher: hotkeys plus pointer events over the canvas.
/// Hotkeys are skipped while a text field owns the keyboard.
pub fn handle_input(
    state: &mut ApplicationState,
    dispatcher: &mut InputDispatcher,
    frame: Rect,
    hotkeys: bool,
) {
    if hotkeys && is_key_pressed(KeyCode::C) {
        handle_event(state, CanvasEvent::Clear);
    }

    for event in dispatcher.poll(frame) {
        trace!(?event, "canvas event");
        handle_event(state, event);
    }
}
