use macroquad::math::Vec2;

/// Turns a stream of primary presses into single and double activations
#[derive(Clone, Debug)]
pub struct ClickTracker {
    /// Longest gap between presses that still counts as a double activation
    interval: f64,
    /// Max pointer travel between the two presses, in pixels
    slop: f32,
    last_press: Option<(f64, Vec2)>,
}

impl ClickTracker {
    pub fn new(interval: f64, slop: f32) -> Self {
        Self {
            interval,
            slop,
            last_press: None,
        }
    }

    /// Record a press at `time` seconds. Returns true when it completes a
    /// double activation. A completed pair resets, so a third press starts over.
    pub fn press(&mut self, time: f64, pointer: Vec2) -> bool {
        let is_double = self.last_press.is_some_and(|(last_time, last_pointer)| {
            time - last_time <= self.interval && last_pointer.distance(pointer) <= self.slop
        });

        self.last_press = if is_double { None } else { Some((time, pointer)) };
        is_double
    }

    pub fn reset(&mut self) {
        self.last_press = None;
    }
}
