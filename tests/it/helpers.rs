//! Test helpers for driving the drag core with scripted pointer sequences.
//!
//! ```ignore
//! let trace = DragScript::new()
//!     .press(200.0, 300.0)
//!     .move_to(210.0, 320.0)
//!     .release()
//!     .run(&mut tracker);
//! ```

use floatcam::input::{PointerInput, PointerTracker, Position};

/// One forwarded pointer event
#[derive(Debug, Clone)]
pub enum Step {
    Press(PointerInput),
    Move(PointerInput),
    Release,
}

/// Builder for a sequence of pointer events.
#[derive(Debug, Clone, Default)]
pub struct DragScript {
    steps: Vec<Step>,
}

impl DragScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(mut self, x: f32, y: f32) -> Self {
        self.steps.push(Step::Press(PointerInput::mouse(x, y)));
        self
    }

    pub fn press_touch(mut self, contacts: &[(f32, f32)]) -> Self {
        self.steps.push(Step::Press(touch(contacts)));
        self
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.steps.push(Step::Move(PointerInput::mouse(x, y)));
        self
    }

    pub fn move_touch(mut self, contacts: &[(f32, f32)]) -> Self {
        self.steps.push(Step::Move(touch(contacts)));
        self
    }

    pub fn release(mut self) -> Self {
        self.steps.push(Step::Release);
        self
    }

    /// Feed every step to the tracker and return the position after each one.
    pub fn run(&self, tracker: &mut PointerTracker) -> Vec<Position> {
        self.steps
            .iter()
            .map(|step| {
                match step {
                    Step::Press(input) => {
                        tracker.press(input);
                    }
                    Step::Move(input) => {
                        tracker.track(input);
                    }
                    Step::Release => {
                        tracker.release();
                    }
                }
                tracker.position()
            })
            .collect()
    }
}

pub fn touch(contacts: &[(f32, f32)]) -> PointerInput {
    PointerInput::touch(contacts.iter().copied().map(Position::from))
}

/// Assert two positions are equal within float tolerance.
#[track_caller]
pub fn assert_position(actual: Position, expected: (f32, f32)) {
    let tolerance = 1e-3;
    assert!(
        (actual.x - expected.0).abs() < tolerance && (actual.y - expected.1).abs() < tolerance,
        "expected ({}, {}), got ({}, {})",
        expected.0,
        expected.1,
        actual.x,
        actual.y
    );
}
