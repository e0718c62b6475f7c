//! Pointing-device buttons as edge-triggered toggles
//!
//! The left button toggles pause, the right button requests a reset. A
//! button only fires on its released-to-pressed transition, so holding it
//! down does not repeat.

use std::collections::VecDeque;

use super::{PointerReport, PointingDevice};

/// Rising-edge detector for one button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    held: bool,
}

impl ButtonEdge {
    /// Feed the current level; true exactly once per press
    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.held;
        self.held = pressed;
        fired
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Edges gathered from one poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    pub pause: bool,
    pub reset: bool,
}

/// Turns pointer reports into pause/reset requests
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    pause: ButtonEdge,
    reset: ButtonEdge,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the device and fold every report into pending edges.
    ///
    /// Several pause presses inside one poll cancel out pairwise.
    pub fn poll(&mut self, device: &mut dyn PointingDevice) -> ButtonEdges {
        let mut edges = ButtonEdges::default();
        for report in device.poll_activity() {
            if self.pause.update(report.left) {
                edges.pause = !edges.pause;
            }
            if self.reset.update(report.right) {
                edges.reset = true;
            }
        }
        edges
    }
}

/// Pointing device fed from a queue of per-poll report batches
#[derive(Debug, Clone, Default)]
pub struct ScriptedPointer {
    batches: VecDeque<Vec<PointerReport>>,
}

impl ScriptedPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue reports to be returned by a future poll
    pub fn queue(&mut self, reports: Vec<PointerReport>) {
        self.batches.push_back(reports);
    }

    /// Queue a poll with a single button state
    pub fn queue_buttons(&mut self, left: bool, right: bool) {
        self.queue(vec![PointerReport {
            left,
            right,
            ..Default::default()
        }]);
    }

    /// Queue an idle poll
    pub fn queue_idle(&mut self) {
        self.queue(Vec::new());
    }
}

impl PointingDevice for ScriptedPointer {
    fn poll_activity(&mut self) -> Vec<PointerReport> {
        self.batches.pop_front().unwrap_or_default()
    }
}
