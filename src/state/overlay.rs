//! Outside-press dismissal for popups.
//!
//! Open overlays register their screen bounds each frame. A pointer press is
//! routed through [`OverlayDispatcher::pointer_pressed`], which reports every
//! registered overlay the press landed outside of.

use eframe::egui::{Pos2, Rect};

/// Overlays that can be dismissed by pressing outside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayId {
    Notifications,
}

/// Registry of open overlays and their bounds.
#[derive(Debug, Default)]
pub struct OverlayDispatcher {
    registered: Vec<(OverlayId, Vec<Rect>)>,
}

impl OverlayDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all registrations; called at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.registered.clear();
    }

    /// Register one region belonging to `id`. An overlay may register several
    /// regions (e.g. its trigger button and its popup).
    pub fn register(&mut self, id: OverlayId, rect: Rect) {
        match self.registered.iter_mut().find(|(o, _)| *o == id) {
            Some((_, rects)) => rects.push(rect),
            None => self.registered.push((id, vec![rect])),
        }
    }

    /// Overlays that a press at `pos` should dismiss.
    pub fn pointer_pressed(&self, pos: Pos2) -> Vec<OverlayId> {
        self.registered
            .iter()
            .filter(|(_, rects)| !rects.iter().any(|r| r.contains(pos)))
            .map(|(id, _)| *id)
            .collect()
    }
}
