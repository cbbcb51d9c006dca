use serde::{Deserialize, Serialize};

/// Host element the chart is mounted into.
///
/// `left`/`top` are the element's bounding-box origin in client
/// coordinates, used to translate touch positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountPoint {
    pub id: String,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
}

impl MountPoint {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            left: 0.0,
            top: 0.0,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, left: f64, top: f64) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    /// Converts client coordinates into mount-local, y-down coordinates.
    #[must_use]
    pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

/// Pointer events consumed by the tooltip controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    /// Desktop pointer movement, already local to the surface.
    PointerMove { offset_x: f64, offset_y: f64 },
    /// First touch point in client coordinates.
    TouchStart { client_x: f64, client_y: f64 },
}

impl PointerInput {
    /// Surface-local, y-down position of the event.
    #[must_use]
    pub fn local_position(self, mount: &MountPoint) -> (f64, f64) {
        match self {
            Self::PointerMove { offset_x, offset_y } => (offset_x, offset_y),
            Self::TouchStart { client_x, client_y } => mount.to_local(client_x, client_y),
        }
    }

    /// Position in the y-up space used by bar and line charts.
    #[must_use]
    pub fn cartesian_position(self, mount: &MountPoint, height: f64) -> (f64, f64) {
        let (x, y) = self.local_position(mount);
        (x, height - y)
    }

    /// Position relative to the center of a polar-centered chart, y up.
    #[must_use]
    pub fn polar_position(self, mount: &MountPoint, width: f64, height: f64) -> (f64, f64) {
        let (x, y) = self.local_position(mount);
        (x - width / 2.0, height / 2.0 - y)
    }
}

/// Identity of the region currently highlighted on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    current: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Records a hit on `index`; returns `true` when it differs from the
    /// previous hover target.
    pub fn enter(&mut self, index: usize) -> bool {
        let changed = self.current != Some(index);
        self.current = Some(index);
        changed
    }

    /// Records a miss; returns `true` when something was hovered before.
    pub fn leave(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverState, MountPoint, PointerInput};

    #[test]
    fn touch_positions_are_translated_by_mount_offset() {
        let mount = MountPoint::new("chart").with_offset(100.0, 50.0);
        let touch = PointerInput::TouchStart {
            client_x: 130.0,
            client_y: 90.0,
        };
        assert_eq!(touch.local_position(&mount), (30.0, 40.0));
        assert_eq!(touch.cartesian_position(&mount, 500.0), (30.0, 460.0));
        assert_eq!(touch.polar_position(&mount, 800.0, 500.0), (-370.0, 210.0));
    }

    #[test]
    fn hover_reports_identity_changes_only() {
        let mut hover = HoverState::default();
        assert!(hover.enter(1));
        assert!(!hover.enter(1));
        assert!(hover.enter(2));
        assert!(hover.leave());
        assert!(!hover.leave());
        assert_eq!(hover.current(), None);
    }
}
