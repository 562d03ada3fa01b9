use dashmap::DashMap;

/// A viewport offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };
}

/// Scroll offsets keyed by pathname. Recording the offset on leave and
/// applying the restored one to a viewport are the host's concern.
#[derive(Debug, Default)]
pub struct ScrollManager {
    positions: DashMap<String, ScrollPosition>,
}

impl ScrollManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_position(&self, pathname: impl Into<String>, position: ScrollPosition) {
        let pathname = pathname.into();
        tracing::trace!(%pathname, x = position.x, y = position.y, "scroll position saved");
        self.positions.insert(pathname, position);
    }

    pub fn position(&self, pathname: &str) -> Option<ScrollPosition> {
        self.positions.get(pathname).map(|entry| *entry.value())
    }

    /// The offset to apply on (re-)entry: the saved position, or the origin
    /// for a first visit.
    pub fn restore_target(&self, pathname: &str) -> ScrollPosition {
        self.position(pathname).unwrap_or(ScrollPosition::ORIGIN)
    }

    pub fn clear_position(&self, pathname: &str) {
        self.positions.remove(pathname);
    }

    pub fn clear_all(&self) {
        self.positions.clear();
    }
}

#[test]
fn scroll_restore_rule() {
    let scroll = ScrollManager::new();
    assert_eq!(scroll.restore_target("/fresh"), ScrollPosition::ORIGIN);

    scroll.save_position("/feed", ScrollPosition { x: 0.0, y: 640.0 });
    assert_eq!(scroll.restore_target("/feed").y, 640.0);

    scroll.clear_position("/feed");
    assert_eq!(scroll.restore_target("/feed"), ScrollPosition::ORIGIN);
}
