//! Scroll-driven visibility of the navigation chrome.
//!
//! The bar is docked while the page sits at the top, slides away while the
//! reader scrolls down and floats back in as soon as they scroll up.

/// One reading of the window's vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSample {
    pub y: u32,
}

impl ScrollSample {
    pub fn new(y: u32) -> Self {
        Self { y }
    }

    /// Browsers report fractional and, with elastic scrolling, negative offsets.
    pub fn from_offset(offset: f64) -> Self {
        if !offset.is_finite() || offset <= 0.0 {
            return Self::new(0);
        }
        Self::new(offset.round().min(u32::MAX as f64) as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavVisibilityState {
    #[default]
    VisibleTop,
    VisibleFloating,
    Hidden,
}

impl NavVisibilityState {
    pub fn is_visible(self) -> bool {
        !matches!(self, NavVisibilityState::Hidden)
    }

    /// Floating style stays applied everywhere except the docked position.
    pub fn is_floating(self) -> bool {
        !matches!(self, NavVisibilityState::VisibleTop)
    }
}

/// Result of a sample that moved the scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTransition {
    pub to: NavVisibilityState,
    /// Scrolling down closes the mobile menu.
    pub closes_menu: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollVisibilityController {
    last_y: u32,
    state: NavVisibilityState,
}

impl ScrollVisibilityController {
    pub fn state(&self) -> NavVisibilityState {
        self.state
    }

    pub fn last_y(&self) -> u32 {
        self.last_y
    }

    /// Feeds one sample. Returns `None` when the offset did not move.
    pub fn observe(&mut self, sample: ScrollSample) -> Option<NavTransition> {
        let y = sample.y;
        if y == self.last_y {
            return None;
        }

        let (to, closes_menu) = if y == 0 {
            (NavVisibilityState::VisibleTop, false)
        } else if y > self.last_y {
            (NavVisibilityState::Hidden, true)
        } else {
            (NavVisibilityState::VisibleFloating, false)
        };

        self.state = to;
        self.last_y = y;
        Some(NavTransition { to, closes_menu })
    }
}
