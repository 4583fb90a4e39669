use super::audio::AudioIndicatorState;
use super::menu::{MenuEvent, MobileMenuState};
use super::nav_visibility::{NavVisibilityState, ScrollSample, ScrollVisibilityController};
use super::tween::{Pose, Tween};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Scrolled(ScrollSample),
    Menu(MenuEvent),
    ToggleAudio,
}

/// Everything the navigation bar owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavChrome {
    pub scroll: ScrollVisibilityController,
    pub menu: MobileMenuState,
    pub audio: AudioIndicatorState,
}

impl NavChrome {
    pub fn visibility(&self) -> NavVisibilityState {
        self.scroll.state()
    }

    /// `None` when the action changed nothing.
    pub fn apply(&self, action: NavAction) -> Option<Self> {
        let mut next = *self;
        match action {
            NavAction::Scrolled(sample) => {
                let transition = next.scroll.observe(sample)?;
                if transition.closes_menu {
                    next.menu = next.menu.apply(MenuEvent::ScrollDown);
                }
            }
            NavAction::Menu(event) => next.menu = next.menu.apply(event),
            NavAction::ToggleAudio => next.audio = next.audio.toggled(),
        }
        (next != *self).then_some(next)
    }
}

/// Slide/fade target for the bar. Floating counts as visible.
pub fn nav_tween(visibility: NavVisibilityState) -> Tween {
    let pose = if visibility.is_visible() {
        Pose::new().translate_y(0.0).opacity(1.0)
    } else {
        Pose::new()
            .translate_y(config::NAV_HIDDEN_OFFSET_PX)
            .opacity(0.0)
    };
    Tween::to(pose, config::NAV_TWEEN_MS)
}
