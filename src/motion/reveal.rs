use super::tween::{Easing, Pose, Tween};
use crate::config;

/// Fires once when an element's top edge crosses a fixed fraction of the
/// viewport height (`0.85` means "top at 85% of the viewport"). Later
/// scrolling, in either direction, never un-reveals it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    fired: bool,
}

impl RevealTrigger {
    pub fn at(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Returns true only on the call that fires the trigger.
    pub fn observe(&mut self, top: f64, viewport_height: f64) -> bool {
        if self.fired || viewport_height <= 0.0 {
            return false;
        }
        if top <= viewport_height * self.threshold {
            self.fired = true;
            return true;
        }
        false
    }
}

/// Resting pose before the trigger fires and the tween played after it.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLayer {
    hidden: Pose,
    shown: Tween,
}

impl RevealLayer {
    pub fn title() -> Self {
        Self {
            hidden: Pose::new().translate_y(18.0).opacity(0.0),
            shown: Tween::to(Pose::new().translate_y(0.0).opacity(1.0), 900)
                .easing(Easing::Power3Out),
        }
    }

    pub fn featured() -> Self {
        Self {
            hidden: Pose::new().translate_y(24.0).scale(0.98).opacity(0.0),
            shown: Tween::to(Pose::new().translate_y(0.0).scale(1.0).opacity(1.0), 1000)
                .easing(Easing::Power3Out),
        }
    }

    /// Rows come in one after another, `position` counted from 0.
    pub fn row(position: usize) -> Self {
        let delay = config::REVEAL_ROW_STAGGER_MS.saturating_mul(position as u32);
        Self {
            hidden: Pose::new().translate_y(16.0).opacity(0.0),
            shown: Tween::to(Pose::new().translate_y(0.0).opacity(1.0), 800)
                .easing(Easing::Power3Out)
                .delay(delay),
        }
    }

    pub fn style(&self, revealed: bool) -> String {
        if revealed {
            self.shown.inline_style()
        } else {
            self.hidden.inline_style()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_crossing() {
        let mut trigger = RevealTrigger::at(0.85);
        assert!(!trigger.observe(900.0, 1000.0));
        assert!(trigger.observe(850.0, 1000.0));
        assert!(trigger.fired());
        assert!(!trigger.observe(100.0, 1000.0));
    }

    #[test]
    fn stays_revealed_after_scrolling_back() {
        let mut trigger = RevealTrigger::at(0.8);
        trigger.observe(10.0, 1000.0);
        trigger.observe(5000.0, 1000.0);
        assert!(trigger.fired());
    }

    #[test]
    fn already_in_view_on_load_fires_immediately() {
        let mut trigger = RevealTrigger::at(0.82);
        assert!(trigger.observe(-250.0, 700.0));
    }

    #[test]
    fn zero_height_viewport_never_fires() {
        let mut trigger = RevealTrigger::at(0.85);
        assert!(!trigger.observe(0.0, 0.0));
        assert!(!trigger.fired());
    }

    #[test]
    fn hidden_layers_carry_no_transition() {
        let hidden = RevealLayer::title().style(false);
        assert_eq!(hidden, "transform: translateY(18px); opacity: 0;");
        assert!(RevealLayer::title().style(true).contains("transition: transform 900ms"));
    }

    #[test]
    fn rows_are_staggered() {
        assert!(RevealLayer::row(0).style(true).contains("800ms cubic-bezier(0.215, 0.61, 0.355, 1) 0ms"));
        assert!(RevealLayer::row(2).style(true).ends_with("160ms;"));
    }

    #[test]
    fn featured_card_settles_at_full_scale() {
        let shown = RevealLayer::featured().style(true);
        assert!(shown.starts_with("transform: translateY(0px) scale(1); opacity: 1;"));
        assert!(RevealLayer::featured().style(false).contains("scale(0.98)"));
    }
}
