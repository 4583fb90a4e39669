//! Declarative tween targets and the per-target transition slot.
//!
//! Tweens never run here. They are rendered either as an inline style with a
//! CSS `transition` (the browser interpolates from whatever value is current)
//! or as a pair of Web Animations keyframes. A `TransitionSlot` owns the
//! handle of whatever is in flight on one target, so starting a new
//! transition cancels the old one instead of queueing behind it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Default curve for short UI nudges.
    #[default]
    Power1Out,
    Power1InOut,
    Power3Out,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::Power1InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
            Easing::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}

/// A set of visual properties. `None` means "leave this property alone".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pose {
    pub translate_y_px: Option<f64>,
    pub scale: Option<f64>,
    pub opacity: Option<f64>,
    pub width: Option<&'static str>,
    pub height: Option<&'static str>,
    pub clip_inset_top_pct: Option<f64>,
    pub visible: Option<bool>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate_y(mut self, px: f64) -> Self {
        self.translate_y_px = Some(px);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn size(mut self, width: &'static str, height: &'static str) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn clip_inset_top(mut self, pct: f64) -> Self {
        self.clip_inset_top_pct = Some(pct);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(y) = self.translate_y_px {
            parts.push(format!("translateY({}px)", y));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", scale));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn clip_path(&self) -> Option<String> {
        self.clip_inset_top_pct
            .map(|pct| format!("inset({}% 0 0 0)", pct))
    }

    /// CSS property names this pose touches, in a stable order.
    pub fn properties(&self) -> Vec<&'static str> {
        let mut props = Vec::new();
        if self.transform().is_some() {
            props.push("transform");
        }
        if self.opacity.is_some() {
            props.push("opacity");
        }
        if self.width.is_some() {
            props.push("width");
        }
        if self.height.is_some() {
            props.push("height");
        }
        if self.clip_inset_top_pct.is_some() {
            props.push("clip-path");
        }
        props
    }

    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        if let Some(transform) = self.transform() {
            style.push_str(&format!("transform: {};", transform));
        }
        if let Some(opacity) = self.opacity {
            style.push_str(&format!(" opacity: {};", opacity));
        }
        if let Some(width) = self.width {
            style.push_str(&format!(" width: {};", width));
        }
        if let Some(height) = self.height {
            style.push_str(&format!(" height: {};", height));
        }
        if let Some(clip) = self.clip_path() {
            style.push_str(&format!(" clip-path: {};", clip));
        }
        if let Some(visible) = self.visible {
            let value = if visible { "visible" } else { "hidden" };
            style.push_str(&format!(" visibility: {};", value));
        }
        style.trim_start().to_string()
    }

    pub fn keyframe(&self) -> Keyframe {
        Keyframe {
            transform: self.transform(),
            transform_origin: self.scale.map(|_| "center center"),
            opacity: self.opacity,
            width: self.width,
            height: self.height,
            clip_path: self.clip_path(),
            visibility: self
                .visible
                .map(|visible| if visible { "visible" } else { "hidden" }),
        }
    }
}

/// One Web Animations keyframe, serialized with `serde-wasm-bindgen`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<&'static str>,
}

/// Timing options passed alongside the keyframes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub easing: &'static str,
    pub fill: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: Option<Pose>,
    pub to: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Tween {
    pub fn to(to: Pose, duration_ms: u32) -> Self {
        Self {
            from: None,
            to,
            duration_ms,
            delay_ms: 0,
            easing: Easing::default(),
        }
    }

    pub fn from_to(from: Pose, to: Pose, duration_ms: u32) -> Self {
        Self {
            from: Some(from),
            ..Self::to(to, duration_ms)
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn transition_css(&self) -> String {
        let parts: Vec<String> = self
            .to
            .properties()
            .into_iter()
            .map(|prop| {
                format!(
                    "{} {}ms {} {}ms",
                    prop,
                    self.duration_ms,
                    self.easing.css(),
                    self.delay_ms
                )
            })
            .collect();
        format!("transition: {};", parts.join(", "))
    }

    /// Target pose plus the transition that animates toward it.
    pub fn inline_style(&self) -> String {
        format!("{} {}", self.to.inline_style(), self.transition_css())
    }

    /// Target pose alone, written once the transition has run its course.
    pub fn resting_style(&self) -> String {
        self.to.inline_style()
    }

    pub fn keyframes(&self) -> Vec<Keyframe> {
        match &self.from {
            Some(from) => vec![from.keyframe(), self.to.keyframe()],
            None => vec![self.to.keyframe()],
        }
    }

    pub fn timing(&self) -> Timing {
        Timing {
            duration: f64::from(self.duration_ms),
            delay: f64::from(self.delay_ms),
            easing: self.easing.css(),
            fill: "forwards",
        }
    }
}

/// Something in flight that can be stopped early.
pub trait Cancel {
    fn cancel(self);
}

/// Holds at most one active transition for a single target.
#[derive(Debug)]
pub struct TransitionSlot<H: Cancel> {
    active: Option<H>,
    generation: u64,
}

impl<H: Cancel> Default for TransitionSlot<H> {
    fn default() -> Self {
        Self {
            active: None,
            generation: 0,
        }
    }
}

impl<H: Cancel> TransitionSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels whatever is in flight, then stores the handle built for the
    /// new generation.
    pub fn start_with(&mut self, make: impl FnOnce(u64) -> H) -> u64 {
        self.cancel();
        self.generation += 1;
        self.active = Some(make(self.generation));
        self.generation
    }

    pub fn start(&mut self, handle: H) -> u64 {
        self.start_with(|_| handle)
    }

    /// Marks `generation` finished. Stale generations are ignored.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.active.is_some() {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorded {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for Recorded {
        fn cancel(self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn new_transition_cancels_the_one_in_flight() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TransitionSlot::new();

        slot.start(Recorded { id: 1, log: log.clone() });
        slot.start(Recorded { id: 2, log: log.clone() });
        let last = slot.start(Recorded { id: 3, log: log.clone() });

        assert_eq!(*log.borrow(), vec![1, 2]);
        assert_eq!(last, 3);
        assert!(slot.settle(last));
    }

    #[test]
    fn stale_settle_is_ignored() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TransitionSlot::new();

        let first = slot.start(Recorded { id: 1, log: log.clone() });
        let second = slot.start(Recorded { id: 2, log: log.clone() });

        assert!(!slot.settle(first));
        assert!(slot.settle(second));
        assert!(!slot.settle(second));
    }

    #[test]
    fn settled_transition_is_not_cancelled_later() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TransitionSlot::new();

        let generation = slot.start(Recorded { id: 1, log: log.clone() });
        slot.settle(generation);
        slot.start(Recorded { id: 2, log: log.clone() });

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn explicit_cancel_clears_the_slot() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TransitionSlot::new();

        let generation = slot.start(Recorded { id: 4, log: log.clone() });
        slot.cancel();
        slot.cancel();

        assert_eq!(*log.borrow(), vec![4]);
        assert!(!slot.settle(generation));
    }

    #[test]
    fn start_with_sees_the_new_generation() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TransitionSlot::new();
        slot.start(Recorded { id: 0, log: log.clone() });

        let mut seen = 0;
        let generation = slot.start_with(|g| {
            seen = g;
            Recorded { id: 9, log: log.clone() }
        });
        assert_eq!(seen, generation);
        assert_eq!(generation, 2);
    }

    #[test]
    fn resting_style_drops_the_transition() {
        let tween = Tween::to(Pose::new().translate_y(12.0).opacity(0.5), 300).delay(40);
        let moving = tween.inline_style();
        assert!(moving.starts_with("transform: translateY(12px); opacity: 0.5;"));
        assert!(moving.contains("transition: transform 300ms"));
        assert!(moving.contains(" 40ms, opacity 300ms"));
        assert_eq!(tween.resting_style(), "transform: translateY(12px); opacity: 0.5;");
    }

    #[test]
    fn from_to_produces_two_keyframes_with_fill_forwards() {
        let tween = Tween::from_to(Pose::new().scale(0.0), Pose::new().scale(1.5), 1500)
            .easing(Easing::Power1InOut);
        let frames = tween.keyframes();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].transform.as_deref(), Some("scale(0)"));
        assert_eq!(frames[1].transform.as_deref(), Some("scale(1.5)"));
        assert_eq!(frames[1].transform_origin, Some("center center"));
        let timing = tween.timing();
        assert_eq!(timing.duration, 1500.0);
        assert_eq!(timing.fill, "forwards");
        assert_eq!(timing.easing, Easing::Power1InOut.css());
    }

    #[test]
    fn clip_and_visibility_render() {
        let pose = Pose::new().clip_inset_top(100.0).visible(false);
        assert_eq!(pose.clip_path().as_deref(), Some("inset(100% 0 0 0)"));
        assert_eq!(
            pose.inline_style(),
            "clip-path: inset(100% 0 0 0); visibility: hidden;"
        );
        assert_eq!(pose.keyframe().visibility, Some("hidden"));
    }
}
