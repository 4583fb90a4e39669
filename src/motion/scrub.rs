//! Scroll-linked progress: values scrubbed continuously by the scroll
//! position instead of played over time.

use super::tween::Pose;

/// Progress of an element through the range that starts when its bottom
/// edge reaches the viewport bottom and ends when it reaches the viewport
/// top. `bottom` is the element's bounding-rect bottom in viewport pixels.
pub fn bottom_exit_progress(bottom: f64, viewport_height: f64) -> f64 {
    if viewport_height.is_nan() || viewport_height <= 0.0 || !bottom.is_finite() {
        return 0.0;
    }
    ((viewport_height - bottom) / viewport_height).clamp(0.0, 1.0)
}

/// The stacked hero titles: a dark overlay wipes up over the light title
/// while the light title fades out. Both layers read the same progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleWipe {
    progress: f64,
}

impl TitleWipe {
    pub fn at(progress: f64) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        Self { progress }
    }

    /// Overlay clip goes from fully covered (100%) to fully revealed (0%).
    pub fn overlay(&self) -> Pose {
        Pose::new().clip_inset_top((1.0 - self.progress) * 100.0)
    }

    pub fn underlay(&self) -> Pose {
        Pose::new().opacity(1.0 - self.progress)
    }
}

impl Default for TitleWipe {
    fn default() -> Self {
        Self::at(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_bottom_to_top_of_viewport() {
        assert_eq!(bottom_exit_progress(800.0, 800.0), 0.0);
        assert_eq!(bottom_exit_progress(400.0, 800.0), 0.5);
        assert_eq!(bottom_exit_progress(0.0, 800.0), 1.0);
    }

    #[test]
    fn progress_is_clamped_outside_the_range() {
        assert_eq!(bottom_exit_progress(1200.0, 800.0), 0.0);
        assert_eq!(bottom_exit_progress(-300.0, 800.0), 1.0);
        assert_eq!(bottom_exit_progress(100.0, 0.0), 0.0);
    }

    #[test]
    fn both_layers_follow_one_progress_value() {
        for step in 0..=10 {
            let p = f64::from(step) / 10.0;
            let wipe = TitleWipe::at(p);
            let clip = wipe.overlay().clip_inset_top_pct.unwrap();
            let opacity = wipe.underlay().opacity.unwrap();
            assert!((clip / 100.0 - opacity).abs() < 1e-9, "p = {p}");
        }
    }

    #[test]
    fn endpoints() {
        let start = TitleWipe::default();
        assert_eq!(start.overlay().clip_inset_top_pct, Some(100.0));
        assert_eq!(start.underlay().opacity, Some(1.0));

        let end = TitleWipe::at(1.0);
        assert_eq!(end.overlay().clip_inset_top_pct, Some(0.0));
        assert_eq!(end.underlay().opacity, Some(0.0));
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(TitleWipe::at(3.0), TitleWipe::at(1.0));
        assert_eq!(TitleWipe::at(-1.0), TitleWipe::default());
        assert_eq!(TitleWipe::at(f64::NAN), TitleWipe::default());
    }
}
