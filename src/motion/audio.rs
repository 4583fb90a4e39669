/// Number of bars in the equalizer-style indicator next to the nav links.
pub const INDICATOR_BARS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioIndicatorState {
    pub is_playing: bool,
}

impl AudioIndicatorState {
    pub fn toggled(self) -> Self {
        Self {
            is_playing: !self.is_playing,
        }
    }

    pub fn button_label(self) -> &'static str {
        if self.is_playing {
            "Pause audio"
        } else {
            "Play audio"
        }
    }
}

/// Staggered start of each indicator bar, `bar` counted from 1.
pub fn bar_delay_secs(bar: u32) -> f64 {
    f64::from(bar) * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_back() {
        let idle = AudioIndicatorState::default();
        assert!(idle.toggled().is_playing);
        assert_eq!(idle.toggled().toggled(), idle);
        assert_eq!(idle.toggled().button_label(), "Pause audio");
    }

    #[test]
    fn bars_are_staggered_by_a_tenth_of_a_second() {
        let delays: Vec<f64> = (1..=INDICATOR_BARS).map(bar_delay_secs).collect();
        assert_eq!(delays.len(), 4);
        assert!((delays[0] - 0.1).abs() < 1e-9);
        assert!((delays[3] - 0.4).abs() < 1e-9);
    }
}
