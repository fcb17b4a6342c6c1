use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Vertical offset, in pixels, an element starts from before sliding into place.
pub const HIDDEN_OFFSET_Y: f64 = 20.0;

/// Converts fractional seconds to a `Duration` at millisecond resolution.
///
/// Negative and non-finite inputs clamp to zero.
pub fn seconds(secs: f64) -> Duration {
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_millis((secs * 1000.0).round() as u64)
}

fn default_base_delay() -> f64 {
    0.3
}

fn default_stagger() -> f64 {
    0.2
}

fn default_duration() -> f64 {
    0.5
}

/// Stagger parameters for one section, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealTiming {
    #[serde(default = "default_base_delay")]
    pub base_delay: f64,
    #[serde(default = "default_stagger")]
    pub stagger: f64,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            base_delay: default_base_delay(),
            stagger: default_stagger(),
            duration: default_duration(),
            easing: Easing::default(),
        }
    }
}

impl RevealTiming {
    pub fn with_stagger(self, stagger: f64) -> Self {
        Self { stagger, ..self }
    }

    /// Offset from the trigger at which an element in `slot` starts its transition.
    pub fn delay_for(&self, slot: usize) -> Duration {
        seconds(self.base_delay) + seconds(self.stagger) * slot as u32
    }

    pub fn transition(&self) -> Duration {
        seconds(self.duration)
    }

    /// Offset from the trigger at which the last of `slots` sequential slots is fully shown.
    pub fn full_reveal(&self, slots: usize) -> Duration {
        self.delay_for(slots.saturating_sub(1)) + self.transition()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)",
        }
    }
}

/// Style of an element at one instant of its entrance transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f64,
    pub offset_y: f64,
}

impl Presentation {
    pub const HIDDEN: Presentation = Presentation {
        opacity: 0.0,
        offset_y: HIDDEN_OFFSET_Y,
    };
    pub const RESTING: Presentation = Presentation {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Interpolated presentation `progress` of the way through the transition.
    pub fn at(progress: f64, easing: Easing) -> Self {
        let eased = easing.apply(progress);
        Presentation {
            opacity: eased,
            offset_y: HIDDEN_OFFSET_Y * (1.0 - eased),
        }
    }

    pub fn to_style(self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px);",
            self.opacity, self.offset_y
        )
    }
}

/// Delay for an item addressed by two indices, such as a skill bar inside a category.
pub fn grid_delay(base: f64, outer_step: f64, inner_step: f64, outer: usize, inner: usize) -> Duration {
    seconds(base + outer as f64 * outer_step + inner as f64 * inner_step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = RevealTiming::default();
        assert_eq!(timing.delay_for(0), Duration::from_millis(300));
        assert_eq!(timing.delay_for(2), Duration::from_millis(700));
        assert_eq!(timing.delay_for(2) + timing.transition(), Duration::from_millis(1200));
    }

    #[test]
    fn test_full_reveal_bound() {
        let timing = RevealTiming::default();
        // 0.3 + 3 * 0.2 + 0.5
        assert_eq!(timing.full_reveal(4), Duration::from_millis(1400));
        assert_eq!(timing.full_reveal(0), timing.full_reveal(1));
    }

    #[test]
    fn test_seconds_clamps() {
        assert_eq!(seconds(-1.0), Duration::ZERO);
        assert_eq!(seconds(f64::NAN), Duration::ZERO);
        assert_eq!(seconds(0.1), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_timing_deserializes_with_defaults() {
        let timing: RevealTiming = serde_json::from_str(r#"{ "stagger": 0.1 }"#).unwrap();
        assert_eq!(timing.base_delay, 0.3);
        assert_eq!(timing.stagger, 0.1);
        assert_eq!(timing.duration, 0.5);
        assert_eq!(timing.easing, Easing::EaseOut);

        let timing: RevealTiming = serde_json::from_str(r#"{ "easing": "linear" }"#).unwrap();
        assert_eq!(timing.easing, Easing::Linear);
    }

    #[test]
    fn test_easing_bounds() {
        for easing in [Easing::Linear, Easing::EaseOut] {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
    }

    #[test]
    fn test_presentation_interpolates() {
        assert_eq!(Presentation::at(0.0, Easing::Linear), Presentation::HIDDEN);
        assert_eq!(Presentation::at(1.0, Easing::EaseOut), Presentation::RESTING);

        let half = Presentation::at(0.5, Easing::Linear);
        assert_eq!(half.opacity, 0.5);
        assert_eq!(half.offset_y, 10.0);

        let mut prev = Presentation::HIDDEN;
        for step in 1..=10 {
            let p = Presentation::at(step as f64 / 10.0, Easing::EaseOut);
            assert!(p.opacity >= prev.opacity);
            assert!(p.offset_y <= prev.offset_y);
            prev = p;
        }
    }

    #[test]
    fn test_presentation_style() {
        assert_eq!(
            Presentation::RESTING.to_style(),
            "opacity: 1.000; transform: translateY(0.00px);"
        );
    }

    #[test]
    fn test_grid_delay() {
        // second category, third skill
        assert_eq!(grid_delay(0.5, 0.1, 0.05, 1, 2), Duration::from_millis(700));
        assert_eq!(grid_delay(0.5, 0.1, 0.05, 0, 0), Duration::from_millis(500));
    }
}
