//! Easing curves for timeline tweens.
//!
//! Names follow the conventions used by the site's motion design
//! (`power2.out`, `expo.out`, ...). `power1` is quadratic, `power2` cubic,
//! `power3` quartic.

use std::f64::consts::PI;

/// Rate-of-change curve applied to a tween's normalized time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant speed. Used for scrubbed effects.
    Linear,
    /// Cubic deceleration.
    Power2Out,
    /// Cubic acceleration then deceleration.
    Power2InOut,
    /// Quartic deceleration.
    Power3Out,
    /// Exponential deceleration.
    ExpoOut,
    /// Overshooting spring-like settle.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Easing {
    /// `elastic.out(1, 0.3)`
    pub const ELASTIC: Easing = Easing::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };

    /// Evaluate the curve at `t` in [0, 1]. Input outside the range is clamped;
    /// output may exceed [0, 1] for overshooting curves.
    pub fn evaluate(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Easing::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let amplitude = amplitude.max(1.0);
    let period = period.max(f64::EPSILON);
    let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
    amplitude * 2f64.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::Power2Out,
        Easing::Power2InOut,
        Easing::Power3Out,
        Easing::ExpoOut,
        Easing::ELASTIC,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.evaluate(0.0).abs() < 1e-9, "{:?} at 0", easing);
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Easing::Power2Out.evaluate(0.5) > 0.5);
        assert!(Easing::Power3Out.evaluate(0.5) > Easing::Power2Out.evaluate(0.5));
        assert!(Easing::ExpoOut.evaluate(0.3) > 0.8);
    }

    #[test]
    fn test_in_out_is_symmetric() {
        let a = Easing::Power2InOut.evaluate(0.25);
        let b = Easing::Power2InOut.evaluate(0.75);
        assert!((a + b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::ELASTIC.evaluate(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Linear.evaluate(-1.0), 0.0);
        assert_eq!(Easing::Linear.evaluate(2.0), 1.0);
    }
}
