// Easing curves over normalized progress `t` in [0, 1].

use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    OutQuart,
    /// Overshoots past 1 before settling; callers clamp if they need to.
    OutElastic,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutQuart => ease_out_quart(t),
            Easing::OutElastic => ease_out_elastic(t),
        }
    }
}

#[inline]
pub fn ease_out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

#[inline]
pub fn ease_out_elastic(t: f32) -> f32 {
    const PERIOD: f32 = 0.3;
    2f32.powf(-10.0 * t) * ((t - PERIOD / 4.0) * TAU / PERIOD).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for e in [Easing::Linear, Easing::OutQuart, Easing::OutElastic] {
            assert!(e.apply(0.0).abs() < 1e-5, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-3, "{e:?} at 1");
        }
    }

    #[test]
    fn out_quart_is_front_loaded() {
        assert!(ease_out_quart(0.5) > 0.9);
        assert!(ease_out_quart(0.25) > ease_out_quart(0.2));
    }

    #[test]
    fn elastic_overshoots() {
        let peak = (1..100)
            .map(|i| ease_out_elastic(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }
}
