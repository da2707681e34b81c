/// Normalizes wheel deltas across browsers and devices.
///
/// Browsers report wheel movement in wildly different units (lines,
/// pixels, pages, each scaled differently). The smallest non-zero
/// magnitude seen so far in the session is taken as one "notch", and every
/// delta is expressed in notches.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WheelNormalizer {
    baseline: Option<f32>,
}

impl WheelNormalizer {
    /// Fresh normalizer with no baseline.
    #[must_use]
    pub const fn new() -> Self {
        Self { baseline: None }
    }

    /// Smallest magnitude observed so far.
    #[must_use]
    pub const fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    /// Delta in notches. The first non-zero delta becomes the baseline, so
    /// it normalizes to ±1. Zero or non-finite deltas return 0 and leave
    /// the baseline untouched.
    pub fn normalize(&mut self, delta: f32) -> f32 {
        let magnitude = delta.abs();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return 0.0;
        }
        let baseline = match self.baseline {
            Some(b) if b <= magnitude => b,
            _ => magnitude,
        };
        self.baseline = Some(baseline);
        delta / baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_sets_the_baseline() {
        let mut wheel = WheelNormalizer::new();
        assert_eq!(wheel.normalize(-100.0), -1.0);
        assert_eq!(wheel.baseline(), Some(100.0));
    }

    #[test]
    fn smaller_delta_lowers_the_baseline() {
        let mut wheel = WheelNormalizer::new();
        assert_eq!(wheel.normalize(100.0), 1.0);
        // 50 / 50, not 50 / 100
        assert_eq!(wheel.normalize(50.0), 1.0);
        assert_eq!(wheel.normalize(150.0), 3.0);
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut wheel = WheelNormalizer::new();
        assert_eq!(wheel.normalize(0.0), 0.0);
        assert_eq!(wheel.baseline(), None);
        assert_eq!(wheel.normalize(f32::NAN), 0.0);
        assert_eq!(wheel.baseline(), None);
    }
}
