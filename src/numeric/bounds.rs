//! Clamping and step quantization shared by every interaction source.

/// Optional range and step attached to a widget. `None` means unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl Bounds {
    /// Bounds that constrain nothing.
    pub const UNBOUNDED: Bounds = Bounds {
        min: None,
        max: None,
        step: None,
    };

    /// Bounds with a range and no explicit step.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    /// Returns these bounds with an explicit step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// The explicit step if set, else `default_step`.
    pub fn effective_step(&self, default_step: f64) -> f64 {
        self.step.unwrap_or(default_step)
    }

    /// Clamps into `[min, max]` without quantizing.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut value = value;
        if let Some(min) = self.min {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        value
    }

    /// Clamps, then rounds to the nearest multiple of the effective step.
    ///
    /// When a bound is not itself a multiple of the step, the quantized value
    /// can land up to half a step outside the range.
    pub fn apply(&self, value: f64, default_step: f64) -> f64 {
        quantize(self.clamp(value), self.effective_step(default_step))
    }
}

/// Rounds to the nearest multiple of `step`, halves away from zero.
///
/// Non-positive steps leave the value untouched.
pub fn quantize(value: f64, step: f64) -> f64 {
    if step > 0.0 {
        (value / step).round() * step
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn is_multiple(value: f64, step: f64) -> bool {
        let ratio = value / step;
        (ratio - ratio.round()).abs() < EPSILON
    }

    #[test]
    fn results_stay_in_range_and_on_grid() {
        let steps = [0.01, 0.25, 1.0, 2.0, 5.0];
        let values = [-1000.0, -7.3, -0.005, 0.0, 0.3, 3.0, 9.99, 12.5, 1e6];
        for step in steps {
            let bounds = Bounds::new(Some(-10.0), Some(10.0)).with_step(step);
            for value in values {
                let applied = bounds.apply(value, 1.0);
                assert!((-10.0..=10.0).contains(&applied), "{value} -> {applied}");
                assert!(is_multiple(applied, step), "{applied} not on {step}");
            }
        }
    }

    #[test]
    fn unconstrained_uses_default_step() {
        assert_eq!(Bounds::UNBOUNDED.apply(2.6, 1.0), 3.0);
        assert_eq!(Bounds::UNBOUNDED.apply(-1e9, 1.0), -1e9);
        assert!((Bounds::UNBOUNDED.apply(0.123, 0.01) - 0.12).abs() < EPSILON);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(quantize(3.0, 2.0), 4.0);
        assert_eq!(quantize(-3.0, 2.0), -4.0);
        assert_eq!(quantize(0.5, 1.0), 1.0);
    }

    #[test]
    fn zero_step_disables_quantization() {
        let bounds = Bounds::UNBOUNDED.with_step(0.0);
        assert_eq!(bounds.apply(1.2345, 1.0), 1.2345);
    }

    #[test]
    fn off_grid_bound_can_be_exceeded_by_half_a_step() {
        let bounds = Bounds::new(None, Some(5.0)).with_step(2.0);
        assert_eq!(bounds.apply(10.0, 1.0), 6.0);
    }
}
