//! Slider panel for the complex constant.

use std::ops::RangeInclusive;

use crate::complex::Complex;

pub const CONSTANT_RANGE: RangeInclusive<f32> = -1.0..=1.0;
pub const CONSTANT_STEP: f32 = 0.01;

#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    value: f32,
    range: RangeInclusive<f32>,
    step: f32,
}

impl Slider {
    pub fn new(value: f32, range: RangeInclusive<f32>, step: f32) -> Self {
        let mut slider = Self {
            value: *range.start(),
            range,
            step,
        };
        slider.set(value);
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped to the slider's range. NaN is ignored.
    pub fn set(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(*self.range.start(), *self.range.end());
    }

    pub fn nudge(&mut self, steps: i32) {
        self.set(self.value + steps as f32 * self.step);
    }
}

/// Two sliders, one per component of the constant.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPanel {
    pub real: Slider,
    pub imaginary: Slider,
}

impl ControlPanel {
    pub fn new(constant: Complex) -> Self {
        Self {
            real: Slider::new(constant.real, CONSTANT_RANGE, CONSTANT_STEP),
            imaginary: Slider::new(constant.imaginary, CONSTANT_RANGE, CONSTANT_STEP),
        }
    }

    pub fn constant(&self) -> Complex {
        Complex::new(self.real.value(), self.imaginary.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_given_constant() {
        let panel = ControlPanel::new(Complex::new(0.34, -0.07));
        assert_eq!(panel.constant(), Complex::new(0.34, -0.07));
    }

    #[test]
    fn clamps_to_range() {
        let mut slider = Slider::new(3.0, CONSTANT_RANGE, CONSTANT_STEP);
        assert_eq!(slider.value(), 1.0);
        slider.set(-7.5);
        assert_eq!(slider.value(), -1.0);
    }

    #[test]
    fn nan_keeps_previous_value() {
        let mut slider = Slider::new(0.5, CONSTANT_RANGE, CONSTANT_STEP);
        slider.set(f32::NAN);
        assert_eq!(slider.value(), 0.5);
    }

    #[test]
    fn nudge_moves_by_steps_and_stops_at_edge() {
        let mut slider = Slider::new(0.0, -1.0..=1.0, 0.25);
        slider.nudge(2);
        assert_eq!(slider.value(), 0.5);
        slider.nudge(-1);
        assert_eq!(slider.value(), 0.25);
        slider.nudge(100);
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn components_are_independent() {
        let mut panel = ControlPanel::new(Complex::ZERO);
        panel.imaginary.set(0.75);
        assert_eq!(panel.constant(), Complex::new(0.0, 0.75));
    }
}
