//! Escape-time evaluation.
//!
//! `mandelbrot.wgsl#escape` is the GPU twin of this module. Both perform the
//! same `f32` operations in the same order, so for a given input they stop on
//! the same iteration.

use std::num::NonZeroU32;

use crate::complex::Complex;

pub const ESCAPE_RADIUS_SQR: f32 = 4.0;

pub fn escape_count(point: Complex, constant: Complex, max_iterations: NonZeroU32) -> u32 {
    let max_iterations = max_iterations.get();

    let mut z = point;
    let mut count = 0;
    while count < max_iterations && z.norm_sqr() <= ESCAPE_RADIUS_SQR {
        z = z.square() + constant;
        count += 1;
    }
    count
}

/// [`escape_count`] normalized to `[0, 1]`.
pub fn escape(point: Complex, constant: Complex, max_iterations: NonZeroU32) -> f32 {
    escape_count(point, constant, max_iterations) as f32 / max_iterations.get() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cap(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn origin_never_escapes() {
        for n in [1, 2, 201, 255, 1000] {
            assert_eq!(escape(Complex::ZERO, Complex::ZERO, cap(n)), 1.0);
        }
    }

    #[test]
    fn point_outside_radius_escapes_immediately() {
        let point = Complex::new(2.5, 0.0);
        assert_eq!(escape_count(point, Complex::new(0.34, -0.07), cap(255)), 0);
        assert_eq!(escape(point, Complex::ZERO, cap(255)), 0.0);
    }

    #[test]
    fn point_on_radius_iterates_once() {
        // |2|² == 4 is still inside; 2² = 4 is not.
        let point = Complex::new(2.0, 0.0);
        assert_eq!(escape_count(point, Complex::ZERO, cap(255)), 1);
    }

    #[test]
    fn classic_mandelbrot_point() {
        // c = 1: 1, 2, 5 escapes after three squarings.
        let c = Complex::new(1.0, 0.0);
        assert_eq!(escape_count(c, c, cap(201)), 2);
    }

    #[test]
    fn cap_of_one() {
        assert_eq!(escape(Complex::new(0.1, 0.1), Complex::ZERO, cap(1)), 1.0);
    }

    fn point() -> impl Strategy<Value = Complex> {
        (-3.0f32..3.0, -3.0f32..3.0).prop_map(|(real, imaginary)| Complex::new(real, imaginary))
    }

    proptest! {
        #[test]
        fn outside_radius_with_zero_constant_is_zero(
            angle in 0.0f32..std::f32::consts::TAU,
            radius in 2.01f32..100.0,
            n in 1u32..500,
        ) {
            let p = Complex::new(radius * angle.cos(), radius * angle.sin());
            prop_assume!(p.norm_sqr() > ESCAPE_RADIUS_SQR);
            prop_assert_eq!(escape(p, Complex::ZERO, cap(n)), 0.0);
        }

        #[test]
        fn deterministic(p in point(), c in point(), n in 1u32..300) {
            prop_assert_eq!(
                escape(p, c, cap(n)).to_bits(),
                escape(p, c, cap(n)).to_bits()
            );
        }

        #[test]
        fn normalized_within_unit_interval(p in point(), c in point(), n in 1u32..300) {
            let value = escape(p, c, cap(n));
            prop_assert!((0.0..=1.0).contains(&value));
        }

        #[test]
        fn raising_cap_is_monotonic(p in point(), c in point(), n in 1u32..200, extra in 0u32..200) {
            let low = escape_count(p, c, cap(n));
            let high = escape_count(p, c, cap(n + extra));
            prop_assert!(high >= low);
            if low < n {
                prop_assert_eq!(high, low);
            }
        }
    }
}
