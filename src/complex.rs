use std::ops::Add;

use bytemuck::{Pod, Zeroable};

/// A point on the complex plane.
///
/// Laid out as `vec2<f32>` so it can be copied straight into a uniform buffer.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f32,
    pub imaginary: f32,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub const fn new(real: f32, imaginary: f32) -> Self {
        Self { real, imaginary }
    }

    /// `|z|²`, summed in the same order as the shader.
    pub fn norm_sqr(self) -> f32 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imaginary * self.imaginary,
            imaginary: 2.0 * self.real * self.imaginary,
        }
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.real, self.imaginary]
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            real: self.real + rhs.real,
            imaginary: self.imaginary + rhs.imaginary,
        }
    }
}
