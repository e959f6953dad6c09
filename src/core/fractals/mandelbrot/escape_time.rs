use std::ops::{Add, Mul, Sub};

/// Squared escape radius used unless configured otherwise.
pub const DEFAULT_ESCAPE_THRESHOLD: f64 = 4.0;

/// Float types the escape loop runs in. Implemented for `f32` (the shader's
/// precision) and `f64`.
pub trait KernelFloat:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    const ZERO: Self;
    const TWO: Self;
}

impl KernelFloat for f32 {
    const ZERO: Self = 0.0;
    const TWO: Self = 2.0;
}

impl KernelFloat for f64 {
    const ZERO: Self = 0.0;
    const TWO: Self = 2.0;
}

/// Iterates `z -> z² + c` from `z = 0` and returns the first iteration whose
/// squared magnitude reaches `threshold_sq`, or `max_iterations` if none
/// does. Never returns less than 1.
#[inline]
pub fn escape_time<F: KernelFloat>(re: F, im: F, max_iterations: u32, threshold_sq: F) -> u32 {
    if max_iterations <= 1 {
        return 1;
    }

    let (mut u, mut v) = (F::ZERO, F::ZERO);
    let (mut u2, mut v2) = (F::ZERO, F::ZERO);

    for k in 1..max_iterations {
        v = F::TWO * u * v + im;
        u = u2 - v2 + re;
        u2 = u * u;
        v2 = v * v;

        if u2 + v2 >= threshold_sq {
            return k;
        }
    }

    max_iterations
}
