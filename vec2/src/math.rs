//! Numeric precision policies.
//!
//! Norms, normalization and angles are generic over a [`Math`] policy so
//! callers can trade accuracy for speed. [`Fast`] is the default everywhere a
//! policy is not given explicitly.

use micromath::F32Ext;

pub trait Math {
    fn sqrtf(val: f32) -> f32;
    fn acosf(val: f32) -> f32;

    fn inv_sqrtf(val: f32) -> f32 {
        1.0 / Self::sqrtf(val)
    }
}

/// Real-time approximations backed by `micromath`.
///
/// `sqrtf` refines micromath's bit-level estimate with one Newton step, which
/// keeps the relative error below 0.2% over all finite non-negative inputs.
/// Subnormal inputs are scaled into the normal range first, where the bit
/// estimate holds. `acosf` is micromath's `acos` and stays within 0.03 rad of
/// the exact value on `[-1, 1]`. Use [`Exact`] where that is not enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fast;

impl Math for Fast {
    fn sqrtf(val: f32) -> f32 {
        if val > 0.0 && val < f32::MIN_POSITIVE {
            // 2^24 lifts every subnormal into the normal range.
            Self::sqrtf(val * 16_777_216.0) * (1.0 / 4096.0)
        } else if val > 0.0 {
            let estimate = F32Ext::sqrt(val);
            0.5 * (estimate + val / estimate)
        } else if val == 0.0 {
            val
        } else {
            f32::NAN
        }
    }

    fn acosf(val: f32) -> f32 {
        F32Ext::acos(val)
    }
}

/// Correctly rounded functions from `num-traits` (`libm` when `no_std`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl Math for Exact {
    fn sqrtf(val: f32) -> f32 {
        num_traits::Float::sqrt(val)
    }

    fn acosf(val: f32) -> f32 {
        num_traits::Float::acos(val)
    }
}
