//! Decay curves for cross-fades
//!
//! A decay curve maps a fade step to a pair of weights: how much of the
//! frame being faded out and how much of the target frame make up the
//! blended output at that step.

use crate::color::Rgb;
use crate::math8::blend_weighted;

const CURVE_NAME_NONE: &str = "none";
const CURVE_NAME_LINEAR: &str = "linear";
const CURVE_NAME_LOGARITHMIC: &str = "logarithmic";

const CURVE_ID_NONE: i32 = -1;
const CURVE_ID_LINEAR: i32 = 0;
const CURVE_ID_LOGARITHMIC: i32 = 1;

/// Weighting function applied over the steps of a fade
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(i8)]
pub enum DecayCurve {
    /// Show the target frame right away on every step.
    ///
    /// The fade still takes the full number of steps and delays.
    NoDecay = -1,
    /// Weights change linearly from the start frame to the target frame
    Linear = 0,
    /// Weights follow `log_n(step)` where `n` is the step count.
    ///
    /// Perceived brightness is roughly logarithmic, so this looks smoother
    /// than a linear fade.
    #[default]
    Logarithmic = 1,
}

/// Weights of a single fade step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayWeights {
    /// Weight of the frame being faded out
    pub previous: f32,
    /// Weight of the target frame
    pub current: f32,
    /// Divisor of the weighted sum
    pub total: f32,
}

impl DecayWeights {
    /// Weights that reproduce the target frame exactly
    pub const TARGET: Self = Self {
        previous: 0.0,
        current: 1.0,
        total: 1.0,
    };

    /// Blend one color of the start frame with one color of the target frame
    pub fn blend(self, start: Rgb, target: Rgb) -> Rgb {
        Rgb {
            r: self.blend8(start.r, target.r),
            g: self.blend8(start.g, target.g),
            b: self.blend8(start.b, target.b),
        }
    }

    /// Blend a single channel value
    pub fn blend8(self, start: u8, target: u8) -> u8 {
        blend_weighted(start, target, self.previous, self.current, self.total)
    }
}

impl DecayCurve {
    /// Decode a raw curve id.
    ///
    /// Unknown ids fall back to [`DecayCurve::Logarithmic`].
    pub const fn from_raw(value: i32) -> Self {
        match value {
            CURVE_ID_NONE => Self::NoDecay,
            CURVE_ID_LINEAR => Self::Linear,
            CURVE_ID_LOGARITHMIC => Self::Logarithmic,
            _ => Self::Logarithmic,
        }
    }

    /// Raw curve id, the inverse of [`DecayCurve::from_raw`]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Stable name of the curve
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoDecay => CURVE_NAME_NONE,
            Self::Linear => CURVE_NAME_LINEAR,
            Self::Logarithmic => CURVE_NAME_LOGARITHMIC,
        }
    }

    /// Look up a curve by its [`DecayCurve::as_str`] name
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            CURVE_NAME_NONE => Some(Self::NoDecay),
            CURVE_NAME_LINEAR => Some(Self::Linear),
            CURVE_NAME_LOGARITHMIC => Some(Self::Logarithmic),
            _ => None,
        }
    }

    /// Compute the weights of `step` out of `total_steps`.
    ///
    /// `step` is 1-based and is clamped to `1..=total_steps`. With one step
    /// or fewer every curve collapses to [`DecayWeights::TARGET`], since the
    /// linear and logarithmic divisors are zero there.
    #[allow(clippy::cast_precision_loss)]
    pub fn weights(self, step: i32, total_steps: i32) -> DecayWeights {
        if total_steps <= 1 {
            return DecayWeights::TARGET;
        }
        let step = step.clamp(1, total_steps);

        match self {
            Self::NoDecay => DecayWeights::TARGET,
            Self::Linear => DecayWeights {
                previous: 100.0 * (total_steps - step) as f32,
                current: 100.0 * (step - 1) as f32,
                total: 100.0 * (total_steps - 1) as f32,
            },
            Self::Logarithmic => {
                let log_base = libm::logf(total_steps as f32);
                let current =
                    100.0 - 100.0 * libm::logf((total_steps - step + 1) as f32) / log_base;
                let previous = 100.0 - 100.0 * libm::logf(step as f32) / log_base;
                DecayWeights {
                    previous,
                    current,
                    total: current + previous,
                }
            }
        }
    }
}
