use crate::{ensure_interval, error::Result};

/// An implementation of an episode-decaying value
pub trait Decay {
    /// Calculate the value after `t` completed episodes
    fn evaluate(&self, t: u32) -> f32;
}

/// A constant value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: u32) -> f32 {
        self.value
    }
}

/// v(t) = max(v<sub>i</sub> * rate<sup>t</sup>, v<sub>f</sub>)
///
/// Per-episode multiplicative decay with a floor, so the value is
/// monotonically non-increasing and never falls below `vf`.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometric {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl Geometric {
    /// Initialize a geometric decay from `vi` toward the floor `vf`
    ///
    /// Errors if `rate` is outside `(0,1]`, `vi` is outside `[0,1]`, or
    /// `vf` is outside `[0,vi]`.
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self> {
        ensure_interval!(rate, > 0.0, 1.0);
        ensure_interval!(vi, 0.0, 1.0);
        ensure_interval!(vf, 0.0, vi);
        Ok(Self { rate, vi, vf })
    }
}

impl Decay for Geometric {
    fn evaluate(&self, t: u32) -> f32 {
        let &Self { rate, vi, vf } = self;
        (vi * rate.powi(t as i32)).max(vf)
    }
}
