//! Random body generation
//!
//! Every component is drawn independently from its own uniform range:
//! mass, radius, then position x/y/z, then velocity x/y/z.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::simulation::states::{Body, NVec3};

/// Half-open uniform range `[lower, upper)`; a degenerate range yields `lower`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRange {
    pub lower: f64,
    pub upper: f64,
}

impl UniformRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Reject reversed or non-finite bounds and widths; `field` names the range in the error.
    pub fn validate(&self, field: &'static str) -> Result<()> {
        let width = self.upper - self.lower;
        if !self.lower.is_finite() || !self.upper.is_finite() || !width.is_finite() || self.lower > self.upper {
            return Err(Error::InvalidRange {
                field,
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.lower == self.upper {
            return self.lower;
        }
        rng.random_range(self.lower..self.upper)
    }

    fn sample_vec<R: Rng + ?Sized>(&self, rng: &mut R) -> NVec3 {
        let x = self.sample(rng);
        let y = self.sample(rng);
        let z = self.sample(rng);
        NVec3::new(x, y, z)
    }
}

impl Default for UniformRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Sampling ranges for every body component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyRanges {
    pub mass: UniformRange,
    pub radius: UniformRange,
    pub position: UniformRange, // per axis
    pub velocity: UniformRange, // per axis
}

impl BodyRanges {
    pub fn validate(&self) -> Result<()> {
        self.mass.validate("mass")?;
        self.radius.validate("radius")?;
        self.position.validate("position")?;
        self.velocity.validate("velocity")?;
        Ok(())
    }
}

/// Produces bodies from [`BodyRanges`] with a single seeded generator.
pub struct RandomBodyFactory {
    ranges: BodyRanges,
    rng: StdRng,
}

impl RandomBodyFactory {
    /// `seed = None` draws the seed from OS entropy.
    pub fn new(ranges: BodyRanges, seed: Option<u64>) -> Result<Self> {
        ranges.validate()?;

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { ranges, rng })
    }

    pub fn ranges(&self) -> &BodyRanges {
        &self.ranges
    }

    pub fn create(&mut self) -> Body {
        let m = self.ranges.mass.sample(&mut self.rng);
        let radius = self.ranges.radius.sample(&mut self.rng);
        let x = self.ranges.position.sample_vec(&mut self.rng);
        let v = self.ranges.velocity.sample_vec(&mut self.rng);
        Body { x, v, m, radius }
    }

    /// `n` fresh bodies in creation order
    pub fn populate(&mut self, n: usize) -> Vec<Body> {
        (0..n).map(|_| self.create()).collect()
    }
}
