//! Pole set and the effective-pole normalizer
//!
//! Poles carry an identifier chosen by the caller; the kernel never mints or
//! renumbers identifiers. When real-valued output is requested the
//! normalizer closes the set under complex conjugation by appending a
//! synthetic companion for every non-real pole.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::POLE_CLAMP_MAGNITUDE;
use crate::error::{AllpassError, Result};
use crate::math::conversions::magdeg_2_reim;

/// Opaque pole identifier supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoleId(pub u64);

impl std::fmt::Display for PoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-placed pole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pole {
    pub id: PoleId,
    #[serde(rename = "pos", with = "position_serde")]
    pub position: Complex64,
}

impl Pole {
    pub fn new(id: PoleId, position: Complex64) -> Self {
        Self { id, position }
    }

    /// Create a pole from magnitude and angle in degrees
    pub fn from_polar(id: PoleId, magnitude: f64, angle_deg: f64) -> Self {
        Self::new(id, magdeg_2_reim(magnitude, angle_deg))
    }

    /// Magnitude |p|
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.position.norm()
    }

    /// Angle in degrees
    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.position.arg().to_degrees()
    }

    #[inline]
    pub fn is_real(&self) -> bool {
        self.position.im == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.re.is_finite() && self.position.im.is_finite()
    }

    /// Rescale a pole on or outside the unit circle back inside it
    ///
    /// Poles with |p| >= 1 are moved radially to |p| = 0.9999; poles already
    /// inside the disc are returned unchanged.
    pub fn clamped(self) -> Self {
        let mag = self.magnitude();
        if mag < 1.0 {
            return self;
        }
        tracing::warn!(id = %self.id, magnitude = mag, "clamping pole into unit disc");
        Self {
            id: self.id,
            position: self.position * (POLE_CLAMP_MAGNITUDE / mag),
        }
    }
}

/// Where an effective pole came from
///
/// Indices refer to the caller's pole list, so no identifier is needed to
/// trace a synthetic companion back to its original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoleSource {
    /// The caller's pole at this index
    User(usize),
    /// Synthetic conjugate companion of the caller's pole at this index
    Conjugate(usize),
}

impl PoleSource {
    /// Index of the caller's pole this entry derives from
    #[inline]
    pub fn index(&self) -> usize {
        match *self {
            PoleSource::User(i) | PoleSource::Conjugate(i) => i,
        }
    }
}

/// A pole of the effective set used by every downstream stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivePole {
    pub position: Complex64,
    pub source: PoleSource,
}

impl EffectivePole {
    /// True for companions added by real-output enforcement
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        matches!(self.source, PoleSource::Conjugate(_))
    }
}

/// Close a list of pole positions under conjugation
///
/// With `enforce_real_output` false the positions are returned unchanged.
/// Otherwise the conjugate of every pole with a nonzero imaginary part is
/// appended after the originals; real poles are self-conjugate and are not
/// duplicated.
pub fn effective_positions(poles: &[Complex64], enforce_real_output: bool) -> Vec<Complex64> {
    effective_poles(poles, enforce_real_output)
        .into_iter()
        .map(|p| p.position)
        .collect()
}

/// Effective poles with provenance
///
/// Same ordering as [`effective_positions`]: caller poles first, then the
/// conjugate companions in the order of their originals.
pub fn effective_poles(poles: &[Complex64], enforce_real_output: bool) -> Vec<EffectivePole> {
    let mut effective: Vec<EffectivePole> = poles
        .iter()
        .enumerate()
        .map(|(i, &position)| EffectivePole {
            position,
            source: PoleSource::User(i),
        })
        .collect();

    if enforce_real_output {
        effective.extend(
            poles
                .iter()
                .enumerate()
                .filter(|(_, p)| p.im != 0.0)
                .map(|(i, p)| EffectivePole {
                    position: p.conj(),
                    source: PoleSource::Conjugate(i),
                }),
        );
    }

    effective
}

/// Check every position is finite and strictly inside the unit disc
pub fn validate_positions(positions: &[Complex64]) -> Result<()> {
    for (index, p) in positions.iter().enumerate() {
        if !(p.re.is_finite() && p.im.is_finite()) {
            return Err(AllpassError::Validation {
                what: "pole",
                index,
            });
        }
        let magnitude = p.norm();
        if magnitude >= 1.0 {
            return Err(AllpassError::PoleOutsideUnitDisc { index, magnitude });
        }
    }
    Ok(())
}

/// An ordered set of user poles with unique ids
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoleSet {
    poles: Vec<Pole>,
}

impl PoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from caller poles, rejecting repeated ids
    pub fn from_poles(poles: Vec<Pole>) -> Result<Self> {
        let set = Self { poles };
        set.check_unique_ids()?;
        Ok(set)
    }

    /// Append a pole; fails if its id is already taken
    pub fn push(&mut self, pole: Pole) -> Result<()> {
        if self.get(pole.id).is_some() {
            return Err(AllpassError::DuplicatePoleId { id: pole.id });
        }
        self.poles.push(pole);
        Ok(())
    }

    /// Remove the pole with `id`, returning it if present
    pub fn remove(&mut self, id: PoleId) -> Option<Pole> {
        let idx = self.poles.iter().position(|p| p.id == id)?;
        Some(self.poles.remove(idx))
    }

    /// Move the pole with `id`; returns false if no such pole exists
    pub fn update(&mut self, id: PoleId, position: Complex64) -> bool {
        match self.poles.iter_mut().find(|p| p.id == id) {
            Some(pole) => {
                pole.position = position;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: PoleId) -> Option<&Pole> {
        self.poles.iter().find(|p| p.id == id)
    }

    /// Id of the pole an effective pole derives from
    pub fn source_id(&self, source: PoleSource) -> Option<PoleId> {
        self.poles.get(source.index()).map(|p| p.id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.poles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pole> + '_ {
        self.poles.iter()
    }

    pub fn as_slice(&self) -> &[Pole] {
        &self.poles
    }

    /// Pole positions in set order
    pub fn positions(&self) -> Vec<Complex64> {
        self.poles.iter().map(|p| p.position).collect()
    }

    /// Copy of the set with every pole clamped into the unit disc
    pub fn clamped(&self) -> Self {
        Self {
            poles: self.poles.iter().map(|p| p.clamped()).collect(),
        }
    }

    /// Fail on the first id that appears twice
    pub fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.poles.len());
        match self.poles.iter().find(|p| !seen.insert(p.id)) {
            Some(p) => Err(AllpassError::DuplicatePoleId { id: p.id }),
            None => Ok(()),
        }
    }

    /// Check ids are unique and every pole is finite and inside the unit disc
    pub fn validate(&self) -> Result<()> {
        self.check_unique_ids()?;
        validate_positions(&self.positions())
    }

    /// Effective poles with provenance, see [`effective_poles`]
    pub fn effective_poles(&self, enforce_real_output: bool) -> Vec<EffectivePole> {
        effective_poles(&self.positions(), enforce_real_output)
    }
}

/// Serializes a pole position as `{ "real": .., "imag": .. }`
mod position_serde {
    use num_complex::Complex64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Position {
        real: f64,
        imag: f64,
    }

    pub fn serialize<S: Serializer>(p: &Complex64, serializer: S) -> Result<S::Ok, S::Error> {
        Position {
            real: p.re,
            imag: p.im,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Complex64, D::Error> {
        let p = Position::deserialize(deserializer)?;
        Ok(Complex64::new(p.real, p.imag))
    }
}
