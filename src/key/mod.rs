// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use semval::prelude::*;
use strum::IntoEnumIterator as _;

use crate::{Error, Result, notation::Notation};

/// Number of slots on the harmonic-mixing wheel, one per key.
pub const WHEEL_SLOT_COUNT: usize = 24;

/// Number of hours on the wheel, each pairing a relative major and
/// minor key.
pub const WHEEL_HOUR_COUNT: u8 = 12;

const NOTATION_COUNT: usize = <Notation as strum::EnumCount>::COUNT;

/// A signed number of perfect-fifth steps around the wheel.
pub type StepValue = i8;

///////////////////////////////////////////////////////////////////////
// WheelPosition
///////////////////////////////////////////////////////////////////////

pub type WheelPositionValue = u8;

/// A slot on the harmonic-mixing wheel.
///
/// Slots are numbered clock-wise around the Circle of Fifths. Adjacent
/// wheel hours are a perfect fifth apart, i.e. two slots per hour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(transparent)]
pub struct WheelPosition(WheelPositionValue);

impl WheelPosition {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(WHEEL_SLOT_COUNT as WheelPositionValue - 1);

    #[must_use]
    pub const fn new(value: WheelPositionValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> WheelPositionValue {
        let Self(value) = self;
        value
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }

    /// The scale of the key at this slot.
    ///
    /// The parity rule follows from how the notation tables interleave
    /// their entries: minor keys occupy even, major keys odd slots. A
    /// notation table that breaks this ordering would break this method.
    #[must_use]
    pub const fn mode(self) -> KeyMode {
        if self.value() % 2 == 0 {
            KeyMode::Minor
        } else {
            KeyMode::Major
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum WheelPositionInvalidity {
    OutOfRange,
}

impl Validate for WheelPosition {
    type Invalidity = WheelPositionInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                !(*self >= Self::MIN && *self <= Self::MAX),
                Self::Invalidity::OutOfRange,
            )
            .into()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyMode {
    Major,
    Minor,
}

///////////////////////////////////////////////////////////////////////
// Config
///////////////////////////////////////////////////////////////////////

/// Configuration of a [`KeyIndex`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields, default)
)]
pub struct Config {
    /// Restricts lookup to the spellings of a single notation.
    ///
    /// `None` infers the notation from each key.
    pub notation: Option<Notation>,

    /// Render wheel hours 1-9 with a leading zero, e.g. "01A" instead
    /// of "1A".
    ///
    /// Purely cosmetic and only effective for notations that spell keys
    /// as wheel hours.
    pub leading_zero: bool,
}

///////////////////////////////////////////////////////////////////////
// KeyIndex
///////////////////////////////////////////////////////////////////////

/// Bidirectional mapping between key spellings and wheel slots.
///
/// All tables are built once at construction and never mutated
/// afterwards. The only mutable state is the configuration, which can
/// be replaced wholesale with [`KeyIndex::set_config`].
#[derive(Clone, Debug)]
pub struct KeyIndex {
    config: Config,

    /// Normalized spelling -> first declared notation containing it.
    key_to_notation: HashMap<String, Notation>,

    /// Normalized spellings per notation, aligned with the wheel slots.
    notation_to_keys: [[String; WHEEL_SLOT_COUNT]; NOTATION_COUNT],
}

impl KeyIndex {
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn new(config: Config) -> Self {
        let mut key_to_notation = HashMap::new();
        for notation in Notation::iter() {
            for key in notation.keys() {
                // First declared notation wins on shared spellings.
                key_to_notation.entry(normalize_key(key)).or_insert(notation);
            }
        }
        let notation_to_keys: [[String; WHEEL_SLOT_COUNT]; NOTATION_COUNT] = Notation::iter()
            .map(|notation| std::array::from_fn(|slot| normalize_key(notation.keys()[slot])))
            .collect::<Vec<_>>()
            .try_into()
            .expect("one table per notation");
        Self {
            config,
            key_to_notation,
            notation_to_keys,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the configuration wholesale.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Resolves a key to its wheel slot and notation.
    ///
    /// With a configured notation only spellings of that notation
    /// resolve, otherwise the notation is inferred from the key itself.
    #[must_use]
    pub fn resolve_key(&self, key: &str) -> Option<(WheelPosition, Notation)> {
        let normalized = normalize_key(key);
        let inferred = *self.key_to_notation.get(normalized.as_str())?;
        let notation = self.config.notation.unwrap_or(inferred);
        let slot = self.notation_to_keys[notation as usize]
            .iter()
            .position(|spelling| *spelling == normalized)?;
        let position = WheelPosition::new(slot as WheelPositionValue);
        position.is_valid().then_some((position, notation))
    }

    #[must_use]
    pub fn is_valid_key(&self, key: &str) -> bool {
        self.resolve_key(key).is_some()
    }

    /// Whether a tag names one of the supported notations.
    #[must_use]
    pub fn is_supported_notation(tag: &str) -> bool {
        Notation::try_from_tag(tag).is_some()
    }

    /// Transposes a key by the given number of perfect-fifth steps,
    /// optionally toggling between the relative major and minor key
    /// before stepping.
    ///
    /// The result is spelled in the notation the key resolved to.
    pub fn calculate_key(&self, key: &str, step: StepValue, toggle_scale: bool) -> Result<String> {
        let (position, notation) = self
            .resolve_key(key)
            .ok_or_else(|| Error::InvalidKey(key.to_owned()))?;
        if step.unsigned_abs() > WHEEL_HOUR_COUNT {
            return Err(Error::InvalidStep(step));
        }
        let transposed = transpose(position, step, toggle_scale);
        Ok(self.render(notation, transposed))
    }

    /// Respells a key in another notation.
    pub fn convert_key_to_notation(&self, key: &str, notation: Notation) -> Result<String> {
        let (position, _) = self
            .resolve_key(key)
            .ok_or_else(|| Error::InvalidKey(key.to_owned()))?;
        Ok(self.render(notation, position))
    }

    /// The scale of a key.
    pub fn mode(&self, key: &str) -> Result<KeyMode> {
        let (position, _) = self
            .resolve_key(key)
            .ok_or_else(|| Error::InvalidKey(key.to_owned()))?;
        Ok(position.mode())
    }

    pub fn is_major_key(&self, key: &str) -> Result<bool> {
        self.mode(key).map(|mode| mode == KeyMode::Major)
    }

    pub fn is_minor_key(&self, key: &str) -> Result<bool> {
        self.mode(key).map(|mode| mode == KeyMode::Minor)
    }

    pub fn no_change(&self, key: &str) -> Result<String> {
        self.calculate_key(key, 0, false)
    }

    /// One wheel hour counter-clockwise.
    pub fn perfect_fourth(&self, key: &str) -> Result<String> {
        self.calculate_key(key, -1, false)
    }

    /// One wheel hour clockwise.
    pub fn perfect_fifth(&self, key: &str) -> Result<String> {
        self.calculate_key(key, 1, false)
    }

    /// The relative major/minor key at the same wheel hour.
    pub fn relative_minor_to_major(&self, key: &str) -> Result<String> {
        self.calculate_key(key, 0, true)
    }

    pub fn minor_to_major(&self, key: &str) -> Result<String> {
        self.calculate_key(key, 3, true)
    }

    pub fn minor_third(&self, key: &str) -> Result<String> {
        self.calculate_key(key, -3, false)
    }

    pub fn half_step(&self, key: &str) -> Result<String> {
        self.calculate_key(key, 7, false)
    }

    pub fn whole_step(&self, key: &str) -> Result<String> {
        self.calculate_key(key, 2, false)
    }

    /// The dominant relative of a key.
    ///
    /// Steps towards the dominant of the opposite scale, i.e. the
    /// direction depends on the scale of the key itself.
    pub fn dominant_relative(&self, key: &str) -> Result<String> {
        let step = if self.is_major_key(key)? { -1 } else { 1 };
        self.calculate_key(key, step, true)
    }

    fn render(&self, notation: Notation, position: WheelPosition) -> String {
        let spelling = notation.keys()[usize::from(position.value())];
        if self.config.leading_zero
            && notation.has_wheel_hours()
            && let Some(hour) = wheel_hour(spelling)
            && hour < 10
        {
            return format!("0{spelling}");
        }
        spelling.to_owned()
    }
}

impl Default for KeyIndex {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn transpose(position: WheelPosition, step: StepValue, toggle_scale: bool) -> WheelPosition {
    let mut slot = usize::from(position.value());
    if toggle_scale {
        // Swap relative major/minor at the same wheel hour.
        slot = if slot % 2 == 0 { slot + 1 } else { slot - 1 };
    }
    // Fold non-positive steps into their positive modular equivalent
    // instead of relying on the sign semantics of `%`.
    let delta = if step > 0 {
        2 * usize::from(step.unsigned_abs())
    } else {
        WHEEL_SLOT_COUNT - 2 * usize::from(step.unsigned_abs())
    };
    WheelPosition::new(((delta + slot) % WHEEL_SLOT_COUNT) as WheelPositionValue)
}

/// Normalizes a raw key spelling for table lookup.
///
/// Lower-cased with leading zeros stripped, so that "01A" and "1A"
/// address the same table entry.
fn normalize_key(key: &str) -> String {
    let lowercase = key.to_lowercase();
    lowercase.trim_start_matches('0').to_owned()
}

/// The numeric hour of a wheel spelling like "10A" or "6M".
fn wheel_hour(spelling: &str) -> Option<u8> {
    spelling
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .parse()
        .ok()
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
