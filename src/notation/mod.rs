// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::str::FromStr as _;

use crate::{Error, Result, key::WHEEL_SLOT_COUNT};

/// A key spelling system.
///
/// The declaration order is significant: when the notation of a key is
/// inferred rather than configured, a spelling that occurs in more than
/// one notation resolves to the first declared notation that contains it.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Notation {
    /// Camelot wheel, number 1-12 plus A (minor) or B (major)
    CamelotKey,

    /// Open Key, number 1-12 plus M ("moll" = minor) or D ("dur" = major)
    OpenKey,

    /// Standard musical names with flat accidentals
    Musical,

    /// Musical names preferring sharp accidentals
    MusicalAlt,

    /// Musical names as used by the Beatport store
    MusicalBeatport,

    /// Musical names as reported by the Essentia analyzer
    MusicalEssentia,
}

pub const CAMELOT_KEYS: [&str; WHEEL_SLOT_COUNT] = [
    "1A", "1B", "2A", "2B", "3A", "3B", "4A", "4B", //
    "5A", "5B", "6A", "6B", "7A", "7B", "8A", "8B", //
    "9A", "9B", "10A", "10B", "11A", "11B", "12A", "12B",
];

pub const OPEN_KEY_KEYS: [&str; WHEEL_SLOT_COUNT] = [
    "6M", "6D", "7M", "7D", "8M", "8D", "9M", "9D", //
    "10M", "10D", "11M", "11D", "12M", "12D", "1M", "1D", //
    "2M", "2D", "3M", "3D", "4M", "4D", "5M", "5D",
];

pub const MUSICAL_KEYS: [&str; WHEEL_SLOT_COUNT] = [
    "Abm", "B", "Ebm", "Gb", "Bbm", "Db", "Fm", "Ab", //
    "Cm", "Eb", "Gm", "Bb", "Dm", "F", "Am", "C", //
    "Em", "G", "Bm", "D", "Gbm", "A", "Dbm", "E",
];

pub const MUSICAL_ALT_KEYS: [&str; WHEEL_SLOT_COUNT] = [
    "G#m", "B", "Ebm", "F#", "A#m", "Db", "Fm", "G#", //
    "Cm", "D#", "Gm", "Bb", "Dm", "F", "Am", "C", //
    "Em", "G", "Bm", "D", "F#m", "A", "C#m", "E",
];

pub const MUSICAL_BEATPORT_KEYS: [&str; WHEEL_SLOT_COUNT] = [
    "G#m", "Bmaj", "Ebm", "Gb", "Bbm", "Db", "Fmin", "Ab", //
    "Cmin", "Eb", "Gmin", "Bb", "Dmin", "Fmaj", "Amin", "Cmaj", //
    "Emin", "Gmaj", "Bmin", "Dmaj", "F#m", "Amaj", "C#m", "Emaj",
];

pub const MUSICAL_ESSENTIA_KEYS: [&str; WHEEL_SLOT_COUNT] = [
    "Ab minor",
    "B major",
    "Eb minor",
    "F# major",
    "Bb minor",
    "C# major",
    "F minor",
    "Ab major",
    "C minor",
    "Eb major",
    "G minor",
    "Bb major",
    "D minor",
    "F major",
    "A minor",
    "C major",
    "E minor",
    "G major",
    "B minor",
    "D major",
    "F# minor",
    "A major",
    "C# minor",
    "E major",
];

impl Notation {
    /// The spellings of this notation, ordered by wheel position.
    #[must_use]
    pub const fn keys(self) -> &'static [&'static str; WHEEL_SLOT_COUNT] {
        match self {
            Self::CamelotKey => &CAMELOT_KEYS,
            Self::OpenKey => &OPEN_KEY_KEYS,
            Self::Musical => &MUSICAL_KEYS,
            Self::MusicalAlt => &MUSICAL_ALT_KEYS,
            Self::MusicalBeatport => &MUSICAL_BEATPORT_KEYS,
            Self::MusicalEssentia => &MUSICAL_ESSENTIA_KEYS,
        }
    }

    /// Whether keys are spelled as a wheel hour 1-12 with a letter suffix.
    ///
    /// Only these spellings are subject to the leading-zero rendering
    /// option.
    #[must_use]
    pub const fn has_wheel_hours(self) -> bool {
        matches!(self, Self::CamelotKey | Self::OpenKey)
    }

    /// The symbolic, lower-case tag of this notation.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn try_from_tag(tag: &str) -> Option<Self> {
        Self::from_str(tag).ok()
    }
}

/// Looks up a notation by its symbolic tag.
///
/// There is no tag for "determined by key": an empty tag fails like any
/// other unknown tag.
pub fn from_tag(tag: &str) -> Result<Notation> {
    Notation::try_from_tag(tag).ok_or_else(|| Error::UnsupportedNotation(tag.to_owned()))
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
