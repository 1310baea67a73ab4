// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashSet;

use strum::IntoEnumIterator as _;

use super::*;

#[test]
fn tag_round_trip() {
    for notation in Notation::iter() {
        assert_eq!(Some(notation), Notation::try_from_tag(notation.tag()));
        assert_eq!(Ok(notation), from_tag(notation.tag()));
    }
}

#[test]
fn expected_tags() {
    assert_eq!("camelot_key", Notation::CamelotKey.tag());
    assert_eq!("open_key", Notation::OpenKey.tag());
    assert_eq!("musical", Notation::Musical.tag());
    assert_eq!("musical_alt", Notation::MusicalAlt.tag());
    assert_eq!("musical_beatport", Notation::MusicalBeatport.tag());
    assert_eq!("musical_essentia", Notation::MusicalEssentia.tag());
}

#[test]
fn display_matches_tag() {
    for notation in Notation::iter() {
        assert_eq!(notation.tag(), notation.to_string());
    }
}

#[test]
fn from_tag_rejects_unknown_tags() {
    assert_eq!(Err(Error::UnsupportedNotation(String::new())), from_tag(""));
    assert_eq!(
        Err(Error::UnsupportedNotation("bogus".to_owned())),
        from_tag("bogus")
    );
    // Tags are case-sensitive.
    assert!(from_tag("CAMELOT_KEY").is_err());
    assert!(from_tag("Camelot Key").is_err());
}

#[test]
fn each_notation_spells_every_wheel_slot_uniquely() {
    for notation in Notation::iter() {
        let mut distinct = HashSet::new();
        for spelling in notation.keys() {
            assert!(!spelling.is_empty());
            assert!(distinct.insert(spelling.to_lowercase()));
        }
        assert_eq!(WHEEL_SLOT_COUNT, distinct.len());
    }
}

#[test]
fn only_wheel_notations_spell_hours() {
    assert!(Notation::CamelotKey.has_wheel_hours());
    assert!(Notation::OpenKey.has_wheel_hours());
    assert!(!Notation::Musical.has_wheel_hours());
    assert!(!Notation::MusicalAlt.has_wheel_hours());
    assert!(!Notation::MusicalBeatport.has_wheel_hours());
    assert!(!Notation::MusicalEssentia.has_wheel_hours());
}
