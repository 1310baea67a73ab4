// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::result::Result as StdResult;

use thiserror::Error;

pub mod key;
pub use self::key::{Config, KeyIndex, KeyMode, StepValue, WheelPosition};

pub mod notation;
pub use self::notation::Notation;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The key does not resolve to any wheel position under the
    /// active configuration.
    #[error("invalid key specified ({0})")]
    InvalidKey(String),

    /// The number of perfect-fifth steps exceeds half the wheel.
    #[error("invalid step specified ({0})")]
    InvalidStep(StepValue),

    /// Not one of the supported notations.
    #[error("invalid notation specified ({0})")]
    UnsupportedNotation(String),
}

pub type Result<T> = StdResult<T, Error>;

pub mod prelude {
    pub use super::{Config, Error, KeyIndex, KeyMode, Notation, Result, WheelPosition};
}
