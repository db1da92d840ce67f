// Copyright (c) 2016-2020 Fabian Schuiki

//! Name codes, the lightweight tags the registry assigns to every standard
//! name.

use crate::registry::get_registry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A name code is a lightweight 32 bit tag that refers to a standard name,
/// such as a keyword, an operator, an attribute or a directive. Codes are
/// pinned: external consumers store them, so a name keeps its code across
/// releases. Codes 1 to 256 are reserved for the character names, the first
/// substantive name has code 257.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameCode(pub u32);

impl NameCode {
    /// Obtain the code of the character name for byte `c`.
    pub const fn from_char(c: u8) -> NameCode {
        NameCode(c as u32 + 1)
    }

    /// Check if this code refers to a character name.
    pub const fn is_char(self) -> bool {
        self.0 >= 1 && self.0 <= 256
    }

    /// Obtain the byte this code names, if it is a character name.
    pub fn as_char(self) -> Option<u8> {
        if self.is_char() {
            Some((self.0 - 1) as u8)
        } else {
            None
        }
    }

    /// Check if this code lies within `first..=last`.
    pub const fn is_in(self, first: NameCode, last: NameCode) -> bool {
        first.0 <= self.0 && self.0 <= last.0
    }

    /// Return the symbolic name of this code, as recorded in the global
    /// registry. Markers and unassigned codes have no name.
    pub fn name(self) -> Option<&'static str> {
        get_registry().name_of(self)
    }
}

impl From<NameCode> for u32 {
    fn from(code: NameCode) -> u32 {
        code.0
    }
}

impl fmt::Debug for NameCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NameCode({})", self.0)
    }
}

impl fmt::Display for NameCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
