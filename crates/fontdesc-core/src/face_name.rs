//! Bounded face name storage
//!
//! Face names are limited by the platform's fixed-size face name buffer,
//! which is counted in UTF-16 code units. `FaceName` enforces that limit at
//! construction so a descriptor can never hold a name the rendering engine
//! would have to cut down itself.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::constants::MAX_FACE_NAME_UNITS;
use crate::error::{FontInfoError, FontInfoResult};

/// What to do with a face name that does not fit the buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FaceNamePolicy {
    /// Fail construction with `FaceNameTooLong` or `EmbeddedNul`
    #[default]
    Reject,
    /// Cut at the first NUL, then keep the longest grapheme-aligned prefix that fits
    Truncate,
}

/// A face name of at most `FaceName::CAPACITY` UTF-16 code units
///
/// Comparison is exact and case-sensitive. An empty face name is valid and is
/// part of the default raster font sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FaceName(String);

impl FaceName {
    /// Maximum length in UTF-16 code units
    pub const CAPACITY: usize = MAX_FACE_NAME_UNITS;

    pub const EMPTY: FaceName = FaceName(String::new());

    /// Build a face name, applying `policy` when `name` does not fit
    pub fn new(name: &str, policy: FaceNamePolicy) -> FontInfoResult<Self> {
        match policy {
            FaceNamePolicy::Reject => Self::checked(name),
            FaceNamePolicy::Truncate => Ok(Self::truncated(name)),
        }
    }

    /// Build a face name, failing if it contains NUL or exceeds the capacity
    pub fn checked(name: &str) -> FontInfoResult<Self> {
        if name.contains('\0') {
            return Err(FontInfoError::EmbeddedNul { name: name.to_string() });
        }

        let len = utf16_len(name);
        if len > Self::CAPACITY {
            return Err(FontInfoError::FaceNameTooLong {
                name: name.to_string(),
                len,
                capacity: Self::CAPACITY,
            });
        }

        Ok(Self(name.to_string()))
    }

    /// Build a face name, silently shortening it to fit
    pub fn truncated(name: &str) -> Self {
        Self::fit(name).0
    }

    /// Shorten `name` to fit and report whether anything was dropped
    pub(crate) fn fit(name: &str) -> (Self, bool) {
        let terminated = match name.find('\0') {
            Some(nul) => &name[..nul],
            None => name,
        };

        let mut units = 0;
        let mut end = 0;
        for (offset, grapheme) in terminated.grapheme_indices(true) {
            let cost = utf16_len(grapheme);
            if units + cost > Self::CAPACITY {
                break;
            }
            units += cost;
            end = offset + grapheme.len();
        }

        (Self(terminated[..end].to_string()), end != name.len())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in UTF-16 code units, the unit the capacity is expressed in
    pub fn len_utf16(&self) -> usize {
        utf16_len(&self.0)
    }
}

fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

impl fmt::Display for FaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FaceName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FaceName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
