// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire timestamp parsing with explicit invalid-instant handling.
//!
//! The apply service reports ISO-8601 strings. A malformed snapshot can
//! carry garbage (or nothing) where a timestamp is required; callers must
//! render that as "unknown", so the parsed form keeps an explicit
//! [`Timestamp::Invalid`] state instead of failing the whole snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed wire timestamp.
///
/// Ordering comparisons involving [`Timestamp::Invalid`] are never
/// "strictly before" anything, which is what phase attribution relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timestamp {
    Valid(DateTime<Utc>),
    Invalid,
}

impl Timestamp {
    /// Parse an ISO-8601 string; anything unparseable maps to `Invalid`.
    pub fn parse(s: &str) -> Timestamp {
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Timestamp::Valid(dt.with_timezone(&Utc)),
            Err(_) => Timestamp::Invalid,
        }
    }

    /// Parse an optional wire field: absent stays absent, present parses
    /// leniently (present-but-garbage becomes `Some(Invalid)`).
    pub fn parse_opt(s: Option<&str>) -> Option<Timestamp> {
        s.map(Timestamp::parse)
    }

    /// Parse a required wire field: absent or garbage becomes `Invalid`.
    pub fn parse_required(s: Option<&str>) -> Timestamp {
        s.map_or(Timestamp::Invalid, Timestamp::parse)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Timestamp::Valid(_))
    }

    /// The instant, if this timestamp is valid.
    pub fn as_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Valid(dt) => Some(*dt),
            Timestamp::Invalid => None,
        }
    }

    /// Strict ordering test. False whenever either side is invalid, so an
    /// unprovable ordering never counts as "before".
    pub fn strictly_before(&self, other: Timestamp) -> bool {
        match (self, other) {
            (Timestamp::Valid(a), Timestamp::Valid(b)) => *a < b,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
