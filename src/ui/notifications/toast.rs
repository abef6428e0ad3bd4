// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.

use crate::domain::toast::{Category, DismissAfter};
use chrono::Utc;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Length of the random part of a [`ToastId`].
const SUFFIX_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Unique identifier for a toast.
///
/// Epoch milliseconds followed by a random base-36 suffix, so ids minted in
/// the same millisecond still differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    /// Mints a new identifier from the wall clock and the thread RNG.
    #[must_use]
    pub fn generate() -> Self {
        Self::from_parts(Utc::now().timestamp_millis(), &mut rand::rng())
    }

    fn from_parts<R: Rng>(millis: i64, rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
            .collect();
        Self(format!("{millis}-{suffix}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the epoch milliseconds the id was minted at.
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.split_once('-')?.0.parse().ok()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a string is not a well-formed [`ToastId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseToastIdError(String);

impl fmt::Display for ParseToastIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid toast id: {}", self.0)
    }
}

impl std::error::Error for ParseToastIdError {}

impl FromStr for ToastId {
    type Err = ParseToastIdError;

    /// Accepts ids previously rendered with `Display`, e.g. when a host
    /// routes an interaction by id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed = s.split_once('-').is_some_and(|(millis, suffix)| {
            millis.parse::<i64>().is_ok()
                && suffix.len() == SUFFIX_LEN
                && suffix.bytes().all(|b| BASE36.contains(&b))
        });
        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseToastIdError(s.to_string()))
        }
    }
}

/// A toast in the registry.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: String,
    category: Category,
    duration: DismissAfter,
    created_at: Instant,
}

impl Toast {
    /// Creates a toast with a caller-chosen id.
    pub fn new(
        id: ToastId,
        message: impl Into<String>,
        category: Category,
        duration: DismissAfter,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            category,
            duration,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Auto-dismiss delay this toast was created with.
    #[must_use]
    pub fn duration(&self) -> DismissAfter {
        self.duration
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
