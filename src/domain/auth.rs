//! `X-Auth` header derivation.
//!
//! The API accepts `md5("<secret>_<YYYYMMDD>")` computed over the current UTC date, so the
//! header value changes at UTC midnight.

use derive_more::Constructor;
use md5::{Digest, Md5};
use std::cell::RefCell;

use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Calendar date in UTC, printed as `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Constructor)]
pub struct UtcDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl std::fmt::Display for UtcDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Source of "today" in UTC.
pub trait UtcClock {
    fn today(&self) -> UtcDate;
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub UtcDate);

impl UtcClock for FixedClock {
    fn today(&self) -> UtcDate {
        self.0
    }
}

pub(crate) fn hex_digest(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Token the server expects for `secret` on `date`.
pub fn generate_auth_token(secret: &str, date: UtcDate) -> String {
    hex_digest(&format!("{}_{}", secret, date))
}

/// Keeps the last computed token and recomputes it once the UTC date moves on.
#[derive(Debug)]
pub struct AuthTokenCache {
    secret: String,
    cached: RefCell<Option<(UtcDate, String)>>,
}

impl AuthTokenCache {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            cached: RefCell::new(None),
        }
    }

    pub fn token_for(&self, date: UtcDate) -> String {
        let mut cached = self.cached.borrow_mut();
        match cached.as_ref() {
            Some((cached_date, token)) if *cached_date == date => token.clone(),
            _ => {
                log_debug!(
                    LogComponent::Domain("Auth"),
                    "Computing auth token for {}",
                    date
                );
                let token = generate_auth_token(&self.secret, date);
                *cached = Some((date, token.clone()));
                token
            }
        }
    }

    pub fn cached_date(&self) -> Option<UtcDate> {
        self.cached.borrow().as_ref().map(|(date, _)| *date)
    }
}
