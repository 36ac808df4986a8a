//! Human-facing account number shown on dashboards (`STU042917`).

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DIGITS: usize = 6;
const MODULUS: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(String);

impl ExternalId {
    /// Role prefix followed by the last six digits of `now` in Unix milliseconds.
    pub fn generate(role: Role, now: DateTime<Utc>) -> Self {
        let tail = now.timestamp_millis().rem_euclid(MODULUS);
        Self(format!("{}{:0width$}", role.id_prefix(), tail, width = DIGITS))
    }

    /// Wrap a value read back from storage. Stored ids are not re-validated.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if the id is a known role prefix followed by exactly six digits.
    pub fn is_well_formed(&self) -> bool {
        let Some(prefix) = self.0.get(..3) else {
            return false;
        };
        let digits = &self.0[3..];
        matches!(prefix, "STU" | "FAC" | "ADM")
            && digits.len() == DIGITS
            && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

impl std::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
