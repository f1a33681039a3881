//! Access gate in front of the calculator.
//!
//! A single pre-shared secret unlocks the page. This is a placeholder
//! deterrent, not a security boundary: there is no attempt counter, no
//! session, and nothing survives a reload. Anything that needs real access
//! control must replace it with a proper credential mechanism.
//!
//! - The secret comes from configuration; [`DEFAULT_SECRET`] is only the
//!   fallback.
//! - Comparison uses `subtle::ConstantTimeEq`.
//! - [`AccessGate`] moves `Locked -> Unlocked` once and never back.

use serde::Serialize;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

/// Secret used when none is configured.
pub const DEFAULT_SECRET: &str = "AAXIS2.0";

/// The pre-shared access secret. `Debug` never prints the value.
#[derive(Clone)]
pub struct AccessSecret(String);

impl std::fmt::Debug for AccessSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessSecret([redacted])")
    }
}

impl Default for AccessSecret {
    fn default() -> Self {
        Self(DEFAULT_SECRET.to_owned())
    }
}

impl AccessSecret {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Whether this is the built-in fallback secret.
    pub fn is_default(&self) -> bool {
        self.matches(DEFAULT_SECRET)
    }

    /// Pure predicate: `input == secret`.
    pub fn matches(&self, input: &str) -> bool {
        bool::from(self.0.as_bytes().ct_eq(input.as_bytes()))
    }

    /// Check an input and wrap the result.
    pub fn authenticate(&self, input: &str) -> AuthOutcome {
        AuthOutcome {
            granted: self.matches(input),
        }
    }
}

/// Result of one authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub granted: bool,
}

/// Two-state gate owned by one page view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessGate {
    unlocked: bool,
    error: bool,
}

impl AccessGate {
    /// A locked gate with no error shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Whether the view should show the "incorrect password" message.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Submit a password. A match unlocks the gate and clears the error; a
    /// mismatch sets the error flag. An unlocked gate stays unlocked
    /// whatever is submitted afterwards.
    pub fn submit(&mut self, secret: &AccessSecret, input: &str) -> AuthOutcome {
        let outcome = secret.authenticate(input);
        if self.unlocked {
            return outcome;
        }

        if outcome.granted {
            self.unlocked = true;
            self.error = false;
            debug!("access gate unlocked");
        } else {
            self.error = true;
            warn!("access gate rejected password");
        }
        outcome
    }
}
