//! Generation-counter cancellation tokens.
//!
//! Zellij web requests cannot be aborted once issued, so cancellation is
//! modelled on the receiving side: every request carries the token it was
//! issued with, and a completion is only applied if its token is still the
//! current one.
//!
//! ```text
//! issue() → t1      request "fro" in flight
//! issue() → t2      request "froz" in flight, t1 now stale
//! complete(t1, ..)  ignored (Superseded)
//! complete(t2, ..)  applied
//! ```

use std::fmt;
use std::str::FromStr;

/// Handle identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestToken {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Issues tokens and remembers which one is current.
#[derive(Debug, Clone, Default)]
pub struct TokenSource {
    generation: u64,
}

impl TokenSource {
    #[must_use]
    pub const fn new() -> Self {
        Self { generation: 0 }
    }

    /// Hands out a fresh token; every earlier token becomes stale.
    pub fn issue(&mut self) -> RequestToken {
        self.generation = self.generation.wrapping_add(1);
        RequestToken(self.generation)
    }

    /// Makes every outstanding token stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuing_supersedes_previous_tokens() {
        let mut source = TokenSource::new();
        let first = source.issue();
        assert!(source.is_current(first));

        let second = source.issue();
        assert!(!source.is_current(first));
        assert!(source.is_current(second));
    }

    #[test]
    fn invalidate_leaves_no_current_token() {
        let mut source = TokenSource::new();
        let token = source.issue();
        source.invalidate();
        assert!(!source.is_current(token));
    }

    #[test]
    fn tokens_round_trip_through_strings() {
        let mut source = TokenSource::new();
        let token = source.issue();
        assert_eq!(token.to_string().parse::<RequestToken>().unwrap(), token);
    }
}
