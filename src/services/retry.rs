//! Bounded accept/reject loops
//!
//! Several generators resample until a value lands inside a window. Each
//! such loop runs through these helpers so that a mis-tuned window ends in
//! [`Retry::ExhaustedRetries`] instead of spinning forever.

use crate::models::errors::{GalaxyError, GalaxyResult};

/// Outcome of a bounded accept/reject loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retry<T> {
    Accepted { value: T, attempts: u32 },
    ExhaustedRetries { attempts: u32 },
}

impl<T> Retry<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Retry::Accepted { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Retry::Accepted { attempts, .. } | Retry::ExhaustedRetries { attempts } => *attempts,
        }
    }

    /// Treat exhaustion as fatal.
    pub fn or_fail(self, what: &'static str) -> GalaxyResult<T> {
        match self {
            Retry::Accepted { value, .. } => Ok(value),
            Retry::ExhaustedRetries { attempts } => {
                Err(GalaxyError::RetriesExhausted { what, attempts })
            }
        }
    }
}

/// Call `attempt` until it returns `Some`, at most `limit` times.
pub fn retry<T>(limit: u32, mut attempt: impl FnMut() -> Option<T>) -> Retry<T> {
    for n in 1..=limit {
        if let Some(value) = attempt() {
            return Retry::Accepted { value, attempts: n };
        }
    }
    Retry::ExhaustedRetries { attempts: limit }
}

/// Like [`retry`], for attempts that can fail outright.
pub fn try_retry<T, E>(
    limit: u32,
    mut attempt: impl FnMut() -> Result<Option<T>, E>,
) -> Result<Retry<T>, E> {
    for n in 1..=limit {
        if let Some(value) = attempt()? {
            return Ok(Retry::Accepted { value, attempts: n });
        }
    }
    Ok(Retry::ExhaustedRetries { attempts: limit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_on_first_success() {
        let mut calls = 0;
        let outcome = retry(10, || {
            calls += 1;
            (calls == 3).then_some(calls)
        });
        assert_eq!(
            outcome,
            Retry::Accepted {
                value: 3,
                attempts: 3
            }
        );
    }

    #[test]
    fn gives_up_at_limit() {
        let outcome: Retry<()> = retry(5, || None);
        assert_eq!(outcome, Retry::ExhaustedRetries { attempts: 5 });
        assert!(!outcome.is_accepted());
        assert!(matches!(
            outcome.or_fail("test loop"),
            Err(GalaxyError::RetriesExhausted {
                what: "test loop",
                attempts: 5
            })
        ));
    }

    #[test]
    fn errors_short_circuit() {
        let mut calls = 0;
        let outcome: Result<Retry<i32>, &str> = try_retry(10, || {
            calls += 1;
            if calls == 2 {
                Err("boom")
            } else {
                Ok(None)
            }
        });
        assert_eq!(outcome, Err("boom"));
        assert_eq!(calls, 2);
    }
}
