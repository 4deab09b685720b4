//! Positional argument parsing for the command-line binaries.
//!
//! The binaries take positional arguments only: no flags, no defaults beyond
//! the fetch limit, no generated help text. Parsing returns typed values;
//! exit-code mapping lives in `main`.

use thiserror::Error;

use tangle_tx::DEFAULT_FETCH_LIMIT;

/// Argument-level usage errors.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum UsageError {
    /// Wrong number of positional arguments for tangle-submit.
    #[error("expected <vehicle-id> <payload-hex> [timestamp], got {got} argument(s)")]
    SubmitArity {
        /// Number of arguments received.
        got: usize,
    },
    /// Wrong number of positional arguments for tangle-fetch.
    #[error("expected <vehicle-id> [limit], got {got} argument(s)")]
    FetchArity {
        /// Number of arguments received.
        got: usize,
    },
    /// Fetch limit was not a positive integer.
    #[error("limit must be a positive integer, got {got:?}")]
    InvalidLimit {
        /// Value received.
        got: String,
    },
}

/// Parsed tangle-submit invocation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SubmitInvocation {
    /// Vehicle identifier used for the block tag.
    pub vehicle_id: String,
    /// Payload hex as given.
    pub payload_hex: String,
    /// Optional timestamp selecting the enveloped variant.
    pub timestamp: Option<String>,
}

/// Parsed tangle-fetch invocation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FetchInvocation {
    /// Vehicle identifier used for the block tag.
    pub vehicle_id: String,
    /// Maximum number of blocks to fetch.
    pub limit: usize,
}

/// Parses tangle-submit positional arguments, program name excluded.
///
/// Two arguments select the basic variant, three the timestamped variant.
///
/// # Errors
///
/// Returns [`UsageError::SubmitArity`] for any other argument count.
pub fn parse_submit<I>(args: I) -> Result<SubmitInvocation, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [vehicle_id, payload_hex] => Ok(SubmitInvocation {
            vehicle_id: vehicle_id.clone(),
            payload_hex: payload_hex.clone(),
            timestamp: None,
        }),
        [vehicle_id, payload_hex, timestamp] => Ok(SubmitInvocation {
            vehicle_id: vehicle_id.clone(),
            payload_hex: payload_hex.clone(),
            timestamp: Some(timestamp.clone()),
        }),
        other => Err(UsageError::SubmitArity { got: other.len() }),
    }
}

/// Parses tangle-fetch positional arguments, program name excluded.
///
/// # Errors
///
/// Returns [`UsageError`] on a wrong argument count or a non-numeric limit.
pub fn parse_fetch<I>(args: I) -> Result<FetchInvocation, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [vehicle_id] => Ok(FetchInvocation {
            vehicle_id: vehicle_id.clone(),
            limit: DEFAULT_FETCH_LIMIT,
        }),
        [vehicle_id, limit] => {
            let parsed = limit
                .parse::<usize>()
                .ok()
                .filter(|parsed| *parsed > 0)
                .ok_or_else(|| UsageError::InvalidLimit { got: limit.clone() })?;
            Ok(FetchInvocation {
                vehicle_id: vehicle_id.clone(),
                limit: parsed,
            })
        }
        other => Err(UsageError::FetchArity { got: other.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects string literals into owned argument vectors.
    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn two_arguments_select_the_basic_variant() {
        let parsed = parse_submit(argv(&["vehicle-123", "deadbeef"]));
        assert_eq!(
            parsed,
            Ok(SubmitInvocation {
                vehicle_id: "vehicle-123".to_owned(),
                payload_hex: "deadbeef".to_owned(),
                timestamp: None,
            })
        );
    }

    #[test]
    fn three_arguments_select_the_timestamped_variant() {
        let parsed = parse_submit(argv(&["vehicle-123", "deadbeef", "1630000000"]));
        assert_eq!(
            parsed,
            Ok(SubmitInvocation {
                vehicle_id: "vehicle-123".to_owned(),
                payload_hex: "deadbeef".to_owned(),
                timestamp: Some("1630000000".to_owned()),
            })
        );
    }

    #[test]
    fn missing_arguments_are_a_usage_error() {
        assert_eq!(
            parse_submit(argv(&[])),
            Err(UsageError::SubmitArity { got: 0 })
        );
        assert_eq!(
            parse_submit(argv(&["vehicle-123"])),
            Err(UsageError::SubmitArity { got: 1 })
        );
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        assert_eq!(
            parse_submit(argv(&["a", "b", "c", "d"])),
            Err(UsageError::SubmitArity { got: 4 })
        );
    }

    #[test]
    fn usage_errors_render_a_non_empty_message() {
        let error = UsageError::SubmitArity { got: 0 };
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn fetch_defaults_the_limit() {
        let parsed = parse_fetch(argv(&["vehicle-123"]));
        assert_eq!(
            parsed,
            Ok(FetchInvocation {
                vehicle_id: "vehicle-123".to_owned(),
                limit: DEFAULT_FETCH_LIMIT,
            })
        );
    }

    #[test]
    fn fetch_accepts_an_explicit_limit() {
        let parsed = parse_fetch(argv(&["vehicle-123", "5"]));
        assert_eq!(
            parsed,
            Ok(FetchInvocation {
                vehicle_id: "vehicle-123".to_owned(),
                limit: 5,
            })
        );
    }

    #[test]
    fn fetch_rejects_a_bad_limit() {
        assert_eq!(
            parse_fetch(argv(&["vehicle-123", "zero"])),
            Err(UsageError::InvalidLimit {
                got: "zero".to_owned()
            })
        );
        assert_eq!(
            parse_fetch(argv(&["vehicle-123", "0"])),
            Err(UsageError::InvalidLimit {
                got: "0".to_owned()
            })
        );
    }
}
