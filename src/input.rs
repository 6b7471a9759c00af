//! Key list parsing
//!
//! Input is one line of comma-separated integers, e.g. `9,6,2,1,4`.
//! Whitespace around tokens is ignored; an empty line yields no keys.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when a key list cannot be parsed.
#[derive(Debug, Error)]
pub enum InputError {
    /// A token was not a valid integer.
    #[error("invalid key '{token}' at position {position}")]
    InvalidKey {
        /// Offending token, trimmed.
        token: String,
        /// 1-based index of the token in the list.
        position: usize,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Parse a comma-separated list of keys.
pub fn parse_keys(line: &str) -> Result<Vec<i64>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    line.split(',')
        .enumerate()
        .map(|(idx, raw)| {
            let token = raw.trim();
            token.parse::<i64>().map_err(|source| InputError::InvalidKey {
                token: token.to_string(),
                position: idx + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("9,6,2", &[9, 6, 2] ; "plain")]
    #[test_case(" 9 , 6,\t2 \n", &[9, 6, 2] ; "surrounding whitespace")]
    #[test_case("-7,0,+4", &[-7, 0, 4] ; "signed")]
    #[test_case("", &[] ; "empty")]
    #[test_case("   ", &[] ; "blank")]
    fn parses(line: &str, expected: &[i64]) {
        assert_eq!(parse_keys(line).expect("valid input"), expected);
    }

    #[test_case("1,x,3", "x", 2 ; "non numeric")]
    #[test_case("1,,3", "", 2 ; "empty token")]
    #[test_case("1,2,", "", 3 ; "trailing comma")]
    #[test_case("4.5", "4.5", 1 ; "fractional")]
    fn rejects(line: &str, bad_token: &str, bad_position: usize) {
        match parse_keys(line) {
            Err(InputError::InvalidKey { token, position, .. }) => {
                assert_eq!(token, bad_token);
                assert_eq!(position, bad_position);
            }
            Ok(keys) => panic!("expected error, parsed {:?}", keys),
        }
    }

    #[test]
    fn test_error_message_names_token() {
        let err = parse_keys("1,two").unwrap_err();
        assert_eq!(err.to_string(), "invalid key 'two' at position 2");
    }
}
