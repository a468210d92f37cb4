//! gnu-pw-mgr output parsing
//!
//! Password listings print one line per seed with the derived password as the
//! last whitespace-separated token. Username listings carry the login hint in
//! a `hint: <name> pw:` header.

use crate::error::RetrievalError;
use crate::identifier::SeedSelector;
use regex::Regex;
use std::sync::LazyLock;

static HINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"hint:\s*(\S+)\s*pw:").expect("hint pattern is a valid regex")
});

/// Pick the password token for `seed` out of a password listing
///
/// With the most recent seed the whole output counts as one line, so the last
/// token printed wins. Otherwise line `seed - 1` (split on `\n`) is used.
pub fn extract_password(output: &str, seed: SeedSelector) -> Result<String, RetrievalError> {
    let line = if seed.is_most_recent() {
        output
    } else {
        let lines: Vec<&str> = output.split('\n').collect();
        let index = (seed.index() - 1) as usize;
        *lines.get(index).ok_or(RetrievalError::IndexOutOfRange {
            requested: seed.index(),
            available: lines.len(),
        })?
    };

    line.split_whitespace()
        .next_back()
        .map(str::to_string)
        .ok_or(RetrievalError::MalformedOutput)
}

/// Pick the login hint out of a username listing
///
/// All non-overlapping `hint: <name> pw:` occurrences are scanned and the
/// last one's name is returned.
pub fn extract_username(output: &str) -> Result<String, RetrievalError> {
    HINT_PATTERN
        .captures_iter(output)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(RetrievalError::NoMatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_takes_last_token_of_single_line() {
        let pw = extract_password("hint: alice pw: secret123\n", SeedSelector::MOST_RECENT);
        assert_eq!(pw.unwrap(), "secret123");
    }

    #[test]
    fn most_recent_on_multi_line_output_takes_last_seed() {
        let out = "seed1 tokenA\nseed2 tokenB\nseed3 tokenC\n";
        assert_eq!(
            extract_password(out, SeedSelector::MOST_RECENT).unwrap(),
            "tokenC"
        );
    }

    #[test]
    fn numbered_seed_selects_line() {
        let out = "seed1 tokenA\nseed2 tokenB\nseed3 tokenC\n";
        assert_eq!(extract_password(out, SeedSelector::new(1)).unwrap(), "tokenA");
        assert_eq!(extract_password(out, SeedSelector::new(2)).unwrap(), "tokenB");
        assert_eq!(extract_password(out, SeedSelector::new(3)).unwrap(), "tokenC");
    }

    #[test]
    fn seed_past_end_is_out_of_range() {
        let out = "seed1 tokenA\nseed2 tokenB";
        match extract_password(out, SeedSelector::new(3)) {
            Err(RetrievalError::IndexOutOfRange {
                requested,
                available,
            }) => {
                assert_eq!(requested, 3);
                assert_eq!(available, 2);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn trailing_newline_line_is_malformed() {
        let out = "seed1 tokenA\n";
        assert!(matches!(
            extract_password(out, SeedSelector::new(2)),
            Err(RetrievalError::MalformedOutput)
        ));
        assert!(matches!(
            extract_password(out, SeedSelector::new(3)),
            Err(RetrievalError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_output_is_malformed() {
        assert!(matches!(
            extract_password("", SeedSelector::MOST_RECENT),
            Err(RetrievalError::MalformedOutput)
        ));
        assert!(matches!(
            extract_password("  \t \n", SeedSelector::MOST_RECENT),
            Err(RetrievalError::MalformedOutput)
        ));
    }

    #[test]
    fn tabs_and_repeated_spaces_separate_tokens() {
        let out = "seed1\t  tokenA  ";
        assert_eq!(extract_password(out, SeedSelector::new(1)).unwrap(), "tokenA");
    }

    #[test]
    fn username_from_single_hint() {
        assert_eq!(
            extract_username("hint: alice pw: secret123\n").unwrap(),
            "alice"
        );
    }

    #[test]
    fn username_takes_last_hint() {
        let out = "hint: alice pw: one\nhint: bob pw: two\n";
        assert_eq!(extract_username(out).unwrap(), "bob");
        let inline = "...hint: alice pw:... hint: bob pw:...";
        assert_eq!(extract_username(inline).unwrap(), "bob");
    }

    #[test]
    fn username_tolerates_missing_spaces() {
        assert_eq!(extract_username("hint:carol pw:x").unwrap(), "carol");
    }

    #[test]
    fn username_without_hint_is_no_match() {
        assert!(matches!(
            extract_username("no hints here"),
            Err(RetrievalError::NoMatch)
        ));
        assert!(matches!(
            extract_username("hint: pw:"),
            Err(RetrievalError::NoMatch)
        ));
    }
}
