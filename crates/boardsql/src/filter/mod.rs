//! Filter-criteria WHERE clause builders.
//!
//! Each builder collects the optional search criteria of one resource and
//! produces a boolean predicate fragment for direct use after `WHERE` (the
//! keyword itself is not emitted). Criteria arrive as raw query-string
//! values; numeric ones are parsed strictly at build time and bad input fails
//! the whole call, never a partial fragment.

mod company;
mod job;

pub use company::CompanyFilter;
pub use job::JobFilter;

use crate::fragment::Fragment;

/// Append ` AND ` before every clause after the first.
fn push_and(frag: &mut Fragment, first: &mut bool) {
    if *first {
        *first = false;
    } else {
        frag.push(" AND ");
    }
}

/// Strict integer parse for a raw query-string value.
///
/// Unlike a lenient prefix parse, trailing garbage (`"5abc"`) and empty
/// strings fail outright.
fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_accepts_padded_integers() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("0"), Some(0));
    }

    #[test]
    fn parse_int_rejects_garbage() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("5abc"), None);
        assert_eq!(parse_int("1.5"), None);
    }
}
