//! Parameter-safe dynamic SQL fragments.
//!
//! A [`Fragment`] stores SQL pieces and parameters separately and generates
//! `$1, $2, ...` placeholders automatically in the final SQL string. Callers
//! splice the rendered text into a larger statement and pass
//! [`params_ref`](Fragment::params_ref) as bound parameters to the executor,
//! so parameter indices stay correct no matter how fragments are composed.

use std::fmt::Write as _;
use std::sync::Arc;

use tokio_postgres::types::ToSql;

use crate::error::{SqlError, SqlResult};

/// One piece of a fragment: raw SQL text or a parameter slot.
///
/// Parameter slots carry no index; numbering happens at render time, which is
/// what makes fragments freely composable.
enum Part {
    Raw(String),
    Param,
}

/// A parameter-safe SQL fragment.
#[must_use]
pub struct Fragment {
    parts: Vec<Part>,
    params: Vec<Arc<dyn ToSql + Sync + Send>>,
}

impl Fragment {
    /// Create a new fragment with an initial SQL piece.
    pub fn new(initial_sql: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Raw(initial_sql.into())],
            params: Vec::new(),
        }
    }

    /// Create an empty fragment.
    pub fn empty() -> Self {
        Self {
            parts: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Append raw SQL (no parameters).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if sql.is_empty() {
            return self;
        }
        match self.parts.last_mut() {
            Some(Part::Raw(last)) => last.push_str(sql),
            _ => self.parts.push(Part::Raw(sql.to_string())),
        }
        self
    }

    /// Append a parameter placeholder and bind its value.
    pub fn push_bind<T>(&mut self, value: T) -> &mut Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.parts.push(Part::Param);
        self.params.push(Arc::new(value));
        self
    }

    pub(crate) fn push_bind_value(&mut self, value: Arc<dyn ToSql + Sync + Send>) -> &mut Self {
        self.parts.push(Part::Param);
        self.params.push(value);
        self
    }

    /// Append another fragment, consuming it.
    ///
    /// The appended fragment's placeholders are renumbered to follow this
    /// fragment's existing parameters.
    pub fn push_fragment(&mut self, mut other: Fragment) -> &mut Self {
        self.parts.append(&mut other.parts);
        self.params.append(&mut other.params);
        self
    }

    /// Bind a parameter and return `self` (consuming version of
    /// [`push_bind`](Fragment::push_bind)).
    pub fn bind<T>(mut self, value: T) -> Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.push_bind(value);
        self
    }

    /// Whether the fragment holds no SQL and no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
            && self.parts.iter().all(|p| match p {
                Part::Raw(s) => s.is_empty(),
                Part::Param => false,
            })
    }

    /// Number of bound parameters.
    pub fn params_len(&self) -> usize {
        self.params.len()
    }

    /// Render SQL with `$1, $2, ...` placeholders.
    pub fn to_sql(&self) -> String {
        let mut cap = 0;
        for part in &self.parts {
            match part {
                Part::Raw(s) => cap += s.len(),
                Part::Param => cap += 3,
            }
        }

        let mut out = String::with_capacity(cap);
        let mut idx = 0usize;
        for part in &self.parts {
            match part {
                Part::Raw(s) => out.push_str(s),
                Part::Param => {
                    idx += 1;
                    // Writing to a String cannot fail.
                    let _ = write!(out, "${idx}");
                }
            }
        }
        out
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect()
    }

    /// Check that placeholder count matches bound parameter count.
    ///
    /// The public API keeps the two in lockstep; this guards statement
    /// assembly against bookkeeping regressions before execution.
    pub fn validate(&self) -> SqlResult<()> {
        let placeholders = self
            .parts
            .iter()
            .filter(|p| matches!(p, Part::Param))
            .count();
        if placeholders != self.params.len() {
            let params = self.params.len();
            return Err(SqlError::Internal(format!(
                "Fragment: placeholders({placeholders}) != params({params})"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fragment")
            .field("sql", &self.to_sql())
            .field("params", &self.params.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_placeholders_in_order() {
        let mut f = Fragment::new("a = ");
        f.push_bind(1).push(" AND b = ").push_bind("x");

        assert_eq!(f.to_sql(), "a = $1 AND b = $2");
        assert_eq!(f.params_ref().len(), 2);
    }

    #[test]
    fn composes_and_renumbers() {
        let mut inner = Fragment::empty();
        inner.push("b = ").push_bind(2).push(" AND c = ").push_bind(3);

        let mut f = Fragment::new("a = ");
        f.push_bind(1).push(" AND ").push_fragment(inner);

        assert_eq!(f.to_sql(), "a = $1 AND b = $2 AND c = $3");
        assert_eq!(f.params_ref().len(), 3);
    }

    #[test]
    fn empty_push_is_noop() {
        let mut f = Fragment::empty();
        f.push("");
        assert!(f.is_empty());
        assert_eq!(f.to_sql(), "");
    }

    #[test]
    fn consecutive_raw_pieces_merge() {
        let mut f = Fragment::new("SELECT ");
        f.push("1");
        assert_eq!(f.parts.len(), 1);
        assert_eq!(f.to_sql(), "SELECT 1");
    }

    #[test]
    fn validate_passes_for_balanced_fragment() {
        let mut f = Fragment::new("x = ");
        f.push_bind(1);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn validate_catches_mismatch() {
        // Forced out of lockstep via the private fields.
        let f = Fragment {
            parts: vec![Part::Raw("x = ".into()), Part::Param],
            params: Vec::new(),
        };
        let err = f.validate().unwrap_err();
        assert!(matches!(err, SqlError::Internal(_)));
    }

    #[test]
    fn identical_input_renders_identically() {
        let build = || {
            let mut f = Fragment::new("n >= ");
            f.push_bind(5i64);
            f.to_sql()
        };
        assert_eq!(build(), build());
    }
}
