//! Company search criteria.

use crate::error::{SqlError, SqlResult};
use crate::fragment::Fragment;

use super::{parse_int, push_and};

/// Optional search criteria for the companies resource.
///
/// # Example
/// ```ignore
/// let w = CompanyFilter::new()
///     .name("net")
///     .min_employees("10")
///     .build()?;
///
/// assert_eq!(w.to_sql(), r#""name" ILIKE $1 AND num_employees >= $2"#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CompanyFilter {
    name: Option<String>,
    min_employees: Option<String>,
    max_employees: Option<String>,
}

impl CompanyFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on the company name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Minimum employee count (raw query-string value).
    pub fn min_employees(mut self, min: impl Into<String>) -> Self {
        self.min_employees = Some(min.into());
        self
    }

    /// Maximum employee count (raw query-string value).
    pub fn max_employees(mut self, max: impl Into<String>) -> Self {
        self.max_employees = Some(max.into());
        self
    }

    /// Set the name criterion only if a value is present.
    pub fn name_opt<S: Into<String>>(self, name: Option<S>) -> Self {
        match name {
            Some(n) => self.name(n),
            None => self,
        }
    }

    /// Set the minimum employee count only if a value is present.
    pub fn min_employees_opt<S: Into<String>>(self, min: Option<S>) -> Self {
        match min {
            Some(m) => self.min_employees(m),
            None => self,
        }
    }

    /// Set the maximum employee count only if a value is present.
    pub fn max_employees_opt<S: Into<String>>(self, max: Option<S>) -> Self {
        match max {
            Some(m) => self.max_employees(m),
            None => self,
        }
    }

    /// Build the WHERE-clause predicate.
    ///
    /// Clause order is name, then employee range, joined with ` AND `;
    /// placeholder numbers increase monotonically across all clauses. Fails
    /// with [`SqlError::InvalidInput`] when no criterion was supplied, when a
    /// bound does not parse as an integer, or when min exceeds max.
    pub fn build(&self) -> SqlResult<Fragment> {
        if self.name.is_none() && self.min_employees.is_none() && self.max_employees.is_none() {
            return Err(SqlError::invalid_input("no filter criteria"));
        }

        let mut frag = Fragment::empty();
        let mut first = true;

        // An empty name counts as a supplied criterion but adds no clause.
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            push_and(&mut frag, &mut first);
            frag.push(r#""name" ILIKE "#);
            frag.push_bind(format!("%{name}%"));
        }

        match (self.min_employees.as_deref(), self.max_employees.as_deref()) {
            (Some(min), Some(max)) => {
                let min = parse_employees(min)?;
                let max = parse_employees(max)?;
                if min > max {
                    return Err(SqlError::invalid_input("invalid min/max employee values"));
                }
                push_and(&mut frag, &mut first);
                frag.push("num_employees >= ");
                frag.push_bind(min);
                frag.push(" AND num_employees <= ");
                frag.push_bind(max);
            }
            (Some(min), None) => {
                let min = parse_employees(min)?;
                push_and(&mut frag, &mut first);
                frag.push("num_employees >= ");
                frag.push_bind(min);
            }
            (None, Some(max)) => {
                let max = parse_employees(max)?;
                push_and(&mut frag, &mut first);
                // Max-only is strict `<`, unlike the inclusive `<=` of the
                // combined branch. Longstanding boundary behavior; callers
                // rely on it, so it stays asymmetric.
                frag.push("num_employees < ");
                frag.push_bind(max);
            }
            (None, None) => {}
        }

        Ok(frag)
    }
}

fn parse_employees(raw: &str) -> SqlResult<i64> {
    parse_int(raw).ok_or_else(|| SqlError::invalid_input("invalid min/max employee values"))
}
