//! Job search criteria.

use crate::error::{SqlError, SqlResult};
use crate::fragment::Fragment;

use super::{parse_int, push_and};

/// Optional search criteria for the jobs resource.
///
/// # Example
/// ```ignore
/// let w = JobFilter::new()
///     .title("engineer")
///     .has_equity("true")
///     .build()?;
///
/// assert_eq!(w.to_sql(), r#""title" ILIKE $1 AND "equity" > 0"#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct JobFilter {
    title: Option<String>,
    has_equity: Option<String>,
    min_salary: Option<String>,
}

impl JobFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on the job title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Equity flag (raw query-string value; only `"true"`, in any casing,
    /// activates the clause).
    pub fn has_equity(mut self, flag: impl Into<String>) -> Self {
        self.has_equity = Some(flag.into());
        self
    }

    /// Minimum salary (raw query-string value).
    pub fn min_salary(mut self, min: impl Into<String>) -> Self {
        self.min_salary = Some(min.into());
        self
    }

    /// Set the title criterion only if a value is present.
    pub fn title_opt<S: Into<String>>(self, title: Option<S>) -> Self {
        match title {
            Some(t) => self.title(t),
            None => self,
        }
    }

    /// Set the equity flag only if a value is present.
    pub fn has_equity_opt<S: Into<String>>(self, flag: Option<S>) -> Self {
        match flag {
            Some(f) => self.has_equity(f),
            None => self,
        }
    }

    /// Set the minimum salary only if a value is present.
    pub fn min_salary_opt<S: Into<String>>(self, min: Option<S>) -> Self {
        match min {
            Some(m) => self.min_salary(m),
            None => self,
        }
    }

    /// Build the WHERE-clause predicate.
    ///
    /// Clause order is title, equity, salary, joined with ` AND `. The equity
    /// clause is the constant `"equity" > 0` and consumes no placeholder, so
    /// a following salary clause takes the next parameter number after the
    /// title. Fails with [`SqlError::InvalidInput`] when no criterion was
    /// supplied or when the minimum salary is unparseable, zero, or negative.
    pub fn build(&self) -> SqlResult<Fragment> {
        if self.title.is_none() && self.has_equity.is_none() && self.min_salary.is_none() {
            return Err(SqlError::invalid_input("no filter criteria"));
        }

        let mut frag = Fragment::empty();
        let mut first = true;

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            push_and(&mut frag, &mut first);
            frag.push(r#""title" ILIKE "#);
            frag.push_bind(format!("%{title}%"));
        }

        if self
            .has_equity
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("true"))
        {
            push_and(&mut frag, &mut first);
            frag.push(r#""equity" > 0"#);
        }

        if let Some(min) = self.min_salary.as_deref() {
            let min = parse_int(min)
                .filter(|n| *n > 0)
                .ok_or_else(|| SqlError::invalid_input("invalid minSalary value"))?;
            push_and(&mut frag, &mut first);
            frag.push(r#""salary" >= "#);
            frag.push_bind(min);
        }

        Ok(frag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_criteria() {
        let w = JobFilter::new()
            .title("J")
            .min_salary("1000")
            .has_equity("true")
            .build()
            .unwrap();
        assert_eq!(
            w.to_sql(),
            r#""title" ILIKE $1 AND "equity" > 0 AND "salary" >= $2"#
        );
        // The equity clause is constant; only title and salary bind.
        assert_eq!(w.params_ref().len(), 2);
    }

    #[test]
    fn title_only() {
        let w = JobFilter::new().title("engineer").build().unwrap();
        assert_eq!(w.to_sql(), r#""title" ILIKE $1"#);
    }

    #[test]
    fn equity_flag_is_case_insensitive() {
        let w = JobFilter::new().has_equity("TRUE").build().unwrap();
        assert_eq!(w.to_sql(), r#""equity" > 0"#);
        assert_eq!(w.params_ref().len(), 0);
    }

    #[test]
    fn equity_false_adds_no_clause() {
        let w = JobFilter::new()
            .has_equity("false")
            .min_salary("500")
            .build()
            .unwrap();
        assert_eq!(w.to_sql(), r#""salary" >= $1"#);
    }

    #[test]
    fn salary_only() {
        let w = JobFilter::new().min_salary("90000").build().unwrap();
        assert_eq!(w.to_sql(), r#""salary" >= $1"#);
        assert_eq!(w.params_ref().len(), 1);
    }

    #[test]
    fn empty_criteria_is_invalid_input() {
        let err = JobFilter::new().build().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn negative_salary_is_invalid_input() {
        let err = JobFilter::new().min_salary("-5").build().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn zero_salary_is_invalid_input() {
        assert!(JobFilter::new().min_salary("0").build().is_err());
    }

    #[test]
    fn unparseable_salary_is_invalid_input() {
        assert!(JobFilter::new().min_salary("abc").build().is_err());
    }
}
