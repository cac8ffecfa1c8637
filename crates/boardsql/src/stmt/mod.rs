//! Full-statement assembly for the companies and jobs resources.
//!
//! These functions splice the SET and WHERE fragments into complete
//! parameterized statements: `UPDATE ... SET <fragment> WHERE ...`,
//! `SELECT ... WHERE <fragment>`, and the plain CRUD statements around them.
//! Lookup-key parameters (a company handle, a job id) are appended after the
//! builder's values, so their placeholder index follows the fragment's.
//!
//! Nothing here executes; callers pass [`Fragment::to_sql`] and
//! [`Fragment::params_ref`](crate::Fragment::params_ref) to their own
//! `tokio-postgres` client and map zero affected rows to a not-found error
//! themselves.

pub mod company;
pub mod job;

use crate::fragment::Fragment;

#[cfg(feature = "tracing")]
fn trace_stmt(frag: &Fragment) {
    tracing::debug!(sql = %frag.to_sql(), params = frag.params_len(), "built statement");
}

#[cfg(not(feature = "tracing"))]
fn trace_stmt(_frag: &Fragment) {}
