//! Statements for the jobs resource.

use crate::error::SqlResult;
use crate::filter::JobFilter;
use crate::fragment::Fragment;
use crate::update::{NameMap, PartialUpdate};

use super::trace_stmt;

/// Result columns, aliased back to the payload's camel-case field names.
const COLUMNS: &str = r#"id, title, salary, equity, company_handle AS "companyHandle""#;

/// Logical-to-physical mapping for job update payloads.
pub fn name_map() -> NameMap {
    NameMap::new().map("companyHandle", "company_handle")
}

/// Insert data for a job row.
#[derive(Clone, Debug)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<f64>,
    pub company_handle: String,
}

/// `SELECT handle FROM companies WHERE handle = $1`.
///
/// The pre-insert existence probe: a job may only reference a known company,
/// and the caller turns an empty result into an invalid-input response.
pub fn company_exists(handle: &str) -> Fragment {
    let mut frag = Fragment::new("SELECT handle FROM companies WHERE handle = ");
    frag.push_bind(handle.to_string());
    trace_stmt(&frag);
    frag
}

/// `INSERT INTO jobs ... RETURNING <columns>`.
pub fn insert(job: NewJob) -> Fragment {
    let mut frag =
        Fragment::new("INSERT INTO jobs (title, salary, equity, company_handle) VALUES (");
    frag.push_bind(job.title);
    frag.push(", ");
    frag.push_bind(job.salary);
    frag.push(", ");
    frag.push_bind(job.equity);
    frag.push(", ");
    frag.push_bind(job.company_handle);
    frag.push(") RETURNING ");
    frag.push(COLUMNS);
    trace_stmt(&frag);
    frag
}

/// `SELECT <columns> FROM jobs`.
pub fn select_all() -> Fragment {
    let mut frag = Fragment::new("SELECT ");
    frag.push(COLUMNS);
    frag.push(" FROM jobs");
    trace_stmt(&frag);
    frag
}

/// `SELECT <columns> FROM jobs WHERE <filter>`.
pub fn select_filtered(filter: &JobFilter) -> SqlResult<Fragment> {
    let predicate = filter.build()?;
    let mut frag = Fragment::new("SELECT ");
    frag.push(COLUMNS);
    frag.push(" FROM jobs");
    if !predicate.is_empty() {
        frag.push(" WHERE ");
        frag.push_fragment(predicate);
    }
    trace_stmt(&frag);
    Ok(frag)
}

/// `SELECT <columns> FROM jobs WHERE id = $1`.
pub fn select_by_id(id: i32) -> Fragment {
    let mut frag = Fragment::new("SELECT ");
    frag.push(COLUMNS);
    frag.push(" FROM jobs WHERE id = ");
    frag.push_bind(id);
    trace_stmt(&frag);
    frag
}

/// `UPDATE jobs SET <set clause> WHERE id = $n RETURNING <columns>`.
///
/// The id parameter is appended after the payload's values.
pub fn update(id: i32, changes: &PartialUpdate) -> SqlResult<Fragment> {
    let set = changes.build(&name_map())?;
    let mut frag = Fragment::new("UPDATE jobs SET ");
    frag.push_fragment(set);
    frag.push(" WHERE id = ");
    frag.push_bind(id);
    frag.push(" RETURNING ");
    frag.push(COLUMNS);
    trace_stmt(&frag);
    Ok(frag)
}

/// `DELETE FROM jobs WHERE id = $1 RETURNING id`.
pub fn delete(id: i32) -> Fragment {
    let mut frag = Fragment::new("DELETE FROM jobs WHERE id = ");
    frag.push_bind(id);
    frag.push(" RETURNING id");
    trace_stmt(&frag);
    frag
}
