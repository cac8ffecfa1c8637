//! # boardsql
//!
//! Parameter-safe SQL fragment builders for a job-board backend (companies
//! and jobs resources).
//!
//! The crate turns sparse, partially-specified request data into SQL clauses
//! with `$1, $2, ...` placeholders plus a positional parameter list. It never
//! opens a connection or runs a query; the surrounding service splices the
//! rendered text into its statements and hands the parameters to
//! `tokio-postgres`.
//!
//! ## Builders
//!
//! - [`PartialUpdate`]: a `PATCH` body → `"col"=$1, "col2"=$2` SET clause,
//!   with logical-to-physical column renaming via [`NameMap`]
//! - [`CompanyFilter`] / [`JobFilter`]: optional search criteria → a boolean
//!   predicate for a `WHERE` clause
//! - [`stmt`]: the fragments spliced into full CRUD statements for both
//!   resources
//!
//! ```ignore
//! use boardsql::{CompanyFilter, stmt};
//!
//! let select = stmt::company::select_filtered(
//!     &CompanyFilter::new().name("net").min_employees("10"),
//! )?;
//! let rows = client.query(&select.to_sql(), &select.params_ref()).await?;
//! ```
//!
//! All builders are pure: a validation failure returns
//! [`SqlError::InvalidInput`] and no partial fragment, and identical input
//! always renders identical SQL.

pub mod error;
pub mod filter;
pub mod fragment;
pub mod ident;
pub mod stmt;
pub mod update;

pub use error::{SqlError, SqlResult};
pub use filter::{CompanyFilter, JobFilter};
pub use fragment::Fragment;
pub use update::{NameMap, PartialUpdate};
