//! Partial-update SET clause builder.
//!
//! A REST `PATCH` body updates only the fields it names; everything absent is
//! left unchanged. [`PartialUpdate`] turns such a sparse payload into a
//! `"col"=$1, "col2"=$2` fragment plus the matching parameter list. Field
//! insertion order determines placeholder numbering, so the contract is
//! explicit rather than inherited from any map's iteration order.

use std::collections::HashMap;
use std::sync::Arc;

use tokio_postgres::types::ToSql;

use crate::error::{SqlError, SqlResult};
use crate::fragment::Fragment;
use crate::ident;

/// Logical-to-physical column name mapping.
///
/// Request payloads use camel-case field names (`numEmployees`) while the
/// schema uses snake-case columns (`num_employees`). Only names that differ
/// need an entry; unmapped names pass through verbatim.
#[derive(Clone, Debug, Default)]
pub struct NameMap {
    map: HashMap<String, String>,
}

impl NameMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a logical → physical entry.
    pub fn map(mut self, logical: &str, physical: &str) -> Self {
        self.map.insert(logical.to_string(), physical.to_string());
        self
    }

    /// Resolve a logical field name to its physical column name.
    pub fn resolve<'a>(&'a self, logical: &'a str) -> &'a str {
        self.map.get(logical).map(String::as_str).unwrap_or(logical)
    }
}

/// Builder for a partial-update `SET` clause.
///
/// # Example
/// ```ignore
/// let set = PartialUpdate::new()
///     .set("firstName", "Aliya")
///     .set("age", 32i32)
///     .build(&NameMap::new().map("firstName", "first_name"))?;
///
/// assert_eq!(set.to_sql(), r#""first_name"=$1, "age"=$2"#);
/// ```
#[derive(Default)]
pub struct PartialUpdate {
    fields: Vec<(String, Arc<dyn ToSql + Sync + Send>)>,
}

impl PartialUpdate {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    ///
    /// Fields render in insertion order. No check is made that `field` is a
    /// legal column; schema validation happens upstream.
    pub fn set<T>(mut self, field: &str, value: T) -> Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.fields.push((field.to_string(), Arc::new(value)));
        self
    }

    /// Set an optional field value (`None` means "field absent", not NULL).
    pub fn set_opt<T>(self, field: &str, value: Option<T>) -> Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        match value {
            Some(v) => self.set(field, v),
            None => self,
        }
    }

    /// Set a field to a typed SQL NULL.
    ///
    /// Distinct from leaving the field out: the column is updated to NULL.
    pub fn set_null<T>(self, field: &str) -> Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.set(field, Option::<T>::None)
    }

    /// Set a JSON column from any serializable value.
    pub fn set_json<T: serde::Serialize>(self, field: &str, value: &T) -> serde_json::Result<Self> {
        let json_val = serde_json::to_value(value)?;
        Ok(self.set(field, json_val))
    }

    /// Number of fields set so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields have been set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the `SET` clause fragment.
    ///
    /// For the i-th field this emits `"<physical>"=$i`, joined with `, `;
    /// parameter order matches field insertion order exactly. Fails with
    /// [`SqlError::InvalidInput`] if no fields were set.
    pub fn build(&self, names: &NameMap) -> SqlResult<Fragment> {
        if self.fields.is_empty() {
            return Err(SqlError::invalid_input("no data to update"));
        }

        let mut frag = Fragment::empty();
        for (i, (field, value)) in self.fields.iter().enumerate() {
            let mut piece = String::new();
            if i > 0 {
                piece.push_str(", ");
            }
            ident::write_quoted(&mut piece, names.resolve(field));
            piece.push('=');
            frag.push(&piece);
            frag.push_bind_value(Arc::clone(value));
        }
        Ok(frag)
    }
}
