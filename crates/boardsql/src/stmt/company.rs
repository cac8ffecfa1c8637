//! Statements for the companies resource.

use crate::error::SqlResult;
use crate::filter::CompanyFilter;
use crate::fragment::Fragment;
use crate::update::{NameMap, PartialUpdate};

use super::trace_stmt;

/// Result columns, aliased back to the payload's camel-case field names.
const COLUMNS: &str =
    r#"handle, name, description, num_employees AS "numEmployees", logo_url AS "logoUrl""#;

/// Logical-to-physical mapping for company update payloads.
pub fn name_map() -> NameMap {
    NameMap::new()
        .map("numEmployees", "num_employees")
        .map("logoUrl", "logo_url")
}

/// Insert data for a company row.
#[derive(Clone, Debug)]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: i32,
    pub logo_url: Option<String>,
}

/// `INSERT INTO companies ... RETURNING <columns>`.
pub fn insert(company: NewCompany) -> Fragment {
    let mut frag = Fragment::new(
        "INSERT INTO companies (handle, name, description, num_employees, logo_url) VALUES (",
    );
    frag.push_bind(company.handle);
    frag.push(", ");
    frag.push_bind(company.name);
    frag.push(", ");
    frag.push_bind(company.description);
    frag.push(", ");
    frag.push_bind(company.num_employees);
    frag.push(", ");
    frag.push_bind(company.logo_url);
    frag.push(") RETURNING ");
    frag.push(COLUMNS);
    trace_stmt(&frag);
    frag
}

/// `SELECT <columns> FROM companies ORDER BY name`.
pub fn select_all() -> Fragment {
    let mut frag = Fragment::new("SELECT ");
    frag.push(COLUMNS);
    frag.push(" FROM companies ORDER BY name");
    trace_stmt(&frag);
    frag
}

/// `SELECT <columns> FROM companies WHERE <filter>`.
///
/// A filter that supplied criteria but produced no clauses (an empty name)
/// falls back to the unfiltered select.
pub fn select_filtered(filter: &CompanyFilter) -> SqlResult<Fragment> {
    let predicate = filter.build()?;
    let mut frag = Fragment::new("SELECT ");
    frag.push(COLUMNS);
    frag.push(" FROM companies");
    if !predicate.is_empty() {
        frag.push(" WHERE ");
        frag.push_fragment(predicate);
    }
    trace_stmt(&frag);
    Ok(frag)
}

/// `SELECT <columns> FROM companies WHERE handle = $1`.
pub fn select_by_handle(handle: &str) -> Fragment {
    let mut frag = Fragment::new("SELECT ");
    frag.push(COLUMNS);
    frag.push(" FROM companies WHERE handle = ");
    frag.push_bind(handle.to_string());
    trace_stmt(&frag);
    frag
}

/// `UPDATE companies SET <set clause> WHERE handle = $n RETURNING <columns>`.
///
/// The handle parameter is appended after the payload's values, so its
/// placeholder index is `changes.len() + 1`.
pub fn update(handle: &str, changes: &PartialUpdate) -> SqlResult<Fragment> {
    let set = changes.build(&name_map())?;
    let mut frag = Fragment::new("UPDATE companies SET ");
    frag.push_fragment(set);
    frag.push(" WHERE handle = ");
    frag.push_bind(handle.to_string());
    frag.push(" RETURNING ");
    frag.push(COLUMNS);
    trace_stmt(&frag);
    Ok(frag)
}

/// `DELETE FROM companies WHERE handle = $1 RETURNING handle`.
pub fn delete(handle: &str) -> Fragment {
    let mut frag = Fragment::new("DELETE FROM companies WHERE handle = ");
    frag.push_bind(handle.to_string());
    frag.push(" RETURNING handle");
    trace_stmt(&frag);
    frag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_binds_all_columns() {
        let frag = insert(NewCompany {
            handle: "c1".into(),
            name: "C1".into(),
            description: "Desc".into(),
            num_employees: 10,
            logo_url: None,
        });
        assert_eq!(
            frag.to_sql(),
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING handle, name, description, \
             num_employees AS \"numEmployees\", logo_url AS \"logoUrl\""
        );
        assert_eq!(frag.params_ref().len(), 5);
    }

    #[test]
    fn select_all_orders_by_name() {
        let frag = select_all();
        assert!(frag.to_sql().ends_with("FROM companies ORDER BY name"));
        assert_eq!(frag.params_ref().len(), 0);
    }

    #[test]
    fn select_filtered_splices_predicate() {
        let filter = CompanyFilter::new().name("C").min_employees("1");
        let frag = select_filtered(&filter).unwrap();
        assert!(
            frag.to_sql()
                .ends_with(r#"FROM companies WHERE "name" ILIKE $1 AND num_employees >= $2"#)
        );
        assert_eq!(frag.params_ref().len(), 2);
    }

    #[test]
    fn select_filtered_empty_predicate_drops_where() {
        let filter = CompanyFilter::new().name("");
        let frag = select_filtered(&filter).unwrap();
        assert!(!frag.to_sql().contains("WHERE"));
    }

    #[test]
    fn select_filtered_propagates_invalid_input() {
        let filter = CompanyFilter::new().min_employees("9").max_employees("1");
        assert!(select_filtered(&filter).unwrap_err().is_invalid_input());
    }

    #[test]
    fn update_appends_handle_after_set_values() {
        let changes = PartialUpdate::new()
            .set("name", "New Name")
            .set("numEmployees", 25i32);
        let frag = update("c1", &changes).unwrap();
        assert_eq!(
            frag.to_sql(),
            "UPDATE companies SET \"name\"=$1, \"num_employees\"=$2 WHERE handle = $3 \
             RETURNING handle, name, description, num_employees AS \"numEmployees\", \
             logo_url AS \"logoUrl\""
        );
        assert_eq!(frag.params_ref().len(), 3);
    }

    #[test]
    fn update_empty_payload_is_invalid_input() {
        let err = update("c1", &PartialUpdate::new()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn delete_returns_handle() {
        let frag = delete("c1");
        assert_eq!(
            frag.to_sql(),
            "DELETE FROM companies WHERE handle = $1 RETURNING handle"
        );
    }
}
