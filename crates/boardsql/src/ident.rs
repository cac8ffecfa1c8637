//! Quoted SQL column rendering.
//!
//! Column names in generated fragments are always emitted in quoted form
//! (`"first_name"`), so a name is never mistaken for a keyword. Quoting does
//! **not** validate that the name is a real column; schema validation happens
//! upstream of the builders.

/// Render `name` as a quoted SQL identifier.
pub fn quoted(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    write_quoted(&mut out, name);
    out
}

/// Write `name` into `out` surrounded by double quotes, escaping `"` as `""`.
pub(crate) fn write_quoted(out: &mut String, name: &str) {
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
            out.push('"');
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}
