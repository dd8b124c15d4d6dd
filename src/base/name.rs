//! Rule and token names.

/// A rule, token or dialect name - cheap to clone, inline for short strings.
pub type Name = smol_str::SmolStr;

/// Check whether `name` is usable as a rule or token identifier.
///
/// Names follow Unicode Standard Annex #31 identifier rules, with `-` and `_`
/// also accepted after the first character (`select-statement`, `CHR_DOT`).
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if unicode_ident::is_xid_start(first) || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| unicode_ident::is_xid_continue(c) || c == '-')
}
