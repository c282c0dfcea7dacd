//! Default-package resolution.
//!
//! Struct values owned by the "local" package are spelled with their bare
//! name and need no import. Which package counts as local comes from the
//! `GOPACKAGE` environment variable (set by `go generate` for the file
//! being generated), falling back to `main`. The variable is read once per
//! process and cached; generators that need a different local package take
//! it explicitly via [`crate::generate::Generator::new`].

use std::sync::OnceLock;

/// Fallback package name when `GOPACKAGE` is unset or empty.
pub const LOCAL_PACKAGE: &str = "main";

/// The process-wide default package, resolved on first access. Cached for
/// the lifetime of the process; later environment changes are not seen.
pub fn default_package() -> &'static str {
    static DEFAULT: OnceLock<String> = OnceLock::new();
    DEFAULT.get_or_init(|| resolve(std::env::var("GOPACKAGE").ok().as_deref()))
}

fn resolve(gopackage: Option<&str>) -> String {
    match gopackage {
        Some(pkg) if !pkg.is_empty() => pkg.to_string(),
        _ => LOCAL_PACKAGE.to_string(),
    }
}
