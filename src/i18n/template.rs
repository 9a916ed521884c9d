//! Positional placeholder substitution.
//!
//! Templates use `${N}` placeholders where `N` is a zero-based index into
//! the argument list. Substitution is a single pass: text produced by an
//! argument is never scanned for further placeholders. A placeholder whose
//! index has no matching argument is left in the output as written.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\$\{(\d+)\}").unwrap())
}

/// Fill the `${N}` placeholders of `template` with `args`.
///
/// Returns the template unchanged (borrowed) when it has no placeholder.
pub fn fill<'t, A: Display>(template: &'t str, args: &[A]) -> Cow<'t, str> {
    placeholder_regex().replace_all(template, |caps: &Captures<'_>| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| args.get(index))
            .map(|arg| arg.to_string())
            .unwrap_or_else(|| caps[0].to_string())
    })
}

/// The distinct placeholder indices referenced by `template`.
pub fn placeholders(template: &str) -> BTreeSet<usize> {
    placeholder_regex()
        .captures_iter(template)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}
