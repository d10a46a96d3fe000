//! Slug derivation and uniqueness resolution.
//!
//! A slug (or "key", for tracks, statuses, and steps) is the URL-safe
//! identifier derived from an entity's display name. [`normalize`] produces
//! a candidate; [`resolve_unique`] probes the owning collection through a
//! caller-supplied existence predicate until it finds a free value.

use std::future::Future;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default number of sequential `-1`, `-2`, ... probes before falling back
/// to a timestamp suffix.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Derive a slug candidate from a display name.
///
/// Lowercases and trims the input, drops every character that is not an
/// ASCII letter, digit, whitespace, underscore, or hyphen, then collapses
/// each run of whitespace/underscore/hyphen characters into a single hyphen.
/// Leading and trailing hyphens never appear in the output.
///
/// The result can be empty (e.g. a name made entirely of punctuation);
/// callers still run the uniqueness step on it.
///
/// # Examples
///
/// ```
/// use museboard_core::slug::normalize;
///
/// assert_eq!(normalize("Hello, World!"), "hello-world");
/// assert_eq!(normalize("  __Foo__Bar--  "), "foo-bar");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let trimmed = lowered.trim();

    let mut slug = String::with_capacity(trimmed.len());
    let mut pending_separator = false;
    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = true;
        }
        // Other characters are removed outright and do not act as separators.
    }
    slug
}

/// Resolve `base` to a value the collection does not contain yet.
///
/// Probes sequentially: `base`, then `base-1`, `base-2`, ... for up to
/// `max_attempts` total checks. If every probe collides, falls back to
/// `base-<unix-millis>`, which is accepted without a further check.
///
/// `exists` performs one point lookup per call; any error it returns is
/// propagated immediately. The probe-then-insert sequence is not atomic --
/// two racing writers can both see a candidate as free, and the store's
/// unique constraint rejects the loser at insert time.
pub async fn resolve_unique<F, Fut, E>(
    base: &str,
    mut exists: F,
    max_attempts: u32,
) -> Result<String, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let mut candidate = base.to_string();
    let mut attempt = 0;
    while attempt < max_attempts {
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
        attempt += 1;
        candidate = format!("{base}-{attempt}");
    }

    Ok(format!("{base}-{}", unix_millis()))
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn normalize_basic_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello-world");
    }

    #[test]
    fn normalize_underscores_and_hyphen_runs() {
        assert_eq!(normalize("  __Foo__Bar--  "), "foo-bar");
    }

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_punctuation_only() {
        assert_eq!(normalize("!!!???"), "");
    }

    #[test]
    fn normalize_punctuation_is_not_a_separator() {
        assert_eq!(normalize("foo!bar"), "foobar");
    }

    #[test]
    fn normalize_mixed_separator_run_collapses() {
        assert_eq!(normalize("a _- b"), "a-b");
    }

    #[test]
    fn normalize_non_ascii_letters_are_dropped() {
        assert_eq!(normalize("café au lait"), "caf-au-lait");
    }

    #[test]
    fn normalize_output_charset_invariant() {
        for name in ["Track #1 (final_MIX) -- v2!", "  ~~~  ", "ALL CAPS", "tabs\tand\nnewlines"] {
            let slug = normalize(name);
            assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }

    #[tokio::test]
    async fn resolve_unique_returns_base_when_free() {
        let result: Result<String, Infallible> =
            resolve_unique("demo", |_| async { Ok(false) }, DEFAULT_MAX_ATTEMPTS).await;
        assert_eq!(result.unwrap(), "demo");
    }

    #[tokio::test]
    async fn resolve_unique_probes_sequential_suffixes() {
        let result: Result<String, Infallible> = resolve_unique(
            "demo",
            |candidate| async move { Ok(candidate == "demo" || candidate == "demo-1") },
            DEFAULT_MAX_ATTEMPTS,
        )
        .await;
        assert_eq!(result.unwrap(), "demo-2");
    }

    #[tokio::test]
    async fn resolve_unique_falls_back_to_timestamp() {
        let result: Result<String, Infallible> =
            resolve_unique("x", |_| async { Ok(true) }, 3).await;
        let slug = result.unwrap();
        let suffix = slug.strip_prefix("x-").expect("fallback keeps the base prefix");
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        // The timestamp fallback is well past the sequential range.
        assert_ne!(suffix, "1");
        assert_ne!(suffix, "2");
    }

    #[tokio::test]
    async fn resolve_unique_propagates_lookup_errors() {
        let result: Result<String, &'static str> =
            resolve_unique("demo", |_| async { Err("connection refused") }, 100).await;
        assert_eq!(result.unwrap_err(), "connection refused");
    }

    #[tokio::test]
    async fn resolve_unique_handles_empty_base() {
        let result: Result<String, Infallible> = resolve_unique(
            "",
            |candidate| async move { Ok(candidate.is_empty()) },
            DEFAULT_MAX_ATTEMPTS,
        )
        .await;
        assert_eq!(result.unwrap(), "-1");
    }
}
