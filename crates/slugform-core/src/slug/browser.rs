//! Keystroke slugifier: regex passes applied in a fixed order.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
// Word characters are ASCII only: letters, digits, underscore.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());
static LEADING_HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-+").unwrap());
static TRAILING_HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+$").unwrap());
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_\-]+").unwrap());

/// Derives a slug from arbitrary text.
///
/// Steps, each applied to the output of the previous one:
///
/// 1. lowercase
/// 2. whitespace runs become `-`
/// 3. drop everything that is not `[A-Za-z0-9_-]`
/// 4. collapse `--+` into `-`
/// 5. trim leading and trailing hyphen runs
/// 6. runs of whitespace, `_` or `-` become a single `-`
/// 7. trim edge hyphens again (step 6 turns an edge `_` into `-`)
///
/// The result contains only `[a-z0-9-]`, never starts or ends with `-`,
/// never contains `--`, and is a fixed point: `slugify(&slugify(s)) == slugify(s)`.
///
/// # Examples
///
/// - `slugify("My Title")` → `"my-title"`
/// - `slugify("Hello, World!  Foo_Bar")` → `"hello-world-foo-bar"`
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lower, "-");
    let words = NON_WORD.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&words, "-");
    let head_trimmed = LEADING_HYPHENS.replace(&collapsed, "");
    let trimmed = TRAILING_HYPHENS.replace(&head_trimmed, "");
    let separated = SEPARATOR_RUN.replace_all(&trimmed, "-");
    separated.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(slugify("My Title"), "my-title");
    }

    #[test]
    fn punctuation_and_underscore() {
        assert_eq!(slugify("Hello, World!  Foo_Bar"), "hello-world-foo-bar");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   \t\n "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn collapses_hyphen_runs() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("a---b"), "a-b");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(slugify("  -leading and trailing-  "), "leading-and-trailing");
    }

    #[test]
    fn edge_underscores_do_not_leave_hyphens() {
        assert_eq!(slugify("_private_"), "private");
        assert_eq!(slugify("__init__"), "init");
    }

    #[test]
    fn mixed_separator_runs() {
        assert_eq!(slugify("a_-_b"), "a-b");
        assert_eq!(slugify("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Café Olé"), "caf-ol");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(slugify("Release 2.0.1"), "release-201");
    }

    const SAMPLES: &[&str] = &[
        "",
        "-",
        "_",
        "- _ -",
        "Hello, World!  Foo_Bar",
        "  My   Title  ",
        "__init__.py",
        "a\u{00a0}b",
        "Tab\tSeparated\nLines",
        "ÀÉÎÕÜ and more",
        "--_--x--_--",
        "100% Pure & Simple",
        "Ⅻ KELVIN \u{212a}",
    ];

    #[test]
    fn output_charset_and_shape() {
        for sample in SAMPLES {
            let out = slugify(sample);
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{sample:?} -> {out:?}"
            );
            assert!(!out.starts_with('-') && !out.ends_with('-'), "{sample:?} -> {out:?}");
            assert!(!out.contains("--"), "{sample:?} -> {out:?}");
        }
    }

    #[test]
    fn idempotent() {
        for sample in SAMPLES {
            let once = slugify(sample);
            assert_eq!(slugify(&once), once, "not a fixed point for {sample:?}");
        }
    }
}
