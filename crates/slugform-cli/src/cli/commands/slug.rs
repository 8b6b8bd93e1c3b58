//! `slugform slug` – print slugs.

use anyhow::Result;
use slugform_core::config::{SlugStyle, SlugformConfig};
use slugform_core::slug::{slugify, slugify_ascii};

pub struct SlugArgs<'a> {
    pub text: &'a [String],
    pub ascii: bool,
    pub delim: Option<&'a str>,
}

/// One slug per input; `--ascii` or an ascii config style selects the
/// transliterating slugifier.
pub fn slug_lines(cfg: &SlugformConfig, args: &SlugArgs<'_>) -> Vec<String> {
    let style = if args.ascii {
        SlugStyle::Ascii
    } else {
        cfg.slug_style
    };
    let delim = args.delim.unwrap_or(cfg.delimiter.as_str());
    args.text
        .iter()
        .map(|text| match style {
            SlugStyle::Browser => slugify(text),
            SlugStyle::Ascii => slugify_ascii(text, delim),
        })
        .collect()
}

pub fn run_slug(cfg: &SlugformConfig, args: &SlugArgs<'_>) -> Result<()> {
    for line in slug_lines(cfg, args) {
        println!("{line}");
    }
    Ok(())
}
