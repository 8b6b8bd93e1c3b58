//! `slugform check` – validate slugs.

use anyhow::{bail, Result};
use slugform_core::slug::{Slug, SlugError};

pub fn verdicts(slugs: &[String]) -> Vec<(&str, Result<Slug, SlugError>)> {
    slugs.iter().map(|s| (s.as_str(), Slug::parse(s))).collect()
}

pub fn run_check(slugs: &[String]) -> Result<()> {
    let mut invalid = 0;
    for (input, verdict) in verdicts(slugs) {
        match verdict {
            Ok(_) => println!("ok       {input}"),
            Err(err) => {
                invalid += 1;
                println!("invalid  {input}: {err}");
            }
        }
    }
    if invalid > 0 {
        bail!("{invalid} of {} inputs are not valid slugs", slugs.len());
    }
    Ok(())
}
