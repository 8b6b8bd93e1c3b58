//! Compound selector parsing and matching.
//!
//! Supported: `tag`, `*`, `#id`, `.class`, `[attr]`, `[attr=value]` (value may
//! be quoted), combined without spaces, and comma-separated alternatives.
//! Commas inside `[...]` belong to the attribute value, not the list.
//! Combinators (`a b`, `a > b`, `a + b`, `a ~ b`) are rejected.

use std::fmt;
use std::str::FromStr;

use super::Element;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected {ch:?} at position {pos} in selector {selector:?}")]
    UnexpectedChar {
        selector: String,
        ch: char,
        pos: usize,
    },
    #[error("expected a name at position {pos} in selector {selector:?}")]
    MissingName { selector: String, pos: usize },
    #[error("unterminated attribute selector in {selector:?}")]
    UnterminatedAttribute { selector: String },
    #[error("combinators are not supported (selector {selector:?})")]
    Combinator { selector: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match (&a.value, element.attrs.get(&a.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(want), Some(have)) => want == have,
        })
    }
}

/// A parsed selector: one or more compound alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        for part in split_alternatives(input) {
            alternatives.push(parse_compound(input, part.trim())?);
        }
        Ok(Self {
            source: input.trim().to_string(),
            alternatives,
        })
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives.iter().any(|c| c.matches(element))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Splits on commas outside attribute brackets and quotes.
fn split_alternatives(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_brackets = false;
    let mut quote: Option<char> = None;

    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') if in_brackets => quote = Some(c),
            (None, '[') => in_brackets = true,
            (None, ']') => in_brackets = false,
            (None, ',') if !in_brackets => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(full: &str, part: &str) -> Result<Compound, SelectorError> {
    if part.is_empty() {
        return Err(SelectorError::Empty);
    }
    let chars: Vec<char> = part.chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();

    let read_name = |pos: &mut usize| -> Result<String, SelectorError> {
        let start = *pos;
        while *pos < chars.len() && is_name_char(chars[*pos]) {
            *pos += 1;
        }
        if *pos == start {
            return Err(SelectorError::MissingName {
                selector: full.to_string(),
                pos: start,
            });
        }
        Ok(chars[start..*pos].iter().collect())
    };

    if chars[0] == '*' {
        pos = 1;
    } else if is_name_char(chars[0]) {
        compound.tag = Some(read_name(&mut pos)?);
    }

    while pos < chars.len() {
        match chars[pos] {
            '#' => {
                pos += 1;
                compound.id = Some(read_name(&mut pos)?);
            }
            '.' => {
                pos += 1;
                compound.classes.push(read_name(&mut pos)?);
            }
            '[' => {
                pos += 1;
                compound.attrs.push(parse_attr(full, &chars, &mut pos)?);
            }
            ' ' | '>' | '+' | '~' => {
                return Err(SelectorError::Combinator {
                    selector: full.to_string(),
                });
            }
            ch => {
                return Err(SelectorError::UnexpectedChar {
                    selector: full.to_string(),
                    ch,
                    pos,
                });
            }
        }
    }
    Ok(compound)
}

/// Parses `name]` or `name=value]` with `pos` just past the `[`.
fn parse_attr(full: &str, chars: &[char], pos: &mut usize) -> Result<AttrMatch, SelectorError> {
    let unterminated = || SelectorError::UnterminatedAttribute {
        selector: full.to_string(),
    };

    let start = *pos;
    while *pos < chars.len() && is_name_char(chars[*pos]) {
        *pos += 1;
    }
    if *pos == start {
        return Err(SelectorError::MissingName {
            selector: full.to_string(),
            pos: start,
        });
    }
    let name: String = chars[start..*pos].iter().collect();

    match chars.get(*pos) {
        Some(']') => {
            *pos += 1;
            return Ok(AttrMatch { name, value: None });
        }
        Some('=') => *pos += 1,
        Some(&ch) => {
            return Err(SelectorError::UnexpectedChar {
                selector: full.to_string(),
                ch,
                pos: *pos,
            })
        }
        None => return Err(unterminated()),
    }

    let value = match chars.get(*pos) {
        Some(&quote) if quote == '"' || quote == '\'' => {
            *pos += 1;
            let start = *pos;
            while *pos < chars.len() && chars[*pos] != quote {
                *pos += 1;
            }
            if *pos >= chars.len() {
                return Err(unterminated());
            }
            let value: String = chars[start..*pos].iter().collect();
            *pos += 1;
            value
        }
        Some(_) => {
            let start = *pos;
            while *pos < chars.len() && chars[*pos] != ']' {
                *pos += 1;
            }
            chars[start..*pos].iter().collect()
        }
        None => return Err(unterminated()),
    };

    match chars.get(*pos) {
        Some(']') => {
            *pos += 1;
            Ok(AttrMatch {
                name,
                value: Some(value),
            })
        }
        _ => Err(unterminated()),
    }
}
