//! Parser for Java `.properties` syntax, also used for `.env` files.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("Failed to read properties file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed \\uxxxx escape at line {line}")]
    MalformedUnicodeEscape { line: usize },

    #[error("Failed to parse properties file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<PropertiesError>,
    },
}

impl PropertiesError {
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            Self::MalformedUnicodeEscape { .. } => Self::Parse {
                path: path.to_path_buf(),
                source: Box::new(self),
            },
            other => other,
        }
    }
}

/// Parse properties content into key/value pairs in file order.
///
/// Duplicate keys are kept; callers merging into a map get last-wins semantics.
///
/// # Errors
/// Returns error on a malformed `\uXXXX` escape.
pub fn parse_properties(content: &str) -> Result<Vec<(String, String)>, PropertiesError> {
    let mut entries = Vec::new();
    let mut lines = physical_lines(content).enumerate().peekable();

    while let Some((index, raw)) = lines.next() {
        let line_number = index + 1;
        let trimmed = raw.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = String::from(trimmed);
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        entries.push(split_entry(&logical, line_number)?);
    }

    Ok(entries)
}

/// Physical lines terminated by `\r\n`, `\n` or a lone `\r`.
fn physical_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// UTF-8 when valid, otherwise ISO-8859-1 where every byte is one character.
fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|e| e.into_bytes().into_iter().map(char::from).collect())
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str, line_number: usize) -> Result<(String, String), PropertiesError> {
    let chars: Vec<char> = line.chars().collect();
    let mut key_end = chars.len();
    let mut escaped = false;
    for (i, c) in chars.iter().enumerate() {
        if escaped {
            escaped = false;
        } else if *c == '\\' {
            escaped = true;
        } else if *c == '=' || *c == ':' || is_blank(*c) {
            key_end = i;
            break;
        }
    }

    let mut value_start = key_end;
    while value_start < chars.len() && is_blank(chars[value_start]) {
        value_start += 1;
    }
    if value_start < chars.len() && (chars[value_start] == '=' || chars[value_start] == ':') {
        value_start += 1;
        while value_start < chars.len() && is_blank(chars[value_start]) {
            value_start += 1;
        }
    }

    let key = unescape(&chars[..key_end], line_number)?;
    let value = unescape(&chars[value_start..], line_number)?;
    Ok((key, value))
}

fn unescape(chars: &[char], line_number: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(chars.len());
    let mut iter = chars.iter();
    while let Some(&c) = iter.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match iter.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = iter.by_ref().take(4).collect();
                let code = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or(PropertiesError::MalformedUnicodeEscape { line: line_number })?;
                out.push(code);
            }
            Some(&other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// Read and parse a properties file.
///
/// # Errors
/// Content that is not valid UTF-8 is decoded as ISO-8859-1.
///
/// # Errors
/// Returns error if the file cannot be read or fails to parse.
pub async fn read_properties_file(path: &Path) -> Result<Vec<(String, String)>, PropertiesError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| PropertiesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_properties(&decode(bytes)).map_err(|e| e.in_file(path))
}
