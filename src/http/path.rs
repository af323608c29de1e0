//! Path template expansion
//!
//! Endpoint paths are declared with positional placeholders, e.g.
//! `/customers/%1$s/wallets/ledger-entries`. Each placeholder is replaced by
//! the matching argument, escaped as a single URL path segment.

use crate::error::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching positional placeholders: %1$s, %2$s, ...
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(\d+)\$s").expect("placeholder regex is valid"));

/// Characters escaped inside a path segment (RFC 3986 unreserved are kept)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escape a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Expand a path template with positional arguments
pub fn expand_path(template: &str, args: &[&str]) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let index: usize = caps[1]
            .parse()
            .map_err(|_| Error::invalid_params(format!("bad placeholder in '{template}'")))?;

        let arg = index
            .checked_sub(1)
            .and_then(|i| args.get(i))
            .ok_or_else(|| {
                Error::invalid_params(format!(
                    "path '{template}' needs argument {index}, got {}",
                    args.len()
                ))
            })?;

        if arg.is_empty() {
            return Err(Error::invalid_params(format!(
                "path argument {index} for '{template}' is empty"
            )));
        }

        out.push_str(&template[last..whole.start()]);
        out.push_str(&encode_segment(arg));
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}
