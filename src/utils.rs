// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const UA: &str = concat!(
    "ledgerdesk/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/ledgerdesk/ledgerdesk)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Shape check only; deliverability is the mail server's problem.
pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Lower-cased, trimmed canonical form used everywhere an email is stored
/// or looked up.
pub fn canonical_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Print `value` as JSON when asked; returns whether output was produced.
pub fn maybe_print_json<T: Serialize>(json_flag: bool, value: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(valid_email("owner@example.com"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("two@@example.com"));
        assert_eq!(canonical_email("  OWNER@Example.COM "), "owner@example.com");
    }
}
