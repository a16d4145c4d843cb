// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;

use crate::auth;
use crate::service;
use crate::summary::FinancialSummary;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::require_user(conn, sub.get_one::<String>("token").unwrap())?;
    let path = sub.get_one::<String>("file").unwrap().trim();
    let bytes = fs::read(path).with_context(|| format!("Open ledger CSV {}", path))?;

    let summary = service::analyze_ledger(conn, &user, &bytes)?;

    if !maybe_print_json(sub.get_flag("json"), &summary)? {
        println!("{}", pretty_table(&["Metric", "Value"], summary_rows(&summary)));
    }
    Ok(())
}

fn summary_rows(s: &FinancialSummary) -> Vec<Vec<String>> {
    let fields = [
        ("revenue", s.revenue),
        ("expenses", s.expenses),
        ("current_assets", s.current_assets),
        ("non_current_assets_gross", s.non_current_assets_gross),
        ("accumulated_depreciation", s.accumulated_depreciation),
        ("net_non_current_assets", s.net_non_current_assets),
        ("total_assets", s.total_assets),
        ("current_liabilities", s.current_liabilities),
        ("non_current_liabilities", s.non_current_liabilities),
        ("total_liabilities", s.total_liabilities),
    ];
    fields
        .iter()
        .map(|(name, value)| vec![name.to_string(), format!("{:.2}", value)])
        .collect()
}
