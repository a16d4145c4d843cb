// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use rusqlite::Connection;

use crate::auth;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let me = auth::require_user(conn, sub.get_one::<String>("token").unwrap())?;
    let org = store::get_organization(conn, me.org_id)?
        .ok_or_else(|| anyhow!("organization not found"))?;

    let reports = store::count_reports_for_org(conn, org.id)?;
    let users = store::count_users_for_org(conn, org.id)?;

    let value = serde_json::json!({
        "usage": org.usage,
        "reports": reports,
        "users": users,
    });
    if !maybe_print_json(sub.get_flag("json"), &value)? {
        let rows = vec![
            vec!["usage".to_string(), org.usage.to_string()],
            vec!["reports".to_string(), reports.to_string()],
            vec!["users".to_string(), users.to_string()],
        ];
        println!("{}", pretty_table(&["Metric", "Count"], rows));
    }
    Ok(())
}
