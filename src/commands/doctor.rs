// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::service::FREE_USAGE_LIMIT;
use crate::utils::pretty_table;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Storage reachable at all
    if let Err(e) = conn.query_row("SELECT 1", [], |r| r.get::<_, i64>(0)) {
        rows.push(vec!["database_unreachable".into(), e.to_string()]);
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
        return Ok(());
    }

    // 2) Orphaned rows: children whose parent is gone
    let orphan_checks: [(&str, &str); 5] = [
        (
            "user_without_org",
            "SELECT email FROM users WHERE org_id NOT IN (SELECT id FROM organizations)",
        ),
        (
            "report_without_org",
            "SELECT CAST(id AS TEXT) FROM reports WHERE org_id NOT IN (SELECT id FROM organizations)",
        ),
        (
            "api_key_without_org",
            "SELECT CAST(id AS TEXT) FROM api_keys WHERE org_id NOT IN (SELECT id FROM organizations)",
        ),
        (
            "session_without_user",
            "SELECT CAST(id AS TEXT) FROM sessions WHERE user_id NOT IN (SELECT id FROM users)",
        ),
        (
            "audit_without_user",
            "SELECT CAST(id AS TEXT) FROM audit_log WHERE user_id NOT IN (SELECT id FROM users)",
        ),
    ];
    for (issue, sql) in orphan_checks {
        let mut stmt = conn.prepare(sql)?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let detail: String = r.get(0)?;
            rows.push(vec![issue.into(), detail]);
        }
    }

    // 3) Usage counters past the free tier mean the conditional increment
    //    was bypassed somewhere.
    let mut stmt =
        conn.prepare("SELECT id, name, usage FROM organizations WHERE usage > ?1")?;
    let mut cur = stmt.query([FREE_USAGE_LIMIT])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let usage: i64 = r.get(2)?;
        rows.push(vec![
            "usage_over_limit".into(),
            format!("org {} '{}' usage={}", id, name, usage),
        ]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
