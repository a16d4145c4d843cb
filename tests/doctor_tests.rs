// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerdesk::{commands, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

#[test]
fn doctor_passes_on_a_clean_database() {
    let conn = setup();
    conn.execute("INSERT INTO organizations(name, usage) VALUES('Acme', 0)", [])
        .unwrap();
    conn.execute(
        "INSERT INTO users(email, password_hash, role, org_id) VALUES('owner@acme.test','x','owner',1)",
        [],
    )
    .unwrap();
    commands::doctor::handle(&conn).unwrap();
}

#[test]
fn doctor_scans_orphans_and_quota_overruns() {
    let conn = setup();
    conn.execute("INSERT INTO organizations(name, usage) VALUES('Acme', 99)", [])
        .unwrap();

    // Orphans can only exist if something bypassed the foreign keys;
    // reproduce that state directly.
    conn.execute_batch("PRAGMA foreign_keys = OFF;").unwrap();
    conn.execute(
        "INSERT INTO sessions(user_id, token_hash, expires_at) VALUES(42, 'deadbeef', '2099-01-01T00:00:00Z')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO users(email, password_hash, role, org_id) VALUES('ghost@gone.test','x','member',7)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO audit_log(user_id, action, time) VALUES(42, 'generated report', '2025-01-01T00:00:00Z')",
        [],
    )
    .unwrap();

    commands::doctor::handle(&conn).unwrap();
}
