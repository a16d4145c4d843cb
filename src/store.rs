// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

use crate::models::{Organization, Role, User};

fn user_from_row(r: &Row) -> Result<User> {
    let role_raw: String = r.get(3)?;
    let role = Role::parse(&role_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            format!("unknown role '{role_raw}'").into(),
        )
    })?;
    Ok(User {
        id: r.get(0)?,
        email: r.get(1)?,
        password_hash: r.get(2)?,
        role,
        org_id: r.get(4)?,
    })
}

const USER_COLS: &str = "id, email, password_hash, role, org_id";

pub fn find_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
    conn.query_row(
        &format!("SELECT {USER_COLS} FROM users WHERE email=?1"),
        params![email],
        user_from_row,
    )
    .optional()
}

pub fn get_user(conn: &Connection, id: i64) -> Result<Option<User>> {
    conn.query_row(
        &format!("SELECT {USER_COLS} FROM users WHERE id=?1"),
        params![id],
        user_from_row,
    )
    .optional()
}

pub fn get_organization(conn: &Connection, id: i64) -> Result<Option<Organization>> {
    conn.query_row(
        "SELECT id, name, usage FROM organizations WHERE id=?1",
        params![id],
        |r| {
            Ok(Organization {
                id: r.get(0)?,
                name: r.get(1)?,
                usage: r.get(2)?,
            })
        },
    )
    .optional()
}

/// Registration is atomic: the organization and its owner either both exist
/// afterwards or neither does.
pub fn create_org_with_owner(
    conn: &mut Connection,
    org_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<(i64, i64)> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO organizations(name, usage) VALUES (?1, 0)",
        params![org_name],
    )?;
    let org_id = tx.last_insert_rowid();
    tx.execute(
        "INSERT INTO users(email, password_hash, role, org_id) VALUES (?1,?2,?3,?4)",
        params![email, password_hash, Role::Owner.as_str(), org_id],
    )?;
    let user_id = tx.last_insert_rowid();
    tx.commit()?;
    Ok((org_id, user_id))
}

pub fn create_user(
    conn: &Connection,
    email: &str,
    password_hash: &str,
    role: Role,
    org_id: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO users(email, password_hash, role, org_id) VALUES (?1,?2,?3,?4)",
        params![email, password_hash, role.as_str(), org_id],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Conditional quota consumption: bumps `usage` only while it is still below
/// `limit`, in one statement, so two concurrent analyses cannot both slip
/// under the bar. Returns whether a unit was consumed.
pub fn increment_usage_if_below(conn: &Connection, org_id: i64, limit: i64) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE organizations SET usage = usage + 1 WHERE id=?1 AND usage < ?2",
        params![org_id, limit],
    )?;
    Ok(changed == 1)
}

pub fn append_report(conn: &Connection, org_id: i64, data: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO reports(org_id, data) VALUES (?1, ?2)",
        params![org_id, data],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn append_audit(conn: &Connection, user_id: i64, action: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO audit_log(user_id, action, time) VALUES (?1, ?2, ?3)",
        params![user_id, action, Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)],
    )?;
    Ok(())
}

pub fn count_reports_for_org(conn: &Connection, org_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM reports WHERE org_id=?1",
        params![org_id],
        |r| r.get(0),
    )
}

pub fn count_users_for_org(conn: &Connection, org_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM users WHERE org_id=?1",
        params![org_id],
        |r| r.get(0),
    )
}

pub fn list_users_for_org(conn: &Connection, org_id: i64) -> Result<Vec<User>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {USER_COLS} FROM users WHERE org_id=?1 ORDER BY email"
    ))?;
    let rows = stmt.query_map(params![org_id], user_from_row)?;
    rows.collect()
}

pub fn insert_api_key(conn: &Connection, org_id: i64, key_hash: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO api_keys(org_id, key_hash) VALUES (?1, ?2)",
        params![org_id, key_hash],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_session(
    conn: &Connection,
    user_id: i64,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<()> {
    conn.execute(
        "INSERT INTO sessions(user_id, token_hash, expires_at) VALUES (?1, ?2, ?3)",
        params![user_id, token_hash, expires_at.to_rfc3339_opts(SecondsFormat::Secs, true)],
    )?;
    Ok(())
}

/// Resolve a session token digest to its user, honoring expiry.
pub fn session_user(conn: &Connection, token_hash: &str) -> Result<Option<User>> {
    conn.query_row(
        "SELECT u.id, u.email, u.password_hash, u.role, u.org_id
         FROM sessions s JOIN users u ON u.id = s.user_id
         WHERE s.token_hash=?1 AND s.expires_at > ?2",
        params![token_hash, Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)],
        user_from_row,
    )
    .optional()
}
