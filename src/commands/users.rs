// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use rusqlite::Connection;

use crate::auth;
use crate::models::Role;
use crate::store;
use crate::utils::{canonical_email, pretty_table, valid_email};

/// Invited members log in after a password reset; until then the account
/// carries this hashed placeholder, same as the original product.
const INVITE_TEMP_PASSWORD: &str = "temp123";

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("invite", sub)) => invite(conn, sub),
        Some(("list", sub)) => list(conn, sub),
        Some(("count", sub)) => count(conn, sub),
        _ => Ok(()),
    }
}

fn invite(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let me = auth::require_user(conn, sub.get_one::<String>("token").unwrap())?;
    if !me.role.can_invite() {
        bail!("not allowed");
    }

    let invite_email = canonical_email(sub.get_one::<String>("email").unwrap());
    if invite_email.is_empty() {
        bail!("email is required");
    }
    if !valid_email(&invite_email) {
        bail!("'{}' is not a valid email address", invite_email);
    }
    if store::find_user_by_email(conn, &invite_email)?.is_some() {
        bail!("email already exists");
    }

    let password_hash = auth::hash_password(INVITE_TEMP_PASSWORD)?;
    store::create_user(conn, &invite_email, &password_hash, Role::Member, me.org_id)
        .context("Invite user")?;
    store::append_audit(conn, me.id, "invited user").context("Audit invite")?;
    println!("user added");
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let me = auth::require_user(conn, sub.get_one::<String>("token").unwrap())?;
    if me.role != Role::Owner {
        bail!("owner only");
    }

    let users = store::list_users_for_org(conn, me.org_id)?;
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| vec![u.email.clone(), u.role.as_str().to_string()])
        .collect();

    if sub.get_flag("json") {
        let entries: Vec<serde_json::Value> = users
            .iter()
            .map(|u| serde_json::json!({"email": u.email, "role": u.role.as_str()}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{}", pretty_table(&["Email", "Role"], rows));
    }
    Ok(())
}

fn count(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let me = auth::require_user(conn, sub.get_one::<String>("token").unwrap())?;
    let n = store::count_users_for_org(conn, me.org_id)?;
    println!("{n}");
    Ok(())
}
