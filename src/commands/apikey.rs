// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::auth;
use crate::store;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("create", sub)) => create(conn, sub),
        _ => Ok(()),
    }
}

fn create(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::require_user(conn, sub.get_one::<String>("token").unwrap())?;

    let raw = auth::generate_secret();
    store::insert_api_key(conn, user.org_id, &auth::digest(&raw))
        .context("Store API key")?;
    store::append_audit(conn, user.id, "created api key").context("Audit API key")?;

    // The only time the secret is ever printable.
    println!("{raw}");
    Ok(())
}
