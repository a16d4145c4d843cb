// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use rusqlite::Connection;

use crate::auth;
use crate::store;
use crate::utils::{canonical_email, valid_email};

const MIN_PASSWORD_LEN: usize = 8;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("register", sub)) => register(conn, sub),
        Some(("login", sub)) => login(conn, sub),
        Some(("google", sub)) => google(conn, sub),
        _ => Ok(()),
    }
}

fn register(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let org_name = sub.get_one::<String>("org").unwrap().trim();
    let email = canonical_email(sub.get_one::<String>("email").unwrap());
    let password = sub.get_one::<String>("password").unwrap().as_str();

    if org_name.is_empty() || email.is_empty() || password.is_empty() {
        bail!("org, email, and password are required");
    }
    if !valid_email(&email) {
        bail!("'{}' is not a valid email address", email);
    }
    if password.len() < MIN_PASSWORD_LEN {
        bail!("password must be at least {} characters", MIN_PASSWORD_LEN);
    }
    if store::find_user_by_email(conn, &email)?.is_some() {
        bail!("email already exists");
    }

    let password_hash = auth::hash_password(password)?;
    store::create_org_with_owner(conn, org_name, &email, &password_hash)
        .context("Register organization")?;
    println!("registered");
    Ok(())
}

fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let email = canonical_email(sub.get_one::<String>("email").unwrap());
    let password = sub.get_one::<String>("password").unwrap().as_str();

    if email.is_empty() || password.is_empty() {
        bail!("email and password are required");
    }

    let user = store::find_user_by_email(conn, &email)?;
    let user = match user {
        Some(u) if auth::verify_password(password, &u.password_hash) => u,
        _ => bail!("bad login"),
    };

    let token = auth::issue_session(conn, user.id)?;
    println!("{token}");
    Ok(())
}

/// Log in with a Google ID token. An unknown verified email registers on
/// the spot: a fresh organization named after the email local part plus an
/// owner user, created as one unit.
fn google(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let credential = sub.get_one::<String>("credential").unwrap().trim();
    if credential.is_empty() {
        bail!("google credential is required");
    }

    let claims = auth::verify_google_credential(credential)?;
    let email = canonical_email(claims.email.as_deref().unwrap_or(""));
    if email.is_empty() {
        bail!("google account email missing");
    }

    let mut created = false;
    let user = match store::find_user_by_email(conn, &email)? {
        Some(u) => u,
        None => {
            let local = email.split('@').next().unwrap_or("");
            let derived: String = if local.is_empty() { "My Business" } else { local }
                .chars()
                .take(100)
                .collect();
            // Google accounts never log in with it, but the column is
            // NOT NULL and the hash must be unguessable.
            let password_hash = auth::hash_password(&auth::generate_secret())?;
            let (_, user_id) =
                store::create_org_with_owner(conn, &derived, &email, &password_hash)
                    .context("Register via google")?;
            created = true;
            store::get_user(conn, user_id)?
                .context("Read back newly created user")?
        }
    };

    let token = auth::issue_session(conn, user.id)?;
    println!("{token}");
    println!("email: {}", user.email);
    println!("created: {created}");
    Ok(())
}
