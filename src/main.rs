// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use ledgerdesk::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("auth", sub)) => commands::auth::handle(&mut conn, sub)?,
        Some(("analyze", sub)) => commands::analyze::handle(&mut conn, sub)?,
        Some(("users", sub)) => commands::users::handle(&conn, sub)?,
        Some(("apikey", sub)) => commands::apikey::handle(&conn, sub)?,
        Some(("analytics", sub)) => commands::analytics::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
