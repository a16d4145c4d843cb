// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, crate_version, Command};

pub fn build_cli() -> Command {
    Command::new("ledgerdesk")
        .version(crate_version!())
        .about("Multi-tenant ledger analysis with usage quotas, API keys, and an audit trail")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("auth")
                .about("Registration and login")
                .subcommand(
                    Command::new("register")
                        .about("Create an organization and its owner account")
                        .arg(arg!(--org <NAME> "Organization name").required(true))
                        .arg(arg!(--email <EMAIL>).required(true))
                        .arg(arg!(--password <PASSWORD>).required(true)),
                )
                .subcommand(
                    Command::new("login")
                        .about("Exchange credentials for a session token")
                        .arg(arg!(--email <EMAIL>).required(true))
                        .arg(arg!(--password <PASSWORD>).required(true)),
                )
                .subcommand(
                    Command::new("google")
                        .about("Log in with a Google ID token; first login registers")
                        .arg(arg!(--credential <ID_TOKEN>).required(true)),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Upload a ledger CSV and compute its financial summary")
                .arg(arg!(--token <TOKEN> "Session token").required(true))
                .arg(arg!(--file <PATH> "Ledger CSV to analyze").required(true))
                .arg(arg!(--json "Print the summary as JSON")),
        )
        .subcommand(
            Command::new("users")
                .about("Organization membership")
                .subcommand(
                    Command::new("invite")
                        .about("Invite a member into your organization (owner/admin)")
                        .arg(arg!(--token <TOKEN>).required(true))
                        .arg(arg!(--email <EMAIL>).required(true)),
                )
                .subcommand(
                    Command::new("list")
                        .about("List organization users (owner only)")
                        .arg(arg!(--token <TOKEN>).required(true))
                        .arg(arg!(--json "Print as JSON")),
                )
                .subcommand(
                    Command::new("count")
                        .about("Count users in your organization")
                        .arg(arg!(--token <TOKEN>).required(true)),
                ),
        )
        .subcommand(
            Command::new("apikey")
                .about("API keys")
                .subcommand(
                    Command::new("create")
                        .about("Create an API key; the secret is shown exactly once")
                        .arg(arg!(--token <TOKEN>).required(true)),
                ),
        )
        .subcommand(
            Command::new("analytics")
                .about("Usage, report, and user counts for your organization")
                .arg(arg!(--token <TOKEN>).required(true))
                .arg(arg!(--json "Print as JSON")),
        )
        .subcommand(Command::new("doctor").about("Database health and integrity checks"))
}
