//! CLI command execution.
//!
//! Each invocation builds one controller over the terminal view and runs the
//! handler the command maps to, the way a page event would.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::api::{ApiClient, TravelFilters};
use crate::config::Config;
use crate::controller::{Controller, LoginForm, RegisterForm};
use crate::models::ProfileUpdate;
use crate::session::{LocalStorage, Session};
use crate::view::{Screen, TerminalView};

use super::args::{Cli, Commands};

const CANCEL_PROMPT: &str = "Are you sure you want to cancel this booking?";

/// Read one line from stdin after printing `label` to stderr.
fn prompt(label: &str) -> Result<String> {
    eprint!("{label}");
    std::io::stderr().flush()?;

    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("No input provided");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn confirm(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{question} [y/N] "))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => prompt("Password: "),
    }
}

pub async fn execute(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.data_dir, cli.base_url)?;
    debug!(
        "Using backend {} with data dir {}",
        config.base_url,
        config.data_dir.display()
    );

    let session = Session::restore(LocalStorage::in_dir(&config.data_dir));
    let api = ApiClient::new(&config.base_url, session);
    let mut ctl = Controller::new(api, TerminalView::stdout());

    let reached = match cli.command {
        None => {
            ctl.bootstrap().await;
            true
        }
        Some(Commands::Login { username, password }) => {
            let form = LoginForm {
                username,
                password: password_or_prompt(password)?,
            };
            ctl.handle_login(&form).await
        }
        Some(Commands::Register {
            username,
            email,
            password,
            full_name,
            phone,
        }) => {
            let (password, confirm_password) = match password {
                Some(p) => (p.clone(), p),
                None => (prompt("Password: ")?, prompt("Confirm password: ")?),
            };
            let form = RegisterForm {
                username,
                email,
                password,
                confirm_password,
                full_name,
                phone_number: phone,
            };
            ctl.handle_register(&form).await
        }
        Some(Commands::Logout) => {
            ctl.handle_logout();
            true
        }
        Some(Commands::Whoami) => {
            ctl.show_profile().await;
            ctl.api().is_authenticated()
        }
        Some(Commands::Profile {
            full_name,
            phone,
            email,
        }) => {
            let update = ProfileUpdate {
                full_name,
                phone_number: phone,
                email,
            };
            ctl.show_section(Screen::Profile) && ctl.handle_profile_update(&update).await
        }
        Some(Commands::Options {
            kind,
            source,
            destination,
            date,
            min_price,
            max_price,
            skip,
            limit,
        }) => {
            let filters = TravelFilters {
                kind: kind.map(|k| k.as_str().to_string()),
                source,
                destination,
                date,
                min_price,
                max_price,
                skip,
                limit,
            };
            let shown = ctl.show_section(Screen::Home);
            if shown {
                ctl.handle_search(&filters).await;
            }
            shown
        }
        Some(Commands::Trip { id }) => {
            ctl.show_section(Screen::Home) && ctl.open_booking_modal(id).await
        }
        Some(Commands::Book { id, seats, dry_run }) => {
            if ctl.show_section(Screen::Home) && ctl.open_booking_modal(id).await {
                ctl.update_seats(&seats);
                dry_run || ctl.handle_booking().await
            } else {
                false
            }
        }
        Some(Commands::Bookings) => {
            let shown = ctl.show_section(Screen::Bookings);
            if shown {
                ctl.load_user_bookings().await;
            }
            shown
        }
        Some(Commands::Booking { id }) => {
            let shown = ctl.show_section(Screen::Bookings);
            if shown {
                ctl.show_booking(id).await;
            }
            shown
        }
        Some(Commands::Cancel { id, yes }) => {
            if ctl.show_section(Screen::Bookings) {
                let confirmed = yes || confirm(CANCEL_PROMPT)?;
                if !confirmed {
                    println!("Cancellation aborted.");
                }
                ctl.cancel_booking(id, confirmed).await || !confirmed
            } else {
                false
            }
        }
    };

    if reached && !ctl.view().had_errors() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
