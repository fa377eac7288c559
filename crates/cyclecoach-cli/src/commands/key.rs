//! Key command implementation.

use crate::cli::{KeyAction, KeyArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use tracing::info;

/// Execute the key command.
pub fn execute_key(
    args: KeyArgs,
    session: &mut Session,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        KeyAction::Set { credential } => set_key(session, config, &credential, formatter),
        KeyAction::Show => show_key(session, formatter),
        KeyAction::Remove => remove_key(session, config, formatter),
    }
}

/// Validate a key, keep it in the session and persist it.
fn set_key(session: &mut Session, config: &mut Config, raw: &str, formatter: &Formatter) -> Result<()> {
    let model = session.model();
    let credential = match session.set_credential(raw, None) {
        Ok(credential) => credential.clone(),
        Err(e) => {
            println!("{}", formatter.info(&format!("Expected format: {}", model.key_hint())));
            return Err(e);
        }
    };

    config.model = credential.model();
    config.credential = Some(credential.secret().to_string());
    config.save()?;
    info!(model = %credential.model(), "Stored API key");

    println!("{}", formatter.key_status(&credential));
    Ok(())
}

fn show_key(session: &Session, formatter: &Formatter) -> Result<()> {
    match session.credential() {
        Some(credential) => println!("{}", formatter.key_status(credential)),
        None => println!(
            "{}",
            formatter.warning(&format!("No API key set for {}", session.model().label()))
        ),
    }
    Ok(())
}

fn remove_key(session: &mut Session, config: &mut Config, formatter: &Formatter) -> Result<()> {
    let had_key = session.clear_credential().is_some() || config.credential.is_some();
    config.credential = None;
    config.save()?;

    if had_key {
        println!("{}", formatter.success("API key removed"));
    } else {
        println!("{}", formatter.warning("No API key to remove"));
    }
    Ok(())
}
