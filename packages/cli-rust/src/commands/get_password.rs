//! get-password command
//!
//! Prints the derived password for a password ID on stdout.

use super::{Session, resolve_identifier};
use crate::terminal::{FIRST_LINE, TerminalCollaborator};
use anyhow::Result;
use clap::Args;
use credtool_core::{Collaborator, SeedSelector};

/// Arguments for the get-password command
#[derive(Args)]
#[command(
    after_help = "By default the password for the most recent seed is printed. Use --seed N for the N-th seed (1: first, 2: second, ...)."
)]
pub struct GetPasswordArgs {
    /// Password ID (prompted for when omitted)
    pub identifier: Option<String>,

    /// Seed to use: 0 for the most recent, N for the N-th listed
    #[arg(short, long, value_name = "N")]
    pub seed: Option<SeedSelector>,
}

pub async fn cmd_get_password(args: &GetPasswordArgs, session: &Session) -> Result<()> {
    let mut terminal = TerminalCollaborator::stdout();
    let identifier = resolve_identifier(args.identifier.as_deref(), &mut terminal)?;

    let password = session
        .retriever()
        .get_password(&identifier, session.seed(args.seed))
        .await?;

    terminal.deliver_text(&FIRST_LINE, &password)?;
    Ok(())
}
