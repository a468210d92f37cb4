//! get-username command

use super::{Session, resolve_identifier};
use crate::terminal::{FIRST_LINE, TerminalCollaborator};
use anyhow::Result;
use clap::Args;
use credtool_core::Collaborator;

/// Arguments for the get-username command
#[derive(Args)]
pub struct GetUsernameArgs {
    /// Password ID (prompted for when omitted)
    pub identifier: Option<String>,
}

/// Print the login hint recorded for a password ID
pub async fn cmd_get_username(args: &GetUsernameArgs, session: &Session) -> Result<()> {
    let mut terminal = TerminalCollaborator::stdout();
    let identifier = resolve_identifier(args.identifier.as_deref(), &mut terminal)?;

    let username = session.retriever().get_username(&identifier).await?;

    terminal.deliver_text(&FIRST_LINE, &username)?;
    Ok(())
}
