//! get-pair command
//!
//! Prints the username on one line and the password on the next. With
//! `--json` both are collected and printed as one object instead.

use super::{Session, resolve_identifier};
use crate::output::errors::show_partial_delivery;
use crate::terminal::{FIRST_LINE, TerminalCollaborator};
use anyhow::Result;
use clap::Args;
use credtool_core::{PairError, RecordingCollaborator, SeedSelector};
use serde::Serialize;

/// Arguments for the get-pair command
#[derive(Args)]
#[command(
    after_help = "The username is printed first, then the password. If the password cannot be retrieved the username line has already been printed."
)]
pub struct GetPairArgs {
    /// Password ID (prompted for when omitted)
    pub identifier: Option<String>,

    /// Seed to use: 0 for the most recent, N for the N-th listed
    #[arg(short, long, value_name = "N")]
    pub seed: Option<SeedSelector>,

    /// Print a JSON object instead of two lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq)]
struct PairJson<'a> {
    username: Option<&'a str>,
    password: Option<&'a str>,
}

pub async fn cmd_get_pair(args: &GetPairArgs, session: &Session) -> Result<()> {
    let mut terminal = TerminalCollaborator::stdout();
    let identifier = resolve_identifier(args.identifier.as_deref(), &mut terminal)?;
    let seed = session.seed(args.seed);
    let retriever = session.retriever();

    if !args.json {
        return retriever
            .get_username_then_password(&identifier, seed, &mut terminal, &FIRST_LINE)
            .await
            .map(|_| ())
            .map_err(|err| report_partial(err, session.quiet));
    }

    let mut recorder = RecordingCollaborator::new();
    let result = retriever
        .get_username_then_password(&identifier, seed, &mut recorder, &FIRST_LINE)
        .await;
    let json = pair_json(&recorder);
    match result {
        Ok(_) => {
            println!("{}", serde_json::to_string_pretty(&json)?);
            Ok(())
        }
        Err(err) => {
            if err.username_delivered {
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            Err(report_partial(err, session.quiet))
        }
    }
}

fn pair_json(recorder: &RecordingCollaborator) -> PairJson<'_> {
    PairJson {
        username: recorder.delivered_to(FIRST_LINE),
        password: recorder.delivered_to(FIRST_LINE + 1),
    }
}

fn report_partial(err: PairError, quiet: bool) -> anyhow::Error {
    if err.username_delivered && !quiet {
        show_partial_delivery(&err);
    }
    err.into()
}
