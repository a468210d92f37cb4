//! Credential retrieval
//!
//! Each retrieval is one tool run followed by one parse. Nothing is retried,
//! cached, or defaulted: a failed run or an unparseable listing is returned
//! to the caller as is.

use crate::collaborator::{Collaborator, PROMPT_PASSWORD_ID};
use crate::error::{PairError, PairStep, RetrievalError};
use crate::identifier::{Identifier, SeedSelector};
use crate::parse::{extract_password, extract_username};
use crate::runner::{ToolMode, ToolRunner};
use tracing::{debug, info};

/// Values delivered by a completed username-then-password run
#[derive(Clone, PartialEq, Eq)]
pub struct PairOutcome {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for PairOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairOutcome")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Retrieves usernames and passwords through a [`ToolRunner`]
#[derive(Debug, Clone)]
pub struct CredentialRetriever<R> {
    runner: R,
}

impl<R: ToolRunner> CredentialRetriever<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Derive the password for `identifier` at `seed`
    pub async fn get_password(
        &self,
        identifier: &Identifier,
        seed: SeedSelector,
    ) -> Result<String, RetrievalError> {
        let output = self.runner.run(ToolMode::Password, identifier).await?;
        let password = extract_password(&output.stdout, seed)?;
        debug!(seed = %seed, "Password extracted");
        Ok(password)
    }

    /// Look up the login hint recorded for `identifier`
    pub async fn get_username(&self, identifier: &Identifier) -> Result<String, RetrievalError> {
        let output = self.runner.run(ToolMode::Username, identifier).await?;
        let username = extract_username(&output.stdout)?;
        debug!("Username extracted");
        Ok(username)
    }

    /// Deliver the username to `target`, advance, then deliver the password
    ///
    /// Not atomic: if a later step fails the username stays delivered, and the
    /// returned [`PairError`] says so.
    pub async fn get_username_then_password<C: Collaborator>(
        &self,
        identifier: &Identifier,
        seed: SeedSelector,
        collaborator: &mut C,
        target: &C::Target,
    ) -> Result<PairOutcome, PairError> {
        let fail = |step, username_delivered| {
            move |source| PairError {
                step,
                username_delivered,
                source,
            }
        };

        let username = self
            .get_username(identifier)
            .await
            .map_err(fail(PairStep::Username, false))?;
        collaborator
            .deliver_text(target, &username)
            .map_err(fail(PairStep::Username, false))?;
        info!("Username delivered");

        let next = collaborator
            .advance_target(target)
            .map_err(fail(PairStep::Advance, true))?;

        let password = self
            .get_password(identifier, seed)
            .await
            .map_err(fail(PairStep::Password, true))?;
        collaborator
            .deliver_text(&next, &password)
            .map_err(fail(PairStep::Password, true))?;
        info!("Password delivered");

        Ok(PairOutcome { username, password })
    }
}

/// Ask the collaborator for a password ID and validate it
pub fn prompt_identifier<C: Collaborator>(
    collaborator: &mut C,
) -> Result<Identifier, RetrievalError> {
    let line = collaborator.read_line(PROMPT_PASSWORD_ID)?;
    Identifier::new(&line)
}
