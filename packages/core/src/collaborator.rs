//! Front-end collaborator interface
//!
//! The retriever never talks to a terminal or a form directly. A front end
//! supplies the password ID, receives each retrieved value at a target, and
//! decides what "the next field" means.

use crate::error::RetrievalError;

/// Prompt shown when asking for a password ID
pub const PROMPT_PASSWORD_ID: &str = "Password ID";

/// Capabilities a front end lends to the retriever
pub trait Collaborator {
    /// A destination for a delivered value (form field, output line, ...)
    type Target;

    /// Read one line of input from the user
    fn read_line(&mut self, prompt: &str) -> Result<String, RetrievalError>;

    /// Place `text` at `target`
    fn deliver_text(&mut self, target: &Self::Target, text: &str) -> Result<(), RetrievalError>;

    /// Move from `target` to the next logical input destination
    fn advance_target(&mut self, target: &Self::Target) -> Result<Self::Target, RetrievalError>;
}

/// Step a [`RecordingCollaborator`] can be told to fail on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    ReadLine,
    Deliver(usize),
    Advance,
}

/// Collaborator that collects deliveries in memory
///
/// Targets are field indices starting at whatever the caller passes in;
/// advancing moves to the next index. Input lines are served from a queue.
#[derive(Debug, Default)]
pub struct RecordingCollaborator {
    inputs: Vec<String>,
    deliveries: Vec<(usize, String)>,
    prompts: Vec<String>,
    fail_at: Option<FailAt>,
}

impl RecordingCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue lines to hand out from `read_line`, first one first
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self.inputs.reverse();
        self
    }

    pub fn failing_at(mut self, step: FailAt) -> Self {
        self.fail_at = Some(step);
        self
    }

    pub fn deliveries(&self) -> &[(usize, String)] {
        &self.deliveries
    }

    /// The value delivered to `target`, if any
    pub fn delivered_to(&self, target: usize) -> Option<&str> {
        self.deliveries
            .iter()
            .rev()
            .find(|(t, _)| *t == target)
            .map(|(_, text)| text.as_str())
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn into_deliveries(self) -> Vec<(usize, String)> {
        self.deliveries
    }
}

impl Collaborator for RecordingCollaborator {
    type Target = usize;

    fn read_line(&mut self, prompt: &str) -> Result<String, RetrievalError> {
        self.prompts.push(prompt.to_string());
        if self.fail_at == Some(FailAt::ReadLine) {
            return Err(RetrievalError::Delivery("input closed".to_string()));
        }
        self.inputs
            .pop()
            .ok_or_else(|| RetrievalError::Delivery("no input available".to_string()))
    }

    fn deliver_text(&mut self, target: &usize, text: &str) -> Result<(), RetrievalError> {
        if self.fail_at == Some(FailAt::Deliver(*target)) {
            return Err(RetrievalError::Delivery(format!(
                "field {target} rejected input"
            )));
        }
        self.deliveries.push((*target, text.to_string()));
        Ok(())
    }

    fn advance_target(&mut self, target: &usize) -> Result<usize, RetrievalError> {
        if self.fail_at == Some(FailAt::Advance) {
            return Err(RetrievalError::Delivery("no next field".to_string()));
        }
        Ok(target + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_deliveries_in_order() {
        let mut collab = RecordingCollaborator::new();
        collab.deliver_text(&0, "alice").unwrap();
        let next = collab.advance_target(&0).unwrap();
        collab.deliver_text(&next, "secret").unwrap();
        assert_eq!(
            collab.deliveries(),
            &[(0, "alice".to_string()), (1, "secret".to_string())]
        );
        assert_eq!(collab.delivered_to(1), Some("secret"));
        assert_eq!(collab.delivered_to(2), None);
    }

    #[test]
    fn serves_inputs_first_in_first_out() {
        let mut collab = RecordingCollaborator::new().with_inputs(["first", "second"]);
        assert_eq!(collab.read_line(PROMPT_PASSWORD_ID).unwrap(), "first");
        assert_eq!(collab.read_line(PROMPT_PASSWORD_ID).unwrap(), "second");
        assert!(collab.read_line(PROMPT_PASSWORD_ID).is_err());
        assert_eq!(collab.prompts().len(), 3);
    }

    #[test]
    fn scripted_failures() {
        let mut collab = RecordingCollaborator::new().failing_at(FailAt::Deliver(1));
        assert!(collab.deliver_text(&0, "ok").is_ok());
        assert!(matches!(
            collab.deliver_text(&1, "nope"),
            Err(RetrievalError::Delivery(_))
        ));
        assert_eq!(collab.into_deliveries().len(), 1);

        let mut collab = RecordingCollaborator::new().failing_at(FailAt::Advance);
        assert!(collab.advance_target(&0).is_err());
    }
}
