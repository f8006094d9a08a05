//! Chat client abstraction.
//!
//! [`AssistantClient`] is the seam between a chat front end and whatever
//! produces replies. [`LocalAssistantClient`] answers in-process from an
//! [`Assistant`]; a networked backend can implement the same trait.

use anyhow::Result;
use async_trait::async_trait;

use crate::assistant::{Assistant, AssistantContext};
use crate::models::AssistantMessage;

/// Anything that can answer a chat question.
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across tasks.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Answer `question` with an assistant-role message.
    async fn ask(&self, question: &str) -> Result<AssistantMessage>;
}

/// In-process client backed by the keyword [`Assistant`].
///
/// `ask` completes without suspending and never returns an error.
#[derive(Debug, Clone)]
pub struct LocalAssistantClient {
    assistant: Assistant,
}

impl LocalAssistantClient {
    pub fn new(context: AssistantContext) -> Self {
        Self {
            assistant: Assistant::new(context),
        }
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }
}

impl From<Assistant> for LocalAssistantClient {
    fn from(assistant: Assistant) -> Self {
        Self { assistant }
    }
}

#[async_trait]
impl AssistantClient for LocalAssistantClient {
    async fn ask(&self, question: &str) -> Result<AssistantMessage> {
        Ok(AssistantMessage::assistant(self.assistant.answer(question)))
    }
}
