//! `folio chat` — a line-oriented chat loop.
//!
//! Prints a greeting and the numbered suggested questions, then answers one
//! line at a time until end of input. Typing a suggestion's number asks that
//! suggestion. Each question is answered on its own; nothing carries over
//! between turns.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use folio_core::client::{AssistantClient, LocalAssistantClient};
use folio_core::format;
use folio_core::models::{AssistantMessage, Role};
use folio_core::AssistantContext;

/// Turn a raw input line into a question.
///
/// Blank lines yield `None`. A number in `1..=suggestions.len()` selects
/// that suggestion; anything else is asked verbatim (trimmed).
pub fn resolve_input(line: &str, suggestions: &[String]) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=suggestions.len()).contains(&n) => Some(suggestions[n - 1].clone()),
        _ => Some(trimmed.to_string()),
    }
}

fn render_message(message: &AssistantMessage) -> String {
    let who = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    format!("{}: {}\n", who, message.content)
}

/// Drive a chat session over arbitrary async input and output.
pub async fn chat_loop<R, W>(
    client: &dyn AssistantClient,
    greeting: &str,
    suggestions: &[String],
    input: R,
    output: &mut W,
    prompt: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(render_message(&AssistantMessage::assistant(greeting)).as_bytes())
        .await?;
    if !suggestions.is_empty() {
        output.write_all(b"\nTry:\n").await?;
        for (i, s) in suggestions.iter().enumerate() {
            output
                .write_all(format!("  [{}] {}\n", i + 1, s).as_bytes())
                .await?;
        }
        output.write_all(b"\n").await?;
    }

    let mut lines = input.lines();
    let mut turns = 0usize;
    loop {
        if prompt {
            output.write_all(b"> ").await?;
        }
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(question) = resolve_input(&line, suggestions) else {
            continue;
        };

        if question != line.trim() {
            // Echo suggestions picked by number.
            output
                .write_all(render_message(&AssistantMessage::user(question.as_str())).as_bytes())
                .await?;
        }

        let reply = client.ask(&question).await?;
        output.write_all(render_message(&reply).as_bytes()).await?;
        turns += 1;
    }

    if prompt {
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    tracing::debug!(turns, "chat session ended");
    Ok(())
}

/// CLI entry point — chat over stdin/stdout.
pub async fn run_chat(context: AssistantContext, suggestions: &[String]) -> Result<()> {
    let greeting = format::greeting(&context.profile);
    let client = LocalAssistantClient::new(context);
    let prompt = atty::is(atty::Stream::Stdin);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    chat_loop(&client, &greeting, suggestions, stdin, &mut stdout, prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoClient;

    #[async_trait]
    impl AssistantClient for EchoClient {
        async fn ask(&self, question: &str) -> Result<AssistantMessage> {
            Ok(AssistantMessage::assistant(format!("echo {}", question)))
        }
    }

    fn suggestions() -> Vec<String> {
        vec!["What is Mesquite MoCap?".to_string(), "Publications?".to_string()]
    }

    #[test]
    fn test_resolve_input() {
        let s = suggestions();
        assert_eq!(resolve_input("   ", &s), None);
        assert_eq!(resolve_input("2", &s).as_deref(), Some("Publications?"));
        assert_eq!(resolve_input(" 3 ", &s).as_deref(), Some("3"));
        assert_eq!(resolve_input("0", &s).as_deref(), Some("0"));
        assert_eq!(resolve_input(" hello ", &s).as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_chat_loop_transcript() {
        let input: &[u8] = b"hello\n\n1\n";
        let mut out: Vec<u8> = Vec::new();
        chat_loop(&EchoClient, "Hi there.", &suggestions(), input, &mut out, false)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "assistant: Hi there.\n\
             \nTry:\n  [1] What is Mesquite MoCap?\n  [2] Publications?\n\n\
             assistant: echo hello\n\
             you: What is Mesquite MoCap?\n\
             assistant: echo What is Mesquite MoCap?\n"
        );
    }

    #[tokio::test]
    async fn test_chat_loop_without_suggestions() {
        let input: &[u8] = b"";
        let mut out: Vec<u8> = Vec::new();
        chat_loop(&EchoClient, "Hi.", &[], input, &mut out, false)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "assistant: Hi.\n");
    }
}
