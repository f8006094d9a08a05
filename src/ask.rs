//! `folio ask` — answer a single question.

use anyhow::Result;

use folio_core::assistant::{Answer, AssistantContext};
use folio_core::client::{AssistantClient, LocalAssistantClient};

/// Output shape for a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AskOptions {
    /// Print JSON instead of plain text.
    pub json: bool,
    /// Include the route and score breakdown.
    pub explain: bool,
}

/// Plain-text explanation block printed after the answer.
pub fn render_explain(answer: &Answer) -> String {
    let mut out = format!("route: {}", answer.route);
    if let Some(ex) = &answer.explain {
        out.push_str(&format!("\ntokens: {}", ex.tokens.join(" ")));
        out.push_str(&format!("\nprofile score: {}", ex.profile_score));
        out.push_str(&format!(
            "\ntop project: {}",
            describe_top(ex.top_project)
        ));
        out.push_str(&format!(
            "\ntop timeline: {}",
            describe_top(ex.top_timeline)
        ));
    }
    out
}

fn describe_top(top: Option<(usize, usize)>) -> String {
    match top {
        Some((position, score)) => format!("#{} (score {})", position, score),
        None => "none".to_string(),
    }
}

/// CLI entry point — answers `question` and prints to stdout.
pub async fn run_ask(context: AssistantContext, question: &str, opts: AskOptions) -> Result<()> {
    let client = LocalAssistantClient::new(context);

    if opts.explain {
        let answer = client.assistant().respond(question);
        if opts.json {
            println!("{}", serde_json::to_string_pretty(&answer)?);
        } else {
            println!("{}", answer.text);
            println!();
            println!("{}", render_explain(&answer));
        }
        return Ok(());
    }

    let message = client.ask(question).await?;
    if opts.json {
        println!("{}", serde_json::to_string(&message)?);
    } else {
        println!("{}", message.content);
    }
    Ok(())
}
