//! Interactive yes/no confirmation with a bounded wait
//!
//! The prompt writes `"{question} (y/n): "` to stdout and races a single
//! line read against a timer. Whichever finishes first wins; the reader is
//! dropped on both paths, so a late answer is never inspected and there is
//! no re-prompting. Timeout, EOF, and read errors all resolve `false`.

use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// How long the prompt waits for an answer before giving up (5 seconds)
pub const DEFAULT_PROMPT_TIMEOUT: Duration = Duration::from_secs(5);

/// Trait for asking the user a yes/no question
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Ask the question, resolving `true` only on an affirmative answer
    async fn confirm(&self, question: &str) -> bool;
}

/// Confirmer bound to the process's own terminal
pub struct TerminalPrompt {
    timeout: Duration,
}

impl TerminalPrompt {
    /// Create a prompt with the default 5-second timeout
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_PROMPT_TIMEOUT,
        }
    }

    /// Create a prompt with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Confirmer for TerminalPrompt {
    async fn confirm(&self, question: &str) -> bool {
        ask_confirmation(question, self.timeout).await
    }
}

/// Ask a yes/no question on stdin/stdout with a hard timeout.
///
/// tokio's stdin reads on a background thread, so on the timeout path the
/// abandoned read stays in flight and may swallow the next stdin line in
/// this process. Callers run at most one prompt per process lifetime and
/// must not read stdin again afterwards.
pub async fn ask_confirmation(question: &str, timeout: Duration) -> bool {
    print!("{} (y/n): ", question);
    let _ = std::io::stdout().flush();

    let reader = BufReader::new(tokio::io::stdin());
    ask_from_reader(reader, timeout).await
}

/// Race one line read against the timer; generic over the reader for tests
async fn ask_from_reader<R: AsyncBufRead + Unpin>(mut reader: R, timeout: Duration) -> bool {
    let mut answer = String::new();
    match tokio::time::timeout(timeout, reader.read_line(&mut answer)).await {
        // EOF before any input counts as a decline
        Ok(Ok(0)) => false,
        Ok(Ok(_)) => is_affirmative(&answer),
        Ok(Err(_)) => false,
        // Timer won the race; the reader is dropped without inspecting input
        Err(_) => false,
    }
}

/// Normalize an answer and compare against the affirmative tokens
pub fn is_affirmative(answer: &str) -> bool {
    let normalized = answer.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}
