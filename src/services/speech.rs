/// Voice input and output
///
/// Transcription is delegated to an external command that records audio and
/// prints text on stdout. Spoken output prints the reply and optionally hands
/// it to a text-to-speech command.

use crate::services::{SpeechInput, SpeechOutput};
use async_trait::async_trait;
use log::{debug, warn};
use std::process::{Command, Stdio};
use std::time::Duration;

/// What came back from one listening attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenOutcome {
    /// Transcribed text, lower-cased
    Heard(String),
    /// Nobody spoke before the deadline
    Timeout,
    /// Audio was captured but could not be turned into words
    Unintelligible,
    /// No recognizer configured, or it failed to run
    Unavailable,
}

impl ListenOutcome {
    /// Apology to speak back, if this outcome deserves one
    pub fn apology(&self) -> Option<&'static str> {
        match self {
            ListenOutcome::Unintelligible => Some("Sorry, I couldn't understand that."),
            ListenOutcome::Unavailable => Some("Speech recognition service is unavailable."),
            ListenOutcome::Heard(_) | ListenOutcome::Timeout => None,
        }
    }

    /// The transcribed text, or `None` for every non-speech outcome
    pub fn into_text(self) -> Option<String> {
        match self {
            ListenOutcome::Heard(text) => Some(text),
            _ => None,
        }
    }
}

/// Split a configured command line into program and arguments
fn split_command(command_line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command_line.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Runs an external speech-to-text command
#[derive(Debug, Clone, Default)]
pub struct CommandTranscriber {
    command: Option<String>,
}

impl CommandTranscriber {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }
}

#[async_trait]
impl SpeechInput for CommandTranscriber {
    async fn listen(&self, timeout: Duration) -> ListenOutcome {
        let Some((program, args)) = self.command.as_deref().and_then(split_command) else {
            return ListenOutcome::Unavailable;
        };

        let mut cmd = tokio::process::Command::new(&program);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        // Dropping the output future on timeout kills the recorder
        match tokio::time::timeout(timeout, cmd.output()).await {
            Err(_) => {
                debug!("Listening timed out after {:?}", timeout);
                ListenOutcome::Timeout
            }
            Ok(Err(e)) => {
                warn!("Could not run speech recognizer {}: {}", program, e);
                ListenOutcome::Unavailable
            }
            Ok(Ok(output)) if !output.status.success() => {
                warn!("Speech recognizer exited with {}", output.status);
                ListenOutcome::Unavailable
            }
            Ok(Ok(output)) => {
                let text = String::from_utf8_lossy(&output.stdout).trim().to_lowercase();
                if text.is_empty() {
                    ListenOutcome::Unintelligible
                } else {
                    ListenOutcome::Heard(text)
                }
            }
        }
    }
}

/// Prints replies and, when configured, speaks them
#[derive(Debug, Clone, Default)]
pub struct ConsoleVoice {
    tts_command: Option<String>,
}

impl ConsoleVoice {
    pub fn new(tts_command: Option<String>) -> Self {
        Self { tts_command }
    }

    fn say_aloud(&self, text: &str) {
        let Some((program, args)) = self.tts_command.as_deref().and_then(split_command) else {
            return;
        };

        let spawned = Command::new(&program)
            .args(&args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            // Fire and forget; the prompt doesn't wait for playback
            Ok(mut child) => {
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!("Text-to-speech command {} failed: {}", program, e),
        }
    }
}

impl SpeechOutput for ConsoleVoice {
    fn speak(&self, text: &str) {
        println!("🤖 {}", text);
        self.say_aloud(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        let (program, args) = split_command("espeak -s 180").unwrap();
        assert_eq!(program, "espeak");
        assert_eq!(args, vec!["-s", "180"]);
        assert!(split_command("   ").is_none());
    }

    #[test]
    fn test_apologies() {
        assert!(ListenOutcome::Unintelligible.apology().is_some());
        assert!(ListenOutcome::Unavailable.apology().is_some());
        assert!(ListenOutcome::Timeout.apology().is_none());
        assert!(ListenOutcome::Heard("time".into()).apology().is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_transcriber_is_unavailable() {
        let outcome = CommandTranscriber::new(None)
            .listen(Duration::from_millis(50))
            .await;
        assert_eq!(outcome, ListenOutcome::Unavailable);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_transcriber_output_is_lowercased() {
        let transcriber = CommandTranscriber::new(Some("echo What TIME".to_string()));
        let outcome = transcriber.listen(Duration::from_secs(5)).await;
        assert_eq!(outcome, ListenOutcome::Heard("what time".to_string()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_transcriber_times_out() {
        let transcriber = CommandTranscriber::new(Some("sleep 5".to_string()));
        let outcome = transcriber.listen(Duration::from_millis(100)).await;
        assert_eq!(outcome, ListenOutcome::Timeout);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_blank_transcription_is_unintelligible() {
        let transcriber = CommandTranscriber::new(Some("true".to_string()));
        let outcome = transcriber.listen(Duration::from_secs(5)).await;
        assert_eq!(outcome, ListenOutcome::Unintelligible);
    }
}
