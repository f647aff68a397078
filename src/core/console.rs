// Interactive session loop
//
// Reads a line, optionally swaps it for a voice capture, runs it, speaks the
// reply. Quit, end of input and interrupt all leave through the quit skill,
// so the final flush happens exactly once.

use crate::core::Session;
use crate::error::Result;
use crate::services::{SpeechInput, SpeechOutput};
use crate::skills::system::VOICE_TRIGGER;
use log::{info, warn};
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const PROMPT: &str = "\n🎯 Enter command (or 'listen' for voice): ";

/// Extra words that end the session like `quit` does
const QUIT_ALIASES: &[&str] = &["exit", "bye"];

pub struct Console {
    session: Session,
    ears: Box<dyn SpeechInput>,
    voice: Box<dyn SpeechOutput>,
    listen_timeout: Duration,
}

impl Console {
    pub fn new(
        session: Session,
        ears: Box<dyn SpeechInput>,
        voice: Box<dyn SpeechOutput>,
        listen_timeout: Duration,
    ) -> Self {
        Self {
            session,
            ears,
            voice,
            listen_timeout,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until quit, end of input, or `interrupt` resolves
    pub async fn run<R, I>(&mut self, reader: R, interrupt: I) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        I: Future,
    {
        let mut lines = reader.lines();
        tokio::pin!(interrupt);

        loop {
            print!("{}", PROMPT);
            let _ = std::io::stdout().flush();

            let line = tokio::select! {
                line = lines.next_line() => line,
                _ = &mut interrupt => {
                    info!("Interrupted");
                    break;
                }
            };

            let line = match line {
                Ok(Some(line)) => line,
                Ok(None) => {
                    info!("End of input");
                    break;
                }
                Err(e) => {
                    warn!("Could not read input: {}", e);
                    break;
                }
            };

            let mut input = line.trim().to_string();
            if input.eq_ignore_ascii_case(VOICE_TRIGGER) {
                match self.listen().await {
                    Some(heard) => input = heard,
                    None => continue,
                }
            }
            if QUIT_ALIASES.contains(&input.to_lowercase().as_str()) {
                input = "quit".to_string();
            }

            let reply = tokio::select! {
                reply = self.session.handle(&input) => reply,
                _ = &mut interrupt => {
                    info!("Interrupted while running {:?}", input);
                    break;
                }
            };
            self.voice.speak(&reply.text);
            if reply.quit {
                return Ok(());
            }
        }

        let reply = self.session.handle("quit").await;
        self.voice.speak(&reply.text);
        Ok(())
    }

    /// One bounded voice capture; `None` means go back to the prompt
    async fn listen(&self) -> Option<String> {
        println!("🎤 Listening...");
        let outcome = self.ears.listen(self.listen_timeout).await;

        if let Some(apology) = outcome.apology() {
            self.voice.speak(apology);
        }
        let heard = outcome.into_text()?;
        println!("🗣️ You said: {}", heard);
        Some(heard)
    }
}
