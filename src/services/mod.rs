/// External collaborators
///
/// Narrow interfaces to the things the assistant drives but does not own:
/// weather lookups, the browser, local programs, arithmetic and speech.
/// Each trait has one default implementation here; tests swap in fakes.

pub mod calculator;
pub mod launcher;
pub mod speech;
pub mod weather;

pub use calculator::{CalcError, Calculator};
pub use launcher::{SystemBrowser, SystemLauncher};
pub use speech::{CommandTranscriber, ConsoleVoice, ListenOutcome};
pub use weather::{OpenWeatherMap, WeatherError, WeatherReport};

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Current conditions for a city
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn fetch(&self, city: &str) -> std::result::Result<WeatherReport, WeatherError>;
}

/// Opens a URL in the user's browser
pub trait BrowserLauncher: Send + Sync {
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Starts a local application by name
pub trait ProcessLauncher: Send + Sync {
    fn launch(&self, application: &str) -> Result<()>;
}

/// Evaluates `+ - * / ( )` arithmetic
pub trait ExpressionEvaluator: Send + Sync {
    fn evaluate(&self, expression: &str) -> std::result::Result<f64, CalcError>;
}

/// Voice capture with a bounded wait
#[async_trait]
pub trait SpeechInput: Send + Sync {
    async fn listen(&self, timeout: Duration) -> ListenOutcome;
}

/// Best-effort spoken output. Must never fail the session.
pub trait SpeechOutput: Send + Sync {
    fn speak(&self, text: &str);
}

/// Handles to every collaborator a skill may call
pub struct Collaborators {
    pub weather: Box<dyn WeatherLookup>,
    pub browser: Box<dyn BrowserLauncher>,
    pub launcher: Box<dyn ProcessLauncher>,
    pub evaluator: Box<dyn ExpressionEvaluator>,
}

impl Collaborators {
    /// The real implementations, configured from `config`
    pub fn system(config: &crate::config::Config) -> Self {
        Self {
            weather: Box::new(OpenWeatherMap::new(config.weather_api_key.clone())),
            browser: Box::new(SystemBrowser),
            launcher: Box::new(SystemLauncher),
            evaluator: Box::new(Calculator),
        }
    }
}
