// Test doubles for the collaborators, plus session builders

use crate::core::Session;
use crate::error::{AssistantError, Result};
use crate::services::{
    calculator, BrowserLauncher, CalcError, Collaborators, ExpressionEvaluator, ProcessLauncher,
    WeatherError, WeatherLookup, WeatherReport,
};
use crate::store::DocumentStore;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Default)]
struct Recorded {
    weather: Option<WeatherReport>,
    weather_status: Option<u16>,
    fail_launches: bool,
    opened_urls: Vec<String>,
    launched_apps: Vec<String>,
    evaluations: usize,
}

/// Shared handle onto fake collaborators; clones see the same recordings
#[derive(Clone, Default)]
pub struct Fakes {
    inner: Arc<Mutex<Recorded>>,
}

impl Fakes {
    pub fn set_weather(&self, report: WeatherReport) {
        self.inner.lock().unwrap().weather = Some(report);
    }

    pub fn fail_weather(&self, status: u16) {
        self.inner.lock().unwrap().weather_status = Some(status);
    }

    pub fn fail_launches(&self) {
        self.inner.lock().unwrap().fail_launches = true;
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.inner.lock().unwrap().opened_urls.clone()
    }

    pub fn launched_apps(&self) -> Vec<String> {
        self.inner.lock().unwrap().launched_apps.clone()
    }

    pub fn evaluations(&self) -> usize {
        self.inner.lock().unwrap().evaluations
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            weather: Box::new(self.clone()),
            browser: Box::new(self.clone()),
            launcher: Box::new(self.clone()),
            evaluator: Box::new(self.clone()),
        }
    }
}

#[async_trait]
impl WeatherLookup for Fakes {
    async fn fetch(&self, _city: &str) -> std::result::Result<WeatherReport, WeatherError> {
        let recorded = self.inner.lock().unwrap();
        if let Some(status) = recorded.weather_status {
            return Err(WeatherError::Status(status));
        }
        recorded.weather.clone().ok_or(WeatherError::NotConfigured)
    }
}

impl BrowserLauncher for Fakes {
    fn open_url(&self, url: &str) -> Result<()> {
        self.inner.lock().unwrap().opened_urls.push(url.to_string());
        Ok(())
    }
}

impl ProcessLauncher for Fakes {
    fn launch(&self, application: &str) -> Result<()> {
        let mut recorded = self.inner.lock().unwrap();
        if recorded.fail_launches {
            return Err(AssistantError::Launch("No such file or directory".to_string()));
        }
        recorded.launched_apps.push(application.to_string());
        Ok(())
    }
}

impl ExpressionEvaluator for Fakes {
    fn evaluate(&self, expression: &str) -> std::result::Result<f64, CalcError> {
        self.inner.lock().unwrap().evaluations += 1;
        calculator::evaluate(expression)
    }
}

/// Session over an empty temp directory with default fakes
pub fn test_session() -> (Session, TempDir) {
    test_session_with(&Fakes::default())
}

pub fn test_session_with(fakes: &Fakes) -> (Session, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = DocumentStore::new(dir.path().join("user_data.json"));
    (Session::new(store, fakes.collaborators(), "New York"), dir)
}

/// Whitespace-split argument list
pub fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
