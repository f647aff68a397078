// weather, search and open
//
// All three lean on an external collaborator and turn its failures into
// a plain reply instead of an error.

use crate::core::Session;
use crate::error::{AssistantError, Result};
use crate::services::WeatherError;
use log::warn;

const SEARCH_URL: &str = "https://www.google.com/search?q=";
const BROWSER_HOME: &str = "https://www.google.com";

/// Local programs `open` is allowed to start
pub const KNOWN_APPS: &[&str] = &["notepad", "calculator", "paint"];

pub async fn weather(session: &mut Session, args: &[String]) -> Result<String> {
    let city = if args.is_empty() {
        session.default_city().to_string()
    } else {
        args.join(" ")
    };

    match session.services().weather.fetch(&city).await {
        Ok(report) => Ok(format!(
            "The weather in {} is {}°C with {}",
            city, report.temperature, report.description
        )),
        Err(WeatherError::NotConfigured) => Ok(
            "Weather service not configured. Please add your OpenWeatherMap API key."
                .to_string(),
        ),
        Err(e) => {
            warn!("Weather lookup for {} failed: {}", city, e);
            Ok("Weather service is currently unavailable".to_string())
        }
    }
}

/// Query string for a web search: each term escaped, joined with '+'
pub fn search_url(terms: &[String]) -> String {
    let query = terms
        .iter()
        .map(|term| urlencoding::encode(term).into_owned())
        .collect::<Vec<_>>()
        .join("+");
    format!("{}{}", SEARCH_URL, query)
}

pub fn search(session: &mut Session, args: &[String]) -> Result<String> {
    if args.is_empty() {
        return Ok("Please provide a search query".to_string());
    }

    session.services().browser.open_url(&search_url(args))?;
    Ok(format!("Searching for: {}", args.join(" ")))
}

pub fn open(session: &mut Session, args: &[String]) -> Result<String> {
    let Some(target) = args.first() else {
        return Ok("Please specify an application to open".to_string());
    };
    let app = target.to_lowercase();

    let launched = if app == "browser" {
        session.services().browser.open_url(BROWSER_HOME)
    } else if KNOWN_APPS.contains(&app.as_str()) {
        session.services().launcher.launch(&app)
    } else {
        return Ok(format!("Don't know how to open {}", app));
    };

    match launched {
        Ok(()) if app == "browser" => Ok("Opening browser".to_string()),
        Ok(()) => Ok(format!("Opening {}", app)),
        Err(e) => {
            warn!("Could not open {}: {}", app, e);
            let detail = match e {
                AssistantError::Launch(detail) => detail,
                other => other.to_string(),
            };
            Ok(format!("Couldn't open {}: {}", app, detail))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{args, test_session, test_session_with, Fakes};
    use crate::services::WeatherReport;

    #[test]
    fn test_search_url_escapes_terms() {
        assert_eq!(
            search_url(&args("rust async traits")),
            "https://www.google.com/search?q=rust+async+traits"
        );
        assert_eq!(
            search_url(&args("c++ & more")),
            "https://www.google.com/search?q=c%2B%2B+%26+more"
        );
    }

    #[test]
    fn test_search_opens_browser() {
        let fakes = Fakes::default();
        let (mut session, _dir) = test_session_with(&fakes);

        assert_eq!(
            search(&mut session, &args("rust lang")).unwrap(),
            "Searching for: rust lang"
        );
        assert_eq!(
            fakes.opened_urls(),
            vec!["https://www.google.com/search?q=rust+lang"]
        );
    }

    #[test]
    fn test_search_requires_query() {
        let (mut session, _dir) = test_session();
        assert_eq!(
            search(&mut session, &[]).unwrap(),
            "Please provide a search query"
        );
    }

    #[test]
    fn test_open_known_app() {
        let fakes = Fakes::default();
        let (mut session, _dir) = test_session_with(&fakes);

        assert_eq!(open(&mut session, &args("notepad")).unwrap(), "Opening notepad");
        assert_eq!(fakes.launched_apps(), vec!["notepad"]);
    }

    #[test]
    fn test_open_browser() {
        let fakes = Fakes::default();
        let (mut session, _dir) = test_session_with(&fakes);

        assert_eq!(open(&mut session, &args("browser")).unwrap(), "Opening browser");
        assert_eq!(fakes.opened_urls(), vec!["https://www.google.com"]);
    }

    #[test]
    fn test_open_unknown_app() {
        let fakes = Fakes::default();
        let (mut session, _dir) = test_session_with(&fakes);

        assert_eq!(
            open(&mut session, &args("spotify")).unwrap(),
            "Don't know how to open spotify"
        );
        assert!(fakes.launched_apps().is_empty());
        assert_eq!(
            open(&mut session, &[]).unwrap(),
            "Please specify an application to open"
        );
    }

    #[test]
    fn test_open_launch_failure_is_reported() {
        let fakes = Fakes::default();
        fakes.fail_launches();
        let (mut session, _dir) = test_session_with(&fakes);

        let reply = open(&mut session, &args("paint")).unwrap();
        assert!(reply.starts_with("Couldn't open paint:"));
    }

    #[tokio::test]
    async fn test_weather_default_city() {
        let fakes = Fakes::default();
        fakes.set_weather(WeatherReport {
            temperature: 18.5,
            description: "light rain".to_string(),
        });
        let (mut session, _dir) = test_session_with(&fakes);

        assert_eq!(
            weather(&mut session, &[]).await.unwrap(),
            "The weather in New York is 18.5°C with light rain"
        );
        assert_eq!(
            weather(&mut session, &args("san francisco")).await.unwrap(),
            "The weather in san francisco is 18.5°C with light rain"
        );
    }

    #[tokio::test]
    async fn test_weather_not_configured() {
        let (mut session, _dir) = test_session();
        assert_eq!(
            weather(&mut session, &args("paris")).await.unwrap(),
            "Weather service not configured. Please add your OpenWeatherMap API key."
        );
    }

    #[tokio::test]
    async fn test_weather_failure_is_graceful() {
        let fakes = Fakes::default();
        fakes.fail_weather(503);
        let (mut session, _dir) = test_session_with(&fakes);

        assert_eq!(
            weather(&mut session, &args("paris")).await.unwrap(),
            "Weather service is currently unavailable"
        );
    }
}
