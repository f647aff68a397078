// pocket-assistant - type a command, get an answer
//
// This is the main entry point. With arguments it runs one command and exits;
// without, it starts the interactive loop.

use anyhow::Context;
use pocket_assistant_lib::{
    services::{CommandTranscriber, ConsoleVoice, SpeechOutput},
    Config, Console, Session,
};
use std::env;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config = Config::from_env().context("Invalid configuration")?;

    match args.get(1).map(String::as_str) {
        Some("-h" | "--help") => {
            print_usage();
            Ok(())
        }
        Some("-v" | "--version") => {
            println!("pocket-assistant v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(_) => run_once(&config, &args[1..].join(" ")).await,
        None => run_interactive(config).await,
    }
}

async fn run_once(config: &Config, input: &str) -> anyhow::Result<()> {
    let mut session = Session::from_config(config);
    let reply = session.handle(input).await;
    ConsoleVoice::new(config.tts_command.clone()).speak(&reply.text);

    session
        .shutdown()
        .with_context(|| format!("Could not save {}", config.data_file.display()))?;
    Ok(())
}

async fn run_interactive(config: Config) -> anyhow::Result<()> {
    println!("🚀 Starting Personal AI Assistant...");

    let session = Session::from_config(&config);
    let mut console = Console::new(
        session,
        Box::new(CommandTranscriber::new(config.stt_command.clone())),
        Box::new(ConsoleVoice::new(config.tts_command.clone())),
        config.listen_timeout,
    );

    println!(
        "🤖 {} initialized! Type 'help' for available commands or 'quit' to exit.",
        config.name
    );

    let stdin = BufReader::new(tokio::io::stdin());
    console.run(stdin, tokio::signal::ctrl_c()).await?;
    Ok(())
}

fn print_usage() {
    println!(
        r#"pocket-assistant v{} - notes, reminders and todos from your terminal

USAGE:
    pocket-assistant                 Start the interactive assistant
    pocket-assistant <COMMAND...>    Run a single command and exit

COMMANDS:
    time, date, weather [city], note <message>, notes,
    reminder <message>, search <query>, open <app>,
    calculate <expression>, todo [add <task> | done <number>], help

EXAMPLES:
    pocket-assistant note call the plumber
    pocket-assistant todo add renew passport
    pocket-assistant calculate (4 + 6) / 4

CONFIGURATION (environment or .env):
    ASSISTANT_DATA_FILE            Where your data lives (default ~/.pocket-assistant/user_data.json)
    OPENWEATHER_API_KEY            Enables the weather command
    ASSISTANT_DEFAULT_CITY         City for a bare 'weather' (default New York)
    ASSISTANT_STT_COMMAND          Speech-to-text command used by 'listen'
    ASSISTANT_TTS_COMMAND          Text-to-speech command for replies
    ASSISTANT_LISTEN_TIMEOUT_SECS  Voice capture timeout (default 5)
    RUST_LOG                       Log filter (default warn)
"#,
        env!("CARGO_PKG_VERSION")
    );
}
