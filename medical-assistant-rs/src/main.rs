// medical-assistant-rs/src/main.rs
// Terminal front-end for the medical assistant

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use medical_assistant::session::MISSING_KEY_MESSAGE;
use medical_assistant::{AssistantConfig, ChatMessage, ChatSession, Command, Sender};

const HELP: &str = "Commands: /lang <text>, /history, /clear, /quit. Anything else is sent as a question.";

fn print_message(message: &ChatMessage) {
    let who = match message.sender {
        Sender::User => "you".to_string(),
        Sender::Bot => match message.language {
            Some(language) => format!("medibot [{}]", language),
            None => "medibot".to_string(),
        },
    };
    println!("{} {}> {}", message.timestamp.format("%H:%M:%S"), who, message.text);
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    config_rs::load_dotenv();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AssistantConfig::from_env()?;
    log::info!(
        "Starting medibot (model: {}, phrasing: {:?})",
        config.gemini.model,
        config.phrasing
    );

    let mut session = ChatSession::from_config(&config)?;
    if !session.is_configured() {
        println!("{}", MISSING_KEY_MESSAGE);
    }

    println!("{}", HELP);
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::History => session.transcript().iter().for_each(print_message),
            Command::Clear => {
                session.clear();
                println!("Conversation cleared.");
            }
            Command::Lang(text) => {
                let detection = session.detector().analyze(text);
                println!("{}", serde_json::to_string_pretty(&detection)?);
            }
            Command::Ask(question) => {
                if let Some(reply) = session.send(question).await {
                    print_message(&reply);
                }
            }
        }

        prompt()?;
    }

    log::info!("medibot exiting");
    Ok(())
}
