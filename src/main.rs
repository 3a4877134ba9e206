use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use timed_quiz::input::{AnswerChannel, StdinLines};
use timed_quiz::output::ConsoleOutput;
use timed_quiz::quiz::definition::QuizDefinition;
use timed_quiz::quiz::settings::Settings;
use timed_quiz::quiz::{shuffle, Quiz};

#[derive(Parser)]
#[command(
    name = "timed-quiz",
    version,
    about = "Timed quiz from a CSV of questions and answers"
)]
struct Cli {
    /// Path of the CSV file, one `question,answer` per line
    #[arg(short = 'f', long = "file", default_value = "quiz.csv")]
    file: PathBuf,

    /// Time limit for the whole quiz, in seconds
    #[arg(short = 't', long = "time-limit", default_value_t = 30)]
    time_limit: u64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("timed_quiz=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let definition = match QuizDefinition::open(&cli.file) {
        Ok(definition) => definition,
        Err(e) => exit(&format!("Error reading the file: {}", e)),
    };

    let settings = Settings {
        time_limit: Duration::from_secs(cli.time_limit),
        ..Default::default()
    };

    if let Err(e) = play(definition, settings) {
        exit(&format!("Error: {:#}", e));
    }
}

fn play(definition: QuizDefinition, settings: Settings) -> Result<()> {
    let mut problems = definition.into_problems();
    shuffle::shuffle(&mut problems, &mut shuffle::time_seeded_rng());

    let mut quiz = Quiz::new(
        problems,
        settings,
        AnswerChannel::new(StdinLines),
        ConsoleOutput,
    );
    quiz.run().context("Quiz ended unexpectedly")?;
    quiz.wait_for_exit();
    Ok(())
}

fn exit(message: &str) -> ! {
    println!("{}", message);
    process::exit(1);
}
