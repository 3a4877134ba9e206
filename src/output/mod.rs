use std::fmt;
use std::io::{self, Write};
use tracing::error;

#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    ProblemPrompt(usize, String),
    WrongAnswer(String),
    TimeUp,
    ScoreReport(usize, usize),
    ExitPrompt,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ProblemPrompt(number, question) => {
                write!(f, "Problem #{}: {} = ", number, question)
            }
            Message::WrongAnswer(answer) => {
                writeln!(f, "Wrong! The correct answer is {}", answer)
            }
            Message::TimeUp => writeln!(f),
            Message::ScoreReport(correct, total) => {
                writeln!(f, "You scored {} out of {}", correct, total)
            }
            Message::ExitPrompt => writeln!(f, "Press Enter to exit..."),
        }
    }
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}

/// Writes messages to stdout, flushing so prompts show before input is read.
#[derive(Clone, Debug, Default)]
pub struct ConsoleOutput;

impl QuizOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = write!(handle, "{}", message).and_then(|_| handle.flush()) {
            error!("Could not write to stdout: {}", e);
        }
    }
}
