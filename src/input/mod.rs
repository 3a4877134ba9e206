use parking_lot::Mutex;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, error};

#[cfg(test)]
pub mod mock;

pub trait LineSource: Send {
    /// Blocks until a line is available. `None` once input has ended.
    fn read_line(&mut self) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                error!("Could not read from stdin: {}", e);
                None
            }
        }
    }
}

/// First whitespace-delimited token of a line, or an empty string.
pub fn first_token(line: &str) -> String {
    line.split_whitespace().next().unwrap_or_default().to_owned()
}

/// Hands lines from short-lived reader threads back to the session through one channel.
///
/// Readers are never cancelled. A reader whose line was not received stays
/// outstanding, and the next `wait` consumes its line instead of spawning another.
pub struct AnswerChannel {
    source: Arc<Mutex<Box<dyn LineSource>>>,
    sender: Sender<String>,
    receiver: Receiver<String>,
    outstanding_readers: usize,
}

impl AnswerChannel {
    pub fn new<S: LineSource + 'static>(source: S) -> Self {
        let (sender, receiver) = mpsc::channel();
        let source: Box<dyn LineSource> = Box::new(source);
        AnswerChannel {
            source: Arc::new(Mutex::new(source)),
            sender,
            receiver,
            outstanding_readers: 0,
        }
    }

    pub fn outstanding_readers(&self) -> usize {
        self.outstanding_readers
    }

    /// Starts a reader thread whose token will arrive on the channel.
    pub fn request(&mut self) {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        self.outstanding_readers += 1;
        thread::spawn(move || {
            let line = source.lock().read_line();
            let answer = line.as_deref().map(first_token).unwrap_or_default();
            if sender.send(answer).is_err() {
                debug!("Answer channel closed before reader finished");
            }
        });
    }

    /// Waits for the next answer until `deadline`. `None` when the deadline passes first.
    /// Without a deadline this blocks until a reader delivers.
    pub fn recv_until(&mut self, deadline: Option<Instant>) -> Option<String> {
        let received = match deadline {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match self.receiver.recv_timeout(timeout) {
                    Ok(answer) => Some(answer),
                    Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
                }
            }
            None => self.receiver.recv().ok(),
        };
        if received.is_some() {
            self.outstanding_readers -= 1;
        }
        received
    }

    /// Blocks for one more line, reusing an outstanding reader when there is one.
    pub fn wait(&mut self) -> Option<String> {
        if self.outstanding_readers == 0 {
            self.request();
        }
        let answer = self.receiver.recv().ok()?;
        self.outstanding_readers -= 1;
        Some(answer)
    }
}
