use std::sync::mpsc::{self, Receiver, Sender};

use crate::input::LineSource;

/// Lines fed by the test through the returned sender. Dropping the sender ends input.
pub struct ScriptedLines {
    lines: Receiver<String>,
}

impl ScriptedLines {
    pub fn new() -> (Self, Sender<String>) {
        let (sender, lines) = mpsc::channel();
        (ScriptedLines { lines }, sender)
    }

    pub fn with_lines(lines: &[&str]) -> (Self, Sender<String>) {
        let (source, sender) = ScriptedLines::new();
        for line in lines {
            sender
                .send(format!("{}\n", line))
                .expect("Scripted lines receiver dropped");
        }
        (source, sender)
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> Option<String> {
        self.lines.recv().ok()
    }
}
