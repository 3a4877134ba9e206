use anyhow::*;
use tracing::{debug, info};

use self::countdown::Countdown;
use self::definition::Problem;
use self::question::{Grade, QuestionState};
use self::settings::Settings;
use crate::input::AnswerChannel;
use crate::output::{Message, QuizOutput};

pub mod countdown;
pub mod definition;
pub mod question;
pub mod settings;
pub mod shuffle;


#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionState {
    pub asked_count: usize,
    pub correct_count: usize,
    pub deadline_expired: bool,
}

impl SessionState {
    fn record(&mut self, grade: Grade) {
        self.asked_count += 1;
        if grade == Grade::Correct {
            self.correct_count += 1;
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

/// Keeps the first `round_size` problems, in their current order.
pub fn select_round(mut problems: Vec<Problem>, round_size: usize) -> Vec<Problem> {
    problems.truncate(round_size);
    problems
}

pub struct Quiz<O: QuizOutput + Clone> {
    round: Vec<Problem>,
    settings: Settings,
    state: SessionState,
    answers: AnswerChannel,
    output: O,
}

impl<O: QuizOutput + Clone> Quiz<O> {
    /// `problems` are expected to be shuffled already; the round is their prefix.
    pub fn new(
        problems: Vec<Problem>,
        settings: Settings,
        answers: AnswerChannel,
        output: O,
    ) -> Quiz<O> {
        let round = select_round(problems, settings.round_size);
        Quiz {
            round,
            settings,
            state: SessionState::default(),
            answers,
            output,
        }
    }

    pub fn round(&self) -> &[Problem] {
        &self.round
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn outstanding_readers(&self) -> usize {
        self.answers.outstanding_readers()
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.state.correct_count,
            total: self.round.len(),
        }
    }

    /// Asks every question of the round until they are all answered or the countdown ends.
    pub fn run(&mut self) -> Result<Score> {
        let countdown = Countdown::start(self.settings.time_limit);
        info!(
            questions = self.round.len(),
            time_limit = ?self.settings.time_limit,
            "starting quiz"
        );

        for (index, problem) in self.round.iter().enumerate() {
            debug!(
                number = index + 1,
                remaining = ?countdown.time_remaining(),
                "asking question"
            );
            let mut question = QuestionState::new(index + 1, problem.clone(), self.output.clone());
            question.prompt()?;
            self.answers.request();

            match self.answers.recv_until(countdown.expires_at()) {
                Some(answer) => {
                    let grade = question.answer(&answer)?;
                    self.state.record(grade);
                }
                None => {
                    question.time_up()?;
                    self.state.deadline_expired = true;
                    debug!(
                        asked = self.state.asked_count,
                        "time limit reached, skipping remaining questions"
                    );
                    break;
                }
            }
        }

        let score = self.score();
        self.output.say(&Message::ScoreReport(score.correct, score.total));
        Ok(score)
    }

    /// Blocks until one more line arrives. After a timeout this is the line the
    /// abandoned reader was already waiting for.
    pub fn wait_for_exit(&mut self) {
        self.output.say(&Message::ExitPrompt);
        debug!(
            outstanding = self.answers.outstanding_readers(),
            "waiting for exit"
        );
        self.answers.wait();
    }
}
