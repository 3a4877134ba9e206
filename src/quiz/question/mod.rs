use anyhow::*;
use tracing::debug;

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::Problem;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Grade {
    Correct,
    Wrong,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Prompting,
    AwaitingAnswer,
    Graded(Grade),
    TimedOut,
}

pub struct QuestionState<O: QuizOutput> {
    number: usize,
    problem: Problem,
    phase: Phase,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new(number: usize, problem: Problem, output: O) -> Self {
        QuestionState {
            number,
            problem,
            phase: Phase::Prompting,
            output,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prompt(&mut self) -> Result<()> {
        if self.phase != Phase::Prompting {
            return Err(anyhow!("Problem #{} was already shown", self.number));
        }
        self.output.say(&Message::ProblemPrompt(
            self.number,
            self.problem.question.clone(),
        ));
        self.phase = Phase::AwaitingAnswer;
        Ok(())
    }

    pub fn answer(&mut self, answer: &str) -> Result<Grade> {
        if self.phase != Phase::AwaitingAnswer {
            return Err(anyhow!("Problem #{} is not awaiting an answer", self.number));
        }

        let grade = if self.problem.is_answer_correct(answer) {
            Grade::Correct
        } else {
            self.output
                .say(&Message::WrongAnswer(self.problem.answer.clone()));
            Grade::Wrong
        };
        debug!(number = self.number, ?grade, "graded answer");

        self.phase = Phase::Graded(grade);
        Ok(grade)
    }

    pub fn time_up(&mut self) -> Result<()> {
        if self.phase != Phase::AwaitingAnswer {
            return Err(anyhow!("Problem #{} is not awaiting an answer", self.number));
        }
        self.output.say(&Message::TimeUp);
        self.phase = Phase::TimedOut;
        Ok(())
    }
}
