use csv::StringRecord;
use tracing::warn;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Problem {
    pub question: String,
    pub answer: String,
}

impl Problem {
    pub fn new<Q: Into<String>, A: Into<String>>(question: Q, answer: A) -> Self {
        Problem {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn is_answer_correct(&self, answer: &str) -> bool {
        self.answer == answer
    }
}

impl From<&StringRecord> for Problem {
    fn from(record: &StringRecord) -> Self {
        match (record.len(), record.get(0), record.get(1)) {
            (2, Some(question), Some(answer)) => Problem::new(question, answer),
            (fields, _, _) => {
                warn!(fields, "record does not have two fields, using a blank problem");
                Problem::default()
            }
        }
    }
}

/// Builds one problem per record. Malformed records keep their slot as a blank problem.
pub fn build_problems<'a, I>(records: I) -> Vec<Problem>
where
    I: IntoIterator<Item = &'a StringRecord>,
{
    records.into_iter().map(Problem::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn maps_two_field_records() {
        let records = vec![record(&["2+2", "4"]), record(&["3+3", "6"])];
        let problems = build_problems(&records);
        assert_eq!(
            problems,
            vec![Problem::new("2+2", "4"), Problem::new("3+3", "6")]
        );
    }

    #[test]
    fn malformed_records_become_blank_problems_in_place() {
        let records = vec![
            record(&["2+2", "4"]),
            record(&["lonely"]),
            record(&["a", "b", "c"]),
            record(&["5+5", "10"]),
        ];
        let problems = build_problems(&records);
        assert_eq!(problems.len(), records.len());
        assert_eq!(problems[0], Problem::new("2+2", "4"));
        assert_eq!(problems[1], Problem::default());
        assert_eq!(problems[2], Problem::default());
        assert_eq!(problems[3], Problem::new("5+5", "10"));
    }

    #[test]
    fn empty_input_gives_empty_set() {
        let records: Vec<StringRecord> = Vec::new();
        assert!(build_problems(&records).is_empty());
    }

    #[test]
    fn grading_is_exact() {
        let problem = Problem::new("2+2", "4");
        assert!(problem.is_answer_correct("4"));
        assert!(!problem.is_answer_correct("4.0"));
        assert!(!problem.is_answer_correct(" 4"));
        assert!(!problem.is_answer_correct(""));
    }

    #[test]
    fn blank_problem_accepts_empty_answer() {
        assert!(Problem::default().is_answer_correct(""));
    }
}
