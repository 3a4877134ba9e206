pub mod error;
pub mod input;
pub mod output;
pub mod quiz;

pub use error::QuizError;
