//! Questions module - Question definitions and the static bank.

mod bank;
mod question;
mod response;

pub use bank::{find_question, question_bank, questions_for_phase};
pub use question::{Question, QuestionOption, QuestionType};
pub use response::ResponseValue;
