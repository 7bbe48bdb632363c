pub mod bank;
pub mod question;

pub use bank::QuestionBank;
pub use question::Question;
