//! 服务层模块

pub mod catalog;
mod question_generator;
mod question_validator;

pub use catalog::TemplateCatalog;
pub use question_generator::{GeneratedQuestionSet, QuestionGenerator};
pub use question_validator::{QuestionValidator, ValidationResult};
