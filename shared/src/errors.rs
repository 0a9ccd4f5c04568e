//! Error types for the Smart Fitness Planner domain

use thiserror::Error;

/// A rejected field value, reported with the constraint it violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failure to recognize an enumerated token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Goal must be one of: weight_loss, muscle_gain, maintenance (got '{0}')")]
    UnknownGoal(String),

    #[error("Gender must be one of: male, female, other (got '{0}')")]
    UnknownGender(String),

    #[error("Day must be one of: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday (got '{0}')")]
    UnknownDay(String),

    #[error("mealType must be one of: breakfast, lunch, dinner, snacks (got '{0}')")]
    UnknownMealType(String),
}

impl ParseError {
    /// Name of the request field the token came from
    pub fn field(&self) -> &'static str {
        match self {
            ParseError::UnknownGoal(_) => "goal",
            ParseError::UnknownGender(_) => "gender",
            ParseError::UnknownDay(_) => "day",
            ParseError::UnknownMealType(_) => "meal_type",
        }
    }
}

impl From<ParseError> for ValidationError {
    fn from(err: ParseError) -> Self {
        ValidationError::new(err.field(), err.to_string())
    }
}
