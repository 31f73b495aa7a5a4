pub const MAX_QUESTION_LENGTH: usize = 200;
pub const MAX_OPTION_LENGTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Question must not be empty")]
    EmptyQuestion,
    #[error("Question exceeds maximum length of {MAX_QUESTION_LENGTH}")]
    QuestionTooLong,
    #[error("Empty option text")]
    EmptyOption,
    #[error("Option text exceeds maximum length of {MAX_OPTION_LENGTH}: {0}")]
    OptionTooLong(String),
    #[error("Duplicate option: {0}")]
    DuplicateOption(String),
}

pub fn validate_question(question: &str) -> Result<(), ValidationError> {
    if question.trim().is_empty() { return Err(ValidationError::EmptyQuestion); }
    if question.chars().count() > MAX_QUESTION_LENGTH { return Err(ValidationError::QuestionTooLong); }
    Ok(())
}

pub fn validate_option(option: &str) -> Result<(), ValidationError> {
    if option.trim().is_empty() { return Err(ValidationError::EmptyOption); }
    if option.chars().count() > MAX_OPTION_LENGTH {
        return Err(ValidationError::OptionTooLong(option.to_string()));
    }
    Ok(())
}

/// Checks the question and both labels. Labels are compared exactly, the
/// same way submitted votes are matched against them.
pub fn validate_poll(question: &str, option1: &str, option2: &str) -> Result<(), ValidationError> {
    validate_question(question)?;
    validate_option(option1)?;
    validate_option(option2)?;

    if option1 == option2 {
        return Err(ValidationError::DuplicateOption(option1.to_string()));
    }

    Ok(())
}
