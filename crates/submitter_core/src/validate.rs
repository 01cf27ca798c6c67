use std::fmt;

use crate::SelectedFile;

/// Validated form input, ready to hand to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    pub email: String,
    pub file: SelectedFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail,
    MissingFile,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail => write!(f, "Enter a valid email."),
            ValidationError::MissingFile => write!(f, "Please upload a file."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks the raw email and the optional selected file. No network call is
/// made until this passes.
pub fn validate(
    email: &str,
    file: Option<&SelectedFile>,
) -> Result<SubmissionInput, ValidationError> {
    if !email_matches(email) {
        return Err(ValidationError::InvalidEmail);
    }
    let file = file.cloned().ok_or(ValidationError::MissingFile)?;
    Ok(SubmissionInput {
        email: email.to_string(),
        file,
    })
}

/// Mirrors the lenient front-end pattern `^.+@.+\..+$`: some `@` with at
/// least one character before it, and after that `@` a `.` with at least one
/// character on each side. Accepts plenty of technically invalid addresses
/// (multiple `@`, for instance); the real check happens server-side.
fn email_matches(email: &str) -> bool {
    email.char_indices().any(|(i, c)| {
        if c != '@' || i == 0 {
            return false;
        }
        let rest = &email[i + 1..];
        rest.char_indices()
            .any(|(j, d)| d == '.' && j > 0 && i + 1 + j + 1 < email.len())
    })
}
