use services::CheckupError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NoQuestion,
    Blocked,
    Completed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_checkup(err: &CheckupError) -> Self {
        match err {
            CheckupError::NoActiveQuestion | CheckupError::UnknownQuestion(_) => Self::NoQuestion,
            CheckupError::NoNextQuestion
            | CheckupError::NoPreviousQuestion
            | CheckupError::IndexOutOfRange { .. } => Self::Blocked,
            CheckupError::AlreadyComplete => Self::Completed,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NoQuestion => "There is no question to answer here.",
            ViewError::Blocked => "You can't move any further in that direction.",
            ViewError::Completed => "This checkup is already finished. Start again to change your answers.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
