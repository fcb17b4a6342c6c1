use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const STATUS_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn message(&self) -> &str {
        match self {
            FormStatus::Success(s) | FormStatus::Error(s) => s,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormStatus::Success(_))
    }
}

/// Contact form state. Submitting only acknowledges locally, nothing is sent anywhere.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: Option<(FormStatus, Duration)>,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// Handles a submit at `now` and returns the status to show.
    pub fn submit(&mut self, now: Duration) -> FormStatus {
        let status = if self.is_complete() {
            self.name.clear();
            self.email.clear();
            self.subject.clear();
            self.message.clear();
            FormStatus::Success(SUCCESS_MESSAGE.to_string())
        } else {
            FormStatus::Error(MISSING_FIELDS_MESSAGE.to_string())
        };
        self.status = Some((status.clone(), now));
        status
    }

    /// Status visible at `now`; it lapses [`STATUS_LIFETIME`] after the submit that set it.
    pub fn status(&self, now: Duration) -> Option<&FormStatus> {
        self.status
            .as_ref()
            .filter(|(_, at)| now.saturating_sub(*at) < STATUS_LIFETIME)
            .map(|(status, _)| status)
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
