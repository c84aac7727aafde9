use std::fmt;

#[derive(Debug, Clone)]
pub enum ResumelinkError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    Validation(String),
    NotFound(String),
    DateParse(String),
    MailAddress(String),
    MailTransport(String),
}

impl ResumelinkError {
    pub fn code(&self) -> &'static str {
        match self {
            ResumelinkError::Config(_) => "E001",
            ResumelinkError::FileOperation(_) => "E002",
            ResumelinkError::Serialization(_) => "E003",
            ResumelinkError::Validation(_) => "E004",
            ResumelinkError::NotFound(_) => "E005",
            ResumelinkError::DateParse(_) => "E006",
            ResumelinkError::MailAddress(_) => "E007",
            ResumelinkError::MailTransport(_) => "E008",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ResumelinkError::Config(_) => "Configuration Error",
            ResumelinkError::FileOperation(_) => "File Operation Error",
            ResumelinkError::Serialization(_) => "Serialization Error",
            ResumelinkError::Validation(_) => "Validation Error",
            ResumelinkError::NotFound(_) => "Resource Not Found",
            ResumelinkError::DateParse(_) => "Date Parse Error",
            ResumelinkError::MailAddress(_) => "Mail Address Error",
            ResumelinkError::MailTransport(_) => "Mail Transport Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ResumelinkError::Config(msg) => msg,
            ResumelinkError::FileOperation(msg) => msg,
            ResumelinkError::Serialization(msg) => msg,
            ResumelinkError::Validation(msg) => msg,
            ResumelinkError::NotFound(msg) => msg,
            ResumelinkError::DateParse(msg) => msg,
            ResumelinkError::MailAddress(msg) => msg,
            ResumelinkError::MailTransport(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ResumelinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ResumelinkError {}

impl ResumelinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        ResumelinkError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ResumelinkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ResumelinkError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ResumelinkError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ResumelinkError::NotFound(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        ResumelinkError::DateParse(msg.into())
    }

    pub fn mail_address<T: Into<String>>(msg: T) -> Self {
        ResumelinkError::MailAddress(msg.into())
    }

    pub fn mail_transport<T: Into<String>>(msg: T) -> Self {
        ResumelinkError::MailTransport(msg.into())
    }
}

impl From<std::io::Error> for ResumelinkError {
    fn from(err: std::io::Error) -> Self {
        ResumelinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ResumelinkError {
    fn from(err: serde_json::Error) -> Self {
        ResumelinkError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ResumelinkError {
    fn from(err: chrono::ParseError) -> Self {
        ResumelinkError::DateParse(err.to_string())
    }
}

impl From<lettre::address::AddressError> for ResumelinkError {
    fn from(err: lettre::address::AddressError) -> Self {
        ResumelinkError::MailAddress(err.to_string())
    }
}

impl From<lettre::error::Error> for ResumelinkError {
    fn from(err: lettre::error::Error) -> Self {
        ResumelinkError::MailTransport(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for ResumelinkError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        ResumelinkError::MailTransport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ResumelinkError>;
