#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    OptionsParseError,
    IOError,
    ReadError,
    InvalidVar,
}

impl std::fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, cause: None }
    }

    #[inline]
    pub fn with_cause<E>(kind: ErrorKind, cause: E) -> Self
    where E: Into<Box<dyn std::error::Error + Send + Sync>> {
        Self { kind, cause: Some(cause.into()) }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(value: std::io::Error) -> Self {
        Self::with_cause(ErrorKind::IOError, value)
    }
}

impl std::fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(cause) = &self.cause {
            write!(f, "{}: {}", self.kind, cause)
        } else {
            std::fmt::Display::fmt(&self.kind, f)
        }
    }
}

impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }
}

/// Why the environment refused a variable.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum InvalidVar {
    #[error("empty variable name")]
    EmptyKey,

    #[error("variable name {0:?} contains '='")]
    KeyContainsEquals(String),

    #[error("variable name {0:?} contains a null byte")]
    KeyContainsNull(String),

    #[error("value of {0:?} contains a null byte")]
    ValueContainsNull(String),
}
