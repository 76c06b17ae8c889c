#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(&'static str),

    #[error("cannot parse {token:?} as {ty}")]
    Parse { token: String, ty: &'static str },

    #[error("unknown problem: {0}")]
    UnknownProblem(String),

    #[error("problem {problem} has no variant named {variant}")]
    UnknownVariant { problem: String, variant: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse<T>(token: &[u8]) -> Self {
        Self::Parse {
            token: String::from_utf8_lossy(token).into_owned(),
            ty: std::any::type_name::<T>(),
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
