#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("`{name}` is not a valid identifier")]
    InvalidIdentifier { name: String },

    #[error("`{name}` was already issued in this compilation unit")]
    Collision { name: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// The identifier this error is about.
    pub fn name(&self) -> &str {
        match self {
            Error::InvalidIdentifier { name } | Error::Collision { name } => name,
        }
    }
}
