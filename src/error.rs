use std::fmt;
use thiserror::Error as ThisError;

/// Where a nested attribute sits inside its parent list or map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Index(usize),
    Key(String),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "index {index}"),
            Self::Key(key) => write!(f, "key {key}"),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unsupported attribute value kind: {0}")]
    UnsupportedKind(String),
    /// A nested attribute failed to convert.
    ///
    /// The message already carries the message of `source`, so reporters walking
    /// [`std::error::Error::source`] print each nested message twice. Use [`Error::path`] and
    /// [`Error::root_cause`] to inspect the chain instead.
    #[error("failed to convert attribute at {at}: {source}")]
    Conversion {
        at: Position,
        #[source]
        source: Box<Error>,
    },
    #[error("failed to decode item: {0}")]
    Decode(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub(crate) fn at(at: Position, source: Error) -> Self {
        Self::Conversion {
            at,
            source: Box::new(source),
        }
    }

    /// Positions leading to the failed attribute, outermost first.
    ///
    /// Empty unless the error is a conversion failure.
    pub fn path(&self) -> Vec<&Position> {
        let mut path = vec![];
        let mut err = self;

        while let Self::Conversion { at, source } = err {
            path.push(at);
            err = source.as_ref();
        }

        path
    }

    /// The innermost cause, skipping the positional wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Conversion { source, .. } => source.root_cause(),
            _ => self,
        }
    }
}
