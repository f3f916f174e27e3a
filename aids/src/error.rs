use std::error::Error;

/// Status returned by the dataset service, tagged with the rpc that
/// produced it when known.
#[derive(Debug)]
pub struct TonicStatusError {
    pub rpc: Option<&'static str>,
    pub status: tonic::Status,
}

impl std::fmt::Display for TonicStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rpc {
            Some(rpc) => write!(f, "{} failed", rpc)?,
            None => write!(f, "dataset service call failed")?,
        }

        write!(f, " with status '{}'", self.status.code())?;
        if !self.status.message().is_empty() {
            write!(f, ", message: {:?}", self.status.message())?;
        }
        Ok(())
    }
}

impl Error for TonicStatusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.status.source()
    }
}

/// Every failure a dataset call can surface.
///
/// Transport, remote and decoding failures all arrive from the stub as a
/// `tonic::Status` and are not told apart here.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Status(#[from] TonicStatusError),

    #[error("invalid base url '{0}'")]
    InvalidBaseUrl(String),

    #[error("download of dataset {0} returned no chunks")]
    MissingChunk(i32),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Maps a status from `rpc` into an error naming it.
    pub fn rpc(rpc: &'static str) -> impl FnOnce(tonic::Status) -> ClientError {
        move |status| ClientError::Status(TonicStatusError {
            rpc: Some(rpc),
            status: status,
        })
    }

    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            ClientError::Status(error) => Some(&error.status),
            _ => None,
        }
    }
}

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        ClientError::Status(TonicStatusError {
            rpc: None,
            status: status,
        })
    }
}
