#![allow(dead_code)]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    // Video streaming parameter errors
    #[error("video: display density must be positive, got {0}")]
    ErrNonPositiveDisplayDensity(i32),
    #[error("video: frame rate must be positive, got {0}")]
    ErrNonPositiveFrameRate(i32),
    #[error("video: bitrate must be positive, got {0}")]
    ErrNonPositiveBitrate(i32),
    #[error("video: keyframe interval must be positive, got {0}")]
    ErrNonPositiveInterval(i32),
    #[error("video: resolution width must be positive, got {0}")]
    ErrNonPositiveResolutionWidth(i32),
    #[error("video: resolution height must be positive, got {0}")]
    ErrNonPositiveResolutionHeight(i32),
    #[error("video: streaming protocol is unspecified")]
    ErrUnspecifiedProtocol,
    #[error("video: streaming codec is unspecified")]
    ErrUnspecifiedCodec,

    #[error("invalid json: {0}")]
    ErrInvalidJson(String),

    //Other Errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ErrInvalidJson(e.to_string())
    }
}

/// flatten_errs flattens multiple errors into one
pub fn flatten_errs(errs: Vec<impl Into<Error>>) -> Result<()> {
    if errs.is_empty() {
        Ok(())
    } else {
        let errs_strs: Vec<String> = errs.into_iter().map(|e| e.into().to_string()).collect();
        Err(Error::Other(errs_strs.join("\n")))
    }
}
