// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Video(VideoError),
}

/// Ways the background video can fail, each with its own localized message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    /// The file is missing or FFmpeg could not open it.
    IoError(String),
    /// The container holds no video stream.
    NoVideoStream,
    /// FFmpeg has no decoder for the stream's codec.
    UnsupportedCodec(String),
    /// FFmpeg rejected the data as invalid.
    CorruptedFile,
    /// The decoder or scaler could not be set up.
    DecodingFailed(String),
    Other(String),
}

impl VideoError {
    /// Fluent message key shown under the brand label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            VideoError::IoError(_) => "error-video-io",
            VideoError::NoVideoStream => "error-video-no-stream",
            VideoError::UnsupportedCodec(_) => "error-video-unsupported-codec",
            VideoError::CorruptedFile => "error-video-corrupted",
            VideoError::DecodingFailed(_) => "error-video-decoding-failed",
            VideoError::Other(_) => "error-video-general",
        }
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::IoError(detail) => write!(f, "cannot open video: {detail}"),
            VideoError::NoVideoStream => f.write_str("no video stream in file"),
            VideoError::UnsupportedCodec(codec) => write!(f, "no decoder for codec {codec}"),
            VideoError::CorruptedFile => f.write_str("invalid video data"),
            VideoError::DecodingFailed(detail) => write!(f, "decoder setup failed: {detail}"),
            VideoError::Other(detail) => f.write_str(detail),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Video(e) => write!(f, "Video Error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
