//! The error type shared by buffer access and codec adapters.
//!
//! [`ImageError`] separates, by variant, errors coming from decoding,
//! encoding, caller-supplied parameters and the environment. Codec crate
//! errors are carried as opaque boxed sources; they can be inspected through
//! `Error::source` but their concrete types are not part of the stable
//! interface.

use core::fmt;
use std::io;

use snafu::{IntoError, Snafu};

use crate::image::ImageFormat;

/// An opaque error source from an underlying codec.
pub(crate) type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The generic error type for image operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum ImageError {
    /// The input data did not conform to the format's specification, or the
    /// decoder could not produce the RGBA layout the buffer requires.
    #[snafu(display("failed to decode {format} image: {source}"))]
    Decoding {
        /// The format the decoder was selected for.
        format: ImageFormat,
        /// The underlying codec error.
        source: BoxedError,
    },

    /// The buffer could not be encoded with the chosen format.
    #[snafu(display("failed to encode {format} image: {source}"))]
    Encoding {
        /// The format the encoder was selected for.
        format: ImageFormat,
        /// The underlying codec error.
        source: BoxedError,
    },

    /// No codec is registered for the requested format.
    ///
    /// Raised at image creation (and save) when the file extension after the
    /// final `.` names no supported format.
    #[snafu(display("unsupported image format `{hint}`"))]
    UnsupportedFormat {
        /// The extension that failed to match a format.
        hint: String,
    },

    /// An error was encountered in input arguments.
    ///
    /// This covers strictly internal operations such as row access and
    /// resizing that involve no external format specifications.
    #[snafu(display("invalid parameter: {kind}"))]
    Parameter {
        /// What exactly was malformed.
        kind: ParameterErrorKind,
    },

    /// An error occurred while interacting with the environment.
    #[snafu(display("i/o error: {source}"))]
    #[snafu(context(false))]
    Io {
        /// The underlying `std::io` error.
        source: io::Error,
    },
}

/// Details how a parameter is malformed.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParameterErrorKind {
    /// A row index at or beyond the buffer height was passed.
    RowOutOfBounds {
        /// The requested row.
        row: usize,
        /// The buffer height the row must stay below.
        height: usize,
    },
    /// The byte slice length does not cover the supplied dimensions.
    DimensionMismatch,
    /// A single-axis resize was asked to grow the image; that path only
    /// shrinks. `scale` is the enlargement path.
    UpscaleUnsupported {
        /// The requested target extent.
        requested: usize,
        /// The current extent along that axis.
        current: usize,
    },
}

impl fmt::Display for ParameterErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterErrorKind::RowOutOfBounds { row, height } => {
                write!(f, "row index {row} out of range for height {height}")
            }
            ParameterErrorKind::DimensionMismatch => {
                write!(f, "byte length does not match the supplied dimensions")
            }
            ParameterErrorKind::UpscaleUnsupported { requested, current } => {
                write!(
                    f,
                    "target extent {requested} exceeds current extent {current}"
                )
            }
        }
    }
}

impl ImageError {
    pub(crate) fn decoding(format: ImageFormat, source: impl Into<BoxedError>) -> ImageError {
        DecodingSnafu { format }.into_error(source.into())
    }

    pub(crate) fn encoding(format: ImageFormat, source: impl Into<BoxedError>) -> ImageError {
        EncodingSnafu { format }.into_error(source.into())
    }

    pub(crate) fn unsupported_format(hint: impl Into<String>) -> ImageError {
        UnsupportedFormatSnafu { hint: hint.into() }.build()
    }

    pub(crate) fn parameter(kind: ParameterErrorKind) -> ImageError {
        ParameterSnafu { kind }.build()
    }
}

/// Result of an image operation.
pub type ImageResult<T> = Result<T, ImageError>;
