//! Contains the errors that can arise while decoding a frame
//!
//! The primary error is [`FrameError`]. The type of error is determined by [`ErrorKind`].
//!
//! The kinds are checked in a fixed order, and the first failing check is the one reported:
//!
//! 1. [`ErrorKind::NullInput`]
//! 2. [`ErrorKind::TooShort`]
//! 3. [`ErrorKind::InvalidSizeDescriptor`]
//! 4. [`ErrorKind::InvalidEncodingMarker`]
//!
//! [`ErrorKind::SizeMismatch`] is only ever produced with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict),
//! after all of the above have passed.

use crate::frame::FRAME_HEADER_SIZE;
use crate::frame::header::MAXIMUM_SIZE_DIGIT;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, FrameError>`
pub type Result<T> = std::result::Result<T, FrameError>;

/// The types of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
	/// No input was provided at all
	NullInput,
	/// The input is shorter than a frame header, holds the length of the input
	TooShort(usize),
	/// One or more of the four size bytes has its high bit set
	///
	/// Holds the size descriptor as it appeared in the header.
	InvalidSizeDescriptor([u8; 4]),
	/// The byte following the header is not the Latin-1 encoding marker
	InvalidEncodingMarker(u8),
	/// The size declared in the header does not match the number of bytes that follow it
	///
	/// Only checked in [`ParsingMode::Strict`](crate::config::ParsingMode::Strict).
	SizeMismatch {
		/// The size from the header's size descriptor
		declared: u32,
		/// The number of bytes following the header
		actual: usize,
	},
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NullInput => write!(f, "No frame data was provided"),
			Self::TooShort(len) => write!(
				f,
				"Frame data is {len} bytes long, a frame header requires {FRAME_HEADER_SIZE}"
			),
			Self::InvalidSizeDescriptor(size) => write!(
				f,
				"One or more of the four size bytes is >= {MAXIMUM_SIZE_DIGIT}: {size:02x?}"
			),
			Self::InvalidEncodingMarker(marker) => {
				write!(f, "Encoding byte is invalid (expected 0, found {marker})")
			},
			Self::SizeMismatch { declared, actual } => write!(
				f,
				"Frame declares {declared} bytes of content, but {actual} follow the header"
			),
		}
	}
}

/// Errors that could occur while decoding a frame
#[derive(Clone, PartialEq, Eq)]
pub struct FrameError {
	pub(crate) kind: ErrorKind,
}

impl FrameError {
	/// Create a `FrameError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::error::{ErrorKind, FrameError};
	///
	/// let too_short = FrameError::new(ErrorKind::TooShort(3));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::error::{ErrorKind, FrameError};
	///
	/// let null_input = FrameError::new(ErrorKind::NullInput);
	/// if let ErrorKind::NullInput = null_input.kind() {
	/// 	println!("Where's the data?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for FrameError {}

impl Debug for FrameError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl Display for FrameError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2 frame: {}", self.kind)
	}
}

impl From<ErrorKind> for FrameError {
	fn from(kind: ErrorKind) -> Self {
		Self { kind }
	}
}
