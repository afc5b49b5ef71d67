//! Decoding of individual frames
//!
//! A frame is made up of a 10 byte header, followed by an encoding marker and the content:
//!
//! | Offset | Length   | Field                                   |
//! |--------|----------|-----------------------------------------|
//! | 0      | 4        | Identifier                              |
//! | 4      | 4        | Content size (synchsafe)                |
//! | 8      | 1        | First flag byte                         |
//! | 9      | 1        | Second flag byte                        |
//! | 10     | 1        | Encoding marker, must be `0` if present |
//! | 11     | variable | Content                                 |
//!
//! Only ISO-8859-1 content is supported, every byte is mapped to the codepoint of the same value.

mod content;
pub mod header;
mod read;

use crate::config::ParseOptions;
use crate::error::{FrameError, Result};
use header::FrameHeader;

pub use read::LATIN1_ENCODING_MARKER;

use std::fmt::{Display, Formatter};

/// The size of a frame header
pub const FRAME_HEADER_SIZE: usize = 10;

/// A decoded frame
///
/// A `Frame` can only be created from data that passes every check, see [`Frame::decode`].
///
/// # Examples
///
/// ```rust
/// use id3frame::frame::Frame;
///
/// # fn main() -> id3frame::error::Result<()> {
/// let data = [
/// 	b'T', b'I', b'T', b'2', // ID
/// 	0, 0, 0, 5, // Size
/// 	0, 0, // Flags
/// 	0, // Encoding
/// 	b'H', b'e', b'l', b'l', b'o', // Content
/// ];
///
/// let frame = Frame::decode(&data[..])?;
///
/// assert_eq!(frame.header().id(), "TIT2");
/// assert_eq!(frame.header().content_size(), 5);
/// assert_eq!(frame.content(), "Hello");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
	header: FrameHeader,
	content: String,
}

impl Frame {
	/// Decode a frame
	///
	/// This is equivalent to [`Frame::decode_with_options`] with [`ParseOptions::new`].
	///
	/// `data` is the entire frame, header included. Passing `None` represents missing input.
	///
	/// # Errors
	///
	/// The first failing check, in order:
	///
	/// * `data` is `None` ([`ErrorKind::NullInput`](crate::error::ErrorKind::NullInput))
	/// * `data` is shorter than [`FRAME_HEADER_SIZE`] ([`ErrorKind::TooShort`](crate::error::ErrorKind::TooShort))
	/// * A size byte is `>= 128` ([`ErrorKind::InvalidSizeDescriptor`](crate::error::ErrorKind::InvalidSizeDescriptor))
	/// * The encoding marker is present and not `0` ([`ErrorKind::InvalidEncodingMarker`](crate::error::ErrorKind::InvalidEncodingMarker))
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::error::ErrorKind;
	/// use id3frame::frame::Frame;
	///
	/// let err = Frame::decode(None::<&[u8]>).unwrap_err();
	/// assert_eq!(err.kind(), &ErrorKind::NullInput);
	///
	/// let err = Frame::decode(&b"TIT2"[..]).unwrap_err();
	/// assert_eq!(err.kind(), &ErrorKind::TooShort(4));
	/// ```
	pub fn decode<'a, D>(data: D) -> Result<Self>
	where
		D: Into<Option<&'a [u8]>>,
	{
		Self::decode_with_options(data, ParseOptions::new())
	}

	/// Decode a frame with the provided [`ParseOptions`]
	///
	/// # Errors
	///
	/// See [`Frame::decode`]. Additionally, with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict):
	///
	/// * The declared content size doesn't match the number of bytes following the header ([`ErrorKind::SizeMismatch`](crate::error::ErrorKind::SizeMismatch))
	pub fn decode_with_options<'a, D>(data: D, parse_options: ParseOptions) -> Result<Self>
	where
		D: Into<Option<&'a [u8]>>,
	{
		let frame = read::verify(data.into())?;

		let header = FrameHeader::parse(frame.header)?;
		read::verify_with_options(&frame, header.content_size(), parse_options)?;

		let content = content::parse_content(frame.body);

		Ok(Self { header, content })
	}

	/// Check whether `data` holds a valid frame, without decoding it
	///
	/// NOTE: Despite the name, this does **not** return `Ok(false)` for invalid data. The same errors as
	/// [`Frame::decode`] are returned, and `Ok(true)` is the only successful result. This allows callers to
	/// know *why* a frame is invalid before committing to decoding it. Use `Frame::is_valid(data).is_ok()`
	/// for a plain predicate.
	///
	/// [`ParseOptions`] are not taken into account.
	///
	/// # Errors
	///
	/// See [`Frame::decode`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::error::ErrorKind;
	/// use id3frame::frame::Frame;
	///
	/// # fn main() -> id3frame::error::Result<()> {
	/// let valid = [b'T', b'I', b'T', b'2', 0, 0, 0, 0, 0, 0, 0];
	/// assert!(Frame::is_valid(&valid[..])?);
	///
	/// let bad_encoding = [b'T', b'I', b'T', b'2', 0, 0, 0, 0, 0, 0, 3];
	/// let err = Frame::is_valid(&bad_encoding[..]).unwrap_err();
	/// assert_eq!(err.kind(), &ErrorKind::InvalidEncodingMarker(3));
	/// # Ok(()) }
	/// ```
	pub fn is_valid<'a, D>(data: D) -> Result<bool>
	where
		D: Into<Option<&'a [u8]>>,
	{
		read::verify(data.into())?;
		Ok(true)
	}

	/// Get the content size of a frame, without decoding it
	///
	/// This is useful to determine how many bytes to skip or read. Only the header is checked,
	/// the encoding marker is ignored.
	///
	/// # Errors
	///
	/// * `data` is `None` ([`ErrorKind::NullInput`](crate::error::ErrorKind::NullInput))
	/// * `data` is shorter than [`FRAME_HEADER_SIZE`] ([`ErrorKind::TooShort`](crate::error::ErrorKind::TooShort))
	/// * A size byte is `>= 128` ([`ErrorKind::InvalidSizeDescriptor`](crate::error::ErrorKind::InvalidSizeDescriptor))
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::frame::Frame;
	///
	/// # fn main() -> id3frame::error::Result<()> {
	/// let header = [b'A', b'P', b'I', b'C', 0, 0, 2, 1, 0, 0];
	/// assert_eq!(Frame::content_size(&header[..])?, 2 * 128 + 1);
	/// # Ok(()) }
	/// ```
	pub fn content_size<'a, D>(data: D) -> Result<u32>
	where
		D: Into<Option<&'a [u8]>>,
	{
		let frame = read::verify_header(data.into())?;
		header::compute_content_size(frame.header)
	}

	/// The frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// The frame content
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Consumes the [`Frame`], returning its header and content
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::frame::Frame;
	///
	/// # fn main() -> id3frame::error::Result<()> {
	/// let data = [b'T', b'I', b'T', b'2', 0, 0, 0, 2, 0, 0, 0, b'O', b'K'];
	///
	/// let (header, content) = Frame::decode(&data[..])?.into_parts();
	/// assert_eq!(header.id(), "TIT2");
	/// assert_eq!(content, "OK");
	/// # Ok(()) }
	/// ```
	pub fn into_parts(self) -> (FrameHeader, String) {
		(self.header, self.content)
	}
}

impl TryFrom<&[u8]> for Frame {
	type Error = FrameError;

	fn try_from(data: &[u8]) -> std::result::Result<Self, Self::Error> {
		Self::decode(data)
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{{{}, \"content\":\"{}\"}}", self.header, self.content)
	}
}
