//! Frame header decoding
//!
//! The header is the fixed 10 byte prefix of every frame. See [`FrameHeader`] for the layout.

pub(super) mod parse;

pub use parse::{compute_content_size, size_descriptor_is_valid};
pub(crate) use parse::size_bytes;

use crate::error::Result;
use crate::frame::FRAME_HEADER_SIZE;
use crate::util::text::latin1_decode;

use std::fmt::{Display, Formatter};

/// The exclusive upper bound of every digit in a synchsafe size descriptor
///
/// Each of the four size bytes is a base-128 digit, so it must be `< 128`.
pub const MAXIMUM_SIZE_DIGIT: u8 = 128;

/// The four character frame identifier
///
/// The identifier is taken verbatim from the first four bytes of the header, with each byte
/// mapped to the codepoint of the same value. No validation is done on the characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(String);

impl FrameId {
	pub(crate) fn from_bytes(id: [u8; 4]) -> Self {
		Self(latin1_decode(&id))
	}

	/// Extracts the string from the ID
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::frame::Frame;
	///
	/// # fn main() -> id3frame::error::Result<()> {
	/// let frame = Frame::decode(&b"TALB\0\0\0\0\0\0"[..])?;
	/// assert_eq!(frame.header().id().as_str(), "TALB");
	/// # Ok(()) }
	/// ```
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the [`FrameId`], returning the inner value
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq<str> for FrameId {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for FrameId {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// A decoded frame header
///
/// Layout of the 10 header bytes:
///
/// | Offset | Field                            |
/// |--------|----------------------------------|
/// | 0..4   | Identifier                       |
/// | 4..8   | Content size (synchsafe)         |
/// | 8      | First flag byte (uninterpreted)  |
/// | 9      | Second flag byte (uninterpreted) |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	pub(crate) content_size: u32,
	pub(crate) first_flag: u8,
	pub(crate) second_flag: u8,
}

impl FrameHeader {
	/// Decode a header from its 10 bytes
	///
	/// # Errors
	///
	/// A size byte is `>= 128` ([`ErrorKind::InvalidSizeDescriptor`](crate::error::ErrorKind::InvalidSizeDescriptor))
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::error::ErrorKind;
	/// use id3frame::frame::header::FrameHeader;
	///
	/// # fn main() -> id3frame::error::Result<()> {
	/// let header = FrameHeader::parse(&[b'T', b'P', b'E', b'1', 0, 0, 1, 0, 0x40, 0x01])?;
	/// assert_eq!(header.id(), "TPE1");
	/// assert_eq!(header.content_size(), 128);
	/// assert_eq!(header.first_flag(), 0x40);
	/// assert_eq!(header.second_flag(), 0x01);
	///
	/// let err = FrameHeader::parse(&[b'T', b'P', b'E', b'1', 0, 0, 0, 200, 0, 0]).unwrap_err();
	/// assert_eq!(err.kind(), &ErrorKind::InvalidSizeDescriptor([0, 0, 0, 200]));
	/// # Ok(()) }
	/// ```
	pub fn parse(header: &[u8; FRAME_HEADER_SIZE]) -> Result<Self> {
		parse::parse_header(header)
	}

	/// The frame identifier
	pub fn id(&self) -> &FrameId {
		&self.id
	}

	/// The size of the content, as declared by the size descriptor
	pub fn content_size(&self) -> u32 {
		self.content_size
	}

	/// The raw first flag byte
	pub fn first_flag(&self) -> u8 {
		self.first_flag
	}

	/// The raw second flag byte
	pub fn second_flag(&self) -> u8 {
		self.second_flag
	}

	/// Both flag bytes as a single big endian integer
	///
	/// No meaning is attached to any of the bits.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::frame::header::FrameHeader;
	///
	/// # fn main() -> id3frame::error::Result<()> {
	/// let header = FrameHeader::parse(&[b'T', b'I', b'T', b'2', 0, 0, 0, 0, 0x60, 0x0C])?;
	/// assert_eq!(header.flags(), 0x600C);
	/// # Ok(()) }
	/// ```
	pub fn flags(&self) -> u16 {
		u16::from_be_bytes([self.first_flag, self.second_flag])
	}
}

impl Display for FrameHeader {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"\"id\":\"{}\", \"size\":{}, \"flags\":{{\"first\":{}, \"second\":{}}}",
			self.id, self.content_size, self.first_flag, self.second_flag
		)
	}
}
