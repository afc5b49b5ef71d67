use super::{FrameHeader, FrameId};
use crate::error::Result;
use crate::frame::FRAME_HEADER_SIZE;
use crate::macros::err;
use crate::util::synchsafe::SynchsafeInteger;

use byteorder::{BigEndian, ByteOrder};

pub(crate) fn parse_header(header: &[u8; FRAME_HEADER_SIZE]) -> Result<FrameHeader> {
	let content_size = compute_content_size(header)?;
	let id = FrameId::from_bytes([header[0], header[1], header[2], header[3]]);

	log::trace!("Parsed frame header, ID: {id}, size: {content_size}");

	Ok(FrameHeader {
		id,
		content_size,
		first_flag: header[8],
		second_flag: header[9],
	})
}

/// The four raw bytes of the size descriptor
pub(crate) fn size_bytes(header: &[u8; FRAME_HEADER_SIZE]) -> [u8; 4] {
	[header[4], header[5], header[6], header[7]]
}

fn size_descriptor(header: &[u8; FRAME_HEADER_SIZE]) -> u32 {
	BigEndian::read_u32(&header[4..8])
}

/// Whether all four bytes of the size descriptor are valid base-128 digits
///
/// # Examples
///
/// ```rust
/// use id3frame::frame::header::size_descriptor_is_valid;
///
/// assert!(size_descriptor_is_valid(&[b'T', b'I', b'T', b'2', 0, 0, 0, 127, 0, 0]));
/// assert!(!size_descriptor_is_valid(&[b'T', b'I', b'T', b'2', 0, 0, 0, 200, 0, 0]));
/// ```
pub fn size_descriptor_is_valid(header: &[u8; FRAME_HEADER_SIZE]) -> bool {
	size_descriptor(header).is_synchsafe()
}

/// Compute the content size from the synchsafe size descriptor
///
/// The size descriptor holds four big endian base-128 digits:
///
/// `size = b4 * 128^3 + b5 * 128^2 + b6 * 128 + b7`
///
/// # Errors
///
/// A size byte is `>= 128` ([`ErrorKind::InvalidSizeDescriptor`](crate::error::ErrorKind::InvalidSizeDescriptor))
///
/// # Examples
///
/// ```rust
/// use id3frame::error::ErrorKind;
/// use id3frame::frame::header::compute_content_size;
///
/// # fn main() -> id3frame::error::Result<()> {
/// assert_eq!(compute_content_size(&[b'T', b'I', b'T', b'2', 0, 0, 1, 1, 0, 0])?, 129);
/// assert_eq!(
/// 	compute_content_size(&[b'T', b'I', b'T', b'2', 127, 127, 127, 127, 0, 0])?,
/// 	0x0FFF_FFFF
/// );
///
/// let err = compute_content_size(&[b'T', b'I', b'T', b'2', 0, 0, 0, 200, 0, 0]).unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::InvalidSizeDescriptor([0, 0, 0, 200]));
/// # Ok(()) }
/// ```
pub fn compute_content_size(header: &[u8; FRAME_HEADER_SIZE]) -> Result<u32> {
	let size = size_descriptor(header);
	if !size.is_synchsafe() {
		err!(InvalidSizeDescriptor(size_bytes(header)))
	}

	Ok(size.unsynch())
}
