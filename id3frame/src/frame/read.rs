use super::FRAME_HEADER_SIZE;
use super::header::{size_bytes, size_descriptor_is_valid};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::macros::err;

/// The only accepted encoding marker, ISO-8859-1
pub const LATIN1_ENCODING_MARKER: u8 = 0;

/// Frame data that passed every structural check
pub(crate) struct VerifiedFrame<'a> {
	pub(crate) header: &'a [u8; FRAME_HEADER_SIZE],
	/// Everything following the header, including the encoding marker
	pub(crate) body: &'a [u8],
}

/// Checks that are shared between decoding a frame and only reading its size
///
/// 1. The data must be present
/// 2. The data must hold at least a full header
/// 3. The size descriptor must be synchsafe
pub(crate) fn verify_header(data: Option<&[u8]>) -> Result<VerifiedFrame<'_>> {
	let Some(data) = data else {
		err!(NullInput)
	};

	let Some((header, body)) = data.split_first_chunk::<FRAME_HEADER_SIZE>() else {
		err!(TooShort(data.len()))
	};

	if !size_descriptor_is_valid(header) {
		err!(InvalidSizeDescriptor(size_bytes(header)))
	}

	Ok(VerifiedFrame { header, body })
}

/// Runs every structural check, in order
///
/// The encoding marker is only checked when the frame has data past the header.
pub(crate) fn verify(data: Option<&[u8]>) -> Result<VerifiedFrame<'_>> {
	let frame = verify_header(data)?;

	if let Some(&marker) = frame.body.first() {
		if marker != LATIN1_ENCODING_MARKER {
			err!(InvalidEncodingMarker(marker))
		}
	}

	Ok(frame)
}

/// Checks that only apply to specific [`ParsingMode`]s
pub(crate) fn verify_with_options(
	frame: &VerifiedFrame<'_>,
	declared_size: u32,
	parse_options: ParseOptions,
) -> Result<()> {
	let actual = frame.body.len();
	if parse_options.parsing_mode == ParsingMode::Strict
		&& u32::try_from(actual).ok() != Some(declared_size)
	{
		log::debug!("Frame declares {declared_size} bytes of content, found {actual}");

		let declared = declared_size;
		err!(SizeMismatch { declared, actual })
	}

	Ok(())
}
