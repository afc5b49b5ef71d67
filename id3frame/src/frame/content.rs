use crate::util::text::latin1_decode;

/// Decode the content of a verified frame
///
/// `body` is everything following the header, starting with the encoding marker. A frame with
/// no encoding marker, or with nothing following it, has empty content.
pub(crate) fn parse_content(body: &[u8]) -> String {
	let content = body.get(1..).map(latin1_decode).unwrap_or_default();

	log::trace!("Decoded {} characters of frame content", content.chars().count());
	content
}
