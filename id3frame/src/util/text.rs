/// Maps every byte directly to the codepoint of the same value
///
/// Unlike general Latin-1 decoding, nothing is trimmed or replaced, so the output always
/// holds exactly one `char` per input byte.
pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}
