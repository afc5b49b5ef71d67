#![no_main]
use id3frame::config::{ParseOptions, ParsingMode};
use id3frame::frame::Frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let decoded = Frame::decode(data);

	// `is_valid` runs the exact same checks
	assert_eq!(decoded.is_ok(), Frame::is_valid(data).is_ok());

	if let Ok(frame) = decoded {
		// One character per content byte
		assert_eq!(frame.content().chars().count(), data.len().saturating_sub(11));
	}

	let _ = Frame::decode_with_options(
		data,
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	);
});
