#![no_main]
use id3frame::frame::Frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(size) = Frame::content_size(data) {
		assert!(size <= 0x0FFF_FFFF);

		if let Ok(frame) = Frame::decode(data) {
			assert_eq!(frame.header().content_size(), size);
		}
	}
});
