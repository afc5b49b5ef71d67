use crate::frame;

use id3frame::error::ErrorKind;
use id3frame::frame::Frame;

fn base_128(size: [u8; 4]) -> u32 {
	u32::from(size[0]) * 128 * 128 * 128
		+ u32::from(size[1]) * 128 * 128
		+ u32::from(size[2]) * 128
		+ u32::from(size[3])
}

#[test_log::test]
fn anything_shorter_than_a_header_is_too_short() {
	for len in 0..10 {
		// Filled with bytes that would fail every other check
		let data = vec![0xFF; len];

		let err = Frame::decode(data.as_slice()).unwrap_err();
		assert_eq!(err.kind(), &ErrorKind::TooShort(len));

		let err = Frame::is_valid(data.as_slice()).unwrap_err();
		assert_eq!(err.kind(), &ErrorKind::TooShort(len));

		let err = Frame::content_size(data.as_slice()).unwrap_err();
		assert_eq!(err.kind(), &ErrorKind::TooShort(len));
	}
}

#[test_log::test]
fn any_high_size_byte_is_invalid() {
	for position in 0..4 {
		for digit in [128_u8, 129, 200, 255] {
			let mut size = [0; 4];
			size[position] = digit;

			// Bad encoding marker and garbage content shouldn't matter
			for rest in [&[][..], &[0][..], &[7, 0xFF, 0xFF][..]] {
				let data = frame(b"TIT2", size, [0xFF, 0xFF], rest);

				let err = Frame::decode(data.as_slice()).unwrap_err();
				assert_eq!(err.kind(), &ErrorKind::InvalidSizeDescriptor(size));

				let err = Frame::is_valid(data.as_slice()).unwrap_err();
				assert_eq!(err.kind(), &ErrorKind::InvalidSizeDescriptor(size));

				let err = Frame::content_size(data.as_slice()).unwrap_err();
				assert_eq!(err.kind(), &ErrorKind::InvalidSizeDescriptor(size));
			}
		}
	}
}

#[test_log::test]
fn content_size_matches_formula() {
	let digits = [0_u8, 1, 2, 63, 64, 126, 127];

	for b4 in digits {
		for b5 in digits {
			for b6 in digits {
				for b7 in digits {
					let size = [b4, b5, b6, b7];
					let data = frame(b"TIT2", size, [0, 0], &[0]);

					let content_size = Frame::content_size(data.as_slice()).unwrap();
					assert_eq!(content_size, base_128(size));

					let frame = Frame::decode(data.as_slice()).unwrap();
					assert_eq!(frame.header().content_size(), content_size);
				}
			}
		}
	}
}

#[test_log::test]
fn every_byte_maps_to_one_char() {
	let content = (0..=255_u8).collect::<Vec<_>>();
	let data = frame(b"TXXX", [0, 0, 2, 1], [0, 0], &[&[0][..], content.as_slice()].concat());

	let frame = Frame::decode(data.as_slice()).unwrap();
	assert_eq!(frame.content().chars().count(), 256);

	for (c, byte) in frame.content().chars().zip(content) {
		assert_eq!(u32::from(c), u32::from(byte));
	}
}

#[test_log::test]
fn is_valid_agrees_with_decode() {
	let inputs = [
		frame(b"TIT2", [0, 0, 0, 1], [0, 0], &[]),
		frame(b"TIT2", [0, 0, 0, 1], [0, 0], &[0]),
		frame(b"TIT2", [0, 0, 0, 1], [0, 0], &[1]),
		frame(b"TIT2", [0, 0, 0, 1], [0, 0], &[0, 1, 2, 3]),
		frame(b"TIT2", [0, 0, 0x80, 1], [0, 0], &[0]),
		frame(b"TIT2", [0, 0, 0, 1], [0, 0], &[0xFF, 0]),
	];

	for data in &inputs {
		let decoded = Frame::decode(data.as_slice());
		let valid = Frame::is_valid(data.as_slice());

		match (decoded, valid) {
			(Ok(_), Ok(valid)) => assert!(valid),
			(Err(decode_err), Err(valid_err)) => assert_eq!(decode_err, valid_err),
			(decoded, valid) => panic!("Mismatch: {decoded:?} / {valid:?}"),
		}
	}
}

#[test_log::test]
fn decoding_twice_gives_equal_values() {
	let data = frame(b"TIT2", [0, 0, 0, 4], [0x12, 0x34], &[0, b'a', b'b', b'c']);

	let first = Frame::decode(data.as_slice()).unwrap();
	let second = Frame::decode(data.as_slice()).unwrap();
	assert_eq!(first, second);

	// Dropping one has no effect on the other
	let (header, content) = first.into_parts();
	assert_eq!(&header, second.header());
	assert_eq!(content, second.content());
}
