use crate::frame;

use id3frame::frame::Frame;

use std::thread;

#[test_log::test]
fn decode_across_threads() {
	let data = frame(b"TIT2", [0, 0, 0, 6], [0, 0], b"\0Hello");
	let expected = Frame::decode(data.as_slice()).unwrap();

	thread::scope(|s| {
		let handles = (0..8)
			.map(|_| s.spawn(|| Frame::decode(data.as_slice()).unwrap()))
			.collect::<Vec<_>>();

		for handle in handles {
			assert_eq!(handle.join().unwrap(), expected);
		}
	});
}

#[test_log::test]
fn frames_can_be_sent() {
	fn assert_send_sync<T: Send + Sync>() {}

	assert_send_sync::<Frame>();
	assert_send_sync::<id3frame::error::FrameError>();
}
