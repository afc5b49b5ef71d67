#![allow(missing_docs)]

mod concurrency;
mod properties;

/// Build a frame from its parts
pub fn frame(id: &[u8; 4], size: [u8; 4], flags: [u8; 2], rest: &[u8]) -> Vec<u8> {
	let mut data = Vec::with_capacity(10 + rest.len());
	data.extend_from_slice(id);
	data.extend_from_slice(&size);
	data.extend_from_slice(&flags);
	data.extend_from_slice(rest);
	data
}
