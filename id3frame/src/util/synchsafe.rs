//! Utilities for working with synchsafe integers
//!
//! A synchsafe integer stores 7 bits per byte, with the most significant bit of every byte
//! always zeroed. This keeps the value from ever being mistaken for an MPEG frame sync (`0xFF 0xE0`).

/// An integer that can be read from its synchsafe variant
pub(crate) trait SynchsafeInteger: Sized {
	/// Whether every byte of the integer has a zeroed most significant bit
	fn is_synchsafe(self) -> bool;

	/// Unsynchronise a synchsafe integer
	///
	/// The result is only meaningful if [`SynchsafeInteger::is_synchsafe`] holds, as the
	/// most significant bit of each byte is discarded.
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn is_synchsafe(self) -> bool {
		self & 0x8080_8080 == 0
	}

	fn unsynch(self) -> Self {
		((self & 0x7F00_0000) >> 3)
			| ((self & 0x7F_0000) >> 2)
			| ((self & 0x7F00) >> 1)
			| (self & 0x7F)
	}
}
