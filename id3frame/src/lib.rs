//! Decode individual ID3v2 text frames.
//!
//! A frame is a 10 byte header (identifier, synchsafe content size, and two flag bytes), followed by
//! an encoding marker and ISO-8859-1 content. See the [`frame`] module for the exact layout.
//!
//! Decoding is all or nothing. A [`Frame`](frame::Frame) is only ever produced from data that passes
//! every check, otherwise an [`ErrorKind`](error::ErrorKind) describes the first check that failed.
//!
//! # Examples
//!
//! ## Decoding a frame
//!
//! ```rust
//! # fn main() -> id3frame::error::Result<()> {
//! use id3frame::frame::Frame;
//!
//! let data = [
//! 	b'T', b'I', b'T', b'2', 0, 0, 0, 5, 0, 0, 0, b'H', b'e', b'l', b'l', b'o',
//! ];
//!
//! let frame = Frame::decode(&data[..])?;
//! assert_eq!(frame.header().id(), "TIT2");
//! assert_eq!(frame.content(), "Hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Probing a frame
//!
//! The size of a frame can be read without decoding it, which is all that is needed to skip over it.
//!
//! ```rust
//! # fn main() -> id3frame::error::Result<()> {
//! use id3frame::frame::{FRAME_HEADER_SIZE, Frame};
//!
//! let data = [b'T', b'I', b'T', b'2', 0, 0, 0, 3, 0, 0, 0, b'a', b'b', b'X', b'Y'];
//!
//! let content_size = Frame::content_size(&data[..])? as usize;
//! let (frame, rest) = data.split_at(FRAME_HEADER_SIZE + content_size);
//!
//! assert_eq!(Frame::decode(frame)?.content(), "ab");
//! assert_eq!(rest, b"XY");
//! # Ok(())
//! # }
//! ```
//!
//! ## Strict parsing
//!
//! By default, the size declared in the header is not checked against the data. This can be
//! enabled with [`ParsingMode::Strict`](config::ParsingMode::Strict).
//!
//! ```rust
//! use id3frame::config::{ParseOptions, ParsingMode};
//! use id3frame::error::ErrorKind;
//! use id3frame::frame::Frame;
//!
//! let data = [b'T', b'I', b'T', b'2', 0, 0, 0, 9, 0, 0, 0, b'a'];
//! let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
//!
//! let err = Frame::decode_with_options(&data[..], parse_options).unwrap_err();
//! assert!(matches!(err.kind(), ErrorKind::SizeMismatch { .. }));
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod frame;
pub(crate) mod macros;
mod util;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use id3frame::prelude::*;
	//! ```

	pub use crate::config::{ParseOptions, ParsingMode};
	pub use crate::error::{ErrorKind, FrameError};
	pub use crate::frame::Frame;
	pub use crate::frame::header::{FrameHeader, FrameId};
}
