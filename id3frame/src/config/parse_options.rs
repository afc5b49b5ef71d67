/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust
/// use id3frame::config::{ParseOptions, ParsingMode};
/// use id3frame::frame::Frame;
///
/// # fn main() -> id3frame::error::Result<()> {
/// // The header declares 5 bytes, but the encoding byte and 5 bytes of content follow it
/// let data = [b'T', b'I', b'T', b'2', 0, 0, 0, 5, 0, 0, 0, b'H', b'e', b'l', b'l', b'o'];
///
/// // By default, the declared size is not checked against the data
/// assert!(Frame::decode(&data[..]).is_ok());
///
/// // In strict mode, it is
/// let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// assert!(Frame::decode_with_options(&data[..], strict).is_err());
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on inconsistent input
	///
	/// On top of the structural checks, the size declared in the header must match the number of bytes
	/// following it (the encoding byte and the content).
	Strict,
	/// Default mode, only errors on structurally invalid input
	///
	/// The declared size is informational, and frames with trailing or missing content are still decoded.
	#[default]
	BestAttempt,
}

/// Options to control how frames are decoded
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3frame::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}
}
