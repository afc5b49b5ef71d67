//! Various configuration options to control how frames are decoded

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
