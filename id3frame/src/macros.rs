// Shorthand for return Err(FrameError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)             -> return Err(FrameError::new(ErrorKind::Variant))
// - err!(Variant(value))      -> return Err(FrameError::new(ErrorKind::Variant(value)))
// - err!(Variant { a, b })    -> return Err(FrameError::new(ErrorKind::Variant { a, b }))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::FrameError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::FrameError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
	($variant:ident { $($field:ident),+ $(,)? }) => {
		return Err(crate::error::FrameError::new(
			crate::error::ErrorKind::$variant { $($field),+ },
		))
	};
}

pub(crate) use err;
