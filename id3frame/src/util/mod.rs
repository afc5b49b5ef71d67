pub(crate) mod synchsafe;
pub(crate) mod text;
