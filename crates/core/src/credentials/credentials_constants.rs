/// Exact length of a Guild Wars 2 API key.
pub const SECRET_LENGTH: usize = 72;
