/// Default compression level for one-shot calls, dictionaries, and sessions.
pub const DEFAULT_LEVEL: i32 = 1;

/// Size of the codec's error-code range.
///
/// Raw failure codes are encoded as `(usize)-n` for `1 <= n < ERROR_MAX_CODE`,
/// so they occupy the top of the usize range; success codes are byte counts.
pub const ERROR_MAX_CODE: usize = 120;
