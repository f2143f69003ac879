// Want this to be as large as the largest possible string representation of any type
// that implements Integer, which is currently u64 (or i64) with grouping.
// The max len of a u64 grouped string is ...
// 20 digits + 6 separators (each potentially 4 bytes)
pub(crate) const MAX_BUF_LEN: usize = U64_MAX_LEN + 6 * MAX_SEP_LEN;

pub(crate) const MAX_SEP_LEN: usize = 4;

pub(crate) const U64_MAX_LEN: usize = 20;
