/// Clause-level texts stay well below this; whole documents don't.
pub const DEFAULT_MAX_TOKENS_PER_SIDE: usize = 4096;
