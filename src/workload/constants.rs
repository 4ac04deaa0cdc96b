// Buffer sizes and strides for the probed call tree

/// Leaf buffers
pub const SMALL_LEN: usize = 20;
pub const SMALL_STRIDE: u8 = 13;
pub const MEDIUM_LEN: usize = 4000;
pub const MEDIUM_STRIDE: u8 = 17;
pub const LARGE_LEN: usize = 10_000;
pub const LARGE_STRIDE: u8 = 17;

/// Input buffers handed to the leaves by the chains
pub const INPUT_A_LEN: usize = 2000;
pub const INPUT_A_STRIDE: u8 = 7;
pub const INPUT_B_LEN: usize = 200;
pub const INPUT_B_STRIDE: u8 = 11;

/// Padding kept live in each frame of the recursive chain
pub const PAD_LEN: usize = 10;
pub const WIDE_PAD_LEN: usize = 20;

/// Recursion depth used when none is configured
pub const DEFAULT_DEPTH: usize = 3;

/// Largest accepted recursion depth
pub const MAX_DEPTH: usize = 64;
