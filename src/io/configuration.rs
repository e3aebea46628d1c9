//! Format constants and runtime defaults

/// Program name shown in usage and status output
pub const PROGRAM_TITLE: &str = "BoxEdit";

// Autotile catalog size, fixed by the format
/// Number of bitmask classes stored per tile
pub const BITMASK_CLASS_COUNT: usize = 47;

/// Upper bound on tiles per file; tile IDs run from 0 to one below this
pub const MAX_TILE_COUNT: usize = 10_000;

/// Resolution assumed when a file has none or an unusable one (width, height)
pub const DEFAULT_RESOLUTION: (u32, u32) = (8, 8);

// File framing
/// Leading bytes identifying a pointybox file
pub const FILE_MAGIC: &[u8; 4] = b"PBOX";
/// Magic, resolution pair and tile count
pub const HEADER_LEN: usize = 16;
/// Width of every record count field
pub const COUNT_LEN: usize = 4;
/// Bytes per stored box (left, top, width, height)
pub const AABB_RECORD_LEN: usize = 16;
/// Bytes per stored point (x, y)
pub const POINT_RECORD_LEN: usize = 8;
/// Bytes per stored edge (x1, y1, x2, y2)
pub const EDGE_RECORD_LEN: usize = 16;

/// Only this exact token confirms replacing an unreadable file
pub const CONFIRMATION_TOKEN: &str = "YES";

/// Prompt shown by the console loop
pub const CONSOLE_PROMPT: &str = "> ";
