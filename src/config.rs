/// Specification character marking a mine.
pub const MINE_CHAR: char = '*';
/// Specification character marking an empty cell.
pub const EMPTY_CHAR: char = '.';

/// Rendered glyph for a mined cell.
pub const MINE_GLYPH: char = '*';
pub const CORNER: &str = "+";
pub const SEGMENT: &str = "---+";
pub const WALL: &str = "|";

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "MINEGRID_LOG";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

/// Upper bound on a cell's neighbor count.
pub const MAX_NEIGHBORS: u8 = 8;

/// Longest header line accepted before the parser gives up on it.
pub const MAX_HEADER_LEN: usize = 64;
