// Must stay above any reachable sum of the positional terms below.
pub const GAME_WON: i32 = 1000;

pub const SUB_BOARD_WON: i32 = 100;
pub const META_THREAT: i32 = 30;
pub const SUB_BOARD_THREAT: i32 = 10;
