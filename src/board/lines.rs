//! The eight winning lines of a 3x3 grid, shared by both levels of play and the evaluator.

use super::player::Player;

pub type Line = [(usize, usize); 3];

/// Rows, then columns, then the two diagonals. Scans must follow this order.
pub const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the owner of the first line whose three entries belong to the same player.
/// `owner` maps a grid entry to the player it counts for, if any.
pub fn line_winner<T, F>(grid: &[[T; 3]; 3], owner: F) -> Option<Player>
where
    F: Fn(&T) -> Option<Player>,
{
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| owner(&grid[row][col]));
        match a {
            Some(player) if b == a && c == a => Some(player),
            _ => None,
        }
    })
}

/// Tally of a single line: how many entries each side owns and how many are still open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineCount {
    pub x: u8,
    pub o: u8,
    pub open: u8,
}

impl LineCount {
    pub fn of(&self, player: Player) -> u8 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Two entries for `player` and the third still open.
    pub fn is_threat_for(&self, player: Player) -> bool {
        self.of(player) == 2 && self.open == 1
    }
}

/// How a grid entry counts toward a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEntry {
    Owned(Player),
    Open,
    /// Counts for nobody and is not open either (a drawn sub-board on the meta level).
    Blocked,
}

/// Counts each line of `grid`, in `LINES` order.
pub fn line_counts<'a, T, F>(grid: &'a [[T; 3]; 3], classify: F) -> impl Iterator<Item = LineCount> + 'a
where
    F: Fn(&T) -> LineEntry + 'a,
{
    LINES.iter().map(move |line| {
        line.iter()
            .fold(LineCount::default(), |mut count, &(row, col)| {
                match classify(&grid[row][col]) {
                    LineEntry::Owned(Player::X) => count.x += 1,
                    LineEntry::Owned(Player::O) => count.o += 1,
                    LineEntry::Open => count.open += 1,
                    LineEntry::Blocked => {}
                }
                count
            })
    })
}
