use std::fmt;

use super::sub_board::Outcome;
use super::GlobalBoard;

impl fmt::Display for GlobalBoard {
    /// Renders the 9x9 grid with sub-board borders, followed by the meta-board.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "     0 1 2   0 1 2   0 1 2")?;
        for global_row in 0..9 {
            if global_row > 0 && global_row % 3 == 0 {
                writeln!(f, "    -------+-------+-------")?;
            }
            write!(f, "  {} ", global_row % 3)?;
            for global_col in 0..9 {
                if global_col > 0 && global_col % 3 == 0 {
                    write!(f, " |")?;
                }
                let sub_board = (global_row / 3) * 3 + global_col / 3;
                let cell = self.cell(sub_board, global_row % 3, global_col % 3);
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        let meta_board = self.meta_board();
        for row in meta_board.outcomes() {
            let symbols: Vec<String> = row
                .iter()
                .map(|outcome| match outcome {
                    Some(Outcome::Won(player)) => player.to_string(),
                    Some(Outcome::Drawn) => "-".to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "  [{}]", symbols.join(" "))?;
        }
        Ok(())
    }
}

/// Builds a [`GlobalBoard`] from a 9x9 layout of `X`, `O` and `.`, read across the
/// whole board row by row. `|` may be used to mark sub-board columns.
///
/// ```ignore
/// let board = uttt_board! {
///     XXX|...|...
///     ...|...|...
///     ...|...|...
///     ...|...|...
///     ...|.O.|...
///     ...|...|...
///     ...|...|...
///     ...|...|...
///     ...|...|...
/// };
/// ```
#[macro_export]
macro_rules! uttt_board {
    ($($cell:tt)*) => {{
        $crate::board::GlobalBoard::from_layout(stringify!($($cell)*))
            .expect("invalid board layout")
    }};
}
