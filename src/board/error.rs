use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardParseError {
    #[error("Board layout must contain 81 cells, found {length}")]
    InvalidLayoutLength { length: usize },
    #[error("Invalid cell symbol {symbol:?}, expected `X`, `O` or `.`")]
    InvalidSymbol { symbol: char },
    #[error("Invalid player {input:?}, expected `x`, `o` or `random`")]
    InvalidPlayer { input: String },
    #[error("Invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),
}
