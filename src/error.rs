use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unable to read map description {}: {source}", path.display())]
    MapLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
