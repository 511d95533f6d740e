use crate::utils::error::{BoardGenError, Result};

pub type Grid = Vec<Vec<i32>>;

pub fn ensure_rectangular(board: &Grid) -> Result<()> {
    let expected = match board.first() {
        Some(first) => first.len(),
        None => return Ok(()),
    };

    for (idx, row) in board.iter().enumerate().skip(1) {
        if row.len() != expected {
            return Err(BoardGenError::JaggedBoardError {
                row: idx + 1,
                expected,
                actual: row.len(),
            });
        }
    }

    Ok(())
}

pub fn transpose(board: &Grid) -> Grid {
    let cols = board.first().map(|row| row.len()).unwrap_or(0);

    (0..cols)
        .map(|col| board.iter().map(|row| row[col]).collect())
        .collect()
}
