use crate::core::codegen;
use crate::core::{ConfigProvider, Grid, Pipeline, Storage};
use crate::domain::model;
use crate::utils::error::{BoardGenError, Result};

pub struct BoardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BoardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for BoardPipeline<S, C> {
    fn extract(&self) -> Result<Grid> {
        tracing::debug!("Reading board file: {}", self.config.board_path());
        let raw = self.storage.read_file(self.config.board_path())?;

        // 逐列解析，空白列直接略過
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(raw.as_slice());

        let mut board = Grid::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;

            let mut row = Vec::with_capacity(record.len());
            for (col_idx, field) in record.iter().enumerate() {
                let value =
                    field
                        .parse::<i32>()
                        .map_err(|_| BoardGenError::PieceParseError {
                            row: row_idx + 1,
                            column: col_idx + 1,
                            value: field.to_string(),
                        })?;
                row.push(value);
            }
            board.push(row);
        }

        tracing::debug!("Parsed {} board rows", board.len());
        Ok(board)
    }

    fn transform(&self, mut board: Grid) -> Result<Grid> {
        model::ensure_rectangular(&board)?;

        // CSV 由上而下列出棋盤，先反轉再轉置，輸出才是 [x, y] 的索引方式
        board.reverse();
        Ok(model::transpose(&board))
    }

    fn load(&self, board: Grid) -> Result<String> {
        tracing::debug!("Rendering {} rows as C# source", board.len());
        Ok(codegen::render_csharp_array(&board, self.config.array_name()))
    }
}
