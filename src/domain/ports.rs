use crate::domain::model::Grid;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn board_path(&self) -> &str;
    fn array_name(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Grid>;
    fn transform(&self, board: Grid) -> Result<Grid>;
    fn load(&self, board: Grid) -> Result<String>;
}
