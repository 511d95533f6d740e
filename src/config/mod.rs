pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "boardgen")]
#[command(about = "Generates a C# board array definition from a CSV grid export")]
pub struct CliConfig {
    #[arg(long, default_value = "./TestBoard.csv")]
    pub board_path: String,

    #[arg(long, default_value = "PIECES")]
    pub array_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn board_path(&self) -> &str {
        &self.board_path
    }

    fn array_name(&self) -> &str {
        &self.array_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("board_path", &self.board_path)?;
        validation::validate_file_extension("board_path", &self.board_path, &["csv"])?;
        validation::validate_identifier("array_name", &self.array_name)?;
        Ok(())
    }
}
