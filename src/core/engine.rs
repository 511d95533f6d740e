use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct GenEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GenEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting board source generation...");

        // Extract
        tracing::info!("Loading board data...");
        let board = self.pipeline.extract()?;
        tracing::info!("Loaded {} rows", board.len());

        // Transform
        tracing::info!("Transforming board...");
        let board = self.pipeline.transform(board)?;
        tracing::info!("Transformed into {} rows", board.len());

        // Load
        tracing::info!("Rendering board source...");
        let source = self.pipeline.load(board)?;

        Ok(source)
    }
}
