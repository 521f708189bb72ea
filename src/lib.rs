pub mod logger;
pub mod photo_pipeline;
