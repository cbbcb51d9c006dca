use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart options do not provide a mount point")]
    MissingMountPoint,

    #[error("{chart} chart requires at least one datum")]
    EmptyData { chart: &'static str },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("drawing backend error: {0}")]
    Backend(String),
}
