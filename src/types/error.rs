use thiserror::Error;

#[derive(Debug, Error)]
pub enum CasterError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid map: {0}")]
    InvalidMap(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("spawn point ({x}, {y}) is inside a wall or outside the map")]
    SpawnBlocked { x: f32, y: f32 },
}
