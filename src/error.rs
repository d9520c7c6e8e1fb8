use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or driving a simulation.
///
/// The physics core (accumulation and integration) never fails; these cover
/// configuration, population and the observers' I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// A sampling range whose bounds are reversed or not finite.
    #[error("invalid {field} range: [{lower}, {upper})")]
    InvalidRange {
        field: &'static str,
        lower: f64,
        upper: f64,
    },

    /// Invalid scenario or runtime parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
