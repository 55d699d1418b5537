use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("a route needs at least 2 waypoints, got {got}")]
    InvalidRoute { got: usize },

    #[error("bad timestamp on waypoint {index}: {source}")]
    Timestamp {
        index:  usize,
        source: chrono::ParseError,
    },

    #[error("route JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
