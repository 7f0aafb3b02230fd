//! Error types for motion primitives and viewport observation

/// Errors raised while building motion primitives
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("Visibility threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Errors raised by a viewport observation backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserverError {
    #[error("Viewport observation is not supported: {0}")]
    Unsupported(String),
}

/// Errors that stop the server from starting
#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load Leptos configuration: {0}")]
    Configuration(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server terminated: {0}")]
    Serve(#[from] std::io::Error),
}
