//! Error macros for waypath

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::SearchError::invalid_value($context, $value))
    };
}

/// Macro for rejecting vertices outside the graph
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$graph.contains($vertex) {
            return Err($crate::error::SearchError::unknown_vertex($vertex));
        }
    };
}
