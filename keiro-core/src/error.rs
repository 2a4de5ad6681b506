//! Error types for the keiro graph engine.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::PriorityHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// A fixed-capacity heap was already full when an entry was inserted.
    #[error("priority heap is full (capacity {capacity})")]
    CapacityExceeded {
        /// The fixed capacity of the heap.
        capacity: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// A fixed-capacity heap was already full when an entry was inserted.
        CapacityExceeded => CapacityExceeded { .. } => "HEAP_CAPACITY_EXCEEDED",
    }
}

/// Error type produced when constructing or querying a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must contain at least one vertex.
    #[error("a graph must contain at least one vertex")]
    EmptyGraph,
    /// The vertex count exceeded [`crate::MAX_VERTICES`].
    #[error("a graph holds at most {max} vertices (got {vertex_count})")]
    TooManyVertices {
        /// The rejected vertex count.
        vertex_count: usize,
        /// The largest accepted vertex count.
        max: usize,
    },
    /// A vertex id was outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The rejected vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The priority heap backing a greedy algorithm rejected an entry.
    #[error("priority heap failed: {source}")]
    Heap {
        /// Underlying heap error.
        #[source]
        source: HeapError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must contain at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// The vertex count exceeded the supported maximum.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
        /// A vertex id was outside the graph.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// The priority heap rejected an entry.
        HeapFailure => Heap { .. } => "GRAPH_HEAP_FAILURE",
    }
}

impl GraphError {
    /// Retrieve the inner [`HeapErrorCode`] when the error originated in the heap.
    pub const fn heap_code(&self) -> Option<HeapErrorCode> {
        match self {
            Self::Heap { source } => Some(source.code()),
            _ => None,
        }
    }
}

impl From<HeapError> for GraphError {
    fn from(source: HeapError) -> Self {
        Self::Heap { source }
    }
}

/// Error type produced at the [`crate::GraphSession`] boundary.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SessionError {
    /// An operation was requested before `init_graph`.
    #[error("no graph has been initialised")]
    Uninitialized,
    /// The requested vertex count was not in `1..=MAX_VERTICES`.
    #[error("vertex count must be between 1 and {max} (got {value})", max = crate::MAX_VERTICES)]
    InvalidVertexCount {
        /// The rejected vertex count.
        value: i64,
    },
    /// A vertex index was negative or not below the vertex count.
    #[error("index {value} is out of range for a graph with {vertex_count} vertices")]
    InvalidIndex {
        /// The rejected index as supplied by the caller.
        value: i64,
        /// Number of vertices in the current graph.
        vertex_count: usize,
    },
    /// An edge weight was negative or did not fit the weight type.
    #[error("edge weight {value} is not a non-negative 32-bit integer")]
    InvalidWeight {
        /// The rejected weight as supplied by the caller.
        value: i64,
    },
    /// The underlying graph operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`SessionError`] variants.
    enum SessionErrorCode for SessionError {
        /// An operation was requested before `init_graph`.
        Uninitialized => Uninitialized => "SESSION_UNINITIALIZED",
        /// The requested vertex count was out of range.
        InvalidVertexCount => InvalidVertexCount { .. } => "SESSION_INVALID_VERTEX_COUNT",
        /// A vertex index was out of range.
        InvalidIndex => InvalidIndex { .. } => "SESSION_INVALID_INDEX",
        /// An edge weight was malformed.
        InvalidWeight => InvalidWeight { .. } => "SESSION_INVALID_WEIGHT",
        /// The underlying graph operation failed.
        GraphFailure => Graph(..) => "SESSION_GRAPH_FAILURE",
    }
}

impl SessionError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in the graph.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
