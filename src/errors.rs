use std::error::Error;

use thiserror::Error;

use crate::graph::{Node, NumNodes};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> std::result::Result<(), E>;
}

#[derive(Debug, Error)]
pub enum ScoalaError {
    #[error("truncated input: stream ended while reading {expected}")]
    TruncatedInput { expected: &'static str },

    #[error("invalid token {token:?} while reading {expected}")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    #[error("invalid edge endpoint: edge ({u}, {v}) in graph with {n} cities")]
    InvalidEdgeEndpoint { u: i64, v: i64, n: NumNodes },

    #[error("allocation failure: cannot reserve adjacency for {n} cities")]
    AllocationFailure { n: NumNodes },

    #[error("asymmetric adjacency: {v} is listed {forward} times at {u} but {u} {backward} times at {v}")]
    AsymmetricAdjacency {
        u: Node,
        v: Node,
        forward: usize,
        backward: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScoalaError>;

#[cfg(test)]
mod test {
    use super::*;

    struct AlwaysBroken;

    impl InvariantCheck<ScoalaError> for AlwaysBroken {
        fn is_correct(&self) -> std::result::Result<(), ScoalaError> {
            Err(ScoalaError::AllocationFailure { n: 3 })
        }
    }

    #[test]
    fn messages() {
        assert_eq!(
            AlwaysBroken.is_correct().unwrap_err().to_string(),
            "allocation failure: cannot reserve adjacency for 3 cities"
        );
        assert_eq!(
            ScoalaError::TruncatedInput {
                expected: "Target city"
            }
            .to_string(),
            "truncated input: stream ended while reading Target city"
        );
    }
}
