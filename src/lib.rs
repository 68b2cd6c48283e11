pub mod batch;
pub mod cost;
pub mod errors;
pub mod graph;
pub mod io;
pub mod log;

pub mod prelude {
    pub use super::batch::*;
    pub use super::cost::*;
    pub use super::errors::{InvariantCheck, ScoalaError};
    pub use super::graph::*;
    pub use super::io::*;
}

#[cfg(test)]
mod testing;
