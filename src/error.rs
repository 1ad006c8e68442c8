use crate::Vertex;

/// Everything that can go wrong while building graphs or running a search.
///
/// The graph validation variants are fatal: no algorithm gives meaningful
/// results on a graph that failed construction.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("vertex {0} is adjacent to itself")]
    SelfLoop(Vertex),

    #[error("vertex {from} lists {to} as neighbour, but {to} does not list {from}")]
    Asymmetric { from: Vertex, to: Vertex },

    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    OutOfRange { vertex: Vertex, order: usize },

    #[error("sum of degrees {0} is odd")]
    OddDegreeSum(usize),

    #[error("cannot pick a vertex from an empty set")]
    EmptySet,

    #[error("graph has no edges")]
    NoEdges,

    #[error("parallel search needs at least one worker thread")]
    NoWorkers,

    #[error("{order} vertices accommodate at most {max} edges, {size} requested")]
    TooManyEdges { order: usize, size: usize, max: usize },

    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
