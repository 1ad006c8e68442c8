use crate::error::{Error, Result};
use crate::Vertex;

use indexmap::IndexSet;
use seahash::SeaHasher;

use std::fmt::Debug;
use std::hash::BuildHasherDefault;

/// Mutable set of vertices, the working material of every search frame.
///
/// Binary operations walk the smaller operand and probe the larger one, so
/// their cost is bounded by the smaller cardinality (or chunk count).
pub trait VertexSetLike: Clone + Debug + Default + Eq + Send + Sync + FromIterator<Vertex> {
    type Iter<'a>: Iterator<Item = Vertex>
    where
        Self: 'a;

    /// empty set, expected to hold vertices below `capacity`
    fn with_capacity(capacity: usize) -> Self;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn contains(&self, v: Vertex) -> bool;
    /// returns whether `v` was newly inserted
    fn insert(&mut self, v: Vertex) -> bool;
    /// returns whether `v` was present
    fn remove(&mut self, v: Vertex) -> bool;
    fn iter(&self) -> Self::Iter<'_>;

    /// Removes and returns some element.
    fn pop_arbitrary(&mut self) -> Result<Vertex>;
    fn choose_arbitrary(&self) -> Result<Vertex> {
        self.iter().next().ok_or(Error::EmptySet)
    }

    fn intersection(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    /// size of the intersection, without building it
    fn intersection_size(&self, other: &Self) -> usize;
    fn is_disjoint(&self, other: &Self) -> bool;
}

type Chunk = u64;
const CHUNK_SIZE: usize = Chunk::BITS as usize;

/// Dense bitset over vertex ids. Best when ids are small and dense.
///
/// The last chunk is never zero, so two equal sets have identical chunk
/// vectors and `Eq` can be derived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitVertexSet {
    chunks: Vec<Chunk>,
    len: usize,
}

impl BitVertexSet {
    fn locate(v: Vertex) -> (usize, Chunk) {
        let vh = v as usize / CHUNK_SIZE;
        let vl = v as usize % CHUNK_SIZE;
        (vh, 1 << vl)
    }

    fn trim(&mut self) {
        while self.chunks.last() == Some(&0) {
            self.chunks.pop();
        }
    }

    fn from_chunks(chunks: Vec<Chunk>) -> Self {
        let len = chunks.iter().map(|c| c.count_ones() as usize).sum();
        let mut s = BitVertexSet { chunks, len };
        s.trim();
        s
    }
}

pub struct BitIter<'a> {
    chunks: &'a [Chunk],
    index: usize,
    bits: Chunk,
}

impl Iterator for BitIter<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        while self.bits == 0 {
            self.index += 1;
            self.bits = *self.chunks.get(self.index)?;
        }
        let b = self.bits.trailing_zeros();
        self.bits &= !(1 << b);
        Some((self.index * CHUNK_SIZE) as Vertex | b)
    }
}

impl VertexSetLike for BitVertexSet {
    type Iter<'a> = BitIter<'a>;

    fn with_capacity(capacity: usize) -> Self {
        // capacity / Chunk::BITS, rounded up.
        let row_len = (capacity + CHUNK_SIZE - 1) / CHUNK_SIZE;
        BitVertexSet {
            chunks: Vec::with_capacity(row_len),
            len: 0,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, v: Vertex) -> bool {
        let (vh, bit) = Self::locate(v);
        self.chunks.get(vh).map_or(false, |c| c & bit != 0)
    }

    fn insert(&mut self, v: Vertex) -> bool {
        let (vh, bit) = Self::locate(v);
        if vh >= self.chunks.len() {
            self.chunks.resize(vh + 1, 0);
        }
        let chunk = &mut self.chunks[vh];
        if *chunk & bit != 0 {
            return false;
        }
        *chunk |= bit;
        self.len += 1;
        true
    }

    fn remove(&mut self, v: Vertex) -> bool {
        let (vh, bit) = Self::locate(v);
        match self.chunks.get_mut(vh) {
            Some(chunk) if *chunk & bit != 0 => {
                *chunk &= !bit;
                self.len -= 1;
                self.trim();
                true
            }
            _ => false,
        }
    }

    fn iter(&self) -> BitIter<'_> {
        BitIter {
            chunks: &self.chunks,
            index: 0,
            bits: self.chunks.first().copied().unwrap_or(0),
        }
    }

    /// Pops the highest vertex. Trailing zero chunks are dropped on the way,
    /// so draining a set costs O(1) per pop.
    fn pop_arbitrary(&mut self) -> Result<Vertex> {
        let vh = self.chunks.len().checked_sub(1).ok_or(Error::EmptySet)?;
        let chunk = &mut self.chunks[vh];
        debug_assert_ne!(*chunk, 0);
        let b = Chunk::BITS - 1 - chunk.leading_zeros();
        *chunk &= !(1 << b);
        self.len -= 1;
        self.trim();
        Ok((vh * CHUNK_SIZE) as Vertex | b)
    }

    fn intersection(&self, other: &Self) -> Self {
        let chunks = self.chunks.iter().zip(&other.chunks).map(|(a, b)| a & b).collect();
        Self::from_chunks(chunks)
    }

    fn difference(&self, other: &Self) -> Self {
        let chunks = (0..)
            .zip(&self.chunks)
            .map(|(i, a)| a & !other.chunks.get(i).copied().unwrap_or(0))
            .collect();
        Self::from_chunks(chunks)
    }

    fn intersection_size(&self, other: &Self) -> usize {
        self.chunks
            .iter()
            .zip(&other.chunks)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        self.chunks.iter().zip(&other.chunks).all(|(a, b)| a & b == 0)
    }
}

impl FromIterator<Vertex> for BitVertexSet {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        let mut s = BitVertexSet::default();
        for v in iter {
            s.insert(v);
        }
        s
    }
}

pub(crate) type SeaBuildHasher = BuildHasherDefault<SeaHasher>;

/// Sparse hash set over vertex ids. Best when ids are large compared to the
/// number of vertices actually held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexVertexSet(IndexSet<Vertex, SeaBuildHasher>);

impl IndexVertexSet {
    fn smaller_larger<'a>(&'a self, other: &'a Self) -> (&'a Self, &'a Self) {
        if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        }
    }
}

impl VertexSetLike for IndexVertexSet {
    type Iter<'a> = std::iter::Copied<indexmap::set::Iter<'a, Vertex>>;

    fn with_capacity(capacity: usize) -> Self {
        IndexVertexSet(IndexSet::with_capacity_and_hasher(capacity, Default::default()))
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn contains(&self, v: Vertex) -> bool {
        self.0.contains(&v)
    }

    fn insert(&mut self, v: Vertex) -> bool {
        self.0.insert(v)
    }

    fn remove(&mut self, v: Vertex) -> bool {
        self.0.swap_remove(&v)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter().copied()
    }

    fn pop_arbitrary(&mut self) -> Result<Vertex> {
        self.0.pop().ok_or(Error::EmptySet)
    }

    fn intersection(&self, other: &Self) -> Self {
        let (small, large) = self.smaller_larger(other);
        small.iter().filter(|&v| large.contains(v)).collect()
    }

    fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|&v| !other.contains(v)).collect()
    }

    fn intersection_size(&self, other: &Self) -> usize {
        let (small, large) = self.smaller_larger(other);
        small.iter().filter(|&v| large.contains(v)).count()
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = self.smaller_larger(other);
        small.iter().all(|v| !large.contains(v))
    }
}

impl FromIterator<Vertex> for IndexVertexSet {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        IndexVertexSet(iter.into_iter().collect())
    }
}
