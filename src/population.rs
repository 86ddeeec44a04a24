//! # Population and Parents
//!
//! A [`Population`] is the read-only input of every selector: an ordered set of
//! solutions, each a fixed-length sequence of genes, addressed by a stable index.
//! [`Parents`] is the output: deep copies of the chosen solutions together with the
//! population index each one came from.
//!
//! The [`GeneTypeMode`] of the population only decides how the parents are stored.
//! Homogeneous genes are packed into one contiguous row-major buffer, heterogeneous
//! genes are kept one row per parent.
//!
//! ## Example
//!
//! ```rust
//! use genselect::population::{GeneTypeMode, Population};
//!
//! let population = Population::new(
//!     vec![vec![1, 2, 3], vec![4, 5, 6]],
//!     GeneTypeMode::Homogeneous,
//! ).unwrap();
//!
//! assert_eq!(population.len(), 2);
//! assert_eq!(population.num_genes(), 3);
//! assert_eq!(population.solution(1), &[4, 5, 6]);
//! ```

use std::fmt::Debug;

use crate::error::{Result, SelectionError};

/// Marker trait for the value type of a single gene.
///
/// Any `Clone + Debug + Send + Sync` type is a gene.
pub trait Gene: Clone + Debug + Send + Sync {}

impl<T> Gene for T where T: Clone + Debug + Send + Sync {}

/// Whether all genes of a solution share one type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneTypeMode {
    /// Every gene has the same numeric type; parents are packed contiguously.
    #[default]
    Homogeneous,
    /// Genes may differ in type; parents are stored row by row.
    Heterogeneous,
}

/// An ordered set of equally long solutions.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<G: Gene> {
    solutions: Vec<Vec<G>>,
    num_genes: usize,
    gene_type_mode: GeneTypeMode,
}

impl<G: Gene> Population<G> {
    /// Creates a population from its solutions.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Configuration` if the solutions do not all have the
    /// same number of genes.
    pub fn new(solutions: Vec<Vec<G>>, gene_type_mode: GeneTypeMode) -> Result<Self> {
        let num_genes = solutions.first().map_or(0, Vec::len);

        if let Some((idx, ragged)) = solutions
            .iter()
            .enumerate()
            .find(|(_, solution)| solution.len() != num_genes)
        {
            return Err(SelectionError::Configuration(format!(
                "Solution {} has {} genes, expected {}",
                idx,
                ragged.len(),
                num_genes
            )));
        }

        Ok(Self {
            solutions,
            num_genes,
            gene_type_mode,
        })
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Number of genes in every solution.
    pub fn num_genes(&self) -> usize {
        self.num_genes
    }

    pub fn gene_type_mode(&self) -> GeneTypeMode {
        self.gene_type_mode
    }

    /// Returns the genes of the solution at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn solution(&self, idx: usize) -> &[G] {
        &self.solutions[idx]
    }

    pub fn get(&self, idx: usize) -> Option<&[G]> {
        self.solutions.get(idx).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[G]> {
        self.solutions.iter().map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ParentStorage<G> {
    Packed { genes: Vec<G>, num_genes: usize },
    Rows(Vec<Vec<G>>),
}

/// The parents chosen by a selector.
///
/// Every stored solution is a copy, so mutating a parent never touches the
/// population it was taken from. `indices()[i]` is the population index of
/// `get(i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parents<G: Gene> {
    storage: ParentStorage<G>,
    indices: Vec<usize>,
}

impl<G: Gene> Parents<G> {
    /// Allocates an empty container for `num_parents` solutions of `population`,
    /// laid out according to the population's gene-type mode.
    pub fn allocate(population: &Population<G>, num_parents: usize) -> Self {
        let storage = match population.gene_type_mode() {
            GeneTypeMode::Homogeneous => ParentStorage::Packed {
                genes: Vec::with_capacity(num_parents * population.num_genes()),
                num_genes: population.num_genes(),
            },
            GeneTypeMode::Heterogeneous => ParentStorage::Rows(Vec::with_capacity(num_parents)),
        };

        Self {
            storage,
            indices: Vec::with_capacity(num_parents),
        }
    }

    /// Copies the solution at `idx` out of `population` and appends it.
    pub(crate) fn push_from(&mut self, population: &Population<G>, idx: usize) {
        let solution = population.solution(idx);
        match &mut self.storage {
            ParentStorage::Packed { genes, .. } => genes.extend_from_slice(solution),
            ParentStorage::Rows(rows) => rows.push(solution.to_vec()),
        }
        self.indices.push(idx);
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Population indices of the parents, aligned with the stored solutions.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn gene_type_mode(&self) -> GeneTypeMode {
        match self.storage {
            ParentStorage::Packed { .. } => GeneTypeMode::Homogeneous,
            ParentStorage::Rows(_) => GeneTypeMode::Heterogeneous,
        }
    }

    /// Returns the genes of the `i`-th parent.
    pub fn get(&self, i: usize) -> Option<&[G]> {
        if i >= self.len() {
            return None;
        }
        match &self.storage {
            ParentStorage::Packed { genes, num_genes } => {
                Some(&genes[i * num_genes..(i + 1) * num_genes])
            }
            ParentStorage::Rows(rows) => rows.get(i).map(Vec::as_slice),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &[G]> {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Consumes the parents, returning one `Vec` per parent and the aligned indices.
    pub fn into_parts(self) -> (Vec<Vec<G>>, Vec<usize>) {
        let solutions = match self.storage {
            ParentStorage::Packed { genes, num_genes } if num_genes > 0 => genes
                .chunks(num_genes)
                .map(<[G]>::to_vec)
                .collect(),
            ParentStorage::Packed { .. } => vec![Vec::new(); self.indices.len()],
            ParentStorage::Rows(rows) => rows,
        };
        (solutions, self.indices)
    }
}
