//! # Comb list algorithms
//!
//! Vector and slice algorithms grouped by theme:
//!
//! - [`generate`]: `range`, `replicate`, `iterate`, `scan`
//! - [`zip`]: `zip_with`, `zip_with3`, `zip3` (truncate to shortest)
//! - [`select`]: `first`/`last`/`first_by`/`last_by`, extrema by
//!   comparator, membership predicates
//! - [`sets`]: `nub`, `union`, `intersect`, `difference` and their
//!   `_by` variants — order-preserving, first occurrence wins
//! - [`group`]: adjacent grouping
//! - [`edit`]: in-place sorted insertion and first-occurrence deletion
//!
//! Absence is always an `Option`, never a panic: `first(&[])` is
//! `None`, `first_by` with no match is `None`.

pub mod edit;
pub mod generate;
pub mod group;
pub mod select;
pub mod sets;
pub mod zip;

pub use edit::{delete, delete_by, insert, insert_by};
pub use generate::{iterate, range, range_from, range_step, replicate, scan};
pub use group::{group, group_by};
pub use select::{elem, first, first_by, last, last_by, maximum_by, minimum_by, not_elem};
pub use sets::{
    difference, intersect, intersect_by, nub, nub_by, union, union_by,
};
pub use zip::{zip3, zip_with, zip_with3};
