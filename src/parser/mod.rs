//! Parser module for building the syntax tree.
//!
//! Construction alternates between two steps on ever smaller token spans:
//!
//! - Block segmentation splits a span into its top-level statements,
//!   keeping each `start` ... `end` body whole
//! - Node building turns one span into a group, control structure,
//!   terminal or operator node and recurses into the children's spans
//!
//! Expressions are resolved by precedence: the loosest-binding builtin
//! operator of a span (leftmost on ties) becomes its root.

pub mod blocks;
pub mod lookups;
pub mod node;
pub mod parser;

#[cfg(test)]
mod tests;
