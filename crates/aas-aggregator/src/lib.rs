//! # AAS Aggregator
//!
//! The capability set of an Asset Administration Shell aggregator: a
//! collection of uniquely identified shells that can be created, updated,
//! deleted, read one at a time or listed.
//!
//! ## Overview
//!
//! - [`AasAggregator`]: the async trait every aggregator (and every decorator
//!   around one) implements
//! - [`Shell`] / [`Identifier`]: plain data holders passed through untouched
//! - [`InMemoryAggregator`]: map-backed reference implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aas_aggregator::{AasAggregator, Identifier, InMemoryAggregator, Shell};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aas_aggregator::AggregatorError> {
//!     let aggregator = InMemoryAggregator::new();
//!     aggregator.create_aas(Shell::new("pump", "urn:plant:pump:1")).await?;
//!
//!     let shell = aggregator.get_aas(&Identifier::new("urn:plant:pump:1")).await?;
//!     println!("{}", shell.id_short);
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod error;
pub mod memory;
pub mod shell;

pub use aggregator::AasAggregator;
pub use error::AggregatorError;
pub use memory::InMemoryAggregator;
pub use shell::{Identifier, Shell};
