//! HireVerse Storage Contracts
//!
//! This crate defines the seams between the core and the managed document /
//! object stores the product runs on: a problem repository and a blob store,
//! both as async traits, plus in-memory implementations that back the tests
//! and document the expected semantics.
//!
//! # Example
//!
//! ```rust
//! use hireverse_store::{MemoryProblemStore, ProblemRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryProblemStore::new();
//!     let problems = store.fetch_all().await?;
//!     assert!(problems.is_empty());
//!     Ok(())
//! }
//! ```

pub mod problems;
pub mod blobs;
pub mod contribution;

pub use blobs::{BlobStore, MemoryBlobStore};
pub use contribution::{record_contribution, set_completed};
pub use problems::{MemoryProblemStore, ProblemRepository};
