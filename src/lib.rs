//! Rootbrowse: Root-Confined Directory Browsing
//!
//! Exposes a single local directory tree through paths relative to a fixed root:
//! browse folders, read small text files, and create, empty, or delete entries.
//! Every path is resolved and confined to the root before the filesystem is touched.

pub mod browser;
pub mod concurrency;
pub mod config;
pub mod content;
pub mod error;
pub mod listing;
pub mod logging;
pub mod metadata;
pub mod mutation;
pub mod resolver;
pub mod root;
pub mod tooling;

pub use browser::{Browser, Entry};
pub use error::BrowseError;
pub use metadata::FileMetadata;
pub use mutation::{Mutation, MutationEngine};
pub use resolver::{Classification, PathResolver, ResolvedPath};
pub use root::RootContext;
