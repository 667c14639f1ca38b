//! Indexer layer tests
//!
//! Builds synthetic sites on disk and inspects the written document.
