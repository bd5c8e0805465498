// src/crawl/mod.rs
// =============================================================================
// This module is the core of dirspy: the traversal engine and the content
// inspector.
//
// Submodules:
// - engine: recursive descent over the directory tree, visited-set dedup,
//   containment and status/extension policy, result recording
// - scan: keyword scanning of fetched bodies
//
// This file (mod.rs) is the module root - it exports the public API the
// rest of the application uses.
// =============================================================================

mod engine;
mod scan;

// Re-export so callers write `crawl::Crawler` instead of
// `crawl::engine::Crawler`
pub use engine::Crawler;
