//! # Document Memory Store
//!
//! A local-first memory store for markdown documentation. Documents are split
//! into heading-addressed chunks, deduplicated by content hash, and indexed
//! for full-text search in SQLite.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────────┐   ┌───────────────┐
//! │ Documents │──▶│ Chunk + Tag     │──▶│ SQLite        │
//! │ (docs/)   │   │ + Hash (dedup)  │   │ meta + FTS5   │
//! └──────────┘   └─────────────────┘   └──────┬────────┘
//!                                             │
//!                                             ▼
//!                                       ┌──────────┐
//!                                       │ doctool  │
//!                                       │  (CLI)   │
//!                                       └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! doctool init                  # create the index database
//! doctool ingest guide.md       # ingest one document
//! doctool ingest-all            # ingest the whole docs root
//! doctool search "deployment"   # full-text search
//! doctool stats                 # what's indexed
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration with named defaults |
//! | [`models`] | Core data types and outcome enums |
//! | [`hash`] | SHA-256 content fingerprinting |
//! | [`chunk`] | Heading-aware markdown chunking |
//! | [`tags`] | Path-based tag inference |
//! | [`store`] | Dedup-aware chunk store + lexical search |
//! | [`ingest`] | Ingestion orchestration, single and batch |
//! | [`search`] | Search command output |
//! | [`stats`] | Index statistics |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema creation |

pub mod chunk;
pub mod config;
pub mod db;
pub mod hash;
pub mod ingest;
pub mod migrate;
pub mod models;
pub mod search;
pub mod stats;
pub mod store;
pub mod tags;
