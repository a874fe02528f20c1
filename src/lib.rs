//! # keyword-class-finder
//!
//! Finds C# classes whose source contains a keyword and reports them grouped
//! by folder.
//!
//! ## Architecture
//!
//! - **workspace**: `.cs` document discovery under a workspace root
//! - **syntax**: tree-sitter C# access behind the `ClassSyntax` capability trait
//! - **scan**: sequential document parsing and keyword matching
//! - **extract**: class node to `ClassRecord`
//! - **references**: naive textual cross-document reference search
//! - **aggregate**: folder grouping, totals, and the immutable report model
//! - **render**: JSON, Markdown and HTML renderers over one model
//! - **output**: artifact rendering and writing
//! - **report**: the scan → extract → aggregate pipeline

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod record;
pub mod references;
pub mod render;
pub mod report;
pub mod scan;
pub mod syntax;
pub mod workspace;
