// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Syntax layer: source text to tokens, tokens to content lines, content
//! lines to a tree of components.
//!
//! ```text
//! Source Text → Lexer → Token Stream → Scanner → Content Lines → Tree Builder → Components
//! ```

pub mod lexer;
mod scanner;
mod tree_builder;

pub use self::scanner::{ContentLine, scan_content_lines};
pub use self::tree_builder::{Component, build_tree};
