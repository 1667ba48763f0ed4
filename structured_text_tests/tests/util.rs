// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared document-building helpers.

use structured_text::{Block, BlockKind, Document, Run, RunStyle};

/// A normal-styled run.
pub fn normal(text: &str) -> Run {
    Run::new(RunStyle::Normal, text)
}

/// A bold run.
pub fn bold(text: &str) -> Run {
    Run::new(RunStyle::Bold, text)
}

/// A paragraph block from runs.
pub fn paragraph(runs: impl IntoIterator<Item = Run>) -> Block {
    Block::with_runs(BlockKind::Paragraph, runs)
}

/// A document of paragraphs, one normal-styled run each.
pub fn plain_document(lines: &[&str]) -> Document {
    Document::with_blocks(lines.iter().map(|line| paragraph([normal(line)])))
}

/// The per-run text of a block, for structure assertions.
pub fn run_texts(document: &Document, block: usize) -> Vec<String> {
    document
        .block(block)
        .expect("block index in bounds")
        .runs()
        .map(|run| run.text().to_owned())
        .collect()
}
