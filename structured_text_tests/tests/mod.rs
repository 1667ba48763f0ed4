// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `structured_text`.
//!
//! - The `util` module contains shared document-building helpers needed by
//!   different test modules.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes it
//!   easy to share utility functions between tests.
//! - If you want to add new tests, put them into the module matching their
//!   "topic" (range deletion, line insertion, the editor boundary), and put
//!   the topic at the start of the test name: `delete_cross_block_simple`
//!   rather than `simple_cross_block_delete`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
