// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-adapter boundary: selections and the editor session.

mod editor;
mod selection;

pub use self::editor::*;
pub use self::selection::*;
