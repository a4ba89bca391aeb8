// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: cells, the live graph model with its transactions, and undo history.

pub mod cell;
pub mod editor;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod undo;

pub use cell::{Cell, CellKind, CellStore, Geometry, Point};
pub use editor::Editor;
pub use graph::{GraphModel, ImportRoutine, ModelEvent, LABELS_INSERTED_EVENT};
pub use ids::{CellId, Id, IdError, TabId};
pub use undo::{ModelChange, UndoHistory, UndoableEdit};
