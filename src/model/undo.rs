// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::rc::Rc;

use super::ids::CellId;

/// A single recorded mutation of the diagram model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelChange {
    RootChanged { root: Option<CellId> },
    CellAdded { cell_id: CellId, parent: Option<CellId> },
    GeometryChanged { cell_id: CellId },
}

/// All changes made inside one outermost model transaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UndoableEdit {
    changes: Vec<ModelChange>,
}

impl UndoableEdit {
    pub fn new(changes: Vec<ModelChange>) -> Self {
        Self { changes }
    }

    pub fn changes(&self) -> &[ModelChange] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Linear undo history. `cursor` is the index at which the next edit is added; entries at and
/// after the cursor are redoable.
///
/// Edits are reference counted so that copying the history is shallow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UndoHistory {
    history: Vec<Rc<UndoableEdit>>,
    cursor: usize,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Rc<UndoableEdit>] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the history and cursor wholesale. The cursor is clamped to the history length.
    pub fn replace(&mut self, history: Vec<Rc<UndoableEdit>>, cursor: usize) {
        self.cursor = cursor.min(history.len());
        self.history = history;
    }

    pub fn push(&mut self, edit: impl Into<Rc<UndoableEdit>>) {
        let edit = edit.into();
        if edit.is_empty() {
            return;
        }
        self.history.truncate(self.cursor);
        self.history.push(edit);
        self.cursor = self.history.len();
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.cursor = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Moves the cursor back and returns the edit to revert.
    pub fn undo(&mut self) -> Option<Rc<UndoableEdit>> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.history.get(self.cursor).cloned()
    }

    /// Moves the cursor forward and returns the edit to reapply.
    pub fn redo(&mut self) -> Option<Rc<UndoableEdit>> {
        let edit = self.history.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(edit)
    }
}
