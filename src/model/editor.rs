// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::rc::Rc;

use super::graph::{GraphModel, ModelEvent};
use super::undo::UndoHistory;

/// The live editing surface: the diagram model currently on the canvas and its undo history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Editor {
    graph: GraphModel,
    undo: UndoHistory,
}

impl Editor {
    pub fn new(graph: GraphModel, undo: UndoHistory) -> Self {
        Self { graph, undo }
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut GraphModel {
        &mut self.graph
    }

    pub fn undo(&self) -> &UndoHistory {
        &self.undo
    }

    pub fn undo_mut(&mut self) -> &mut UndoHistory {
        &mut self.undo
    }

    /// Runs `f` as one model transaction and records the resulting edit in the undo history.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut GraphModel) -> R) -> R {
        let seen = self.graph.events().len();
        let result = self.graph.update(f);
        for event in self.graph.events().get(seen..).unwrap_or_default() {
            if let ModelEvent::Change { edit } = event {
                self.undo.push(Rc::clone(edit));
            }
        }
        result
    }
}
