// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use super::ui::TabRecord;
use crate::model::{CellStore, GraphModel, ImportRoutine, TabId, UndoHistory, UndoableEdit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DiagramType {
    #[default]
    Er,
    Uml,
}

impl DiagramType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Er => "er",
            Self::Uml => "uml",
        }
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tab's undo stack at the moment it lost focus. The edits are shared with the history they
/// were taken from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UndoSnapshot {
    history: Vec<Rc<UndoableEdit>>,
    cursor: usize,
}

impl UndoSnapshot {
    pub fn capture(undo: &UndoHistory) -> Self {
        Self {
            history: undo.history().to_vec(),
            cursor: undo.cursor(),
        }
    }

    pub fn history(&self) -> &[Rc<UndoableEdit>] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Overwrites the live history with this snapshot.
    pub fn restore(&self, undo: &mut UndoHistory) {
        undo.replace(self.history.clone(), self.cursor);
    }
}

/// A tab's diagram while it is not on the canvas.
#[derive(Debug)]
pub enum ModelSnapshot {
    /// A detached copy of the cell table plus the id allocator value.
    Materialized { cells: CellStore, next_id: u64 },
    /// A one-shot routine that builds the diagram the first time the tab is shown.
    Deferred(ImportRoutine),
}

impl ModelSnapshot {
    pub fn capture(model: &GraphModel) -> Self {
        Self::Materialized {
            cells: model.store().clone(),
            next_id: model.next_id(),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Makes this snapshot the live diagram. A deferred routine runs inside one transaction and
    /// is consumed.
    pub fn apply(self, model: &mut GraphModel) {
        match self {
            Self::Materialized { cells, next_id } => {
                model.update(|model| {
                    model.set_root(cells);
                    model.set_next_id(next_id);
                });
            }
            Self::Deferred(routine) => {
                tracing::info!("running deferred import");
                model.update(|model| routine.run(model));
            }
        }
    }
}

#[derive(Debug)]
pub struct Tab {
    id: TabId,
    label: SmolStr,
    focused: bool,
    diagram_type: DiagramType,
    undo: UndoSnapshot,
    model: Option<ModelSnapshot>,
}

impl Tab {
    pub fn new(
        id: TabId,
        label: impl Into<SmolStr>,
        diagram_type: DiagramType,
        model: Option<ModelSnapshot>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            focused: false,
            diagram_type,
            undo: UndoSnapshot::default(),
            model,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn diagram_type(&self) -> DiagramType {
        self.diagram_type
    }

    pub fn undo(&self) -> &UndoSnapshot {
        &self.undo
    }

    pub(crate) fn set_undo(&mut self, undo: UndoSnapshot) {
        self.undo = undo;
    }

    /// `None` once the stored diagram has been moved onto the canvas and not saved back yet.
    pub fn model(&self) -> Option<&ModelSnapshot> {
        self.model.as_ref()
    }

    pub(crate) fn set_model(&mut self, model: ModelSnapshot) {
        self.model = Some(model);
    }

    pub(crate) fn take_model(&mut self) -> Option<ModelSnapshot> {
        self.model.take()
    }

    pub fn record(&self) -> TabRecord {
        TabRecord {
            id: self.id,
            label: self.label.clone(),
            focused: self.focused,
            diagram_type: self.diagram_type,
        }
    }
}

/// A diagram document to open in its own tab at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedDiagram {
    label: SmolStr,
    diagram_type: DiagramType,
    cells: CellStore,
}

impl SeedDiagram {
    pub fn new(label: impl Into<SmolStr>, cells: CellStore) -> Self {
        Self {
            label: label.into(),
            diagram_type: DiagramType::Er,
            cells,
        }
    }

    pub fn with_diagram_type(mut self, diagram_type: DiagramType) -> Self {
        self.diagram_type = diagram_type;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn diagram_type(&self) -> DiagramType {
        self.diagram_type
    }

    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    pub(crate) fn into_parts(self) -> (SmolStr, DiagramType, CellStore) {
        (self.label, self.diagram_type, self.cells)
    }
}
