// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The live diagram model the editor canvas works against.
//!
//! Mutations are grouped into transactions (`begin_update`/`end_update`). Changes made while a
//! transaction is open are collected and published as a single [`ModelEvent::Change`] when the
//! outermost transaction ends, so observers see one notification per logical operation.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::cell::{Cell, CellKind, CellStore};
use super::ids::CellId;
use super::undo::{ModelChange, UndoableEdit};

pub const LABELS_INSERTED_EVENT: &str = "labelsInserted";

const CHAR_WIDTH: f64 = 7.0;
const LINE_HEIGHT: f64 = 16.0;
const LABEL_PADDING_X: f64 = 8.0;
const LABEL_PADDING_Y: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    Change { edit: Rc<UndoableEdit> },
    LabelsInserted { cells: Vec<CellId> },
}

impl ModelEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Change { .. } => "change",
            Self::LabelsInserted { .. } => LABELS_INSERTED_EVENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel {
    store: CellStore,
    next_id: u64,
    update_level: u32,
    pending: Vec<ModelChange>,
    events: Vec<ModelEvent>,
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphModel {
    /// An empty model: root `0` with one default layer `1`.
    pub fn new() -> Self {
        let store = CellStore::with_default_layer();
        let next_id = store.next_free_counter();
        Self {
            store,
            next_id,
            update_level: 0,
            pending: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn store(&self) -> &CellStore {
        &self.store
    }

    pub fn cell(&self, id: &CellId) -> Option<&Cell> {
        self.store.get(id)
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn set_next_id(&mut self, next_id: u64) {
        self.next_id = next_id;
    }

    pub fn allocate_id(&mut self) -> CellId {
        allocate(&mut self.next_id)
    }

    pub fn update_level(&self) -> u32 {
        self.update_level
    }

    pub fn begin_update(&mut self) {
        self.update_level += 1;
    }

    /// Closes a transaction. Closing the outermost one publishes the collected changes.
    pub fn end_update(&mut self) {
        if self.update_level == 0 {
            tracing::warn!("end_update called without a matching begin_update");
            return;
        }
        self.update_level -= 1;
        if self.update_level == 0 && !self.pending.is_empty() {
            let edit = UndoableEdit::new(std::mem::take(&mut self.pending));
            self.events.push(ModelEvent::Change {
                edit: Rc::new(edit),
            });
        }
    }

    /// Runs `f` inside a transaction.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_update();
        let result = f(self);
        self.end_update();
        result
    }

    /// Replaces the whole cell ownership table. The id allocator is left untouched.
    pub fn set_root(&mut self, store: CellStore) {
        let root = store.root().cloned();
        self.update(|model| {
            model.store = store;
            model.pending.push(ModelChange::RootChanged { root });
        });
    }

    /// Replaces the model contents with an imported document and moves the id allocator past
    /// every id the document uses.
    pub fn import(&mut self, store: CellStore) {
        let next_id = store.next_free_counter().max(self.next_id);
        self.set_root(store);
        self.next_id = next_id;
    }

    /// Inserts `cells` below `parent`, or below the default layer when no parent is given.
    /// Cells whose id is already taken receive a freshly allocated id.
    pub fn add_cells(&mut self, cells: Vec<Cell>, parent: Option<&CellId>) -> Vec<CellId> {
        let parent = parent
            .cloned()
            .or_else(|| self.store.default_parent().cloned());

        self.update(|model| {
            let mut added = Vec::with_capacity(cells.len());
            for mut cell in cells {
                if model.store.contains(cell.id()) {
                    cell.set_id(model.allocate_id());
                }
                let cell_id = cell.id().clone();
                model.store.insert(cell, parent.as_ref());
                model.pending.push(ModelChange::CellAdded {
                    cell_id: cell_id.clone(),
                    parent: parent.clone(),
                });
                added.push(cell_id);
            }
            added
        })
    }

    /// Copies the cell `id` (and its descendants when `deep`) into a detached store. Every copy
    /// receives a fresh id from this model's allocator; references between copied cells are
    /// remapped, references leaving the copied subtree are kept.
    pub fn clone_cell(&mut self, id: &CellId, deep: bool) -> Option<CellStore> {
        let source = self.store.get(id)?;
        let originals: Vec<&CellId> = if deep {
            self.store.subtree(id)
        } else {
            vec![source.id()]
        };

        let mut mapping = BTreeMap::<CellId, CellId>::new();
        for original in &originals {
            mapping.insert((*original).clone(), allocate(&mut self.next_id));
        }

        let mut clone = CellStore::default();
        for original in originals {
            let Some(cell) = self.store.get(original) else {
                continue;
            };
            let mut copy = cell.clone();
            let remap = |id: &CellId| mapping.get(id).cloned().unwrap_or_else(|| id.clone());

            copy.set_id(remap(cell.id()));
            copy.set_parent(cell.parent().filter(|p| mapping.contains_key(*p)).map(remap));
            *copy.children_mut() = cell
                .children()
                .iter()
                .filter(|child| mapping.contains_key(*child))
                .map(remap)
                .collect();
            if let CellKind::Edge { source, target } = copy.kind_mut() {
                *source = source.as_ref().map(remap);
                *target = target.as_ref().map(remap);
            }
            clone.insert(copy, None);
        }
        clone.set_root_id(mapping.get(id).cloned());
        Some(clone)
    }

    /// Queues a custom event for observers.
    pub fn fire_event(&mut self, event: ModelEvent) {
        self.events.push(event);
    }

    /// Fits the cell's bounds to its text: one line per `<br>` separated segment.
    pub fn auto_size_cell(&mut self, id: &CellId) {
        let Some(cell) = self.store.get_mut(id) else {
            return;
        };
        let (width, height) = measure_text(cell.display_value());
        let Some(geometry) = cell.geometry_mut() else {
            return;
        };
        geometry.width = width;
        geometry.height = height;
        let cell_id = id.clone();
        self.update(|model| model.pending.push(ModelChange::GeometryChanged { cell_id }));
    }

    pub fn events(&self) -> &[ModelEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<ModelEvent> {
        std::mem::take(&mut self.events)
    }
}

fn allocate(next_id: &mut u64) -> CellId {
    let id = CellId::from_counter(*next_id);
    *next_id = next_id.saturating_add(1);
    id
}

fn measure_text(text: &str) -> (f64, f64) {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    for pos in memchr::memmem::find_iter(bytes, b"<br>") {
        lines.push(&text[start..pos]);
        start = pos + "<br>".len();
    }
    lines.push(&text[start..]);

    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let width = longest as f64 * CHAR_WIDTH + LABEL_PADDING_X;
    let height = lines.len() as f64 * LINE_HEIGHT + LABEL_PADDING_Y;
    (width, height)
}

/// A one-shot routine that fills a model with a diagram the first time its tab is shown.
pub struct ImportRoutine(Box<dyn FnOnce(&mut GraphModel)>);

impl ImportRoutine {
    pub fn new(routine: impl FnOnce(&mut GraphModel) + 'static) -> Self {
        Self(Box::new(routine))
    }

    /// Imports `store` as-is, replacing whatever the model shows.
    pub fn from_store(store: CellStore) -> Self {
        Self::new(move |model| model.import(store))
    }

    pub fn run(self, model: &mut GraphModel) {
        (self.0)(model)
    }
}

impl fmt::Debug for ImportRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ImportRoutine(..)")
    }
}
