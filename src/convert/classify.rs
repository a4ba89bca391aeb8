// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{Cell, CellId, CellStore};

/// What an ER cell represents, decided once from its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellCategory {
    Entity,
    Attribute,
    Association,
    EdgeLabel,
}

impl CellCategory {
    /// Matches the leading style token: `rounded`, `ellipse`, `rhombus;` or `text;`.
    pub fn from_style(style: &str) -> Option<Self> {
        if style.starts_with("rounded") {
            Some(Self::Entity)
        } else if style.starts_with("ellipse") {
            Some(Self::Attribute)
        } else if style.starts_with("rhombus;") {
            Some(Self::Association)
        } else if style.starts_with("text;") {
            Some(Self::EdgeLabel)
        } else {
            None
        }
    }
}

/// The categorized view of one source diagram, borrowed from its cell store.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    store: &'a CellStore,
    tags: BTreeMap<&'a CellId, CellCategory>,
    entities: BTreeMap<&'a CellId, &'a Cell>,
    attributes: BTreeMap<&'a CellId, &'a Cell>,
    associations: BTreeMap<&'a CellId, &'a Cell>,
    edge_labels: BTreeMap<&'a CellId, &'a Cell>,
    edges: BTreeMap<&'a CellId, &'a Cell>,
}

impl<'a> Classification<'a> {
    pub fn new(store: &'a CellStore) -> Self {
        let mut classification = Self {
            store,
            tags: BTreeMap::new(),
            entities: BTreeMap::new(),
            attributes: BTreeMap::new(),
            associations: BTreeMap::new(),
            edge_labels: BTreeMap::new(),
            edges: BTreeMap::new(),
        };

        for (id, cell) in store.cells() {
            if cell.is_edge() {
                classification.edges.insert(id, cell);
            }

            let Some(category) = cell.style().and_then(CellCategory::from_style) else {
                continue;
            };
            classification.tags.insert(id, category);
            let bucket = match category {
                CellCategory::Entity => &mut classification.entities,
                CellCategory::Attribute => &mut classification.attributes,
                CellCategory::Association => &mut classification.associations,
                CellCategory::EdgeLabel => &mut classification.edge_labels,
            };
            bucket.insert(id, cell);
        }

        tracing::debug!(
            entities = classification.entities.len(),
            attributes = classification.attributes.len(),
            associations = classification.associations.len(),
            edge_labels = classification.edge_labels.len(),
            edges = classification.edges.len(),
            unclassified = store.len() - classification.tags.len(),
            "classified ER cells"
        );

        classification
    }

    pub fn store(&self) -> &'a CellStore {
        self.store
    }

    pub fn category(&self, id: &CellId) -> Option<CellCategory> {
        self.tags.get(id).copied()
    }

    pub fn is(&self, id: &CellId, category: CellCategory) -> bool {
        self.category(id) == Some(category)
    }

    pub fn cell(&self, id: &CellId) -> Option<&'a Cell> {
        self.store.get(id)
    }

    pub fn entities(&self) -> &BTreeMap<&'a CellId, &'a Cell> {
        &self.entities
    }

    pub fn attributes(&self) -> &BTreeMap<&'a CellId, &'a Cell> {
        &self.attributes
    }

    pub fn associations(&self) -> &BTreeMap<&'a CellId, &'a Cell> {
        &self.associations
    }

    pub fn edge_labels(&self) -> &BTreeMap<&'a CellId, &'a Cell> {
        &self.edge_labels
    }

    pub fn edges(&self) -> &BTreeMap<&'a CellId, &'a Cell> {
        &self.edges
    }

    /// The first edge-label box attached to `edge`, if any.
    pub fn edge_label(&self, edge: &Cell) -> Option<&'a Cell> {
        edge.children()
            .iter()
            .find(|child| self.is(child, CellCategory::EdgeLabel))
            .and_then(|child| self.cell(child))
    }
}
