// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell::{Cell, CellStore, Geometry};
use super::ids::CellId;

pub(crate) const ENTITY_STYLE: &str = "rounded=1;whiteSpace=wrap;html=1;";
pub(crate) const ATTRIBUTE_STYLE: &str = "ellipse;whiteSpace=wrap;html=1;";
pub(crate) const ASSOCIATION_STYLE: &str = "rhombus;whiteSpace=wrap;html=1;";
pub(crate) const EDGE_LABEL_STYLE: &str = "text;html=1;resizable=0;points=[];";
pub(crate) const ER_EDGE_STYLE: &str = "endArrow=none;html=1;";

/// Builds ER diagrams the way the editor palette would lay them out.
pub(crate) struct ErBuilder {
    store: CellStore,
    layer: CellId,
    next: u64,
}

impl ErBuilder {
    pub(crate) fn new() -> Self {
        let store = CellStore::with_default_layer();
        let layer = store.default_parent().cloned().expect("default layer");
        let next = store.next_free_counter();
        Self { store, layer, next }
    }

    fn allocate(&mut self) -> CellId {
        let id = CellId::from_counter(self.next);
        self.next += 1;
        id
    }

    pub(crate) fn vertex(&mut self, value: &str, style: &str, x: f64, y: f64) -> CellId {
        let id = self.allocate();
        let cell = Cell::vertex(id.clone(), value, style, Geometry::new(x, y, 120.0, 60.0));
        self.store.insert(cell, Some(&self.layer));
        id
    }

    pub(crate) fn entity(&mut self, name: &str, x: f64, y: f64) -> CellId {
        self.vertex(name, ENTITY_STYLE, x, y)
    }

    pub(crate) fn attribute(&mut self, name: &str, x: f64, y: f64) -> CellId {
        self.vertex(name, ATTRIBUTE_STYLE, x, y)
    }

    pub(crate) fn association(&mut self, name: &str, x: f64, y: f64) -> CellId {
        self.vertex(name, ASSOCIATION_STYLE, x, y)
    }

    pub(crate) fn connect(&mut self, source: &CellId, target: &CellId) -> CellId {
        let id = self.allocate();
        let edge = Cell::edge(
            id.clone(),
            ER_EDGE_STYLE,
            Some(source.clone()),
            Some(target.clone()),
        );
        self.store.insert(edge, Some(&self.layer));
        id
    }

    pub(crate) fn connect_labeled(
        &mut self,
        source: &CellId,
        target: &CellId,
        label: &str,
    ) -> CellId {
        let edge_id = self.connect(source, target);
        let label_id = self.allocate();
        let label = Cell::vertex(label_id, label, EDGE_LABEL_STYLE, Geometry::relative(-0.5));
        self.store.insert(label, Some(&edge_id));
        edge_id
    }

    pub(crate) fn build(self) -> CellStore {
        self.store
    }
}

/// `Student` and `Course` joined by `Enrolls`, whose edges carry `1` and `*`, and which owns
/// the attribute `grade`.
pub(crate) fn er_enrolls() -> CellStore {
    let mut er = ErBuilder::new();
    let student = er.entity("Student", 0.0, 0.0);
    let course = er.entity("Course", 200.0, 0.0);
    let enrolls = er.association("Enrolls", 100.0, 100.0);
    let grade = er.attribute("grade", 120.0, 220.0);

    er.connect_labeled(&student, &enrolls, "1");
    er.connect_labeled(&enrolls, &course, "*");
    er.connect(&grade, &enrolls);
    er.build()
}

/// `Student` and `Course` joined by a bare `Teaches` association.
pub(crate) fn er_teaches() -> CellStore {
    let mut er = ErBuilder::new();
    let student = er.entity("Student", 0.0, 0.0);
    let course = er.entity("Course", 200.0, 0.0);
    let teaches = er.association("Teaches", 100.0, 100.0);

    er.connect(&student, &teaches);
    er.connect(&teaches, &course);
    er.build()
}
