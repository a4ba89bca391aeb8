// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use ermine::model::{Cell, CellId, CellStore, Geometry};

const ENTITY_STYLE: &str = "rounded=1;whiteSpace=wrap;html=1;";
const ATTRIBUTE_STYLE: &str = "ellipse;whiteSpace=wrap;html=1;";
const ASSOCIATION_STYLE: &str = "rhombus;whiteSpace=wrap;html=1;";
const EDGE_LABEL_STYLE: &str = "text;html=1;resizable=0;points=[];";
const ER_EDGE_STYLE: &str = "endArrow=none;html=1;";

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumChain,
    LargeAttributes,
}

#[derive(Debug, Clone, Copy)]
pub struct ErParams {
    pub entities: usize,
    pub attributes_per_entity: usize,
    pub attributes_per_association: usize,
}

impl ErParams {
    pub const fn new(
        entities: usize,
        attributes_per_entity: usize,
        attributes_per_association: usize,
    ) -> Self {
        Self {
            entities,
            attributes_per_entity,
            attributes_per_association,
        }
    }
}

struct Builder {
    store: CellStore,
    layer: CellId,
    next: u64,
}

impl Builder {
    fn new() -> Self {
        let store = CellStore::with_default_layer();
        let layer = store.default_parent().cloned().expect("default layer");
        let next = store.next_free_counter();
        Self { store, layer, next }
    }

    fn allocate(&mut self) -> CellId {
        let mut buf = itoa::Buffer::new();
        let id = CellId::new(buf.format(self.next)).expect("counter id");
        self.next += 1;
        id
    }

    fn vertex(&mut self, value: &str, style: &str, x: f64, y: f64) -> CellId {
        let id = self.allocate();
        let cell = Cell::vertex(id.clone(), value, style, Geometry::new(x, y, 120.0, 60.0));
        self.store.insert(cell, Some(&self.layer));
        id
    }

    fn connect(&mut self, source: &CellId, target: &CellId, label: Option<&str>) {
        let id = self.allocate();
        let edge = Cell::edge(id.clone(), ER_EDGE_STYLE, Some(source.clone()), Some(target.clone()));
        self.store.insert(edge, Some(&self.layer));
        if let Some(label) = label {
            let label_id = self.allocate();
            let cell = Cell::vertex(label_id, label, EDGE_LABEL_STYLE, Geometry::relative(-0.5));
            self.store.insert(cell, Some(&id));
        }
    }
}

/// A chain of entities where each neighbour pair is joined by a labeled association.
pub fn er_chain(params: ErParams) -> CellStore {
    let mut builder = Builder::new();
    let mut entities = Vec::with_capacity(params.entities);

    for index in 0..params.entities {
        let x = (index % 10) as f64 * 300.0;
        let y = (index / 10) as f64 * 400.0;
        let entity = builder.vertex(&format!("Entity{index}"), ENTITY_STYLE, x, y);
        for attr in 0..params.attributes_per_entity {
            let attribute = builder.vertex(
                &format!("field{attr}"),
                ATTRIBUTE_STYLE,
                x + attr as f64 * 20.0,
                y + 120.0,
            );
            builder.connect(&entity, &attribute, None);
        }
        entities.push((entity, x, y));
    }

    for (index, pair) in entities.windows(2).enumerate() {
        let [(left, lx, ly), (right, rx, ry)] = pair else {
            continue;
        };
        let association = builder.vertex(
            &format!("Rel{index}"),
            ASSOCIATION_STYLE,
            (lx + rx) / 2.0,
            (ly + ry) / 2.0 + 200.0,
        );
        builder.connect(left, &association, Some("has 1:*"));
        builder.connect(&association, right, Some("belongs 0:1"));
        for attr in 0..params.attributes_per_association {
            let attribute = builder.vertex(
                &format!("since{attr}"),
                ATTRIBUTE_STYLE,
                (lx + rx) / 2.0 + attr as f64 * 20.0,
                (ly + ry) / 2.0 + 300.0,
            );
            builder.connect(&attribute, &association, None);
        }
    }

    builder.store
}

pub fn fixture(case: Case) -> CellStore {
    match case {
        Case::Small => er_chain(ErParams::new(4, 2, 0)),
        Case::MediumChain => er_chain(ErParams::new(60, 3, 1)),
        Case::LargeAttributes => er_chain(ErParams::new(200, 12, 2)),
    }
}
