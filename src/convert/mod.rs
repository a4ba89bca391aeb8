// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! ER to UML class diagram conversion.
//!
//! The conversion is a pure function of the source cell store: cells are classified by style,
//! entity/attribute/association links are recovered from the ER edges, and UML tables and
//! relationship edges are synthesized. Nothing is written to a model until the resulting
//! [`UmlConversion`] is materialized.
//!
//! Inputs the converter cannot interpret are dropped rather than reported: unclassified cells,
//! associations that are not binary (or link the same entity twice) and labels without a
//! multiplicity pair all degrade to omissions.

pub mod associations;
pub mod cardinality;
pub mod classify;
pub mod walk;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::ConversionConfig;
use crate::model::{Cell, CellId, CellStore, GraphModel, ImportRoutine, ModelEvent, Point};
use crate::render::{
    average_position, render_class_table, EdgeBuilder, UmlEdge, UmlLabel, UmlNodeRef, UmlTable,
};

pub use associations::{AssociationEntry, AssociationIndex, EntityAttributes, Participant};
pub use cardinality::{parse_cardinality, render_uml_cardinality, Cardinality};
pub use classify::{CellCategory, Classification};
pub use walk::walk_connections;

/// The relationship generated for one binary association.
#[derive(Debug, Clone, PartialEq)]
pub struct UmlAssociation {
    association_id: CellId,
    edge: UmlEdge,
    table: Option<UmlTable>,
    table_link: Option<UmlEdge>,
}

impl UmlAssociation {
    pub fn association_id(&self) -> &CellId {
        &self.association_id
    }

    pub fn edge(&self) -> &UmlEdge {
        &self.edge
    }

    /// Association-class table, present when the association has attributes.
    pub fn table(&self) -> Option<&UmlTable> {
        self.table.as_ref()
    }

    /// Dashed edge from the association-class table to the relationship edge.
    pub fn table_link(&self) -> Option<&UmlEdge> {
        self.table_link.as_ref()
    }
}

/// The synthesized UML diagram, not yet inserted into any model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UmlConversion {
    tables: BTreeMap<CellId, UmlTable>,
    associations: Vec<UmlAssociation>,
}

pub fn convert_er_to_uml(store: &CellStore, config: &ConversionConfig) -> UmlConversion {
    let classification = Classification::new(store);
    let attributes = EntityAttributes::collect(&classification);
    let index = AssociationIndex::collect(&classification);

    let mut tables = BTreeMap::<CellId, UmlTable>::new();
    for (entity_id, fields) in attributes.iter() {
        let Some(entity) = classification.entities().get(entity_id) else {
            continue;
        };
        tables.insert(entity_id.clone(), entity_table(entity, fields, config));
    }

    let mut associations = Vec::new();
    for (association_id, entry) in index.iter() {
        if !entry.is_binary() {
            tracing::debug!(
                association = %association_id,
                participants = entry.participants().len(),
                recursive = entry.recursive(),
                "skipping association that is not binary"
            );
            continue;
        }

        for participant in entry.participants() {
            let entity_id = participant.entity_id();
            if tables.contains_key(entity_id) {
                continue;
            }
            if let Some(entity) = classification.entities().get(entity_id) {
                tables.insert(entity_id.clone(), entity_table(entity, &[], config));
            }
        }

        if let Some(association) =
            build_association(&classification, association_id, entry, &tables, config)
        {
            associations.push(association);
        }
    }

    tracing::info!(
        tables = tables.len(),
        relationships = associations.len(),
        "converted ER diagram to UML"
    );

    UmlConversion {
        tables,
        associations,
    }
}

fn entity_table(entity: &Cell, fields: &[&Cell], config: &ConversionConfig) -> UmlTable {
    render_class_table(
        entity.display_value(),
        fields.iter().map(|field| field.display_value()),
        cell_position(entity),
        config,
    )
}

fn cell_position(cell: &Cell) -> Point {
    cell.geometry().map(|g| g.position()).unwrap_or_default()
}

/// Right-most first; on equal x the upper one first.
fn compare_positions(a: &Point, b: &Point) -> Ordering {
    b.x.partial_cmp(&a.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

fn build_association(
    classification: &Classification<'_>,
    association_id: &CellId,
    entry: &AssociationEntry<'_>,
    tables: &BTreeMap<CellId, UmlTable>,
    config: &ConversionConfig,
) -> Option<UmlAssociation> {
    let association = classification.associations().get(association_id)?;

    let mut ordered = Vec::with_capacity(2);
    for participant in entry.participants() {
        let table = tables.get(participant.entity_id())?;
        ordered.push((participant, table.geometry().position()));
    }
    ordered.sort_by(|(_, a), (_, b)| compare_positions(a, b));
    let [(first, _), (second, _)] = ordered.as_slice() else {
        return None;
    };

    let first_cardinality = edge_cardinality(classification, first);
    let second_cardinality = edge_cardinality(classification, second);

    let mut builder = EdgeBuilder::new(
        UmlNodeRef::ClassTable(first.entity_id().clone()),
        UmlNodeRef::ClassTable(second.entity_id().clone()),
    )
    .begin_text(cardinality::end_label(
        &first_cardinality,
        &second_cardinality,
    ))
    .end_text(cardinality::end_label(
        &second_cardinality,
        &first_cardinality,
    ));

    let table = association_table(classification, association, entry, config);
    if table.is_none() {
        builder = builder.center_text(association.display_value());
    }
    let table_link = table.as_ref().map(|_| {
        EdgeBuilder::new(
            UmlNodeRef::AssociationTable(association_id.clone()),
            UmlNodeRef::Relationship(association_id.clone()),
        )
        .dashed()
        .build(config)
    });

    Some(UmlAssociation {
        association_id: association_id.clone(),
        edge: builder.build(config),
        table,
        table_link,
    })
}

fn edge_cardinality(classification: &Classification<'_>, participant: &Participant<'_>) -> Cardinality {
    let text = classification
        .edge_label(participant.edge())
        .map(Cell::display_value)
        .unwrap_or("");
    parse_cardinality(text)
}

fn association_table(
    classification: &Classification<'_>,
    association: &Cell,
    entry: &AssociationEntry<'_>,
    config: &ConversionConfig,
) -> Option<UmlTable> {
    let fields: Vec<&Cell> = entry
        .attributes()
        .iter()
        .filter_map(|id| classification.cell(id))
        .collect();
    let position = average_position(fields.iter().map(|cell| cell_position(cell)))?;

    let mut table = render_class_table(
        association.display_value(),
        fields.iter().map(|field| field.display_value()),
        cell_position(association),
        config,
    );
    table.move_to(position);
    Some(table)
}

impl UmlConversion {
    pub fn tables(&self) -> &BTreeMap<CellId, UmlTable> {
        &self.tables
    }

    pub fn associations(&self) -> &[UmlAssociation] {
        &self.associations
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.associations.is_empty()
    }

    /// Replaces the contents of `model` with the converted diagram.
    ///
    /// Tables and relationship edges go in first, then association-class tables with their
    /// dashed links, then each relationship's labels as children of the edge. Inserted labels
    /// are announced with [`ModelEvent::LabelsInserted`] and auto-sized.
    pub fn materialize(self, model: &mut GraphModel) {
        model.update(|model| {
            let root_id = model.allocate_id();
            let layer_id = model.allocate_id();
            model.set_root(CellStore::with_layer(root_id, layer_id));

            let mut ids = BTreeMap::<UmlNodeRef, CellId>::new();
            for entity_id in self.tables.keys() {
                ids.insert(UmlNodeRef::ClassTable(entity_id.clone()), model.allocate_id());
            }
            for association in &self.associations {
                let id = association.association_id.clone();
                ids.insert(UmlNodeRef::Relationship(id.clone()), model.allocate_id());
                if association.table.is_some() {
                    ids.insert(UmlNodeRef::AssociationTable(id), model.allocate_id());
                }
            }

            let mut primary = Vec::with_capacity(self.tables.len() + self.associations.len());
            for (entity_id, table) in &self.tables {
                if let Some(id) = ids.get(&UmlNodeRef::ClassTable(entity_id.clone())) {
                    primary.push(table_cell(id.clone(), table));
                }
            }
            for association in &self.associations {
                let key = UmlNodeRef::Relationship(association.association_id.clone());
                if let Some(id) = ids.get(&key) {
                    primary.push(edge_cell(id.clone(), &association.edge, &ids));
                }
            }
            model.add_cells(primary, None);

            let mut secondary = Vec::new();
            for association in &self.associations {
                let (Some(table), Some(link)) = (&association.table, &association.table_link)
                else {
                    continue;
                };
                let key = UmlNodeRef::AssociationTable(association.association_id.clone());
                let Some(table_id) = ids.get(&key) else {
                    continue;
                };
                secondary.push(edge_cell(model.allocate_id(), link, &ids));
                secondary.push(table_cell(table_id.clone(), table));
            }
            if !secondary.is_empty() {
                model.add_cells(secondary, None);
            }

            for association in &self.associations {
                let labels = association.edge.labels();
                if labels.is_empty() {
                    continue;
                }
                let key = UmlNodeRef::Relationship(association.association_id.clone());
                let Some(edge_id) = ids.get(&key) else {
                    continue;
                };
                let cells = labels
                    .iter()
                    .map(|label| label_cell(model.allocate_id(), label))
                    .collect();
                let inserted = model.add_cells(cells, Some(edge_id));
                model.fire_event(ModelEvent::LabelsInserted {
                    cells: inserted.clone(),
                });
                for id in &inserted {
                    model.auto_size_cell(id);
                }
            }
        });
    }

    /// Wraps [`UmlConversion::materialize`] into a one-shot import for a deferred tab.
    pub fn into_import_routine(self) -> ImportRoutine {
        ImportRoutine::new(move |model| self.materialize(model))
    }
}

fn table_cell(id: CellId, table: &UmlTable) -> Cell {
    Cell::vertex(id, table.value(), table.style(), *table.geometry())
}

fn edge_cell(id: CellId, edge: &UmlEdge, ids: &BTreeMap<UmlNodeRef, CellId>) -> Cell {
    Cell::edge(
        id,
        edge.style().as_str(),
        ids.get(edge.source()).cloned(),
        ids.get(edge.target()).cloned(),
    )
}

fn label_cell(id: CellId, label: &UmlLabel) -> Cell {
    let mut cell = Cell::vertex(id, label.text(), label.style(), *label.geometry());
    cell.set_connectable(false);
    cell
}

#[cfg(test)]
mod tests;
