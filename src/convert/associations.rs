// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use super::classify::{CellCategory, Classification};
use super::walk::walk_connections;
use crate::model::{Cell, CellId};

/// Attribute cells per entity, in discovery order and without duplicates.
#[derive(Debug, Clone, Default)]
pub struct EntityAttributes<'a> {
    by_entity: BTreeMap<&'a CellId, Vec<&'a Cell>>,
}

impl<'a> EntityAttributes<'a> {
    pub fn collect(classification: &Classification<'a>) -> Self {
        let mut attributes = Self::default();
        walk_connections(
            classification,
            CellCategory::Entity,
            CellCategory::Attribute,
            |entity, attribute, _edge| attributes.add(entity, attribute),
        );
        attributes
    }

    fn add(&mut self, entity: &'a Cell, attribute: &'a Cell) {
        let list = self.by_entity.entry(entity.id()).or_default();
        if !list.iter().any(|known| known.id() == attribute.id()) {
            list.push(attribute);
        }
    }

    pub fn get(&self, entity_id: &CellId) -> Option<&[&'a Cell]> {
        self.by_entity.get(entity_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a CellId, &[&'a Cell])> + '_ {
        self.by_entity.iter().map(|(id, cells)| (*id, cells.as_slice()))
    }
}

/// One entity taking part in an association, with the ER edge that links them.
#[derive(Debug, Clone, Copy)]
pub struct Participant<'a> {
    edge: &'a Cell,
    entity_id: &'a CellId,
}

impl<'a> Participant<'a> {
    pub fn edge(&self) -> &'a Cell {
        self.edge
    }

    pub fn entity_id(&self) -> &'a CellId {
        self.entity_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssociationEntry<'a> {
    participants: SmallVec<[Participant<'a>; 2]>,
    recursive: bool,
    attributes: Vec<&'a CellId>,
}

impl<'a> AssociationEntry<'a> {
    pub fn participants(&self) -> &[Participant<'a>] {
        &self.participants
    }

    /// Set when the same entity was linked to the association more than once.
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn attributes(&self) -> &[&'a CellId] {
        &self.attributes
    }

    /// Only binary, non-recursive associations become UML relationships.
    pub fn is_binary(&self) -> bool {
        self.participants.len() == 2 && !self.recursive
    }
}

/// Participants and attached attributes per association.
#[derive(Debug, Clone, Default)]
pub struct AssociationIndex<'a> {
    entries: BTreeMap<&'a CellId, AssociationEntry<'a>>,
}

impl<'a> AssociationIndex<'a> {
    pub fn collect(classification: &Classification<'a>) -> Self {
        let mut index = Self::default();
        walk_connections(
            classification,
            CellCategory::Entity,
            CellCategory::Association,
            |entity, association, edge| index.add_participant(association, entity, edge),
        );
        walk_connections(
            classification,
            CellCategory::Attribute,
            CellCategory::Association,
            |attribute, association, _edge| index.add_attribute(association, attribute),
        );
        index
    }

    fn add_participant(&mut self, association: &'a Cell, entity: &'a Cell, edge: &'a Cell) {
        let entry = self.entries.entry(association.id()).or_default();
        if entry
            .participants
            .iter()
            .any(|known| known.entity_id == entity.id())
        {
            entry.recursive = true;
            return;
        }
        entry.participants.push(Participant {
            edge,
            entity_id: entity.id(),
        });
    }

    fn add_attribute(&mut self, association: &'a Cell, attribute: &'a Cell) {
        let entry = self.entries.entry(association.id()).or_default();
        if !entry.attributes.contains(&attribute.id()) {
            entry.attributes.push(attribute.id());
        }
    }

    pub fn get(&self, association_id: &CellId) -> Option<&AssociationEntry<'a>> {
        self.entries.get(association_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a CellId, &AssociationEntry<'a>)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
