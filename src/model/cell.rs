// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::CellId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cell bounds. For `relative` geometries attached to an edge, `x` is the position along the
/// edge in `-1.0..=1.0` and `offset` is an absolute displacement from that point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub relative: bool,
    pub offset: Point,
}

impl Geometry {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            relative: false,
            offset: Point::new(0.0, 0.0),
        }
    }

    pub const fn relative(x: f64) -> Self {
        Self {
            x,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            relative: true,
            offset: Point::new(0.0, 0.0),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    /// Root and layer cells: pure containers without a visual.
    Container,
    Vertex,
    Edge {
        source: Option<CellId>,
        target: Option<CellId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: CellId,
    kind: CellKind,
    value: Option<String>,
    style: Option<String>,
    geometry: Option<Geometry>,
    parent: Option<CellId>,
    children: Vec<CellId>,
    connectable: bool,
}

impl Cell {
    pub fn container(id: CellId) -> Self {
        Self {
            id,
            kind: CellKind::Container,
            value: None,
            style: None,
            geometry: None,
            parent: None,
            children: Vec::new(),
            connectable: false,
        }
    }

    pub fn vertex(
        id: CellId,
        value: impl Into<String>,
        style: impl Into<String>,
        geometry: Geometry,
    ) -> Self {
        Self {
            id,
            kind: CellKind::Vertex,
            value: Some(value.into()),
            style: Some(style.into()),
            geometry: Some(geometry),
            parent: None,
            children: Vec::new(),
            connectable: true,
        }
    }

    pub fn edge(
        id: CellId,
        style: impl Into<String>,
        source: Option<CellId>,
        target: Option<CellId>,
    ) -> Self {
        Self {
            id,
            kind: CellKind::Edge { source, target },
            value: None,
            style: Some(style.into()),
            geometry: Some(Geometry::relative(0.0)),
            parent: None,
            children: Vec::new(),
            connectable: true,
        }
    }

    pub fn id(&self) -> &CellId {
        &self.id
    }

    pub(crate) fn set_id(&mut self, id: CellId) {
        self.id = id;
    }

    pub fn kind(&self) -> &CellKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut CellKind {
        &mut self.kind
    }

    pub fn is_edge(&self) -> bool {
        matches!(self.kind, CellKind::Edge { .. })
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self.kind, CellKind::Vertex)
    }

    /// Source and target of an edge; `None` for vertices and containers.
    pub fn terminals(&self) -> Option<(Option<&CellId>, Option<&CellId>)> {
        match &self.kind {
            CellKind::Edge { source, target } => Some((source.as_ref(), target.as_ref())),
            CellKind::Vertex | CellKind::Container => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The text shown for the cell, empty when the cell carries no value.
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn set_value<T: Into<String>>(&mut self, value: Option<T>) {
        self.value = value.map(Into::into);
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn set_style<T: Into<String>>(&mut self, style: Option<T>) {
        self.style = style.map(Into::into);
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn geometry_mut(&mut self) -> Option<&mut Geometry> {
        self.geometry.as_mut()
    }

    pub fn set_geometry(&mut self, geometry: Option<Geometry>) {
        self.geometry = geometry;
    }

    pub fn parent(&self) -> Option<&CellId> {
        self.parent.as_ref()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<CellId>) {
        self.parent = parent;
    }

    pub fn children(&self) -> &[CellId] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<CellId> {
        &mut self.children
    }

    pub fn connectable(&self) -> bool {
        self.connectable
    }

    pub fn set_connectable(&mut self, connectable: bool) {
        self.connectable = connectable;
    }
}

/// The cell ownership table of one diagram: every cell keyed by id plus the root id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStore {
    cells: BTreeMap<CellId, Cell>,
    root: Option<CellId>,
}

impl CellStore {
    /// A diagram with a root cell `0` and a single default layer `1`.
    pub fn with_default_layer() -> Self {
        let root_id = CellId::from_counter(0);
        let layer_id = CellId::from_counter(1);
        Self::with_layer(root_id, layer_id)
    }

    pub fn with_layer(root_id: CellId, layer_id: CellId) -> Self {
        let mut store = Self::default();
        store.insert(Cell::container(root_id.clone()), None);
        store.insert(Cell::container(layer_id), Some(&root_id));
        store.root = Some(root_id);
        store
    }

    pub fn root(&self) -> Option<&CellId> {
        self.root.as_ref()
    }

    pub fn set_root_id(&mut self, root: Option<CellId>) {
        self.root = root;
    }

    pub fn root_cell(&self) -> Option<&Cell> {
        self.root.as_ref().and_then(|id| self.cells.get(id))
    }

    /// The first child of the root, which receives cells added without an explicit parent.
    pub fn default_parent(&self) -> Option<&CellId> {
        self.root_cell().and_then(|root| root.children().first())
    }

    pub fn get(&self, id: &CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn get_mut(&mut self, id: &CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id)
    }

    pub fn contains(&self, id: &CellId) -> bool {
        self.cells.contains_key(id)
    }

    pub fn cells(&self) -> &BTreeMap<CellId, Cell> {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Inserts `cell` and links it below `parent` when given. Replaces any cell with the same id.
    pub fn insert(&mut self, mut cell: Cell, parent: Option<&CellId>) {
        let id = cell.id().clone();
        if let Some(parent_id) = parent {
            cell.set_parent(Some(parent_id.clone()));
            if let Some(parent_cell) = self.cells.get_mut(parent_id) {
                if !parent_cell.children().contains(&id) {
                    parent_cell.children_mut().push(id.clone());
                }
            }
        }
        self.cells.insert(id, cell);
    }

    /// Returns `id` followed by all of its descendants in depth-first order.
    pub fn subtree(&self, id: &CellId) -> Vec<&CellId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some((key, cell)) = self.cells.get_key_value(current) else {
                continue;
            };
            out.push(key);
            stack.extend(cell.children().iter().rev());
        }
        out
    }

    /// The smallest counter value that cannot collide with any counter-shaped id in the store.
    pub fn next_free_counter(&self) -> u64 {
        self.cells
            .keys()
            .filter_map(CellId::as_counter)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }
}
