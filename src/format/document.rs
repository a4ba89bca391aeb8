// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON diagram documents.
//!
//! A document is the root id plus a flat cell list. Parents must be listed before their
//! children; the list order of siblings is their child order. [`export_document`] writes cells in
//! depth-first order from the root, followed by any cells not reachable from it.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Cell, CellId, CellKind, CellStore, Geometry, IdError, Point};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("io error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid cell id {id:?}: {source}")]
    InvalidId { id: String, source: IdError },
    #[error("duplicate cell id {id}")]
    DuplicateId { id: CellId },
    #[error("root cell {root} is not in the document")]
    MissingRoot { root: CellId },
    #[error("cell {cell} references unknown cell {reference}")]
    DanglingReference { cell: CellId, reference: CellId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentJson {
    pub root: String,
    #[serde(default)]
    pub cells: Vec<CellJson>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CellKindJson {
    Container,
    Vertex,
    Edge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CellJson {
    pub id: String,
    pub kind: CellKindJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometryJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectable: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeometryJson {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub relative: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<[f64; 2]>,
}

impl From<Geometry> for GeometryJson {
    fn from(geometry: Geometry) -> Self {
        let offset = geometry.offset;
        Self {
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
            height: geometry.height,
            relative: geometry.relative,
            offset: (offset != Point::default()).then_some([offset.x, offset.y]),
        }
    }
}

impl From<GeometryJson> for Geometry {
    fn from(json: GeometryJson) -> Self {
        let [dx, dy] = json.offset.unwrap_or_default();
        Self {
            x: json.x,
            y: json.y,
            width: json.width,
            height: json.height,
            relative: json.relative,
            offset: Point::new(dx, dy),
        }
    }
}

fn parse_id(raw: &str) -> Result<CellId, DocumentError> {
    CellId::new(raw).map_err(|source| DocumentError::InvalidId {
        id: raw.to_owned(),
        source,
    })
}

fn parse_optional_id(raw: Option<&str>) -> Result<Option<CellId>, DocumentError> {
    raw.map(parse_id).transpose()
}

fn cell_from_json(json: CellJson, id: CellId) -> Result<Cell, DocumentError> {
    let mut cell = match json.kind {
        CellKindJson::Container => Cell::container(id),
        CellKindJson::Vertex => Cell::vertex(id, "", "", Geometry::default()),
        CellKindJson::Edge => Cell::edge(
            id,
            "",
            parse_optional_id(json.source.as_deref())?,
            parse_optional_id(json.target.as_deref())?,
        ),
    };
    cell.set_value(json.value);
    cell.set_style(json.style);
    cell.set_geometry(json.geometry.map(Geometry::from));
    if let Some(connectable) = json.connectable {
        cell.set_connectable(connectable);
    }
    Ok(cell)
}

fn cell_to_json(cell: &Cell) -> CellJson {
    let (kind, source, target) = match cell.kind() {
        CellKind::Container => (CellKindJson::Container, None, None),
        CellKind::Vertex => (CellKindJson::Vertex, None, None),
        CellKind::Edge { source, target } => (
            CellKindJson::Edge,
            source.as_ref().map(ToString::to_string),
            target.as_ref().map(ToString::to_string),
        ),
    };
    CellJson {
        id: cell.id().to_string(),
        kind,
        parent: cell.parent().map(ToString::to_string),
        value: cell.value().map(ToOwned::to_owned),
        style: cell.style().map(ToOwned::to_owned),
        geometry: cell.geometry().copied().map(GeometryJson::from),
        source,
        target,
        connectable: (kind != CellKindJson::Container).then_some(cell.connectable()),
    }
}

impl TryFrom<DocumentJson> for CellStore {
    type Error = DocumentError;

    fn try_from(json: DocumentJson) -> Result<Self, Self::Error> {
        let root = parse_id(&json.root)?;
        let mut store = CellStore::default();

        for cell_json in json.cells {
            let id = parse_id(&cell_json.id)?;
            if store.contains(&id) {
                return Err(DocumentError::DuplicateId { id });
            }
            let parent = parse_optional_id(cell_json.parent.as_deref())?;
            if let Some(parent) = &parent {
                if !store.contains(parent) {
                    return Err(DocumentError::DanglingReference {
                        cell: id,
                        reference: parent.clone(),
                    });
                }
            }
            let cell = cell_from_json(cell_json, id)?;
            store.insert(cell, parent.as_ref());
        }

        if !store.contains(&root) {
            return Err(DocumentError::MissingRoot { root });
        }

        for cell in store.iter() {
            let Some((source, target)) = cell.terminals() else {
                continue;
            };
            for terminal in [source, target].into_iter().flatten() {
                if !store.contains(terminal) {
                    return Err(DocumentError::DanglingReference {
                        cell: cell.id().clone(),
                        reference: terminal.clone(),
                    });
                }
            }
        }

        store.set_root_id(Some(root));
        Ok(store)
    }
}

impl From<&CellStore> for DocumentJson {
    fn from(store: &CellStore) -> Self {
        let mut written = BTreeSet::<&CellId>::new();
        let mut cells = Vec::with_capacity(store.len());

        let reachable = store.root().map(|root| store.subtree(root)).unwrap_or_default();
        for id in reachable {
            if let Some(cell) = store.get(id) {
                written.insert(id);
                cells.push(cell_to_json(cell));
            }
        }
        for (id, cell) in store.cells() {
            if !written.contains(id) {
                cells.push(cell_to_json(cell));
            }
        }

        Self {
            root: store.root().map(ToString::to_string).unwrap_or_default(),
            cells,
        }
    }
}

pub fn parse_document(json: &str) -> Result<CellStore, DocumentError> {
    let document: DocumentJson = serde_json::from_str(json)?;
    CellStore::try_from(document)
}

pub fn load_document(path: &Path) -> Result<CellStore, DocumentError> {
    let json = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&json)
}

pub fn export_document(store: &CellStore) -> Result<String, DocumentError> {
    let mut json = serde_json::to_string_pretty(&DocumentJson::from(store))?;
    json.push('\n');
    Ok(json)
}

/// JSON Schema of the document format, pretty-printed.
pub fn document_schema() -> Result<String, DocumentError> {
    let schema = schemars::schema_for!(DocumentJson);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::{document_schema, export_document, parse_document, DocumentError};
    use crate::model::fixtures::er_enrolls;
    use crate::model::{CellId, CellKind, CellStore, GraphModel};

    fn cid(value: &str) -> CellId {
        CellId::new(value).expect("cell id")
    }

    #[test]
    fn parses_a_minimal_er_document() {
        let store = parse_document(
            r#"{
                "root": "0",
                "cells": [
                    { "id": "0", "kind": "container" },
                    { "id": "1", "kind": "container", "parent": "0" },
                    { "id": "2", "kind": "vertex", "parent": "1", "value": "Student",
                      "style": "rounded=1;", "geometry": { "x": 10, "y": 20, "width": 120, "height": 60 } },
                    { "id": "3", "kind": "vertex", "parent": "1", "value": "Enrolls",
                      "style": "rhombus;", "geometry": { "x": 100, "y": 100, "width": 120, "height": 60 } },
                    { "id": "4", "kind": "edge", "parent": "1", "style": "endArrow=none;",
                      "source": "2", "target": "3" }
                ]
            }"#,
        )
        .expect("document");

        assert_eq!(store.root(), Some(&cid("0")));
        assert_eq!(store.default_parent(), Some(&cid("1")));
        let student = store.get(&cid("2")).expect("student");
        assert_eq!(student.display_value(), "Student");
        assert_eq!(student.geometry().map(|g| (g.x, g.y)), Some((10.0, 20.0)));
        assert!(student.connectable());

        let edge = store.get(&cid("4")).expect("edge");
        assert_eq!(
            edge.kind(),
            &CellKind::Edge {
                source: Some(cid("2")),
                target: Some(cid("3")),
            }
        );
        assert_eq!(store.get(&cid("1")).map(|c| c.children().len()), Some(3));
    }

    #[test]
    fn export_then_parse_preserves_the_store() {
        let store = er_enrolls();
        let json = export_document(&store).expect("export");
        assert_eq!(parse_document(&json).expect("parse"), store);
    }

    #[test]
    fn exported_relative_label_keeps_its_geometry() {
        let json = export_document(&er_enrolls()).expect("export");
        assert!(json.contains("\"relative\": true"));
        assert!(!json.contains("\"offset\""));
    }

    #[test]
    fn empty_model_exports_root_and_layer() {
        let json = export_document(GraphModel::new().store()).expect("export");
        let store = parse_document(&json).expect("parse");
        assert_eq!(store, CellStore::with_default_layer());
    }

    #[test]
    fn rejects_missing_root() {
        let err = parse_document(r#"{ "root": "9", "cells": [ { "id": "0", "kind": "container" } ] }"#)
            .expect_err("missing root");
        assert!(matches!(err, DocumentError::MissingRoot { root } if root == cid("9")));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_document(
            r#"{ "root": "0", "cells": [
                { "id": "0", "kind": "container" },
                { "id": "0", "kind": "container" }
            ] }"#,
        )
        .expect_err("duplicate");
        assert!(matches!(err, DocumentError::DuplicateId { .. }));
    }

    #[test]
    fn rejects_children_before_parents_and_dangling_terminals() {
        let err = parse_document(
            r#"{ "root": "0", "cells": [
                { "id": "0", "kind": "container" },
                { "id": "2", "kind": "vertex", "parent": "1" },
                { "id": "1", "kind": "container", "parent": "0" }
            ] }"#,
        )
        .expect_err("parent order");
        assert!(matches!(err, DocumentError::DanglingReference { .. }));

        let err = parse_document(
            r#"{ "root": "0", "cells": [
                { "id": "0", "kind": "container" },
                { "id": "1", "kind": "edge", "parent": "0", "source": "7" }
            ] }"#,
        )
        .expect_err("dangling source");
        assert!(
            matches!(err, DocumentError::DanglingReference { reference, .. } if reference == cid("7"))
        );
    }

    #[test]
    fn rejects_invalid_ids_and_json() {
        let err = parse_document(r#"{ "root": "a b", "cells": [] }"#).expect_err("invalid id");
        assert!(matches!(err, DocumentError::InvalidId { .. }));

        let err = parse_document("{").expect_err("bad json");
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn schema_describes_cells() {
        let schema = document_schema().expect("schema");
        assert!(schema.contains("\"cells\""));
        assert!(schema.contains("\"vertex\""));
    }
}
