// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{convert_er_to_uml, UmlConversion};
use crate::config::ConversionConfig;
use crate::model::fixtures::{er_enrolls, er_teaches, ErBuilder};
use crate::model::{Cell, CellKind, GraphModel, ModelEvent};
use crate::render::{EdgeStyle, LabelSlot, UmlNodeRef, DASHED_EDGE_STYLE, TABLE_STYLE};

#[fixture]
fn config() -> ConversionConfig {
    ConversionConfig::default()
}

fn table_titled<'a>(conversion: &'a UmlConversion, title: &str) -> Option<&'a crate::render::UmlTable> {
    let needle = format!(">{title}</div>");
    conversion
        .tables()
        .values()
        .find(|table| table.value().contains(&needle))
}

fn materialized(conversion: UmlConversion) -> GraphModel {
    let mut model = GraphModel::new();
    conversion.materialize(&mut model);
    model
}

#[rstest]
fn enrolls_gets_association_table_and_no_center_label(config: ConversionConfig) {
    let conversion = convert_er_to_uml(&er_enrolls(), &config);

    assert_eq!(conversion.tables().len(), 2);
    assert!(table_titled(&conversion, "Student").is_some());
    assert!(table_titled(&conversion, "Course").is_some());

    let [association] = conversion.associations() else {
        panic!("expected one relationship");
    };
    assert!(association.edge().label(LabelSlot::Center).is_none());
    assert_eq!(association.edge().style(), EdgeStyle::Solid);

    let table = association.table().expect("association table");
    assert!(table.value().contains("<td>grade</td>"));
    assert_eq!((table.geometry().x, table.geometry().y), (120.0, 220.0));
    assert_eq!(table.geometry().height, 60.0);

    let link = association.table_link().expect("dashed link");
    assert_eq!(link.style(), EdgeStyle::Dashed);
    assert!(matches!(link.target(), UmlNodeRef::AssociationTable(_)));
    assert!(matches!(link.source(), UmlNodeRef::Relationship(_)));
}

#[rstest]
fn teaches_gets_center_label_only(config: ConversionConfig) {
    let conversion = convert_er_to_uml(&er_teaches(), &config);

    let [association] = conversion.associations() else {
        panic!("expected one relationship");
    };
    let edge = association.edge();
    assert_eq!(edge.labels().len(), 1);
    assert_eq!(edge.label(LabelSlot::Center).map(|l| l.text()), Some("Teaches"));
    assert!(association.table().is_none());
    assert!(association.table_link().is_none());
}

#[rstest]
fn entities_without_attributes_get_header_only_tables(config: ConversionConfig) {
    let conversion = convert_er_to_uml(&er_teaches(), &config);
    for table in conversion.tables().values() {
        assert_eq!(table.geometry().height, 40.0);
        assert_eq!(table.geometry().width, 200.0);
        assert_eq!(table.style(), TABLE_STYLE);
    }
}

#[rstest]
fn attribute_rows_follow_discovery_order(config: ConversionConfig) {
    let mut er = ErBuilder::new();
    let student = er.entity("Student", 0.0, 0.0);
    let names = ["id", "name", "email", "phone", "street", "city", "zip"];
    for name in names {
        let attribute = er.attribute(name, 0.0, 100.0);
        er.connect(&student, &attribute);
    }
    let conversion = convert_er_to_uml(&er.build(), &config);

    let table = conversion.tables().get(&student).expect("student table");
    assert_eq!(table.geometry().height, 180.0);
    let html = table.value();
    let rows: Vec<usize> = names
        .iter()
        .map(|name| html.find(&format!("<td>{name}</td>")).expect("attribute row"))
        .collect();
    assert!(rows.windows(2).all(|pair| pair[0] < pair[1]), "{html}");
}

#[rstest]
fn lone_entity_without_attributes_is_dropped(config: ConversionConfig) {
    let mut er = ErBuilder::new();
    er.entity("Orphan", 0.0, 0.0);
    let conversion = convert_er_to_uml(&er.build(), &config);
    assert!(conversion.is_empty());

    let model = materialized(conversion);
    let store = model.store();
    assert_eq!(store.len(), 2);
    assert!(store.default_parent().is_some());
}

#[rstest]
fn cardinalities_are_rendered_against_the_opposite_end(config: ConversionConfig) {
    let mut er = ErBuilder::new();
    let person = er.entity("Person", 0.0, 0.0);
    let car = er.entity("Car", 300.0, 0.0);
    let owns = er.association("Owns", 150.0, 0.0);
    er.connect_labeled(&person, &owns, "owns 1:*");
    er.connect_labeled(&owns, &car, "owned 0:1");
    let conversion = convert_er_to_uml(&er.build(), &config);

    let [association] = conversion.associations() else {
        panic!("expected one relationship");
    };
    let edge = association.edge();
    // Car is right-most, so it is the first end.
    assert_eq!(edge.target(), &UmlNodeRef::ClassTable(car));
    assert_eq!(edge.source(), &UmlNodeRef::ClassTable(person));
    assert_eq!(
        edge.label(LabelSlot::Begin).map(|l| l.text()),
        Some("1..*<br>owned")
    );
    assert_eq!(
        edge.label(LabelSlot::End).map(|l| l.text()),
        Some("0..1<br>owns")
    );
    assert_eq!(edge.label(LabelSlot::Center).map(|l| l.text()), Some("Owns"));
}

#[rstest]
fn edge_direction_does_not_change_the_result(config: ConversionConfig) {
    let build = |reversed: bool| {
        let mut er = ErBuilder::new();
        let person = er.entity("Person", 0.0, 0.0);
        let car = er.entity("Car", 300.0, 0.0);
        let owns = er.association("Owns", 150.0, 0.0);
        if reversed {
            er.connect_labeled(&owns, &person, "owns 1:*");
            er.connect_labeled(&car, &owns, "owned 0:1");
        } else {
            er.connect_labeled(&person, &owns, "owns 1:*");
            er.connect_labeled(&owns, &car, "owned 0:1");
        }
        convert_er_to_uml(&er.build(), &config)
    };

    let forward = build(false);
    let reversed = build(true);
    let texts = |conversion: &UmlConversion| {
        conversion.associations()[0]
            .edge()
            .labels()
            .iter()
            .map(|label| (label.slot(), label.text().to_owned()))
            .collect::<Vec<_>>()
    };
    assert_eq!(texts(&forward), texts(&reversed));
    assert_eq!(
        forward.associations()[0].edge().source(),
        reversed.associations()[0].edge().source()
    );
}

#[rstest]
fn equal_x_puts_the_upper_entity_first(config: ConversionConfig) {
    let mut er = ErBuilder::new();
    let top = er.entity("Top", 0.0, 0.0);
    let bottom = er.entity("Bottom", 0.0, 300.0);
    let rel = er.association("R", 100.0, 150.0);
    er.connect(&bottom, &rel);
    er.connect(&top, &rel);
    let conversion = convert_er_to_uml(&er.build(), &config);

    let edge = conversion.associations()[0].edge();
    assert_eq!(edge.target(), &UmlNodeRef::ClassTable(top));
    assert_eq!(edge.source(), &UmlNodeRef::ClassTable(bottom));
}

#[rstest]
fn recursive_and_ternary_associations_are_skipped(config: ConversionConfig) {
    let mut er = ErBuilder::new();
    let a = er.entity("A", 0.0, 0.0);
    let b = er.entity("B", 200.0, 0.0);
    let c = er.entity("C", 400.0, 0.0);
    let ternary = er.association("T", 200.0, 200.0);
    er.connect(&a, &ternary);
    er.connect(&b, &ternary);
    er.connect(&c, &ternary);
    let manages = er.association("Manages", 0.0, 200.0);
    er.connect(&a, &manages);
    er.connect(&manages, &a);
    let conversion = convert_er_to_uml(&er.build(), &config);

    assert!(conversion.associations().is_empty());
    assert!(conversion.tables().is_empty());
}

#[rstest]
fn unclassified_cells_are_ignored(config: ConversionConfig) {
    let mut er = ErBuilder::new();
    let a = er.entity("A", 0.0, 0.0);
    let note = er.vertex("note", "shape=note;", 50.0, 50.0);
    let name = er.attribute("name", 0.0, 100.0);
    er.connect(&a, &note);
    er.connect(&a, &name);
    let conversion = convert_er_to_uml(&er.build(), &config);

    assert_eq!(conversion.tables().len(), 1);
    assert!(conversion.associations().is_empty());
}

#[rstest]
fn materialize_inserts_tables_edges_and_labels(config: ConversionConfig) {
    let conversion = convert_er_to_uml(&er_enrolls(), &config);
    let mut model = GraphModel::new();
    let first_free = model.next_id();
    conversion.materialize(&mut model);
    let store = model.store();

    let root = store.root_cell().expect("root");
    assert_eq!(root.id().as_counter(), Some(first_free));
    let layer = store.default_parent().expect("layer").clone();

    let tables: Vec<&Cell> = store
        .iter()
        .filter(|cell| cell.style() == Some(TABLE_STYLE))
        .collect();
    assert_eq!(tables.len(), 3);
    assert!(tables.iter().all(|cell| cell.parent() == Some(&layer)));

    let edges: Vec<&Cell> = store.iter().filter(|cell| cell.is_edge()).collect();
    assert_eq!(edges.len(), 2);
    for edge in &edges {
        let CellKind::Edge { source, target } = edge.kind() else {
            panic!("expected edge");
        };
        let source = source.as_ref().expect("source");
        let target = target.as_ref().expect("target");
        assert!(store.contains(source) && store.contains(target));
    }
    let dashed = edges
        .iter()
        .find(|edge| edge.style() == Some(DASHED_EDGE_STYLE))
        .expect("dashed link");
    let solid = edges
        .iter()
        .find(|edge| edge.style() != Some(DASHED_EDGE_STYLE))
        .expect("relationship");
    let (Some(link_source), _) = dashed.terminals().expect("terminals") else {
        panic!("dashed link without source");
    };
    assert_eq!(link_source, solid.id());

    for label in solid.children() {
        let label = store.get(label).expect("label");
        assert!(!label.connectable());
        let geometry = label.geometry().expect("label geometry");
        assert!(geometry.relative);
        assert!(geometry.width > 0.0 && geometry.height > 0.0);
    }

    let events = model.events();
    let labels_inserted = events
        .iter()
        .filter(|event| matches!(event, ModelEvent::LabelsInserted { .. }))
        .count();
    assert_eq!(labels_inserted, 1);
    assert!(matches!(events.last(), Some(ModelEvent::Change { .. })));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, ModelEvent::Change { .. }))
            .count(),
        1
    );
}

#[rstest]
fn materialize_through_import_routine_matches_direct(config: ConversionConfig) {
    let direct = materialized(convert_er_to_uml(&er_teaches(), &config));

    let mut deferred = GraphModel::new();
    convert_er_to_uml(&er_teaches(), &config)
        .into_import_routine()
        .run(&mut deferred);

    assert_eq!(direct.store(), deferred.store());
    assert_eq!(direct.next_id(), deferred.next_id());
}

#[rstest]
fn wider_tables_from_config() {
    let config = ConversionConfig {
        table_width: 320.0,
        ..ConversionConfig::default()
    };
    let conversion = convert_er_to_uml(&er_teaches(), &config);
    assert!(conversion
        .tables()
        .values()
        .all(|table| table.geometry().width == 320.0));
}
