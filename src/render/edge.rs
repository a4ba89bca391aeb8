// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::config::ConversionConfig;
use crate::model::{CellId, Geometry};

pub const SOLID_EDGE_STYLE: &str = "endArrow=none;edgeStyle=orthogonalEdgeStyle;html=1;";
pub const DASHED_EDGE_STYLE: &str = "endArrow=none;dashed=1;html=1;";
pub const LABEL_STYLE: &str =
    "text;html=1;align=center;verticalAlign=middle;resizable=0;points=[];labelBackgroundColor=#ffffff;";

/// A generated UML element an edge can attach to, named after the ER cell it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UmlNodeRef {
    /// Class table generated for an entity.
    ClassTable(CellId),
    /// Association-class table generated for an association with attributes.
    AssociationTable(CellId),
    /// Relationship edge generated for an association.
    Relationship(CellId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Solid,
    Dashed,
}

impl EdgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => SOLID_EDGE_STYLE,
            Self::Dashed => DASHED_EDGE_STYLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSlot {
    Begin,
    End,
    Center,
}

/// Text attached to an edge at a relative position.
#[derive(Debug, Clone, PartialEq)]
pub struct UmlLabel {
    slot: LabelSlot,
    text: String,
    geometry: Geometry,
}

impl UmlLabel {
    pub fn slot(&self) -> LabelSlot {
        self.slot
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &'static str {
        LABEL_STYLE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UmlEdge {
    source: UmlNodeRef,
    target: UmlNodeRef,
    style: EdgeStyle,
    labels: Vec<UmlLabel>,
}

impl UmlEdge {
    pub fn source(&self) -> &UmlNodeRef {
        &self.source
    }

    pub fn target(&self) -> &UmlNodeRef {
        &self.target
    }

    pub fn style(&self) -> EdgeStyle {
        self.style
    }

    pub fn labels(&self) -> &[UmlLabel] {
        &self.labels
    }

    pub fn label(&self, slot: LabelSlot) -> Option<&UmlLabel> {
        self.labels.iter().find(|label| label.slot == slot)
    }
}

/// Builds a relationship edge between two generated elements.
///
/// The edge is stored pointing from `to` back to `from`; begin and end labels are placed near
/// the `to` and `from` ends of the stored direction respectively.
#[derive(Debug, Clone)]
pub struct EdgeBuilder {
    from: UmlNodeRef,
    to: UmlNodeRef,
    style: EdgeStyle,
    begin: Option<String>,
    end: Option<String>,
    center: Option<String>,
}

impl EdgeBuilder {
    pub fn new(from: UmlNodeRef, to: UmlNodeRef) -> Self {
        Self {
            from,
            to,
            style: EdgeStyle::Solid,
            begin: None,
            end: None,
            center: None,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.style = EdgeStyle::Dashed;
        self
    }

    pub fn begin_text(mut self, text: impl Into<String>) -> Self {
        self.begin = Some(text.into());
        self
    }

    pub fn end_text(mut self, text: impl Into<String>) -> Self {
        self.end = Some(text.into());
        self
    }

    pub fn center_text(mut self, text: impl Into<String>) -> Self {
        self.center = Some(text.into());
        self
    }

    /// Blank label texts are dropped.
    pub fn build(self, config: &ConversionConfig) -> UmlEdge {
        let mut labels = Vec::new();
        let slots = [
            (LabelSlot::Begin, self.begin, config.begin_label_offset()),
            (LabelSlot::End, self.end, config.end_label_offset()),
            (LabelSlot::Center, self.center, config.center_label_offset()),
        ];
        for (slot, text, offset) in slots {
            let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
                continue;
            };
            labels.push(UmlLabel {
                slot,
                text,
                geometry: Geometry::relative(offset),
            });
        }

        UmlEdge {
            source: self.to,
            target: self.from,
            style: self.style,
            labels,
        }
    }
}
