// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Builders for generated UML cells: class tables and relationship edges with their labels.

pub mod edge;
pub(crate) mod markup;
pub mod table;

pub use edge::{
    EdgeBuilder, EdgeStyle, LabelSlot, UmlEdge, UmlLabel, UmlNodeRef, DASHED_EDGE_STYLE,
    LABEL_STYLE, SOLID_EDGE_STYLE,
};
pub use table::{average_position, render_class_table, UmlTable, TABLE_STYLE};
