// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::classify::{CellCategory, Classification};
use crate::model::Cell;

/// Visits every edge that joins a `first` cell to a `second` cell, in edge id order.
///
/// Direction does not matter: each endpoint is tested against both categories. Edges with a
/// missing endpoint, or whose endpoints do not cover both categories, are skipped.
pub fn walk_connections<'a>(
    classification: &Classification<'a>,
    first: CellCategory,
    second: CellCategory,
    mut visit: impl FnMut(&'a Cell, &'a Cell, &'a Cell),
) {
    for edge in classification.edges().values().copied() {
        let Some((Some(source), Some(target))) = edge.terminals() else {
            continue;
        };
        let ends = [source, target];
        let first_match = ends.iter().find(|end| classification.is(end, first));
        let second_match = ends.iter().find(|end| classification.is(end, second));

        let (Some(first_id), Some(second_id)) = (first_match, second_match) else {
            continue;
        };
        let (Some(first_cell), Some(second_cell)) = (
            classification.cell(first_id),
            classification.cell(second_id),
        ) else {
            continue;
        };
        visit(first_cell, second_cell, edge);
    }
}
