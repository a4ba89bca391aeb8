// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::markup::{render_tag, Props, TableBuilder};
use crate::config::ConversionConfig;
use crate::model::{Geometry, Point};

pub const TABLE_STYLE: &str = "verticalAlign=top;align=left;overflow=fill;html=1;rounded=1;";

const TITLE_STYLE: &str = "box-sizing:border-box;width:100%;background:#e4e4e4;text-align:center;font-weight:bold;font-size:18pt;border-radius: 5px 5px 0 0;";
const KEY_COLUMN_STYLE: &str = "width: 20px;";

/// A UML class box ready to be inserted as a vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct UmlTable {
    value: String,
    geometry: Geometry,
}

impl UmlTable {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &'static str {
        TABLE_STYLE
    }

    pub fn move_to(&mut self, position: Point) {
        self.geometry.x = position.x;
        self.geometry.y = position.y;
    }
}

fn key_column() -> Props {
    vec![("style", KEY_COLUMN_STYLE.to_owned())]
}

/// Renders a class table: bold title bar, a `key | name` header row and one row per field.
pub fn render_class_table<'s>(
    title: &str,
    fields: impl IntoIterator<Item = &'s str>,
    position: Point,
    config: &ConversionConfig,
) -> UmlTable {
    let mut table = TableBuilder::default();
    table
        .header_row()
        .add_cell("key", key_column())
        .add_cell("name", Vec::new());

    let mut rows = 0usize;
    for field in fields {
        table
            .row()
            .add_cell("", key_column())
            .add_cell(field, Vec::new());
        rows += 1;
    }

    let header = render_tag("div", &[("style", TITLE_STYLE.to_owned())], title);
    UmlTable {
        value: header + &table.render(),
        geometry: Geometry::new(
            position.x,
            position.y,
            config.table_width,
            config.table_height(rows),
        ),
    }
}

/// Arithmetic mean of `points`; `None` when there are none.
pub fn average_position(points: impl IntoIterator<Item = Point>) -> Option<Point> {
    let (mut x, mut y, mut count) = (0.0, 0.0, 0usize);
    for point in points {
        x += point.x;
        y += point.y;
        count += 1;
    }
    (count > 0).then(|| Point::new(x / count as f64, y / count as f64))
}
