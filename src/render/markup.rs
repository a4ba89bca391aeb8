// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minimal HTML builders for cell values rendered with `html=1`.
//!
//! Content is inserted verbatim: cell values may already contain markup such as `<br>`.

use std::fmt::Write as _;

pub(crate) type Props = Vec<(&'static str, String)>;

pub(crate) fn render_tag(tag: &str, props: &[(&'static str, String)], content: &str) -> String {
    let mut out = String::with_capacity(tag.len() * 2 + content.len() + 5);
    out.push('<');
    out.push_str(tag);
    for (key, value) in props {
        // Writing into a String cannot fail.
        let _ = write!(out, " {key}=\"{value}\"");
    }
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

#[derive(Debug, Clone)]
pub(crate) struct RowBuilder {
    cell_tag: &'static str,
    cells: Vec<(String, Props)>,
    props: Props,
}

impl RowBuilder {
    fn new(cell_tag: &'static str) -> Self {
        Self {
            cell_tag,
            cells: Vec::new(),
            props: Vec::new(),
        }
    }

    pub(crate) fn add_cell(&mut self, value: impl Into<String>, props: Props) -> &mut Self {
        self.cells.push((value.into(), props));
        self
    }

    fn render(&self) -> String {
        let content: String = self
            .cells
            .iter()
            .map(|(value, props)| render_tag(self.cell_tag, props, value))
            .collect();
        render_tag("tr", &self.props, &content)
    }
}

/// Builds a `<table>`; header rows use `th` cells and are emitted in the body in insertion
/// order, like data rows.
#[derive(Debug, Clone)]
pub(crate) struct TableBuilder {
    rows: Vec<RowBuilder>,
    props: Props,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            props: vec![
                ("style", "width:100%;font-size:1em;".to_owned()),
                ("cellpadding", "2".to_owned()),
                ("cellspacing", "0".to_owned()),
                ("border-collapse", "collapse".to_owned()),
            ],
        }
    }
}

impl TableBuilder {
    pub(crate) fn header_row(&mut self) -> &mut RowBuilder {
        self.push_row("th")
    }

    pub(crate) fn row(&mut self) -> &mut RowBuilder {
        self.push_row("td")
    }

    fn push_row(&mut self, cell_tag: &'static str) -> &mut RowBuilder {
        self.rows.push(RowBuilder::new(cell_tag));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub(crate) fn render(&self) -> String {
        let body: String = self.rows.iter().map(RowBuilder::render).collect();
        let body = if body.is_empty() {
            body
        } else {
            render_tag("tbody", &[], &body)
        };
        render_tag("table", &self.props, &body)
    }
}
