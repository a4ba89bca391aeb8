// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// An ER edge label split into its relationship word and optional multiplicity pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cardinality {
    relationship: String,
    indices: Option<[String; 2]>,
}

impl Cardinality {
    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn indices(&self) -> Option<&[String; 2]> {
        self.indices.as_ref()
    }
}

fn cardinality_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"(\w*)(?:\s|<br>)*(\*|\w+):(\*|\w+)")
            .case_insensitive(true)
            .build()
            .map_err(|err| tracing::error!(%err, "cardinality pattern rejected"))
            .ok()
    })
    .as_ref()
}

/// Parses `<relationship>? <ws|<br>>* <left>:<right>`.
///
/// Text that does not contain a multiplicity pair is kept verbatim as the relationship.
pub fn parse_cardinality(text: &str) -> Cardinality {
    match cardinality_regex().and_then(|re| re.captures(text)) {
        Some(caps) => Cardinality {
            relationship: caps[1].to_owned(),
            indices: Some([caps[2].to_owned(), caps[3].to_owned()]),
        },
        None => Cardinality {
            relationship: text.to_owned(),
            indices: None,
        },
    }
}

/// Formats a UML end label: `<left>..<right><br><relationship>`.
pub fn render_uml_cardinality(relationship: &str, indices: &[String; 2]) -> String {
    format!("{}..{}<br>{relationship}", indices[0], indices[1])
}

/// The text shown at one end of a relationship: this end's relationship word qualified by the
/// multiplicity written on the opposite end, when there is one.
pub fn end_label(own: &Cardinality, opposite: &Cardinality) -> String {
    match opposite.indices() {
        Some(indices) => render_uml_cardinality(own.relationship(), indices),
        None => own.relationship().to_owned(),
    }
}
