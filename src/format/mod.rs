// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram document parsing/export.

pub mod document;

pub use document::{
    document_schema, export_document, load_document, parse_document, DocumentError, DocumentJson,
};
