// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ermine: multi-tab ER diagram editor core with ER to UML conversion.
//!
//! [`tabs::TabController`] keeps several diagrams open against one editor canvas;
//! [`convert::convert_er_to_uml`] turns an ER diagram into a UML class diagram that a new tab
//! materializes on first display.

pub mod config;
pub mod convert;
pub mod format;
pub mod model;
pub mod render;
pub mod tabs;
