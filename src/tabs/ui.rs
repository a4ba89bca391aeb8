// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The editor chrome the tab controller drives: side palettes, the menu action toggle and the
//! tab bar.

use std::fmt;

use smol_str::SmolStr;

use super::tab::DiagramType;
use crate::model::TabId;

pub const CONVERT_TO_UML_ACTION: &str = "convertToUml";

/// The two side palettes the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Palette {
    General,
    Uml,
}

impl Palette {
    pub const ALL: [Self; 2] = [Self::General, Self::Uml];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Uml => "uml",
        }
    }

    pub fn for_diagram(diagram_type: DiagramType) -> Self {
        match diagram_type {
            DiagramType::Er => Self::General,
            DiagramType::Uml => Self::Uml,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the tab bar shows for one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRecord {
    pub id: TabId,
    pub label: SmolStr,
    pub focused: bool,
    pub diagram_type: DiagramType,
}

/// Inbound tab bar interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    Select(TabId),
    Close(TabId),
}

/// Call-outs into the host editor UI.
pub trait EditorUi {
    fn show_palette(&mut self, palette: Palette);
    fn hide_palette(&mut self, palette: Palette);
    fn set_action_enabled(&mut self, action: &str, enabled: bool);
    fn render_tabs(&mut self, tabs: &[TabRecord]);
}

/// An [`EditorUi`] that only remembers what it was told. Used when running without a host
/// editor (CLI, tests).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessUi {
    visible_palettes: Vec<Palette>,
    disabled_actions: Vec<String>,
    tabs: Vec<TabRecord>,
    renders: u64,
}

impl HeadlessUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_palette_visible(&self, palette: Palette) -> bool {
        self.visible_palettes.contains(&palette)
    }

    pub fn visible_palettes(&self) -> &[Palette] {
        &self.visible_palettes
    }

    pub fn is_action_enabled(&self, action: &str) -> bool {
        !self.disabled_actions.iter().any(|known| known == action)
    }

    /// The tab list from the latest render.
    pub fn tabs(&self) -> &[TabRecord] {
        &self.tabs
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl EditorUi for HeadlessUi {
    fn show_palette(&mut self, palette: Palette) {
        if !self.visible_palettes.contains(&palette) {
            self.visible_palettes.push(palette);
        }
    }

    fn hide_palette(&mut self, palette: Palette) {
        self.visible_palettes.retain(|known| *known != palette);
    }

    fn set_action_enabled(&mut self, action: &str, enabled: bool) {
        self.disabled_actions.retain(|known| known != action);
        if !enabled {
            self.disabled_actions.push(action.to_owned());
        }
    }

    fn render_tabs(&mut self, tabs: &[TabRecord]) {
        self.tabs = tabs.to_vec();
        self.renders = self.renders.wrapping_add(1);
    }
}
