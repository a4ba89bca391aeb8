// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ermine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ermine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Multi-tab session state.
//!
//! Only the focused tab lives on the editor canvas. Every other tab keeps its undo stack and its
//! diagram in snapshots; switching tabs saves the outgoing tab and restores the incoming one.
//! Exactly one tab is focused at any time.

mod tab;
mod ui;

use smol_str::SmolStr;

use crate::config::ConversionConfig;
use crate::convert::convert_er_to_uml;
use crate::model::{CellStore, Editor, ImportRoutine, TabId};

pub use tab::{DiagramType, ModelSnapshot, SeedDiagram, Tab, UndoSnapshot};
pub use ui::{EditorUi, HeadlessUi, Palette, TabEvent, TabRecord, CONVERT_TO_UML_ACTION};

const DEFAULT_TAB_LABELS: [&str; 2] = ["ER Diagram 1", "ER Diagram 2"];

pub struct TabController<U: EditorUi> {
    editor: Editor,
    ui: U,
    config: ConversionConfig,
    tabs: Vec<Tab>,
    next_tab_id: TabId,
    startup: Option<ImportRoutine>,
}

impl<U: EditorUi> TabController<U> {
    /// Builds the tab collection. The first seed (or, without seeds, a blank ER diagram) is the
    /// focused tab; it is imported onto the canvas by [`TabController::activate`] or by the first
    /// tab operation, whichever comes first. Further seeds are imported the first time their tab
    /// is selected.
    pub fn new(editor: Editor, ui: U, seeds: Vec<SeedDiagram>) -> Self {
        let mut controller = Self {
            editor,
            ui,
            config: ConversionConfig::default(),
            tabs: Vec::new(),
            next_tab_id: TabId::new(0),
            startup: None,
        };

        let mut seeds = seeds.into_iter();
        match seeds.next() {
            Some(first) => {
                let (label, diagram_type, cells) = first.into_parts();
                controller.startup = Some(ImportRoutine::from_store(cells));
                controller.push_tab(label, diagram_type, None);
                for seed in seeds {
                    let (label, diagram_type, cells) = seed.into_parts();
                    let routine = ImportRoutine::from_store(cells);
                    controller.push_tab(label, diagram_type, Some(ModelSnapshot::Deferred(routine)));
                }
            }
            None => {
                let blank = CellStore::with_default_layer();
                let next_id = blank.next_free_counter();
                controller.push_tab(DEFAULT_TAB_LABELS[0], DiagramType::Er, None);
                controller.push_tab(
                    DEFAULT_TAB_LABELS[1],
                    DiagramType::Er,
                    Some(ModelSnapshot::Materialized {
                        cells: blank,
                        next_id,
                    }),
                );
            }
        }

        if let Some(first) = controller.tabs.first_mut() {
            first.set_focused(true);
        }
        controller
    }

    pub fn with_config(mut self, config: ConversionConfig) -> Self {
        self.config = config;
        self
    }

    /// Second construction phase: imports the focused tab's seed onto the canvas (once), starts
    /// it with an empty undo history and brings the editor chrome in line with the tab list.
    pub fn activate(&mut self) {
        self.flush_startup();
        self.apply_affordances();
        self.render();
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id() == id)
    }

    pub fn focused_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.is_focused())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Dispatches a tab bar interaction. Returns whether anything changed.
    pub fn handle_event(&mut self, event: TabEvent) -> bool {
        match event {
            TabEvent::Select(id) => self.select_tab(id),
            TabEvent::Close(id) => self.close_tab(id),
        }
    }

    /// Focuses `id`. Unknown ids are ignored and return `false`.
    pub fn select_tab(&mut self, id: TabId) -> bool {
        self.flush_startup();
        let Some(target) = self.index_of(id) else {
            tracing::debug!(tab = %id, "select ignored: unknown tab");
            return false;
        };

        let current = self.focused_index();
        if let Some(current) = current {
            self.save(current);
        }

        if current != Some(target) {
            for (index, tab) in self.tabs.iter_mut().enumerate() {
                tab.set_focused(index == target);
            }
            self.restore(target);
            tracing::info!(tab = %id, "selected tab");
        }

        self.apply_affordances();
        self.render();
        true
    }

    /// Appends a deep copy of the focused tab's diagram as a new, unfocused tab with an empty
    /// undo history.
    pub fn clone_tab(&mut self, label: &str) -> Option<TabId> {
        self.flush_startup();
        let current = self.focused_index()?;
        self.save(current);
        let diagram_type = self.tabs[current].diagram_type();

        let model = self.editor.graph_mut();
        let cells = model
            .store()
            .root()
            .cloned()
            .and_then(|root| model.clone_cell(&root, true))
            .unwrap_or_default();
        let snapshot = ModelSnapshot::Materialized {
            cells,
            next_id: model.next_id(),
        };

        let id = self.push_tab(label, diagram_type, Some(snapshot));
        self.render();
        tracing::info!(tab = %id, source = %self.tabs[current].id(), "cloned tab");
        Some(id)
    }

    /// Converts the focused tab's ER diagram and appends the result as an unfocused UML tab.
    /// The UML diagram is built the first time the new tab is selected.
    pub fn convert_to_uml(&mut self, label: &str) -> Option<TabId> {
        self.flush_startup();
        let current = self.focused_index()?;
        self.save(current);

        let conversion = convert_er_to_uml(self.editor.graph().store(), &self.config);
        let routine = conversion.into_import_routine();

        let id = self.push_tab(label, DiagramType::Uml, Some(ModelSnapshot::Deferred(routine)));
        self.render();
        tracing::info!(tab = %id, source = %self.tabs[current].id(), "converted tab to UML");
        Some(id)
    }

    /// Removes `id`. Closing the focused tab moves focus to the tab before it (or the new first
    /// tab) and restores that tab. The last remaining tab cannot be closed.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        self.flush_startup();
        let Some(index) = self.index_of(id) else {
            tracing::debug!(tab = %id, "close ignored: unknown tab");
            return false;
        };
        if self.tabs.len() == 1 {
            tracing::debug!(tab = %id, "close ignored: last tab");
            return false;
        }

        let closed = self.tabs.remove(index);
        if closed.is_focused() {
            let next = index.saturating_sub(1);
            self.tabs[next].set_focused(true);
            self.restore(next);
            self.apply_affordances();
        }
        self.render();
        tracing::info!(tab = %id, "closed tab");
        true
    }

    /// Runs the pending start-up import. The first tab is still the focused one here: every
    /// public tab operation flushes before it can move focus.
    fn flush_startup(&mut self) {
        let Some(routine) = self.startup.take() else {
            return;
        };
        tracing::info!("importing start-up diagram");
        self.editor
            .graph_mut()
            .update(|model| routine.run(model));
        self.editor.undo_mut().clear();
    }

    fn push_tab(
        &mut self,
        label: impl Into<SmolStr>,
        diagram_type: DiagramType,
        model: Option<ModelSnapshot>,
    ) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id = id.next();
        self.tabs.push(Tab::new(id, label, diagram_type, model));
        id
    }

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }

    fn focused_index(&self) -> Option<usize> {
        self.tabs.iter().position(Tab::is_focused)
    }

    fn save(&mut self, index: usize) {
        let tab = &mut self.tabs[index];
        tab.set_undo(UndoSnapshot::capture(self.editor.undo()));
        tab.set_model(ModelSnapshot::capture(self.editor.graph()));
    }

    fn restore(&mut self, index: usize) {
        let tab = &mut self.tabs[index];
        match tab.take_model() {
            Some(snapshot) => snapshot.apply(self.editor.graph_mut()),
            None => tracing::debug!(tab = %tab.id(), "no stored diagram, keeping canvas"),
        }
        tab.undo().restore(self.editor.undo_mut());
    }

    fn apply_affordances(&mut self) {
        let Some(diagram_type) = self.focused_tab().map(Tab::diagram_type) else {
            return;
        };
        let visible = Palette::for_diagram(diagram_type);
        for palette in Palette::ALL {
            if palette == visible {
                self.ui.show_palette(palette);
            } else {
                self.ui.hide_palette(palette);
            }
        }
        self.ui
            .set_action_enabled(CONVERT_TO_UML_ACTION, diagram_type != DiagramType::Uml);
    }

    fn render(&mut self) {
        let records: Vec<TabRecord> = self.tabs.iter().map(Tab::record).collect();
        self.ui.render_tabs(&records);
    }
}
