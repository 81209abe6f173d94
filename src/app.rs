use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::{Catalog, ColorRecord};

/// How catalog entries are ordered in the list view. Display-only; the
/// catalog itself keeps its received order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    CatalogOrder,
    Alphabetical,
}

/// Which panel is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    List,
    Preview,
}

/// Fields copied out of the record the user chose to preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub hex: String,
    pub code: String,
}

impl Selection {
    fn from_record(record: &ColorRecord) -> Self {
        Self {
            name: record.name.clone(),
            hex: record.hex_code.clone(),
            code: record.color_code.clone(),
        }
    }
}

pub struct App {
    /// None until the fetch delivers; stays None forever if it failed.
    pub catalog: Option<Catalog>,
    /// None until the user previews a color. Last write wins.
    pub selection: Option<Selection>,
    pub should_quit: bool,

    // List view state.
    pub selected_index: usize,
    display_order: Vec<usize>,

    pub focus: FocusPanel,
    pub sort_mode: SortMode,

    // Search.
    pub search_mode: bool,
    pub search_query: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            catalog: None,
            selection: None,
            should_quit: false,
            selected_index: 0,
            display_order: Vec::new(),
            focus: FocusPanel::List,
            sort_mode: SortMode::CatalogOrder,
            search_mode: false,
            search_query: String::new(),
        }
    }

    /// Install the fetched catalog and build the display order.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
        self.rebuild_display_order();
        self.selected_index = 0;
    }

    /// Records in display order. Empty while the catalog is unloaded.
    pub fn visible_records(&self) -> Vec<&ColorRecord> {
        let Some(ref catalog) = self.catalog else {
            return Vec::new();
        };
        self.display_order
            .iter()
            .filter_map(|&i| catalog.get(i))
            .collect()
    }

    /// The record under the list cursor, if any.
    pub fn cursor_record(&self) -> Option<&ColorRecord> {
        let catalog = self.catalog.as_ref()?;
        let idx = *self.display_order.get(self.selected_index)?;
        catalog.get(idx)
    }

    fn rebuild_display_order(&mut self) {
        let Some(ref catalog) = self.catalog else {
            self.display_order.clear();
            return;
        };
        let mut order: Vec<usize> = (0..catalog.len()).collect();
        if self.sort_mode == SortMode::Alphabetical {
            order.sort_by(|&a, &b| {
                let left = catalog.get(a).map(|r| r.name.as_str()).unwrap_or("");
                let right = catalog.get(b).map(|r| r.name.as_str()).unwrap_or("");
                left.to_lowercase().cmp(&right.to_lowercase())
            });
        }
        self.display_order = order;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.search_mode {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('G') => self.select_last(),
            KeyCode::Char('g') => self.select_first(),
            KeyCode::Enter | KeyCode::Char(' ') => self.preview_current(),
            KeyCode::Char('/') => {
                self.search_mode = true;
                self.search_query.clear();
            }
            KeyCode::Char('s') => {
                self.sort_mode = match self.sort_mode {
                    SortMode::CatalogOrder => SortMode::Alphabetical,
                    SortMode::Alphabetical => SortMode::CatalogOrder,
                };
                self.rebuild_display_order();
                self.selected_index = 0;
            }
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::PageDown => self.move_selection(10),
            KeyCode::PageUp => self.move_selection(-10),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_mode = false;
                self.search_query.clear();
            }
            KeyCode::Enter => {
                self.search_mode = false;
                self.jump_to_search_match();
            }
            KeyCode::Backspace => {
                self.search_query.pop();
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
            }
            _ => {}
        }
    }

    /// Copy the cursor record's fields into the selection.
    fn preview_current(&mut self) {
        if let Some(selection) = self.cursor_record().map(Selection::from_record) {
            self.selection = Some(selection);
        }
    }

    fn move_selection(&mut self, delta: i32) {
        if self.display_order.is_empty() {
            return;
        }
        let new_idx = self.selected_index as i32 + delta;
        self.selected_index = new_idx.clamp(0, self.display_order.len() as i32 - 1) as usize;
    }

    fn select_first(&mut self) {
        self.selected_index = 0;
    }

    fn select_last(&mut self) {
        if !self.display_order.is_empty() {
            self.selected_index = self.display_order.len() - 1;
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::List => FocusPanel::Preview,
            FocusPanel::Preview => FocusPanel::List,
        };
    }

    fn jump_to_search_match(&mut self) {
        let query = self.search_query.to_lowercase();
        if query.is_empty() || self.display_order.is_empty() {
            return;
        }
        // Search forward from the cursor, wrapping around.
        let matched = {
            let rows = self.visible_records();
            let start = (self.selected_index + 1) % rows.len();
            (0..rows.len())
                .map(|i| (start + i) % rows.len())
                .find(|&idx| rows[idx].name.to_lowercase().contains(&query))
        };
        if let Some(idx) = matched {
            self.selected_index = idx;
        }
    }
}
