#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub is_sidebar_open: bool,
    pub is_search_overlay_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.is_sidebar_open = !self.is_sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.is_sidebar_open = open;
    }

    pub fn toggle_search_overlay(&mut self) {
        self.is_search_overlay_open = !self.is_search_overlay_open;
    }

    pub fn set_search_overlay_open(&mut self, open: bool) {
        self.is_search_overlay_open = open;
    }
}
