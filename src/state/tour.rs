//! Guided product tour state.

/// Search term the tour asks the user to type into the navbar.
pub const TOUR_SEARCH_TERM: &str = "dim_a";

/// Page the tour is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TourPage {
    #[default]
    MyData,
    Explore,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TourState {
    pub is_open: bool,
    pub current_page: TourPage,
    /// Text the tour has placed in (or read from) the navbar search box.
    pub search_value: String,
}

impl TourState {
    pub fn update_page(&mut self, page: TourPage) {
        self.current_page = page;
    }

    pub fn update_search(&mut self, value: &str) {
        value.clone_into(&mut self.search_value);
    }
}
