//! Navbar search-box state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `AppBar` component owns one `NavBarState` and forwards DOM events to
//! it. Handlers mutate local and tour state and return a `SearchAction`
//! describing the navigation the component must perform, so the rules
//! here run without a router or browser.
//!
//! TOUR MODE
//! =========
//! While the tour is open the search box mirrors the tour's search value
//! and never navigates; typing the tour term and pressing Enter advances
//! the tour to the explore page instead.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use super::search::GlobalSearchState;
use super::tour::{TOUR_SEARCH_TERM, TourPage, TourState};
use crate::routes::{RELEVANCE_SORT, explore_path};

/// What the component must do after a search was submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// Record `term` as a recent search (ignored when blank) and go to `path`.
    Explore { path: String, term: String },
    /// Tour mode: stay where we are.
    Stay,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavBarState {
    pub search_value: String,
    pub search_box_open: bool,
    pub feature_modal_open: bool,
    /// Server version, once fetched.
    pub version: Option<String>,
}

impl NavBarState {
    /// Initial state for a location whose `search` query parameter is `query_search`.
    pub fn new(query_search: &str) -> Self {
        Self { search_value: query_search.to_owned(), ..Self::default() }
    }

    /// Input changed.
    pub fn handle_search_change(&mut self, value: &str, tour: &mut TourState) {
        value.clone_into(&mut self.search_value);
        if tour.is_open {
            tour.update_search(value);
        } else {
            self.search_box_open = !value.is_empty();
        }
    }

    /// Key pressed in the input. `input_value` is the element's current text.
    ///
    /// Returns `None` for anything but Enter.
    pub fn handle_key_down(
        &mut self,
        key: &str,
        input_value: &str,
        tour: &mut TourState,
        search: &GlobalSearchState,
    ) -> Option<SearchAction> {
        if key != "Enter" {
            return None;
        }
        if tour.is_open && self.search_value == TOUR_SEARCH_TERM {
            tour.update_page(TourPage::Explore);
            tour.update_search("");
            self.sync_from_tour(tour);
        }
        Some(self.search(input_value, tour, search))
    }

    /// Search icon clicked: submit the current value.
    pub fn handle_click(&mut self, tour: &TourState, search: &GlobalSearchState) -> SearchAction {
        let value = self.search_value.clone();
        self.search(&value, tour, search)
    }

    /// Clear button: empty the box and submit an empty search.
    pub fn handle_clear(&mut self, tour: &TourState, search: &GlobalSearchState) -> SearchAction {
        self.search_value.clear();
        self.search("", tour, search)
    }

    pub fn set_search_box_open(&mut self, open: bool) {
        self.search_box_open = open;
    }

    pub fn set_feature_modal_open(&mut self, open: bool) {
        self.feature_modal_open = open;
    }

    /// The location's `search` parameter changed.
    pub fn sync_from_query(&mut self, query_search: &str) {
        query_search.clone_into(&mut self.search_value);
    }

    /// Mirror the tour's search value while the tour is open.
    pub fn sync_from_tour(&mut self, tour: &TourState) {
        if tour.is_open {
            tour.search_value.clone_into(&mut self.search_value);
        }
    }

    fn search(&mut self, value: &str, tour: &TourState, search: &GlobalSearchState) -> SearchAction {
        if tour.is_open {
            return SearchAction::Stay;
        }
        self.search_box_open = false;
        SearchAction::Explore {
            path: explore_path(search.tab_path(), value, RELEVANCE_SORT),
            term: value.to_owned(),
        }
    }
}
