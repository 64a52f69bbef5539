//! Booking intent: which tab is open and which service chip is chosen

/// Booking dialog tabs, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingTab {
    /// Structured booking form
    #[default]
    QuickBook,
    /// Free-form message
    CustomMessage,
}

impl BookingTab {
    pub fn all() -> &'static [BookingTab] {
        &[BookingTab::QuickBook, BookingTab::CustomMessage]
    }

    /// Identifier shared by the tab button and its content pane
    pub fn id(&self) -> &'static str {
        match self {
            BookingTab::QuickBook => "quick-book",
            BookingTab::CustomMessage => "custom-message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingTab::QuickBook => "Quick Booking",
            BookingTab::CustomMessage => "Custom Message",
        }
    }
}

/// Selection state of the booking dialog
#[derive(Debug, Clone, PartialEq)]
pub struct BookingIntent {
    active_tab: BookingTab,
    selected_service: String,
    services: Vec<String>,
}

impl BookingIntent {
    pub fn new(services: Vec<String>) -> Self {
        Self {
            active_tab: BookingTab::default(),
            selected_service: String::new(),
            services,
        }
    }

    pub fn active_tab(&self) -> BookingTab {
        self.active_tab
    }

    /// Selected service value, empty when none is chosen
    pub fn selected_service(&self) -> &str {
        &self.selected_service
    }

    /// Enumerated chip values
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Activate exactly the given tab and its pane
    pub fn select_tab(&mut self, tab: BookingTab) {
        self.active_tab = tab;
    }

    /// Choose a chip; any previously chosen chip is deselected
    pub fn select_chip(&mut self, value: &str) {
        self.selected_service = value.to_string();
    }

    /// Pre-populate the service when booking is opened from a service card
    pub fn preselect(&mut self, service: &str) {
        self.selected_service = service.to_string();
    }

    /// Chip to highlight, if the selected service is one of the chips
    pub fn highlighted_chip(&self) -> Option<&str> {
        self.services
            .iter()
            .find(|value| **value == self.selected_service)
            .map(String::as_str)
    }

    pub fn is_chip_selected(&self, value: &str) -> bool {
        self.highlighted_chip() == Some(value)
    }

    /// Clear the chip selection and go back to the first tab
    pub fn reset(&mut self) {
        self.selected_service.clear();
        self.active_tab = BookingTab::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent() -> BookingIntent {
        BookingIntent::new(
            ["Boarding", "Daycare", "Grooming", "Training"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn first_tab_is_initial() {
        let intent = intent();
        assert_eq!(intent.active_tab(), BookingTab::QuickBook);
        assert_eq!(intent.selected_service(), "");
        assert_eq!(intent.highlighted_chip(), None);
    }

    #[test]
    fn tab_ids_are_distinct() {
        let ids: Vec<&str> = BookingTab::all().iter().map(BookingTab::id).collect();
        assert_eq!(ids, ["quick-book", "custom-message"]);
    }

    #[test]
    fn selecting_tab_activates_only_that_tab() {
        let mut intent = intent();
        intent.select_tab(BookingTab::CustomMessage);
        assert_eq!(intent.active_tab(), BookingTab::CustomMessage);
        intent.select_tab(BookingTab::QuickBook);
        assert_eq!(intent.active_tab(), BookingTab::QuickBook);
    }

    #[test]
    fn chip_selection_is_exclusive() {
        let mut intent = intent();
        intent.select_chip("Grooming");
        intent.select_chip("Boarding");

        assert_eq!(intent.selected_service(), "Boarding");
        let selected: Vec<&String> = intent
            .services()
            .iter()
            .filter(|s| intent.is_chip_selected(s))
            .collect();
        assert_eq!(selected, vec!["Boarding"]);
    }

    #[test]
    fn preselect_highlights_matching_chip() {
        let mut intent = intent();
        intent.preselect("Training");
        assert_eq!(intent.highlighted_chip(), Some("Training"));
    }

    #[test]
    fn preselect_unknown_service_highlights_nothing() {
        let mut intent = intent();
        intent.preselect("Puppy Spa");
        assert_eq!(intent.selected_service(), "Puppy Spa");
        assert_eq!(intent.highlighted_chip(), None);
    }

    #[test]
    fn reset_clears_selection_and_tab() {
        let mut intent = intent();
        intent.select_chip("Daycare");
        intent.select_tab(BookingTab::CustomMessage);

        intent.reset();

        assert_eq!(intent.selected_service(), "");
        assert_eq!(intent.active_tab(), BookingTab::QuickBook);
    }
}
