use egui::{Key, RichText, TextEdit, Ui};

use crate::theme::Theme;

/// Placeholder hint shown while the field is empty.
pub const SEARCH_HINT: &str = "Search patients, appointments…";

/// Single-line search input with a magnifier icon.
///
/// The hint is rendered by egui and never becomes part of the text, so
/// [`SearchBar::query`] is empty until the user actually types — unlike a
/// placeholder faked by pre-inserting text into the field.
#[derive(Debug, Default)]
pub struct SearchBar {
    query: String,
}

impl SearchBar {
    /// The entered query, trimmed; empty while only the hint is showing.
    pub fn query(&self) -> &str {
        self.query.trim()
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Renders the bar; returns `true` when Enter was pressed in the field.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        theme: &Theme,
    ) -> bool {
        let mut submitted = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new("🔍").color(theme.muted));
            let response = ui.add(
                TextEdit::singleline(&mut self.query)
                    .hint_text(SEARCH_HINT)
                    .desired_width(ui.available_width()),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submitted = true;
            }
        });

        submitted
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn query_is_empty_until_text_is_entered() {
        let bar = SearchBar::default();

        assert_eq!(bar.query(), "");
    }

    #[test]
    fn query_is_trimmed_and_clear_resets_it() {
        let mut bar = SearchBar::default();
        bar.query = "  jane  ".to_string();

        assert_eq!(bar.query(), "jane");

        bar.clear();
        assert_eq!(bar.query(), "");
    }
}
