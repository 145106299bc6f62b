//! Display/Edit Toggle
//!
//! State behind the "show" and "edit" halves of an editable name.

/// Which half is visible, plus the edited text and the value it started from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditToggle {
    pub editing: bool,
    pub value: String,
    /// Value rendered with the page; cancel always returns the input to it
    pub original: String,
    /// Text of the display half, moved on by `confirm`
    pub shown: String,
}

impl EditToggle {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            editing: false,
            value: original.clone(),
            shown: original.clone(),
            original,
        }
    }

    /// Hide the display half, reveal the edit half
    pub fn enter(&mut self) {
        self.editing = true;
    }

    /// Back to display, throwing the edit away
    pub fn cancel(&mut self) {
        self.editing = false;
        self.value = self.original.clone();
    }

    /// Back to display, keeping the edit as the shown value
    pub fn confirm(&mut self) {
        self.editing = false;
        self.shown = self.value.clone();
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Text of the display half
    pub fn display(&self) -> &str {
        &self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_restores_original() {
        let mut toggle = EditToggle::new("cat");
        toggle.enter();
        toggle.set_value("kitten".to_string());
        assert!(toggle.editing);

        toggle.cancel();
        assert!(!toggle.editing);
        assert_eq!(toggle.value, "cat");
        assert_eq!(toggle.display(), "cat");
    }

    #[test]
    fn test_confirm_commits_value() {
        let mut toggle = EditToggle::new("");
        toggle.enter();
        toggle.set_value("cat_side".to_string());
        toggle.confirm();
        assert!(!toggle.editing);
        assert_eq!(toggle.display(), "cat_side");

    }

    #[test]
    fn test_cancel_after_confirm_keeps_display() {
        let mut toggle = EditToggle::new("");
        toggle.enter();
        toggle.set_value("cat_side".to_string());
        toggle.confirm();

        toggle.enter();
        toggle.set_value("other".to_string());
        toggle.cancel();
        // The input goes back to the page's value, the display keeps the confirmed name
        assert_eq!(toggle.value, "");
        assert_eq!(toggle.display(), "cat_side");
    }
}
