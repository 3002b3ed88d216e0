/// Which form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Single-account analysis.
    #[default]
    Analyze,
    /// Head-to-head comparison.
    Compare,
}

/// Placeholder of the search input at rest.
pub const SEARCH_PLACEHOLDER: &str = "Enter GitHub username...";
/// Placeholder of the focused, empty search input.
pub const SEARCH_FOCUS_PLACEHOLDER: &str = "Try: abhieshek11, upasana2503...";

/// Placeholder of the search input given its focus and current value.
pub fn search_placeholder(focused: bool, value: &str) -> &'static str {
    if focused && value.is_empty() { SEARCH_FOCUS_PLACEHOLDER } else { SEARCH_PLACEHOLDER }
}

/// Visibility of the page regions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Which form is active.
    pub mode: Mode,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Message of the error banner, if shown.
    pub error: Option<String>,
    /// Whether the profile results are shown.
    pub profile_visible: bool,
    /// Whether the comparison results are shown.
    pub compare_visible: bool,
}

impl ViewState {
    /// Whether the single-account form is shown.
    pub fn analyze_form_visible(&self) -> bool {
        self.mode == Mode::Analyze
    }

    /// Whether the two-account form is shown.
    pub fn compare_form_visible(&self) -> bool {
        self.mode == Mode::Compare
    }

    /// Switches mode and hides the other mode's results.
    pub fn activate(&mut self, mode: Mode) {
        self.mode = mode;
        match mode {
            Mode::Analyze => self.compare_visible = false,
            Mode::Compare => self.profile_visible = false,
        }
    }

    /// Shows the error banner with `message`.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Enters the loading state for a new search.
    pub fn begin_search(&mut self) {
        self.loading = true;
        self.error = None;
        self.profile_visible = false;
    }

    /// Enters the loading state for a new comparison.
    pub fn begin_compare(&mut self) {
        self.begin_search();
        self.compare_visible = false;
    }

    /// Leaves the loading state, showing the profile or the error.
    pub fn finish_search(&mut self, error: Option<String>) {
        self.loading = false;
        match error {
            Some(message) => self.show_error(message),
            None => self.profile_visible = true,
        }
    }

    /// Leaves the loading state, showing the comparison or the error.
    pub fn finish_compare(&mut self, error: Option<String>) {
        self.loading = false;
        match error {
            Some(message) => self.show_error(message),
            None => self.compare_visible = true,
        }
    }
}

/// Cycles through well-known handles to suggest in the search input.
#[derive(Debug, Clone)]
pub struct SuggestionRotation {
    handles: &'static [&'static str],
    index: usize,
}

/// Well-known accounts suggested to new users.
pub const EXAMPLE_HANDLES: &[&str] = &[
    "octocat",
    "torvalds",
    "gaearon",
    "sindresorhus",
    "tj",
    "addyosmani",
    "paulirish",
    "mikeal",
    "substack",
    "isaacs",
    "mrdoob",
    "jeresig",
    "defunkt",
    "mojombo",
    "wycats",
    "dhh",
    "tenderlove",
    "jashkenas",
    "fat",
    "mbostock",
    "holman",
    "kneath",
    "rtomayko",
    "technoweenie",
    "schacon",
    "pjhyett",
    "caged",
    "atmos",
    "bmizerany",
    "qrush",
];

impl Default for SuggestionRotation {
    fn default() -> Self {
        Self::new(EXAMPLE_HANDLES)
    }
}

impl SuggestionRotation {
    /// A rotation starting at the first of `handles`.
    pub fn new(handles: &'static [&'static str]) -> Self {
        Self { handles, index: 0 }
    }

    /// The handle currently suggested.
    pub fn current(&self) -> Option<&'static str> {
        self.handles.get(self.index).copied()
    }

    /// Moves to the next handle, wrapping around, and returns it.
    pub fn advance(&mut self) -> Option<&'static str> {
        if self.handles.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.handles.len();
        self.current()
    }

    /// The suggestion as shown to the user, e.g. `Try: octocat`.
    pub fn hint(&self) -> Option<String> {
        self.current().map(|handle| format!("Try: {handle}"))
    }
}
