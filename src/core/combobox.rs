//! Searchable select with optional creation of new options.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    pub label: String,
    pub value: String,
}

impl ComboOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Single(Option<String>),
    Multi(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Combobox {
    options: Vec<ComboOption>,
    selection: Selection,
    query: String,
    open: bool,
    allow_create: bool,
    placeholder: String,
}

impl Combobox {
    pub fn single(options: Vec<ComboOption>, allow_create: bool) -> Self {
        Self::with_selection(options, Selection::Single(None), allow_create)
    }

    pub fn multi(options: Vec<ComboOption>, allow_create: bool) -> Self {
        Self::with_selection(options, Selection::Multi(Vec::new()), allow_create)
    }

    fn with_selection(options: Vec<ComboOption>, selection: Selection, allow_create: bool) -> Self {
        Self {
            options,
            selection,
            query: String::new(),
            open: false,
            allow_create,
            placeholder: "Select".to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn options(&self) -> &[ComboOption] {
        &self.options
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Options whose label contains the query, ignoring case.
    pub fn filtered(&self) -> Vec<&ComboOption> {
        let needle = self.query.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// "Create" is offered for a non-empty query that no label matches exactly.
    pub fn can_create(&self) -> bool {
        self.allow_create
            && !self.query.is_empty()
            && !self.options.iter().any(|o| o.label == self.query)
    }

    /// Pick an option by value. Multi-select toggles it; single-select
    /// replaces the selection and closes. Returns false for unknown values.
    pub fn select(&mut self, value: &str) -> bool {
        if !self.options.iter().any(|o| o.value == value) {
            return false;
        }
        match &mut self.selection {
            Selection::Multi(values) => {
                if let Some(pos) = values.iter().position(|v| v == value) {
                    values.remove(pos);
                } else {
                    values.push(value.to_string());
                }
            }
            Selection::Single(current) => {
                *current = Some(value.to_string());
                self.open = false;
            }
        }
        self.query.clear();
        true
    }

    /// Turn the query into a new option, select it and close.
    pub fn create(&mut self) -> Option<ComboOption> {
        if !self.can_create() {
            return None;
        }
        let option = ComboOption::new(self.query.clone(), self.query.clone());
        self.options.push(option.clone());
        match &mut self.selection {
            Selection::Multi(values) => values.push(option.value.clone()),
            Selection::Single(current) => *current = Some(option.value.clone()),
        }
        self.open = false;
        self.query.clear();
        Some(option)
    }

    pub fn is_selected(&self, value: &str) -> bool {
        match &self.selection {
            Selection::Multi(values) => values.iter().any(|v| v == value),
            Selection::Single(current) => current.as_deref() == Some(value),
        }
    }

    pub fn selected_values(&self) -> Vec<&str> {
        match &self.selection {
            Selection::Multi(values) => values.iter().map(String::as_str).collect(),
            Selection::Single(current) => current.iter().map(String::as_str).collect(),
        }
    }

    pub fn selected_option(&self) -> Option<&ComboOption> {
        match &self.selection {
            Selection::Single(Some(v)) => self.options.iter().find(|o| &o.value == v),
            _ => None,
        }
    }

    /// Trigger text: `"<n> selected"` for multi-select, the chosen label for
    /// single-select, the placeholder otherwise.
    pub fn display(&self) -> String {
        match &self.selection {
            Selection::Multi(values) if !values.is_empty() => format!("{} selected", values.len()),
            Selection::Single(Some(_)) => match self.selected_option() {
                Some(o) => o.label.clone(),
                None => self.placeholder.clone(),
            },
            _ => self.placeholder.clone(),
        }
    }

    /// Best match for typed text: exact label, then case-insensitive label,
    /// then exact value, then the only substring match.
    pub fn find_match(&self, text: &str) -> Option<&ComboOption> {
        if let Some(o) = self.options.iter().find(|o| o.label == text) {
            return Some(o);
        }
        let lower = text.to_lowercase();
        if let Some(o) = self.options.iter().find(|o| o.label.to_lowercase() == lower) {
            return Some(o);
        }
        if let Some(o) = self.options.iter().find(|o| o.value == text) {
            return Some(o);
        }
        let mut hits = self
            .options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&lower));
        match (hits.next(), hits.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }
}
