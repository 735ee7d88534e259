use super::form::Transition;
use std::fmt;

/// Which of the three dependent selections a dropdown drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Province,
    Municipality,
    Place,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Province, Self::Municipality, Self::Place];

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Province => "Choose Province",
            Self::Municipality => "Choose Municipality",
            Self::Place => "Choose Place",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Province => "Province",
            Self::Municipality => "Municipality",
            Self::Place => "Place",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Province => Self::Municipality,
            Self::Municipality => Self::Place,
            Self::Place => Self::Province,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Province => Self::Place,
            Self::Municipality => Self::Province,
            Self::Place => Self::Municipality,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Change handler bound to a dropdown. A variant constructor such as
/// `Transition::ProvinceChosen` fits directly.
pub type ChangeListener = fn(String) -> Transition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl DropdownOption {
    fn sentinel(prompt: &str) -> Self {
        Self {
            value: String::new(),
            label: prompt.to_string(),
            disabled: true,
        }
    }

    fn named(name: String) -> Self {
        Self {
            label: name.clone(),
            value: name,
            disabled: false,
        }
    }
}

/// A select control and its (at most one) change listener.
///
/// There is no way to add a listener to an existing dropdown: repopulating means
/// building a new value with [`Dropdown::rebuild`], which drops the old options
/// and the old listener together.
#[derive(Debug, Clone)]
pub struct Dropdown {
    level: Level,
    options: Vec<DropdownOption>,
    selected: usize,
    listener: Option<ChangeListener>,
}

impl Dropdown {
    /// Empty and unbound.
    pub const fn cleared(level: Level) -> Self {
        Self {
            level,
            options: Vec::new(),
            selected: 0,
            listener: None,
        }
    }

    /// Disabled, pre-selected prompt first, then one option per name, bound to `listener`.
    pub fn rebuild<I>(level: Level, names: I, listener: ChangeListener) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = vec![DropdownOption::sentinel(level.prompt())];
        options.extend(names.into_iter().map(DropdownOption::named));

        Self {
            level,
            options,
            selected: 0,
            listener: Some(listener),
        }
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The chosen value, or `None` while the prompt is still selected.
    pub fn selected_value(&self) -> Option<&str> {
        self.options
            .get(self.selected)
            .filter(|option| !option.disabled)
            .map(|option| option.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub const fn is_bound(&self) -> bool {
        self.listener.is_some()
    }

    /// Selects `index` and fires the listener. Nothing fires for the prompt, for an
    /// out-of-range index, or when `index` is already selected.
    pub fn choose(&mut self, index: usize) -> Option<Transition> {
        let option = self.options.get(index)?;
        if option.disabled || index == self.selected {
            return None;
        }

        let value = option.value.clone();
        self.selected = index;
        self.listener.map(|listener| listener(value))
    }
}
