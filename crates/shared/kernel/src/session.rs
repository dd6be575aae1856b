//! Ephemeral list/detail selection for one section.
//!
//! A session is either listing a category or showing one entity in detail. The
//! selection is keyed by the entity's stable id and resolved to a position in the
//! currently visible sequence only when needed, so changing the filter can never
//! make the detail view point at a different item.
//!
//! Sessions live for one rendering (one HTTP request here) and own no data.

use vinewood_domain::constants::ALL_CATEGORY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailSession<Id> {
    Listing { category: String },
    DetailOpen { category: String, selected: Id },
}

impl<Id> Default for DetailSession<Id> {
    fn default() -> Self {
        Self::Listing { category: ALL_CATEGORY.to_owned() }
    }
}

impl<Id: Clone + PartialEq> DetailSession<Id> {
    pub fn listing(category: impl Into<String>) -> Self {
        Self::Listing { category: category.into() }
    }

    /// Rebuilds a session from request parameters.
    ///
    /// A selection that is not part of `visible` is discarded.
    pub fn restore(category: impl Into<String>, selected: Option<Id>, visible: &[Id]) -> Self {
        let mut session = Self::listing(category);
        if let Some(id) = selected {
            session.open(id, visible);
        }
        session
    }

    pub fn category(&self) -> &str {
        match self {
            Self::Listing { category } | Self::DetailOpen { category, .. } => category,
        }
    }

    pub const fn selected(&self) -> Option<&Id> {
        match self {
            Self::Listing { .. } => None,
            Self::DetailOpen { selected, .. } => Some(selected),
        }
    }

    pub const fn is_open(&self) -> bool {
        matches!(self, Self::DetailOpen { .. })
    }

    /// Switches the filter. `visible` is the sequence under the *new* category; an open
    /// detail whose entity is no longer visible is closed.
    pub fn select_category(&mut self, category: impl Into<String>, visible: &[Id]) {
        let category = category.into();
        *self = match self.selected() {
            Some(id) if visible.contains(id) => {
                Self::DetailOpen { category, selected: id.clone() }
            },
            _ => Self::Listing { category },
        };
    }

    /// Opens the detail view on `id`. Returns `false` (and stays put) when `id` is not visible.
    pub fn open(&mut self, id: Id, visible: &[Id]) -> bool {
        if !visible.contains(&id) {
            return false;
        }
        let category = self.category().to_owned();
        *self = Self::DetailOpen { category, selected: id };
        true
    }

    pub fn close(&mut self) {
        let category = self.category().to_owned();
        *self = Self::Listing { category };
    }

    /// Position of the selected entity within `visible`.
    pub fn position(&self, visible: &[Id]) -> Option<usize> {
        self.selected().and_then(|id| visible.iter().position(|v| v == id))
    }

    /// Moves to the following entity, wrapping from the last to the first.
    pub fn next(&mut self, visible: &[Id]) {
        self.step(visible, wrap_next);
    }

    /// Moves to the preceding entity, wrapping from the first to the last.
    pub fn previous(&mut self, visible: &[Id]) {
        self.step(visible, wrap_previous);
    }

    /// Id of the entity [`Self::next`] would move to, without moving.
    pub fn peek_next(&self, visible: &[Id]) -> Option<Id> {
        let pos = self.position(visible)?;
        visible.get(wrap_next(pos, visible.len())).cloned()
    }

    /// Id of the entity [`Self::previous`] would move to, without moving.
    pub fn peek_previous(&self, visible: &[Id]) -> Option<Id> {
        let pos = self.position(visible)?;
        visible.get(wrap_previous(pos, visible.len())).cloned()
    }

    fn step(&mut self, visible: &[Id], advance: fn(usize, usize) -> usize) {
        let Some(pos) = self.position(visible) else {
            self.close();
            return;
        };
        let target = advance(pos, visible.len());
        if let Some(id) = visible.get(target) {
            let category = self.category().to_owned();
            *self = Self::DetailOpen { category, selected: id.clone() };
        }
    }
}

/// Circular successor of `pos` in a sequence of `len` items.
pub const fn wrap_next(pos: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (pos + 1) % len }
}

/// Circular predecessor of `pos` in a sequence of `len` items.
pub const fn wrap_previous(pos: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if pos == 0 {
        len - 1
    } else {
        (pos - 1) % len
    }
}
