//! Typestate machine for editing a player's display name.
//!
//! A name field is either being viewed or being edited. `begin_edit` and
//! `commit` are the only transitions, and only an editing field accepts
//! text, so a half-typed draft can never leak into the registry.

use super::registry::PlayerRegistry;
use super::types::Symbol;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Typestate marker: the name is displayed.
#[derive(Debug, Clone, Copy)]
pub struct Viewing;

/// Typestate marker: the name is being typed.
#[derive(Debug, Clone, Copy)]
pub struct Editing;

/// Name field for one symbol, with its phase in the type parameter.
#[derive(Debug, Clone)]
pub struct NameEditor<S> {
    symbol: Symbol,
    draft: String,
    _state: PhantomData<S>,
}

impl<S> NameEditor<S> {
    /// The symbol whose name this field edits.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl NameEditor<Viewing> {
    /// Creates a field showing the name of `symbol`.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            draft: String::new(),
            _state: PhantomData,
        }
    }

    /// Label of the toggle button in this phase.
    pub fn action_label(&self) -> &'static str {
        "Edit"
    }

    /// Switches to editing, seeding the draft with the current name.
    #[instrument(skip(self, registry), fields(symbol = %self.symbol))]
    pub fn begin_edit(self, registry: &PlayerRegistry) -> NameEditor<Editing> {
        debug!("Begin editing name");
        NameEditor {
            symbol: self.symbol,
            draft: registry.name(self.symbol).to_string(),
            _state: PhantomData,
        }
    }
}

impl NameEditor<Editing> {
    /// Label of the toggle button in this phase.
    pub fn action_label(&self) -> &'static str {
        "Save"
    }

    /// The text typed so far.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Saves the draft into a renamed copy of `registry` and stops editing.
    #[instrument(skip(self, registry), fields(symbol = %self.symbol))]
    pub fn commit(self, registry: &PlayerRegistry) -> (NameEditor<Viewing>, PlayerRegistry) {
        let renamed = registry.rename(self.symbol, self.draft);
        (NameEditor::new(self.symbol), renamed)
    }
}
