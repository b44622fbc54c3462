//! Foreign key definitions.

use serde::{Deserialize, Serialize};

/// Referential action for ON DELETE / ON UPDATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForeignKeyAction {
    /// No action.
    NoAction,
    /// Restrict deletion/update.
    Restrict,
    /// Cascade the operation.
    Cascade,
    /// Set to NULL.
    SetNull,
    /// Set to default value.
    SetDefault,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// A foreign key from one column to a column of another table.
///
/// All three of `column`, `on` and `references` must be filled in before the
/// blueprint is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDefinition {
    /// Referencing column in the blueprint's table.
    pub column: String,
    /// Referenced column.
    pub references: String,
    /// Referenced table.
    pub on: String,
    /// Action on delete.
    pub on_delete: Option<ForeignKeyAction>,
    /// Action on update.
    pub on_update: Option<ForeignKeyAction>,
    /// Explicit constraint name.
    pub name: Option<String>,
}

impl ForeignKeyDefinition {
    /// Starts a foreign key on `column` with no target yet.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            references: String::new(),
            on: String::new(),
            on_delete: None,
            on_update: None,
            name: None,
        }
    }
}

/// Chaining handle for a foreign key owned by a blueprint.
///
/// ```rust
/// use oxide_schema_core::{Blueprint, ForeignKeyAction};
///
/// let mut table = Blueprint::new("posts");
/// table.foreign("user_id").references("id").on("users").cascade_on_delete();
///
/// let fk = &table.foreign_keys()[0];
/// assert_eq!(fk.on, "users");
/// assert_eq!(fk.on_delete, Some(ForeignKeyAction::Cascade));
/// ```
#[derive(Debug)]
pub struct ForeignKeyHandle<'a> {
    foreign_keys: &'a mut Vec<ForeignKeyDefinition>,
    position: usize,
}

impl<'a> ForeignKeyHandle<'a> {
    pub(crate) fn new(foreign_keys: &'a mut Vec<ForeignKeyDefinition>, position: usize) -> Self {
        Self {
            foreign_keys,
            position,
        }
    }

    fn foreign_key(&mut self) -> &mut ForeignKeyDefinition {
        &mut self.foreign_keys[self.position]
    }

    /// Returns the definition as it currently stands.
    #[must_use]
    pub fn definition(&self) -> &ForeignKeyDefinition {
        &self.foreign_keys[self.position]
    }

    /// Sets the referenced column.
    pub fn references(mut self, column: impl Into<String>) -> Self {
        self.foreign_key().references = column.into();
        self
    }

    /// Sets the referenced table.
    pub fn on(mut self, table: impl Into<String>) -> Self {
        self.foreign_key().on = table.into();
        self
    }

    /// Sets the ON DELETE action.
    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.foreign_key().on_delete = Some(action);
        self
    }

    /// Sets the ON UPDATE action.
    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.foreign_key().on_update = Some(action);
        self
    }

    /// Shorthand for `on_delete(ForeignKeyAction::Cascade)`.
    pub fn cascade_on_delete(self) -> Self {
        self.on_delete(ForeignKeyAction::Cascade)
    }

    /// Shorthand for `on_delete(ForeignKeyAction::SetNull)`.
    pub fn null_on_delete(self) -> Self {
        self.on_delete(ForeignKeyAction::SetNull)
    }

    /// Gives the constraint an explicit name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.foreign_key().name = Some(name.into());
        self
    }
}
