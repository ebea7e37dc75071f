//! Drafts edited by the create and edit modals.

use userdesk_model::{NewUser, UserSummary};

use crate::domains::users::validation::{self, ValidationError};

/// An editable field of a user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Username,
    Email,
}

/// Field access shared by every draft shape.
pub trait UserFields {
    fn name(&self) -> &str;
    fn username(&self) -> &str;
    fn email(&self) -> &str;
    fn field_mut(&mut self, field: UserField) -> &mut String;

    fn set_field(&mut self, field: UserField, value: String) {
        *self.field_mut(field) = value;
    }
}

impl UserFields for NewUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn field_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::Name => &mut self.name,
            UserField::Username => &mut self.username,
            UserField::Email => &mut self.email,
        }
    }
}

impl UserFields for UserSummary {
    fn name(&self) -> &str {
        &self.name
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn field_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::Name => &mut self.name,
            UserField::Username => &mut self.username,
            UserField::Email => &mut self.email,
        }
    }
}

/// A draft plus the validation error shown above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm<D> {
    pub draft: D,
    pub error: Option<ValidationError>,
}

impl<D: UserFields> UserForm<D> {
    pub fn new(draft: D) -> Self {
        Self { draft, error: None }
    }

    /// Validate the draft, recording the error on failure. A passing check
    /// leaves an earlier error in place until the modal closes.
    pub fn check(&mut self) -> bool {
        match validation::validate(&self.draft) {
            Ok(()) => true,
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

/// The one dialog the list screen may show at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Create(UserForm<NewUser>),
    Edit(UserForm<UserSummary>),
    ConfirmDelete(UserSummary),
}
