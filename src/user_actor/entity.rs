use tracing::debug;

use super::error::UserError;
use super::validation;
use crate::actor_framework::{Entity, Store};
use crate::domain::{User, UserInput};

impl Entity for User {
    type Id = String;
    type CreateParams = UserInput;
    type Update = UserInput;
    type Error = UserError;

    fn id(&self) -> &String {
        &self.id
    }

    fn validate_create(params: &UserInput, store: &Store<Self>) -> Result<(), UserError> {
        validation::validate(params, store, None)
    }

    /// Creates a new User from validated input.
    ///
    /// The employee code is the creation sequence, so codes of deleted users
    /// are never handed out again. An empty super password is stored as absent.
    fn from_create_params(id: String, sequence: u64, params: UserInput) -> Self {
        let super_password = params.provided_super_password().map(str::to_owned);
        Self {
            id,
            employee_code: sequence.to_string(),
            name: params.name,
            email: params.email,
            password: params.password,
            tax_id: params.tax_id,
            role: params.role,
            super_password,
        }
    }

    fn validate_update(id: &String, update: &UserInput, store: &Store<Self>) -> Result<(), UserError> {
        validation::validate(update, store, Some(id.as_str()))
    }

    /// Replaces every field except `id` and `employee_code`. The super
    /// password is only replaced when a non-empty one is supplied.
    fn on_update(&mut self, update: UserInput) {
        if let Some(sp) = update.provided_super_password() {
            self.super_password = Some(sp.to_owned());
        } else {
            debug!("Keeping stored super password");
        }
        self.name = update.name;
        self.email = update.email;
        self.password = update.password;
        self.tax_id = update.tax_id;
        self.role = update.role;
    }

    fn not_found(id: &String) -> UserError {
        UserError::NotFound(id.clone())
    }
}
