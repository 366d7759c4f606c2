//! Customer accounts.
//!
//! Customers are identified by phone number alone; there are no passwords.

use tracing::instrument;

use mark_store_core::{NewUser, User};

use crate::error::AppError;
use crate::models::{LoginRequest, RegisterRequest};
use crate::store::CatalogStore;
use crate::validation;

/// Registration and login against the catalog store.
pub struct AccountService<'a> {
    store: &'a CatalogStore,
    admin_phone: &'a str,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    ///
    /// A registration with `admin_phone` is flagged as an admin account.
    #[must_use]
    pub const fn new(store: &'a CatalogStore, admin_phone: &'a str) -> Self {
        Self { store, admin_phone }
    }

    /// Register a new customer.
    ///
    /// Phone numbers are not unique; registering the same number twice
    /// creates two users.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the form is incomplete.
    #[instrument(skip(self, request))]
    pub fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        validation::registration(&request)?;

        let phone_number = request.phone_number.trim().to_string();
        let is_admin = phone_number == self.admin_phone;
        let user = self.store.create_user(NewUser {
            full_name: request.full_name.trim().to_string(),
            phone_number,
            is_admin: Some(is_admin),
        });

        tracing::info!(user_id = %user.id, is_admin, "User registered");
        Ok(user)
    }

    /// Log in by phone number.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for a blank phone number and
    /// `AppError::Unauthorized` if no user has it.
    #[instrument(skip(self, request))]
    pub fn login(&self, request: &LoginRequest) -> Result<User, AppError> {
        validation::login(request)?;

        self.store
            .get_user_by_phone(request.phone_number.trim())
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))
    }
}
