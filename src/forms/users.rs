use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use serde::Deserialize;
use validator::Validate;

use crate::domain::user::{NewUser, UserRole};
use crate::forms::{FormError, FormResult};

/// Form payload describing a user account to insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddUserForm {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

impl AddUserForm {
    /// Validates the payload and hashes the password into a domain `NewUser`.
    pub fn into_new_user(self) -> FormResult<NewUser> {
        self.validate()?;

        let password_hash = hash_password(&self.password)?;

        Ok(
            NewUser::new(self.name.trim().to_string(), self.email.trim().to_string(), self.role)
                .with_password_hash(password_hash),
        )
    }
}

fn hash_password(password: &str) -> FormResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| FormError::PasswordHash(err.to_string()))
}
