use crate::domain::user::User;
use crate::forms::users::AddUserForm;
use crate::repository::{UserReader, UserWriter};
use crate::services::actions::ActionError;

/// Validates the form, hashes the password and persists the user.
///
/// Emails are compared case-insensitively, so `Jane@Example.com` collides
/// with an existing `jane@example.com`.
pub fn create_user<R>(repo: &R, form: AddUserForm) -> Result<User, ActionError>
where
    R: UserReader + UserWriter + ?Sized,
{
    let payload = form.into_new_user()?;

    if repo.get_user_by_email(&payload.email)?.is_some() {
        return Err(ActionError::AlreadyExists { field: "email" });
    }

    repo.create_user(&payload)?
        .ok_or(ActionError::AlreadyExists { field: "email" })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use pushkind_common::repository::errors::RepositoryResult;

    use super::*;
    use crate::domain::user::{NewUser, UserRole};
    use crate::repository::mock::{MockUserReader, MockUserWriter};

    struct FakeRepo {
        reader: MockUserReader,
        writer: MockUserWriter,
    }

    impl UserReader for FakeRepo {
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
            self.reader.get_user_by_email(email)
        }
    }

    impl UserWriter for FakeRepo {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<Option<User>> {
            self.writer.create_user(new_user)
        }
    }

    fn user(email: &str) -> User {
        User {
            id: 1,
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            role: UserRole::User,
            created_at: NaiveDateTime::default(),
        }
    }

    fn form() -> AddUserForm {
        AddUserForm {
            name: "Jane Doe".to_string(),
            email: "Jane@Example.com".to_string(),
            password: "123456".to_string(),
            role: UserRole::User,
        }
    }

    #[test]
    fn rejects_existing_email() {
        let mut reader = MockUserReader::new();
        reader
            .expect_get_user_by_email()
            .withf(|email| email == "jane@example.com")
            .returning(|email| Ok(Some(user(email))));
        let mut writer = MockUserWriter::new();
        writer.expect_create_user().never();
        let repo = FakeRepo { reader, writer };

        let err = create_user(&repo, form()).expect_err("expected duplicate email");

        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn stores_hashed_password() {
        let mut reader = MockUserReader::new();
        reader.expect_get_user_by_email().returning(|_| Ok(None));
        let mut writer = MockUserWriter::new();
        writer
            .expect_create_user()
            .times(1)
            .withf(|new_user| {
                new_user
                    .password_hash
                    .as_deref()
                    .is_some_and(|hash| hash.starts_with("$argon2"))
            })
            .returning(|new_user| Ok(Some(user(&new_user.email))));
        let repo = FakeRepo { reader, writer };

        let created = create_user(&repo, form()).expect("expected user");

        assert_eq!(created.email, "jane@example.com");
    }

    #[test]
    fn reports_email_taken_during_insert() {
        let mut reader = MockUserReader::new();
        reader.expect_get_user_by_email().returning(|_| Ok(None));
        let mut writer = MockUserWriter::new();
        writer.expect_create_user().times(1).returning(|_| Ok(None));
        let repo = FakeRepo { reader, writer };

        let err = create_user(&repo, form()).expect_err("expected duplicate email");

        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn reports_validation_messages() {
        let repo = FakeRepo {
            reader: MockUserReader::new(),
            writer: MockUserWriter::new(),
        };
        let mut form = form();
        form.name = "Jo".to_string();

        let err = create_user(&repo, form).expect_err("expected validation failure");

        assert_eq!(err.to_string(), "Name must be at least 3 characters");
    }
}
