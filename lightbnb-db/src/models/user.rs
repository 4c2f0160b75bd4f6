//! Users

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Column width of the text columns in `users`
const MAX_FIELD_LEN: usize = 255;

/// Loose shape check: something@something.tld, no whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// User record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored password hash; never written to output
    #[serde(skip_serializing)]
    pub password: String,
}

/// Validated fields for a new user
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawNewUser")]
pub struct NewUser {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct RawNewUser {
    name: String,
    email: String,
    password: String,
}

impl TryFrom<RawNewUser> for NewUser {
    type Error = ValidationError;

    fn try_from(raw: RawNewUser) -> Result<Self, Self::Error> {
        Self::new(&raw.name, &raw.email, &raw.password)
    }
}

impl NewUser {
    /// Validate and build a new user.
    ///
    /// # Rules
    /// - name, email and password are required
    /// - name and email are at most 255 characters
    /// - email must look like `local@domain.tld`
    ///
    /// # Example
    /// ```
    /// use lightbnb_db::models::NewUser;
    ///
    /// assert!(NewUser::new("Ada", "ada@example.com", "hash").is_ok());
    /// assert!(NewUser::new("Ada", "not-an-email", "hash").is_err());
    /// ```
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let name = required("name", name)?;
        let email = required("email", email)?;

        if password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must be an address like name@example.com",
            });
        }

        Ok(Self {
            name,
            email,
            password: password.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_user() {
        let user = NewUser::new(" Ada ", "ada@example.com", "secret").unwrap();
        assert_eq!(user.name(), "Ada");
        assert_eq!(user.email(), "ada@example.com");
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(matches!(
            NewUser::new("", "a@b.co", "x").unwrap_err(),
            ValidationError::Empty { field: "name" }
        ));
        assert!(matches!(
            NewUser::new("Ada", "  ", "x").unwrap_err(),
            ValidationError::Empty { field: "email" }
        ));
        assert!(matches!(
            NewUser::new("Ada", "a@b.co", "").unwrap_err(),
            ValidationError::Empty { field: "password" }
        ));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["plain", "no@tld", "two words@x.com", "@example.com"] {
            let err = NewUser::new("Ada", email, "x").unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "email", .. }),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_long_name() {
        let long = "a".repeat(256);
        let err = NewUser::new(&long, "a@b.co", "x").unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<NewUser, _> = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","password":"x"}"#,
        );
        assert!(ok.is_ok());

        let bad: Result<NewUser, _> =
            serde_json::from_str(r#"{"name":"Ada","email":"nope","password":"x"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn password_is_not_serialized() {
        let user = User {
            id: 1,
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "hash".to_owned(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
    }
}
