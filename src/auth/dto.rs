use serde::{Deserialize, Serialize};

use crate::{error::AppError, extract::required};

/// Request body for signup. Fields are optional so a missing one is a 400, not a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signup input after presence checks.
#[derive(Debug)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(self) -> Result<Signup, AppError> {
        match (
            required(self.name),
            required(self.email),
            required(self.password),
        ) {
            (Some(name), Some(email), Some(password)) => Ok(Signup {
                name,
                email,
                password,
            }),
            _ => Err(AppError::Validation("All fields are required")),
        }
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct Login {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<Login, AppError> {
        match (required(self.email), required(self.password)) {
            (Some(email), Some(password)) => Ok(Login { email, password }),
            _ => Err(AppError::Validation("Email and password are required")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_requires_every_field() {
        let req: SignupRequest =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com"}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");

        let req: SignupRequest =
            serde_json::from_str(r#"{"name":"","email":"a@x.com","password":"p"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn login_requires_email_and_password() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":null,"password":"p"}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required");

        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"a@x.com","password":"p"}"#).unwrap();
        let login = req.validate().unwrap();
        assert_eq!(login.email, "a@x.com");
    }

    #[test]
    fn public_user_never_carries_a_password() {
        let json = serde_json::to_value(PublicUser {
            name: "A".into(),
            email: "a@x.com".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"name": "A", "email": "a@x.com"}));
    }
}
