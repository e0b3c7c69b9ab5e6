//! Raw form input collected from the user.

use crate::models::NewUser;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

impl RegisterForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Registration payload; blank optional fields are dropped.
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            full_name: non_blank(self.full_name.as_deref()),
            phone_number: non_blank(self.phone_number.as_deref()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optionals_are_dropped() {
        let form = RegisterForm {
            username: " asha ".to_string(),
            email: "asha@example.com".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            full_name: Some("  ".to_string()),
            phone_number: Some("98765 43210".to_string()),
        };
        assert!(form.passwords_match());
        let user = form.to_new_user();
        assert_eq!(user.username, "asha");
        assert_eq!(user.full_name, None);
        assert_eq!(user.phone_number.as_deref(), Some("98765 43210"));
    }
}
