//! Entity name value object.
//!
//! An [`EntityName`] is the string token ("Order", "UserProfile") every
//! generated symbol and file name is derived from. Construction normalises
//! the first letter to uppercase, matching the class-naming convention of the
//! generated code. Uniqueness is deliberately not enforced: generating the
//! same name twice overwrites (after confirmation).

use std::fmt;

use super::DomainError;

/// A validated entity name with a guaranteed uppercase first letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Create a new entity name, capitalising the first letter.
    ///
    /// Rejects empty names, names starting with a digit or underscore, and
    /// names containing anything other than ASCII letters, digits and
    /// underscores.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::InvalidEntityName {
                name: raw.into(),
                reason: "name cannot be empty".into(),
            });
        }

        let mut chars = raw.chars();
        let first = chars.next().expect("non-empty checked above");
        if !first.is_ascii_alphabetic() {
            return Err(DomainError::InvalidEntityName {
                name: raw.into(),
                reason: "name must start with a letter".into(),
            });
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(DomainError::InvalidEntityName {
                name: raw.into(),
                reason: format!("character '{bad}' is not allowed"),
            });
        }

        let mut normalised = String::with_capacity(raw.len());
        normalised.push(first.to_ascii_uppercase());
        normalised.push_str(chars.as_str());
        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // ── Derived symbol names ──────────────────────────────────────────────

    pub fn service_class(&self) -> String {
        format!("{}Service", self.0)
    }

    pub fn service_contract(&self) -> String {
        format!("{}ServiceContract", self.0)
    }

    pub fn repository_class(&self) -> String {
        format!("{}Repository", self.0)
    }

    pub fn repository_contract(&self) -> String {
        format!("{}RepositoryContract", self.0)
    }

    // ── Derived file names ────────────────────────────────────────────────

    pub fn service_file(&self) -> String {
        format!("{}Service.php", self.0)
    }

    pub fn service_contract_file(&self) -> String {
        format!("{}ServiceContract.php", self.0)
    }

    pub fn repository_file(&self) -> String {
        format!("{}Repository.php", self.0)
    }

    pub fn repository_contract_file(&self) -> String {
        format!("{}RepositoryContract.php", self.0)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_letter_is_capitalised() {
        assert_eq!(EntityName::new("order").unwrap().as_str(), "Order");
        assert_eq!(EntityName::new("Order").unwrap().as_str(), "Order");
    }

    #[test]
    fn rest_of_name_is_untouched() {
        assert_eq!(
            EntityName::new("userProfile").unwrap().as_str(),
            "UserProfile"
        );
        assert_eq!(
            EntityName::new("invoice_line").unwrap().as_str(),
            "Invoice_line"
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            EntityName::new(""),
            Err(DomainError::InvalidEntityName { .. })
        ));
    }

    #[test]
    fn leading_digit_is_rejected() {
        assert!(EntityName::new("1order").is_err());
    }

    #[test]
    fn path_characters_are_rejected() {
        assert!(EntityName::new("a/b").is_err());
        assert!(EntityName::new("a-b").is_err());
        assert!(EntityName::new("a b").is_err());
    }

    #[test]
    fn derived_symbols() {
        let name = EntityName::new("order").unwrap();
        assert_eq!(name.service_class(), "OrderService");
        assert_eq!(name.service_contract(), "OrderServiceContract");
        assert_eq!(name.repository_class(), "OrderRepository");
        assert_eq!(name.repository_contract(), "OrderRepositoryContract");
    }

    #[test]
    fn derived_files_carry_php_extension() {
        let name = EntityName::new("order").unwrap();
        assert_eq!(name.service_file(), "OrderService.php");
        assert_eq!(name.repository_contract_file(), "OrderRepositoryContract.php");
    }
}
