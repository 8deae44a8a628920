use strum::{AsRefStr, Display, EnumString};

/// Category stored in `usuarios.roll`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Estudiante,
    Profesor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_stored_role_names() {
        assert_eq!(Role::from_str("profesor").unwrap(), Role::Profesor);
        assert_eq!(Role::from_str("estudiante").unwrap(), Role::Estudiante);
    }

    #[test]
    fn role_names_are_case_sensitive() {
        assert!(Role::from_str("Profesor").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn displays_as_stored_name() {
        assert_eq!(Role::Profesor.to_string(), "profesor");
        assert_eq!(Role::Estudiante.as_ref(), "estudiante");
    }
}
