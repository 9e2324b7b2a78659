/// The authenticated actor: upstream credentials plus the display name
/// derived from the login response.
///
/// The upstream system has no session or cookie concept, so `id` and
/// `password` are resent on every authenticated request. An `Identity` is
/// either fully populated or absent (`Option<Identity>` everywhere); the
/// constructors below refuse to build a partial one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Upstream login id.
    pub id: String,
    /// Upstream password, echoed back on each authenticated call.
    pub password: String,
    /// Full name as returned by the login endpoint.
    pub display_name: String,
    /// First whitespace-delimited token of `display_name`, used for
    /// compact display (sidebar footer).
    pub short_name: String,
}

impl Identity {
    /// Builds an `Identity` from a successful login response.
    ///
    /// Returns `None` if any resulting field would be empty, so callers can
    /// never observe a half-constructed identity.
    pub fn from_login(id: &str, password: &str, full_name: &str) -> Option<Identity> {
        let short_name = full_name.split_whitespace().next()?;
        Identity::from_parts(
            id.to_string(),
            password.to_string(),
            full_name.to_string(),
            short_name.to_string(),
        )
    }

    /// Assembles an `Identity` from already-separated fields, as restored
    /// from persistent storage. All four fields must be non-empty.
    pub fn from_parts(
        id: String,
        password: String,
        display_name: String,
        short_name: String,
    ) -> Option<Identity> {
        if id.is_empty() || password.is_empty() || display_name.is_empty() || short_name.is_empty()
        {
            return None;
        }
        Some(Identity {
            id,
            password,
            display_name,
            short_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_derives_short_name_from_first_token() {
        let identity = Identity::from_login("u1", "p1", "Tanaka Taro").unwrap();
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.password, "p1");
        assert_eq!(identity.display_name, "Tanaka Taro");
        assert_eq!(identity.short_name, "Tanaka");
    }

    #[test]
    fn single_token_name_is_its_own_short_name() {
        let identity = Identity::from_login("u1", "p1", "田中").unwrap();
        assert_eq!(identity.short_name, "田中");
    }

    #[test]
    fn empty_fields_never_build_an_identity() {
        assert_eq!(Identity::from_login("", "p1", "Tanaka Taro"), None);
        assert_eq!(Identity::from_login("u1", "", "Tanaka Taro"), None);
        assert_eq!(Identity::from_login("u1", "p1", ""), None);
        assert_eq!(Identity::from_login("u1", "p1", "   "), None);
        assert_eq!(
            Identity::from_parts("u1".into(), "p1".into(), "Tanaka Taro".into(), "".into()),
            None
        );
    }
}
