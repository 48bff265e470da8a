//! Enumerations shared by the database, the JSON API and the HTTP layer.
//!
//! Stored tokens and API tokens are the same upper-case strings, so each enum
//! carries a single mapping used by diesel, serde and strum alike.

mod auth_provider;
mod caret_style;
mod test_language;
mod test_type;
mod user_badge;

use std::str::FromStr;

pub use auth_provider::AuthProvider;
pub use caret_style::CaretStyle;
use strum::IntoEnumIterator;
pub use test_language::TestLanguage;
pub use test_type::TestType;
pub use user_badge::UserBadge;

/// Conversion between an enum variant and its stored token.
pub trait StoredToken: Copy + Into<&'static str> + FromStr + IntoEnumIterator {
    /// Returns the token stored in the database and exposed by the API.
    #[inline]
    fn as_token(self) -> &'static str {
        self.into()
    }

    /// Parses a stored token, returning `None` for unknown tokens.
    #[inline]
    fn from_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    /// Returns every token of this enum in declaration order.
    fn tokens() -> Vec<&'static str> {
        Self::iter().map(Self::as_token).collect()
    }
}

impl StoredToken for AuthProvider {}
impl StoredToken for CaretStyle {}
impl StoredToken for TestLanguage {}
impl StoredToken for TestType {}
impl StoredToken for UserBadge {}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::*;

    fn assert_round_trip<T>(expected: &[&str])
    where
        T: StoredToken + PartialEq + Debug + Serialize + DeserializeOwned,
    {
        assert_eq!(T::tokens(), expected);

        for variant in T::iter() {
            let token = variant.as_token();
            let restored = T::from_token(token).expect("every token parses back");
            assert_eq!(restored, variant);
            assert_eq!(T::from_token(restored.as_token()), Some(variant));

            let json = serde_json::to_value(variant).expect("serializes");
            assert_eq!(json, serde_json::Value::String(token.to_owned()));
            let parsed: T = serde_json::from_value(json).expect("deserializes");
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_type_tokens() {
        assert_round_trip::<TestType>(&["TIME", "WORDS"]);
    }

    #[test]
    fn test_language_tokens() {
        assert_round_trip::<TestLanguage>(&["ENGLISH", "SPANISH"]);
    }

    #[test]
    fn caret_style_tokens() {
        assert_round_trip::<CaretStyle>(&["LINE", "BLOCK", "HOLLOW"]);
    }

    #[test]
    fn user_badge_tokens() {
        assert_round_trip::<UserBadge>(&["DEFAULT", "PRO", "TESTER"]);
    }

    #[test]
    fn auth_provider_tokens() {
        assert_round_trip::<AuthProvider>(&["DEFAULT", "DISCORD", "GITHUB", "GOOGLE"]);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(TestType::from_token("time"), None);
        assert_eq!(CaretStyle::from_token("UNDERLINE"), None);
        assert_eq!(AuthProvider::from_token(""), None);
    }
}
