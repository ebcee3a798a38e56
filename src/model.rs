use reqwest::Url;
use serde::{Deserialize, Serialize};

/// The signed-in user as the backend represents it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Avatar location, if the backend sent a usable one.
    pub fn avatar(&self) -> Option<Url> {
        self.avatar_url.as_ref().and_then(|s| s.parse().ok())
    }
}

/// A service professional that appointments are booked with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Provider {
    pub fn avatar(&self) -> Option<Url> {
        self.avatar_url.as_ref().and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_is_parsed_leniently() {
        let mut user: User = serde_json::from_str(
            r#"{"id":"u1","name":"Ana","email":"ana@example.com","avatar_url":"http://cdn.example.com/a.jpg"}"#,
        )
        .unwrap();
        assert_eq!(
            user.avatar().map(|u| u.to_string()),
            Some("http://cdn.example.com/a.jpg".to_string())
        );

        user.avatar_url = Some("not a url".to_string());
        assert_eq!(user.avatar(), None);
    }

    #[test]
    fn missing_avatar_deserializes() {
        let provider: Provider = serde_json::from_str(r#"{"id":"p1","name":"Ana"}"#).unwrap();
        assert_eq!(provider.avatar_url, None);
        assert_eq!(provider.avatar(), None);
    }
}
