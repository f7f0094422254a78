use crate::{
    tags::{Tag, APPLICATION_ID, JSON_CONTENT_TYPE},
    types::{Address, Network},
};

use serde::{Deserialize, Serialize};

/// Kind of payload carried by an envelope.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContentType {
    #[default]
    WebSnippet,
    Text,
    Image,
}

/// Output of the summarization collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub summary: String,

    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mood: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub theme: Option<String>,
}

/// The unit of permanent storage.
///
/// Constructed once from validated input, never mutated. A published
/// envelope cannot be updated or deleted, corrections are new envelopes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentEnvelope {
    pub application_id: String,

    pub user: Address,

    pub content_type: ContentType,

    /// Source URL, web snippets only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,

    pub title: String,

    /// Extracted text, authored text or a base64 data URL.
    pub content: String,

    pub summary: String,

    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mood: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub theme: Option<String>,

    /// Milliseconds since UNIX epoch at submission time.
    pub timestamp: i64,

    pub network: Network,
}

impl ContentEnvelope {
    /// Build the tag set attached at submission, deterministically.
    ///
    /// Content tags become repeated `tag` entries, order preserved.
    pub fn tag_set(&self) -> Vec<Tag> {
        let mut tags = Vec::with_capacity(self.tags.len() + 6);

        tags.push(Tag::new("application-id", APPLICATION_ID));
        tags.push(Tag::new("user", self.user.to_string()));
        tags.push(Tag::new("content-type", self.content_type.to_string()));

        if let Some(url) = &self.url {
            tags.push(Tag::new("url", url));
        }

        tags.push(Tag::new("title", &self.title));
        tags.push(Tag::new("Content-Type", JSON_CONTENT_TYPE));

        for tag in &self.tags {
            tags.push(Tag::new("tag", tag));
        }

        tags
    }
}

/// An envelope resolved from the network, paired with its transaction id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: String,

    pub envelope: ContentEnvelope,
}

impl Snippet {
    pub fn timestamp(&self) -> i64 {
        self.envelope.timestamp
    }

    /// Permanent URL serving back the published bytes.
    pub fn gateway_url(&self) -> String {
        format!("{}{}", self.envelope.network.gateway_url(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_envelope() -> ContentEnvelope {
        ContentEnvelope {
            application_id: APPLICATION_ID.to_owned(),
            user: Address::try_from("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap(),
            content_type: ContentType::Text,
            url: None,
            title: "Haiku".to_owned(),
            content: "old pond...".to_owned(),
            summary: "A haiku about a pond.".to_owned(),
            tags: vec!["poetry".to_owned(), "nature".to_owned()],
            mood: None,
            theme: Some("stillness".to_owned()),
            timestamp: 1_700_000_000_000,
            network: Network::Devnet,
        }
    }

    #[test]
    fn envelope_json_roundtrip() {
        let envelope = text_envelope();

        let data = serde_json::to_vec(&envelope).unwrap();
        let decoded: ContentEnvelope = serde_json::from_slice(&data).unwrap();

        assert_eq!(envelope, decoded);
    }

    #[test]
    fn envelope_field_names() {
        let envelope = text_envelope();

        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["applicationId"], "IrysSnippetVault");
        assert_eq!(json["contentType"], "text");
        assert_eq!(json["user"], "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        assert_eq!(json["network"], "devnet");
        assert_eq!(json["tags"][1], "nature");

        // Absent options are omitted, like the original JSON documents.
        assert!(json.get("url").is_none());
        assert!(json.get("mood").is_none());
    }

    #[test]
    fn envelope_from_gateway_json() {
        let body = r#"{
            "applicationId": "IrysSnippetVault",
            "user": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "contentType": "web_snippet",
            "url": "https://example.com/article",
            "title": "An Article",
            "content": "Extracted text.",
            "summary": "Short summary.",
            "tags": ["reading"],
            "timestamp": 1700000000000,
            "network": "mainnet"
        }"#;

        let envelope: ContentEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.content_type, ContentType::WebSnippet);
        assert_eq!(envelope.url.as_deref(), Some("https://example.com/article"));
        assert_eq!(envelope.network, Network::Mainnet);
        assert_eq!(envelope.mood, None);
    }

    #[test]
    fn tag_set_order() {
        let envelope = text_envelope();

        let tags = envelope.tag_set();

        let pairs: Vec<(&str, &str)> = tags
            .iter()
            .map(|tag| (tag.name.as_str(), tag.value.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("application-id", "IrysSnippetVault"),
                ("user", "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
                ("content-type", "text"),
                ("title", "Haiku"),
                ("Content-Type", "application/json"),
                ("tag", "poetry"),
                ("tag", "nature"),
            ]
        );
    }

    #[test]
    fn tag_set_includes_url_for_web_snippets() {
        let mut envelope = text_envelope();
        envelope.content_type = ContentType::WebSnippet;
        envelope.url = Some("https://example.com".to_owned());

        let tags = envelope.tag_set();

        assert_eq!(tags[3], Tag::new("url", "https://example.com"));
    }

    #[test]
    fn gateway_url_follows_network() {
        let devnet = Snippet {
            id: "abc123".to_owned(),
            envelope: text_envelope(),
        };

        let mut mainnet = devnet.clone();
        mainnet.envelope.network = Network::Mainnet;

        assert_eq!(devnet.gateway_url(), "https://devnet.irys.xyz/abc123");
        assert_eq!(mainnet.gateway_url(), "https://gateway.irys.xyz/abc123");
    }
}
