//! Wire models for the backend API.
//!
//! Every endpoint answers with the same envelope: `{success, data?, error?,
//! message?}`. Dates travel as strings because the backend mixes plain
//! `YYYY-MM-DD` values with full ISO timestamps for server-defaulted rows.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Standard response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A blog post with bilingual fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title_fa: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub excerpt_fa: String,
    #[serde(default)]
    pub excerpt_en: String,
    #[serde(default)]
    pub content_fa: String,
    #[serde(default)]
    pub content_en: String,
    #[serde(default)]
    pub category_fa: String,
    #[serde(default)]
    pub category_en: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Post {
    /// Today's date in the form the date input uses, the default for a new
    /// post.
    pub fn default_date() -> String {
        Utc::now().date_naive().to_string()
    }
}

/// A skill entry. The list endpoint returns these ordered by `order_index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub order_index: i32,
}

/// The singleton profile record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name_fa: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub title_fa: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub about_fa: String,
    #[serde(default)]
    pub about_en: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{"success": true, "data": [{"name": "Python", "progress": 90}]}"#;
        let envelope: Envelope<Vec<Skill>> =
            serde_json::from_str(json).expect("Should deserialize");

        assert!(envelope.success);
        let skills = envelope.data.expect("data present");
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Python");
        assert_eq!(skills[0].progress, 90);
        assert_eq!(skills[0].order_index, 0);
    }

    #[test]
    fn test_envelope_failure_without_data() {
        let json = r#"{"success": false, "error": "Post not found"}"#;
        let envelope: Envelope<Post> = serde_json::from_str(json).expect("Should deserialize");

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Post not found"));
    }

    #[test]
    fn test_post_serialization_skips_absent_id() {
        let post = Post {
            title_fa: "عنوان".to_string(),
            date: "2026-08-28".to_string(),
            ..Post::default()
        };

        let json = serde_json::to_string(&post).expect("Should serialize");
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("created_at"));
        assert!(json.contains("عنوان"));
        assert!(json.contains("2026-08-28"));
    }

    #[test]
    fn test_post_deserialize_server_row() {
        let json = r#"{
            "id": 7,
            "title_fa": "سلام",
            "title_en": "Hello",
            "date": "2026-08-28T10:30:00",
            "published": true,
            "created_at": "2026-08-28T10:30:00"
        }"#;

        let post: Post = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(post.id, Some(7));
        assert!(post.published);
        assert_eq!(post.excerpt_en, "");
    }

    #[test]
    fn test_default_date_format() {
        let date = Post::default_date();
        // YYYY-MM-DD
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
    }

    #[test]
    fn test_personal_info_deserialize_empty_object() {
        let info: PersonalInfo = serde_json::from_str("{}").expect("Should deserialize");
        assert_eq!(info.name_fa, "");
        assert_eq!(info.email, "");
    }
}
