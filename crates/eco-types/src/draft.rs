use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::identity::UserId;
use crate::post::PostKind;

/// Input to post creation.
///
/// The store accepts drafts as-is. Callers that take user input run
/// [`NewPost::validate`] first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: UserId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: PostKind,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewPost {
    /// An article draft with no image.
    pub fn new(
        user_id: impl Into<UserId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            content: content.into(),
            kind: PostKind::Article,
            image_url: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<PostKind>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Attach an image. An empty URL means no image; anything else is kept
    /// verbatim.
    pub fn with_image_url(mut self, url: Option<String>) -> Self {
        self.image_url = url.filter(|u| !u.is_empty());
        self
    }

    /// Presence check: title and content must contain non-whitespace text.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.title.trim().is_empty() {
            return Err(TypeError::EmptyField("title"));
        }
        if self.content.trim().is_empty() {
            return Err(TypeError::EmptyField("content"));
        }
        Ok(())
    }
}

/// Presence check for a comment body.
pub fn validate_comment_body(body: &str) -> Result<(), TypeError> {
    if body.trim().is_empty() {
        return Err(TypeError::EmptyField("content"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_validates() {
        let draft = NewPost::new("1", "T", "B");
        assert!(draft.validate().is_ok());
        assert_eq!(draft.kind, PostKind::Article);
        assert!(draft.image_url.is_none());
    }

    #[test]
    fn blank_title_is_rejected() {
        let draft = NewPost::new("1", "   ", "B");
        assert_eq!(draft.validate(), Err(TypeError::EmptyField("title")));
    }

    #[test]
    fn blank_content_is_rejected() {
        let draft = NewPost::new("1", "T", "\n\t");
        assert_eq!(draft.validate(), Err(TypeError::EmptyField("content")));
    }

    #[test]
    fn empty_image_url_becomes_none() {
        let draft = NewPost::new("1", "T", "B").with_image_url(Some(String::new()));
        assert!(draft.image_url.is_none());

        let draft = NewPost::new("1", "T", "B").with_image_url(Some(" ".into()));
        assert_eq!(draft.image_url.as_deref(), Some(" "));

        let draft = NewPost::new("1", "T", "B")
            .with_image_url(Some("https://example.com/p.png".into()));
        assert_eq!(draft.image_url.as_deref(), Some("https://example.com/p.png"));
    }

    #[test]
    fn comment_body_presence() {
        assert!(validate_comment_body("Nice!").is_ok());
        assert_eq!(
            validate_comment_body("  "),
            Err(TypeError::EmptyField("content"))
        );
    }

    #[test]
    fn draft_deserializes_with_defaults() {
        let draft: NewPost =
            serde_json::from_str(r#"{"user_id":"2","title":"T","content":"B"}"#).unwrap();
        assert_eq!(draft.kind, PostKind::Article);
        assert!(draft.image_url.is_none());

        let draft: NewPost = serde_json::from_str(
            r#"{"user_id":"2","title":"T","content":"B","type":"photo","image_url":null}"#,
        )
        .unwrap();
        assert_eq!(draft.kind, PostKind::Photo);
    }

    #[test]
    fn absent_text_fields_fail_validation() {
        let draft: NewPost = serde_json::from_str(r#"{"user_id":"2","content":"B"}"#).unwrap();
        assert_eq!(draft.validate(), Err(TypeError::EmptyField("title")));

        let draft: NewPost = serde_json::from_str(r#"{"user_id":"2","title":"T"}"#).unwrap();
        assert_eq!(draft.validate(), Err(TypeError::EmptyField("content")));
    }
}
