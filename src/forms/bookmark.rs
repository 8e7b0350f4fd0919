//! Bookmark form of the browser interface.

use serde::Serialize;

use super::fields::{hidden_flag, FieldKind, FieldMeta, FormData};
use super::validators::{input_required, FieldError, FieldErrors, FormError};

/// HTML name the URL is submitted under.
pub const URL_FIELD: &str = "link";

const FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: URL_FIELD,
        kind: FieldKind::Text,
        label: "Url",
        description: "",
    },
    FieldMeta {
        name: "title",
        kind: FieldKind::Text,
        label: "Title",
        description: "",
    },
    FieldMeta {
        name: "tags",
        kind: FieldKind::Text,
        label: "Tags",
        description: "",
    },
    FieldMeta {
        name: "description",
        kind: FieldKind::TextArea,
        label: "Description",
        description: "",
    },
    FieldMeta {
        name: "fetch",
        kind: FieldKind::Hidden,
        label: "Fetch",
        description: "",
    },
];

/// A bookmark as entered in the create/edit page; tags stay a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookmarkForm {
    pub url: String,
    pub title: String,
    pub tags: String,
    pub description: String,
    /// Fetch title and description from the page.
    pub fetch: bool,
}

impl BookmarkForm {
    pub fn fields() -> &'static [FieldMeta] {
        FIELDS
    }

    pub fn from_form(data: &FormData) -> Result<Self, FormError> {
        let url = data.get(URL_FIELD);

        let mut errors = FieldErrors::new();
        if let Err(message) = input_required(url) {
            errors.insert(URL_FIELD.to_string(), FieldError::Messages(vec![message]));
        }
        FormError::check(errors)?;

        let text = |name: &str| data.get(name).unwrap_or_default().to_string();
        Ok(Self {
            url: url.unwrap_or_default().to_string(),
            title: text("title"),
            tags: text("tags"),
            description: text("description"),
            fetch: hidden_flag(data.get("fetch")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validators::REQUIRED;

    #[test]
    fn test_full_submission() {
        let data: FormData = [
            ("link", "https://example.com"),
            ("title", "Example"),
            ("tags", "a,b"),
            ("description", "desc"),
            ("fetch", "1"),
        ]
        .into_iter()
        .collect();
        let form = BookmarkForm::from_form(&data).unwrap();

        assert_eq!(form.url, "https://example.com");
        assert_eq!(form.title, "Example");
        assert_eq!(form.tags, "a,b");
        assert_eq!(form.description, "desc");
        assert!(form.fetch);
    }

    #[test]
    fn test_url_is_required() {
        for data in [
            FormData::default(),
            [("link", ""), ("title", "x")].into_iter().collect(),
            // the field is named `link`, not `url`
            [("url", "https://example.com")].into_iter().collect(),
        ] {
            let err = BookmarkForm::from_form(&data).unwrap_err();
            assert_eq!(
                err.errors().get("link"),
                Some(&FieldError::Messages(vec![REQUIRED.to_string()]))
            );
        }
    }

    #[test]
    fn test_missing_optional_fields_are_empty() {
        let data: FormData = [("link", "https://example.com")].into_iter().collect();
        let form = BookmarkForm::from_form(&data).unwrap();
        assert_eq!(form.title, "");
        assert_eq!(form.tags, "");
        assert!(!form.fetch);
    }

    #[test]
    fn test_empty_fetch_is_false() {
        let data: FormData = [("link", "https://example.com"), ("fetch", "")]
            .into_iter()
            .collect();
        assert!(!BookmarkForm::from_form(&data).unwrap().fetch);
    }
}
