//! JSON API forms: tag lists and bookmark create/edit/range-edit.
//!
//! Tags arrive as a list of strings and leave as one delimiter-joined
//! string ready for the storage layer.

use serde::Serialize;
use serde_json::{Map, Value};

use super::fields::is_truthy;
use super::tags::join_tags;
use super::validators::{
    data_required, text_value, validate_tag, FieldError, FieldErrors, FormError,
    LIST_OF_TAGS_EXPECTED, SPECIFY_A_TAG,
};

/// JSON object submitted to an API form.
pub type JsonData = Map<String, Value>;

/// Rules of the `tags` list field.
#[derive(Debug, Clone, Copy)]
struct TagListRules {
    /// Entries the list is padded to when fewer are supplied.
    min_entries: usize,
    /// Every entry must be non-blank.
    required: bool,
}

const TAG_FORM_TAGS: TagListRules = TagListRules {
    min_entries: 1,
    required: true,
};

const BOOKMARK_FORM_TAGS: TagListRules = TagListRules {
    min_entries: 0,
    required: false,
};

/// Read `tags` from the input; `null` counts as not supplied.
fn tag_list(data: &JsonData) -> Result<Option<&[Value]>, FormError> {
    match data.get("tags") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(tags)) => Ok(Some(tags.as_slice())),
        Some(_) => Err(FormError::TypeMismatch {
            field: "tags",
            message: LIST_OF_TAGS_EXPECTED,
        }),
    }
}

fn check_tags(tags: Option<&[Value]>, rules: TagListRules, errors: &mut FieldErrors) {
    let tags = tags.unwrap_or_default();
    let padding = rules.min_entries.saturating_sub(tags.len());

    let entries: Vec<Vec<String>> = tags
        .iter()
        .map(Some)
        .chain(std::iter::repeat(None).take(padding))
        .map(|tag| {
            if rules.required {
                if let Err(message) = data_required(tag) {
                    return vec![message];
                }
            }
            match tag.map(validate_tag) {
                Some(Err(message)) => vec![message],
                _ => Vec::new(),
            }
        })
        .collect();

    if entries.iter().any(|messages| !messages.is_empty()) {
        tracing::debug!(?entries, "tag list rejected");
        errors.insert("tags".to_string(), FieldError::Entries(entries));
    }
}

/// Validated tags as plain strings; only called once every entry passed.
fn tag_strings(tags: Option<&[Value]>) -> Vec<String> {
    tags.unwrap_or_default()
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn check_text(data: &JsonData, name: &str, errors: &mut FieldErrors) -> Option<String> {
    match text_value(data.get(name)) {
        Ok(value) => value,
        Err(message) => {
            errors.insert(name.to_string(), FieldError::Messages(vec![message]));
            None
        }
    }
}

/// A non-empty list of tags, as used by the tag endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiTagForm {
    pub tags: Vec<String>,
    /// Tags joined by the delimiter.
    pub tags_str: String,
}

impl ApiTagForm {
    pub fn process_data(data: &JsonData) -> Result<Self, FormError> {
        let tags = tag_list(data)?;

        let mut errors = FieldErrors::new();
        check_tags(tags, TAG_FORM_TAGS, &mut errors);
        FormError::check(errors)?;

        let strings = tag_strings(tags);
        Ok(Self {
            tags_str: join_tags(&strings),
            tags: strings,
        })
    }
}

/// Whether the URL must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UrlRule {
    Required,
    Optional,
}

/// A bookmark submitted through the API, for create or edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiBookmarkForm {
    /// Unset on edit when the URL should stay as stored.
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Tags joined by the delimiter; unset when `tags` was not supplied.
    pub tags_str: Option<String>,
    /// Fetch title and description from the page.
    pub fetch: bool,
}

impl ApiBookmarkForm {
    /// Process a new bookmark; the URL is required.
    pub fn create(data: &JsonData) -> Result<Self, FormError> {
        Self::process_data(data, UrlRule::Required)
    }

    /// Process an update of an existing bookmark; every field is optional.
    pub fn edit(data: &JsonData) -> Result<Self, FormError> {
        Self::process_data(data, UrlRule::Optional)
    }

    fn process_data(data: &JsonData, url_rule: UrlRule) -> Result<Self, FormError> {
        let tags = tag_list(data)?;

        let mut errors = FieldErrors::new();
        let url = check_text(data, "url", &mut errors).filter(|url| !url.trim().is_empty());
        if url_rule == UrlRule::Required && !errors.contains_key("url") {
            if let Err(message) = data_required(data.get("url")) {
                errors.insert("url".to_string(), FieldError::Messages(vec![message]));
            }
        }
        let title = check_text(data, "title", &mut errors);
        let description = check_text(data, "description", &mut errors);
        check_tags(tags, BOOKMARK_FORM_TAGS, &mut errors);
        FormError::check(errors)?;

        let strings = tag_strings(tags);
        Ok(Self {
            url,
            title,
            description,
            tags_str: tags.map(|_| join_tags(&strings)),
            tags: strings,
            fetch: data.get("fetch").map_or(true, is_truthy),
        })
    }
}

/// An update applied to a range of bookmarks at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiBookmarkRangeEditForm {
    #[serde(flatten)]
    pub bookmark: ApiBookmarkForm,
    /// Remove the listed tags instead of adding them.
    pub del_tags: bool,
    /// `tags_str` prefixed with `+` (add) or `-` (remove).
    pub tags_in: Option<String>,
}

impl ApiBookmarkRangeEditForm {
    /// Supplied tags must name at least one tag: a bulk add or remove of
    /// nothing is rejected.
    pub fn process_data(data: &JsonData) -> Result<Self, FormError> {
        let bookmark = ApiBookmarkForm::edit(data)?;
        if bookmark.tags_str.as_deref() == Some("") {
            return Err(FormError::Invalid(FieldErrors::from([(
                "tags".to_string(),
                FieldError::Messages(vec![SPECIFY_A_TAG.to_string()]),
            )])));
        }
        let del_tags = data.get("del_tags").is_some_and(is_truthy);
        let sign = if del_tags { '-' } else { '+' };
        let tags_in = bookmark
            .tags_str
            .as_ref()
            .map(|tags| format!("{}{}", sign, tags));

        Ok(Self {
            bookmark,
            del_tags,
            tags_in,
        })
    }
}
