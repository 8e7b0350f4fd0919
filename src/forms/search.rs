//! Bookmark search forms.
//!
//! The keyword prefix grammar described in the help text is interpreted by
//! the search engine, not here.

use serde::Serialize;

use super::fields::{checkbox_value, FieldKind, FieldMeta, FormData};

const MARKERS_HELP: &str = "\
The search string will be split into multiple keywords, each will be applied to a field based on prefix:
 - keywords starting with '.', '>' or ':' will be searched for in title, description and URL respectively
 - '#' will be searched for in tags (comma-separated, partial matches; not affected by Deep Search)
 - '#,' is the same but will match FULL tags only
 - '*' will be searched for in all fields (this prefix can be omitted in the 1st keyword)
Keywords need to be separated by placing spaces before the prefix.
";

const FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: "keywords",
        kind: FieldKind::List,
        label: "Keywords",
        description: "",
    },
    FieldMeta {
        name: "all_keywords",
        kind: FieldKind::Boolean,
        label: "Match all keywords",
        description: "Exclude partial matches (with multiple keywords)",
    },
    FieldMeta {
        name: "markers",
        kind: FieldKind::Boolean,
        label: "With markers",
        description: MARKERS_HELP,
    },
    FieldMeta {
        name: "deep",
        kind: FieldKind::Boolean,
        label: "Deep search",
        description: "When unset, only FULL words will be matched.",
    },
    FieldMeta {
        name: "regex",
        kind: FieldKind::Boolean,
        label: "Regex",
        description: "The keyword(s) are regular expressions (overrides other options).",
    },
];

/// Search criteria entered on the search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBookmarksForm {
    /// Always holds at least one (possibly empty) entry.
    pub keywords: Vec<String>,
    pub all_keywords: bool,
    pub markers: bool,
    pub deep: bool,
    pub regex: bool,
}

impl Default for SearchBookmarksForm {
    fn default() -> Self {
        Self {
            keywords: vec![String::new()],
            all_keywords: true,
            markers: true,
            deep: false,
            regex: false,
        }
    }
}

impl SearchBookmarksForm {
    /// Metadata of the form fields, in display order.
    pub fn fields() -> &'static [FieldMeta] {
        FIELDS
    }

    /// Read the form from a submission.
    ///
    /// Browsers omit unchecked boxes, so a missing checkbox is false even
    /// when nothing else was submitted. The initial state is [`Default`].
    pub fn from_form(data: &FormData) -> Self {
        let mut keywords = data.entries("keywords");
        if keywords.is_empty() {
            keywords.push(String::new());
        }

        Self {
            keywords,
            all_keywords: checkbox_value(data.get("all_keywords")),
            markers: checkbox_value(data.get("markers")),
            deep: checkbox_value(data.get("deep")),
            regex: checkbox_value(data.get("regex")),
        }
    }
}

/// Search form of the landing page, with an extra single-line keyword box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomeForm {
    #[serde(flatten)]
    pub search: SearchBookmarksForm,
    pub keyword: String,
}

impl HomeForm {
    pub fn from_form(data: &FormData) -> Self {
        Self {
            search: SearchBookmarksForm::from_form(data),
            keyword: data.get("keyword").unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_defaults() {
        let form = SearchBookmarksForm::default();
        assert_eq!(form.keywords, vec![String::new()]);
        assert!(form.all_keywords);
        assert!(form.markers);
        assert!(!form.deep);
        assert!(!form.regex);
    }

    #[test]
    fn test_empty_submission_unchecks_everything() {
        let form = SearchBookmarksForm::from_form(&FormData::default());
        assert_eq!(form.keywords, vec![String::new()]);
        assert!(!form.all_keywords);
        assert!(!form.markers);
        assert!(!form.deep);
        assert!(!form.regex);
    }

    #[test]
    fn test_submission_reads_keywords_and_toggles() {
        let data: FormData = [
            ("keywords-0", ".title"),
            ("keywords-1", "#tag"),
            ("deep", "y"),
            ("regex", "y"),
        ]
        .into_iter()
        .collect();
        let form = SearchBookmarksForm::from_form(&data);

        assert_eq!(form.keywords, vec![".title", "#tag"]);
        assert!(!form.all_keywords);
        assert!(!form.markers);
        assert!(form.deep);
        assert!(form.regex);
    }

    #[test]
    fn test_submission_without_keywords_keeps_one_entry() {
        let data: FormData = [("markers", "y")].into_iter().collect();
        let form = SearchBookmarksForm::from_form(&data);
        assert_eq!(form.keywords, vec![String::new()]);
        assert!(form.markers);
    }

    #[test]
    fn test_fields_describe_prefixes() {
        let markers = SearchBookmarksForm::fields()
            .iter()
            .find(|f| f.name == "markers")
            .unwrap();
        assert_eq!(markers.label, "With markers");
        assert!(markers.description.contains("'#,'"));
        assert_eq!(SearchBookmarksForm::fields().len(), 5);
    }

    #[test]
    fn test_home_form_keyword() {
        let data: FormData = [("keyword", "rust")].into_iter().collect();
        let form = HomeForm::from_form(&data);
        assert_eq!(form.keyword, "rust");
        assert!(!form.search.all_keywords);

        let serialized = serde_json::to_value(&form).unwrap();
        assert_eq!(serialized["keyword"], "rust");
        assert_eq!(serialized["keywords"], serde_json::json!([""]));
    }
}
