use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name given to users created without one.
pub const DEFAULT_NAME: &str = "Anonymous";
/// Waving hand, used when no usable emoji is supplied.
pub const DEFAULT_EMOJI: &str = "\u{1F44B}";

/// Immutable user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
}

/// Create/update input. Every field is optional; absent fields fall back to
/// defaults on create and to the stored values on update.
///
/// `id` is only consulted on create. Updates always keep the path id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserWriteModel {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
}

impl UserWriteModel {
    pub fn named(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self { id: None, name: Some(name.into()), emoji: Some(emoji.into()) }
    }
}

/// Blank test for emoji input. Unicode separators and ASCII control spacing
/// count, including the file/group/record/unit separators (U+001C..=U+001F).
/// No-break spaces (U+00A0, U+2007, U+202F) and NEL (U+0085) do not.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}

fn is_blank(s: &str) -> bool {
    s.chars().all(is_blank_char)
}

/// Resolve the effective `(name, emoji)` pair.
///
/// `name` is taken whenever present, even if empty. `emoji` is only taken when
/// it is not blank per `is_blank_char`.
pub fn resolve_fields(
    name: Option<String>,
    emoji: Option<String>,
    fallback_name: &str,
    fallback_emoji: &str,
) -> (String, String) {
    let name = name.unwrap_or_else(|| fallback_name.to_string());
    let emoji = emoji
        .filter(|e| !is_blank(e))
        .unwrap_or_else(|| fallback_emoji.to_string());
    (name, emoji)
}

impl User {
    /// Build a new record from a write request, generating an id when none is given.
    pub fn from_write(input: UserWriteModel) -> Self {
        let id = input.id.unwrap_or_else(Uuid::new_v4);
        let (name, emoji) = resolve_fields(input.name, input.emoji, DEFAULT_NAME, DEFAULT_EMOJI);
        Self { id, name, emoji }
    }

    /// Produce the replacement for `self`; the id is never taken from `input`.
    pub fn merged_with(&self, input: UserWriteModel) -> Self {
        let (name, emoji) = resolve_fields(input.name, input.emoji, &self.name, &self.emoji);
        Self { id: self.id, name, emoji }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_kept_but_blank_emoji_falls_back() {
        let (name, emoji) = resolve_fields(Some(String::new()), Some(" \t\n".into()), "x", "y");
        assert_eq!(name, "");
        assert_eq!(emoji, "y");
    }

    #[test]
    fn no_break_spaces_and_nel_are_kept_as_emoji() {
        for e in ["\u{00A0}", "\u{2007}", "\u{202F}", "\u{0085}"] {
            let (_, emoji) = resolve_fields(None, Some(e.into()), DEFAULT_NAME, DEFAULT_EMOJI);
            assert_eq!(emoji, e);
        }
    }

    #[test]
    fn separator_controls_and_unicode_spaces_count_as_blank() {
        for e in ["\u{001C}", "\u{001F}", "\u{2003}", "\u{3000}", "\u{2028}", " \u{001E}\t"] {
            let (_, emoji) = resolve_fields(None, Some(e.into()), DEFAULT_NAME, DEFAULT_EMOJI);
            assert_eq!(emoji, DEFAULT_EMOJI);
        }
    }

    #[test]
    fn absent_fields_fall_back() {
        let (name, emoji) = resolve_fields(None, None, DEFAULT_NAME, DEFAULT_EMOJI);
        assert_eq!(name, "Anonymous");
        assert_eq!(emoji, "👋");
    }

    #[test]
    fn merged_with_ignores_body_id() {
        let existing = User { id: Uuid::new_v4(), name: "Old".into(), emoji: "😀".into() };
        let input = UserWriteModel { id: Some(Uuid::new_v4()), name: None, emoji: Some("🎉".into()) };
        let merged = existing.merged_with(input);
        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.name, "Old");
        assert_eq!(merged.emoji, "🎉");
    }

    #[test]
    fn write_model_accepts_partial_and_null_json() {
        let w: UserWriteModel = serde_json::from_str(r#"{"name": null, "emoji": "🚀"}"#).unwrap();
        assert_eq!(w, UserWriteModel { id: None, name: None, emoji: Some("🚀".into()) });
        let empty: UserWriteModel = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, UserWriteModel::default());
    }

    #[test]
    fn user_serializes_to_flat_record() {
        let id = Uuid::new_v4();
        let u = User { id, name: "Eve Eerie".into(), emoji: "🧙".into() };
        let json = serde_json::to_value(&u).unwrap();
        assert_eq!(json, serde_json::json!({"id": id.to_string(), "name": "Eve Eerie", "emoji": "🧙"}));
    }
}
