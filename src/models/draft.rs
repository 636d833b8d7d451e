//! Draft form input
//!
//! A draft holds what the user has typed so far for one section, as strings
//! keyed by the wire field name. Drafts are never validated on their own;
//! the validators in [`crate::validation`] turn them into typed records.

use serde_json::Value;

use crate::error::{RegistrationError, RegistrationResult};

/// Describes one field of a draft section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire key, e.g. `firstName`
    pub key: &'static str,
    /// Human-readable label, e.g. `First name`
    pub label: &'static str,
    /// Whether the validator rejects the field when it is empty
    pub required: bool,
}

/// Field-addressable access shared by every draft section, so form prompts
/// and file loaders can work on any of them
pub trait FormDraft: Default {
    fn fields() -> &'static [FieldSpec];

    fn field(&self, key: &str) -> Option<&str>;

    fn set_field(&mut self, key: &str, value: String) -> RegistrationResult<()>;
}

/// Build a draft from a JSON object; scalars of any type are taken as text.
/// A key the section does not have is an `UnknownField` error.
pub fn draft_from_value<D: FormDraft>(value: &Value) -> RegistrationResult<D> {
    fill_draft(value, false)
}

/// Like [`draft_from_value`], but keys the section does not have are skipped
pub fn known_fields_from_value<D: FormDraft>(value: &Value) -> RegistrationResult<D> {
    fill_draft(value, true)
}

fn fill_draft<D: FormDraft>(value: &Value, skip_unknown: bool) -> RegistrationResult<D> {
    let object = value
        .as_object()
        .ok_or_else(|| RegistrationError::Validation("Expected an object of fields".into()))?;

    let mut draft = D::default();
    for (key, field) in object {
        if skip_unknown && !D::fields().iter().any(|spec| spec.key == key) {
            continue;
        }
        let text = match field {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => {
                return Err(RegistrationError::Validation(format!(
                    "Field '{}' must be a single value",
                    key
                )))
            }
        };
        draft.set_field(key, text)?;
    }
    Ok(draft)
}

/// Generates a draft struct whose fields are all `Option<String>`.
///
/// Each field is declared as `ident => "wireKey", "Label", required;`. The
/// generated type gets a `FIELDS` catalogue, string-keyed `get`/`set`, and
/// `merge`, which overlays only the fields present in the patch.
macro_rules! define_draft {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $section:tt {
            $( $field:ident => $key:tt, $label:tt, $required:tt; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )*
        }

        impl $name {
            /// Section name used in error messages
            pub const SECTION: &'static str = $section;

            /// Field catalogue in display order
            pub const FIELDS: &'static [$crate::models::draft::FieldSpec] = &[
                $(
                    $crate::models::draft::FieldSpec {
                        key: $key,
                        label: $label,
                        required: $required,
                    },
                )*
            ];

            /// Get a field by wire key
            pub fn get(&self, key: &str) -> Option<&str> {
                match key {
                    $( $key => self.$field.as_deref(), )*
                    _ => None,
                }
            }

            /// Set a field by wire key
            pub fn set(
                &mut self,
                key: &str,
                value: impl Into<String>,
            ) -> $crate::error::RegistrationResult<()> {
                let slot = match key {
                    $( $key => &mut self.$field, )*
                    _ => {
                        return Err($crate::error::RegistrationError::unknown_field(
                            $section, key,
                        ))
                    }
                };
                *slot = Some(value.into());
                Ok(())
            }

            /// Overlay every field that is present in `patch`
            pub fn merge(&mut self, patch: Self) {
                $(
                    if patch.$field.is_some() {
                        self.$field = patch.$field;
                    }
                )*
            }

            /// True when no field has been touched
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }

        impl $crate::models::draft::FormDraft for $name {
            fn fields() -> &'static [$crate::models::draft::FieldSpec] {
                Self::FIELDS
            }

            fn field(&self, key: &str) -> Option<&str> {
                self.get(key)
            }

            fn set_field(&mut self, key: &str, value: String) -> $crate::error::RegistrationResult<()> {
                self.set(key, value)
            }
        }
    };
}

pub(crate) use define_draft;

#[cfg(test)]
mod tests {
    use super::*;

    define_draft! {
        /// Two-field draft for exercising the macro
        pub struct SampleDraft as "sample" {
            name => "fullName", "Full name", true;
            town => "town", "Town", false;
        }
    }

    #[test]
    fn test_field_catalogue() {
        assert_eq!(SampleDraft::FIELDS.len(), 2);
        assert_eq!(SampleDraft::FIELDS[0].key, "fullName");
        assert!(SampleDraft::FIELDS[0].required);
        assert!(!SampleDraft::FIELDS[1].required);
    }

    #[test]
    fn test_get_and_set() {
        let mut draft = SampleDraft::default();
        assert!(draft.is_empty());

        draft.set("fullName", "Abebe Kebede").unwrap();
        assert_eq!(draft.get("fullName"), Some("Abebe Kebede"));
        assert_eq!(draft.get("town"), None);
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_set_unknown_field() {
        let mut draft = SampleDraft::default();
        let err = draft.set("nickname", "x").unwrap_err();
        assert_eq!(err.to_string(), "Unknown field 'nickname' in sample");
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut draft = SampleDraft {
            name: Some("Abebe".into()),
            town: Some("Adama".into()),
        };
        draft.merge(SampleDraft {
            name: None,
            town: Some("Bishoftu".into()),
        });
        assert_eq!(draft.name.as_deref(), Some("Abebe"));
        assert_eq!(draft.town.as_deref(), Some("Bishoftu"));
    }

    #[test]
    fn test_from_value_takes_scalars_as_text() {
        let value = serde_json::json!({ "fullName": "Abebe", "town": 7, "ignored": null });
        let err = draft_from_value::<SampleDraft>(&value).unwrap_err();
        assert!(matches!(err, RegistrationError::UnknownField { .. }));

        let draft: SampleDraft = known_fields_from_value(&value).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Abebe"));
        assert_eq!(draft.town.as_deref(), Some("7"));
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let draft = SampleDraft {
            name: Some("Abebe".into()),
            town: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({ "fullName": "Abebe" }));
    }
}
