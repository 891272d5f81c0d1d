//! Custom serde deserializers for free-text PubMed XML fields

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::result;

/// Text content of an element, with any nested child elements skipped
///
/// Titles and affiliations occasionally carry markup that survives
/// preprocessing (MathML, `<named-content>` and the like). Deserializing those
/// straight into a `String` fails, so the text parts are collected and joined
/// instead.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct XmlText(pub String);

impl XmlText {
    /// Trimmed text, `None` when empty
    pub fn into_non_empty(self) -> Option<String> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for XmlText {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct XmlTextVisitor;

        impl<'de> Visitor<'de> for XmlTextVisitor {
            type Value = XmlText;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("element text content")
            }

            fn visit_str<E>(self, value: &str) -> result::Result<XmlText, E>
            where
                E: de::Error,
            {
                Ok(XmlText(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> result::Result<XmlText, E>
            where
                E: de::Error,
            {
                Ok(XmlText(value))
            }

            fn visit_unit<E>(self) -> result::Result<XmlText, E>
            where
                E: de::Error,
            {
                Ok(XmlText::default())
            }

            fn visit_map<M>(self, mut map: M) -> result::Result<XmlText, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut text_parts = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "$text" || key == "$value" {
                        let value: String = map.next_value()?;
                        text_parts.push(value);
                    } else {
                        // Attributes and nested elements
                        let _: de::IgnoredAny = map.next_value()?;
                    }
                }
                Ok(XmlText(text_parts.join(" ")))
            }
        }

        deserializer.deserialize_any(XmlTextVisitor)
    }
}
