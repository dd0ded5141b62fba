//! Split unit and splitter configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The unit a document is cut into before windowing.
///
/// The unit decides what one "fragment" is; `split_length`, `split_overlap`,
/// and `split_threshold` all count fragments of this unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitUnit {
    /// Unicode-whitespace-delimited words, trailing whitespace retained.
    #[default]
    Word,
    /// Sentences from the configured [`SentenceDetector`](crate::SentenceDetector).
    Sentence,
    /// Blocks separated by two or more newlines.
    Passage,
    /// Blocks separated by form feed (`\f`) characters.
    Page,
    /// Newline-terminated lines.
    Line,
    /// Pieces produced by a registered custom function. Derived documents
    /// carry only `source_id`; chunk indexes, offsets, page numbers, and
    /// overlap metadata are not computed in this mode.
    Function,
}

impl std::fmt::Display for SplitUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Word => "word",
            Self::Sentence => "sentence",
            Self::Passage => "passage",
            Self::Page => "page",
            Self::Line => "line",
            Self::Function => "function",
        };
        f.write_str(name)
    }
}

fn default_split_length() -> usize {
    200
}

/// Configuration for a [`DocumentSplitter`](crate::DocumentSplitter).
///
/// Serializes to a flat key/value map and deserializes back, so a configured
/// splitter can be persisted and rebuilt. A custom splitting function is
/// carried as its registry name (see [`crate::register_splitting_function`]).
///
/// ```rust
/// use docsplit::{SplitConfig, SplitUnit};
///
/// let config = SplitConfig {
///     split_by: SplitUnit::Word,
///     split_length: 10,
///     split_overlap: 2,
///     ..SplitConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Unit of splitting.
    #[serde(default)]
    pub split_by: SplitUnit,
    /// Fragments per chunk. Must be greater than zero.
    #[serde(default = "default_split_length")]
    pub split_length: usize,
    /// Fragments repeated between adjacent chunks. Must be less than
    /// `split_length`.
    #[serde(default)]
    pub split_overlap: usize,
    /// Minimum fragment count for the final chunk; a shorter tail is folded
    /// into its predecessor. Zero disables merging.
    #[serde(default)]
    pub split_threshold: usize,
    /// Registry name of the custom splitting function. Required when
    /// `split_by` is [`SplitUnit::Function`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splitting_function: Option<String>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            split_by: SplitUnit::Word,
            split_length: default_split_length(),
            split_overlap: 0,
            split_threshold: 0,
            splitting_function: None,
        }
    }
}

impl SplitConfig {
    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `split_length` is zero, when the
    /// overlap is not smaller than the length, or when function mode lacks a
    /// splitting function name.
    pub fn validate(&self) -> Result<()> {
        if self.split_length == 0 {
            return Err(Error::InvalidSplitLength);
        }
        if self.split_overlap >= self.split_length {
            return Err(Error::OverlapExceedsLength {
                length: self.split_length,
                overlap: self.split_overlap,
            });
        }
        if self.split_by == SplitUnit::Function && self.splitting_function.is_none() {
            return Err(Error::MissingSplittingFunction);
        }
        Ok(())
    }

    /// Serialize to a generic JSON map.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::MalformedConfig(e.to_string()))
    }

    /// Deserialize from a generic JSON map and validate.
    ///
    /// # Errors
    ///
    /// Unknown split units, negative counts, and wrong value types all fail
    /// here, before a splitter is ever built.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value.clone())
            .map_err(|e| Error::MalformedConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_word_200() {
        let config = SplitConfig::default();
        assert_eq!(config.split_by, SplitUnit::Word);
        assert_eq!(config.split_length, 200);
        assert_eq!(config.split_overlap, 0);
        assert_eq!(config.split_threshold, 0);
        assert!(config.splitting_function.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_length_rejected() {
        let config = SplitConfig {
            split_length: 0,
            ..SplitConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidSplitLength)));
    }

    #[test]
    fn overlap_must_be_less_than_length() {
        let config = SplitConfig {
            split_length: 5,
            split_overlap: 5,
            ..SplitConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::OverlapExceedsLength {
                length: 5,
                overlap: 5
            })
        ));
    }

    #[test]
    fn function_mode_requires_a_name() {
        let config = SplitConfig {
            split_by: SplitUnit::Function,
            ..SplitConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::MissingSplittingFunction)
        ));
    }

    #[test]
    fn unknown_unit_is_a_config_error() {
        let value = serde_json::json!({ "split_by": "chapter" });
        assert!(matches!(
            SplitConfig::from_value(&value),
            Err(Error::MalformedConfig(_))
        ));
    }

    #[test]
    fn negative_overlap_is_a_config_error() {
        let value = serde_json::json!({ "split_overlap": -1 });
        assert!(matches!(
            SplitConfig::from_value(&value),
            Err(Error::MalformedConfig(_))
        ));
    }

    #[test]
    fn value_round_trip() {
        let config = SplitConfig {
            split_by: SplitUnit::Sentence,
            split_length: 3,
            split_overlap: 1,
            split_threshold: 2,
            splitting_function: None,
        };
        let value = config.to_value().unwrap();
        assert_eq!(value["split_by"], "sentence");
        assert!(value.get("splitting_function").is_none());
        let back = SplitConfig::from_value(&value).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn split_unit_display_matches_serde() {
        for unit in [
            SplitUnit::Word,
            SplitUnit::Sentence,
            SplitUnit::Passage,
            SplitUnit::Page,
            SplitUnit::Line,
            SplitUnit::Function,
        ] {
            let as_json = serde_json::to_value(unit).unwrap();
            assert_eq!(as_json, unit.to_string());
        }
    }
}
