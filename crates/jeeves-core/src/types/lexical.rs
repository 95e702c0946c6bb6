//! Lexical database documents.

use serde::{Deserialize, Deserializer, Serialize};

/// Lookup result for a single word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordDetails {
    /// The word that was looked up, when the provider echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Senses of the word. `None` when the provider knows nothing about it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<WordSense>>,
}

impl WordDetails {
    /// Details with no result set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the lookup carried no result set at all.
    pub fn is_empty(&self) -> bool {
        self.results.as_ref().map_or(true, |r| r.is_empty())
    }
}

/// One sense of a word with its relations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordSense {
    pub definition: String,
    #[serde(rename = "typeOf", alias = "type-of", default, deserialize_with = "one_or_many")]
    pub type_of: Vec<String>,
    #[serde(rename = "hasParts", alias = "has-parts", default, deserialize_with = "one_or_many")]
    pub has_parts: Vec<String>,
    #[serde(rename = "partOf", alias = "part-of", default, deserialize_with = "one_or_many")]
    pub part_of: Vec<String>,
    #[serde(rename = "instanceOf", alias = "instance-of", default, deserialize_with = "one_or_many")]
    pub instance_of: Vec<String>,
}

impl WordSense {
    /// Create a sense with only a definition.
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            ..Default::default()
        }
    }

    pub fn with_type_of(mut self, values: &[&str]) -> Self {
        self.type_of = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_has_parts(mut self, values: &[&str]) -> Self {
        self.has_parts = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Relation values followed by the definition, in research order.
    pub fn related_sentences(&self) -> Vec<&str> {
        self.type_of
            .iter()
            .chain(&self.has_parts)
            .chain(&self.part_of)
            .chain(&self.instance_of)
            .map(String::as_str)
            .chain(std::iter::once(self.definition.as_str()))
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<OneOrMany> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_string_or_list_relations() {
        let json = r#"{
            "word": "cat",
            "results": [
                {
                    "definition": "feline mammal usually having thick soft fur",
                    "typeOf": ["feline", "felid"],
                    "hasParts": "paw"
                },
                { "definition": "a whip with nine knotted cords", "instance-of": ["whip"] }
            ]
        }"#;

        let details: WordDetails = serde_json::from_str(json).unwrap();
        let results = details.results.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].type_of, vec!["feline", "felid"]);
        assert_eq!(results[0].has_parts, vec!["paw"]);
        assert!(results[0].part_of.is_empty());
        assert_eq!(results[1].instance_of, vec!["whip"]);
    }

    #[test]
    fn test_missing_results_is_empty() {
        let details: WordDetails = serde_json::from_str(r#"{"word": "zzyzx"}"#).unwrap();
        assert!(details.is_empty());
    }

    #[test]
    fn test_definition_is_mandatory() {
        let json = r#"{"results": [{"typeOf": ["feline"]}]}"#;
        assert!(serde_json::from_str::<WordDetails>(json).is_err());
    }

    #[test]
    fn test_related_sentences_end_with_definition() {
        let sense = WordSense::new("small domesticated carnivore")
            .with_type_of(&["feline"])
            .with_has_parts(&["paw", "whisker"]);
        assert_eq!(
            sense.related_sentences(),
            vec!["feline", "paw", "whisker", "small domesticated carnivore"]
        );
    }
}
