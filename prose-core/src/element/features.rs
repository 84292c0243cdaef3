//! Feature map
//!
//! Features are a string-keyed map so that upstream stages can attach any linguistic
//! annotation they like. The handful this crate reads are exposed through typed accessors
//! and their keys live in [keys].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Keys of the features read by the realisation stages
pub mod keys {
    pub const ELIDED: &str = "elided";
    pub const APPOSITIVE: &str = "appositive";
    pub const DISCOURSE_FUNCTION: &str = "discourse_function";
    pub const INTERROGATIVE: &str = "interrogative";
    pub const PASSIVE: &str = "passive";
}

/// A single feature value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Integer(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<DiscourseFunction> for FeatureValue {
    fn from(value: DiscourseFunction) -> Self {
        FeatureValue::Text(value.as_str().to_string())
    }
}

/// The grammatical role a constituent plays in its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscourseFunction {
    Subject,
    Head,
    Complement,
    PreModifier,
    PostModifier,
    FrontModifier,
    CuePhrase,
    Conjunction,
    VerbPhrase,
    Object,
    IndirectObject,
    Specifier,
    Auxiliary,
    Complementiser,
}

impl DiscourseFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscourseFunction::Subject => "SUBJECT",
            DiscourseFunction::Head => "HEAD",
            DiscourseFunction::Complement => "COMPLEMENT",
            DiscourseFunction::PreModifier => "PRE_MODIFIER",
            DiscourseFunction::PostModifier => "POST_MODIFIER",
            DiscourseFunction::FrontModifier => "FRONT_MODIFIER",
            DiscourseFunction::CuePhrase => "CUE_PHRASE",
            DiscourseFunction::Conjunction => "CONJUNCTION",
            DiscourseFunction::VerbPhrase => "VERB_PHRASE",
            DiscourseFunction::Object => "OBJECT",
            DiscourseFunction::IndirectObject => "INDIRECT_OBJECT",
            DiscourseFunction::Specifier => "SPECIFIER",
            DiscourseFunction::Auxiliary => "AUXILIARY",
            DiscourseFunction::Complementiser => "COMPLEMENTISER",
        }
    }

    /// Cue phrases and front modifiers share the "comma after" rule
    pub fn is_cue_like(&self) -> bool {
        matches!(
            self,
            DiscourseFunction::CuePhrase | DiscourseFunction::FrontModifier
        )
    }
}

impl fmt::Display for DiscourseFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown discourse function '{0}'")]
pub struct UnknownDiscourseFunction(pub String);

impl FromStr for DiscourseFunction {
    type Err = UnknownDiscourseFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let function = match s {
            "SUBJECT" => DiscourseFunction::Subject,
            "HEAD" => DiscourseFunction::Head,
            "COMPLEMENT" => DiscourseFunction::Complement,
            "PRE_MODIFIER" => DiscourseFunction::PreModifier,
            "POST_MODIFIER" => DiscourseFunction::PostModifier,
            "FRONT_MODIFIER" => DiscourseFunction::FrontModifier,
            "CUE_PHRASE" => DiscourseFunction::CuePhrase,
            "CONJUNCTION" => DiscourseFunction::Conjunction,
            "VERB_PHRASE" => DiscourseFunction::VerbPhrase,
            "OBJECT" => DiscourseFunction::Object,
            "INDIRECT_OBJECT" => DiscourseFunction::IndirectObject,
            "SPECIFIER" => DiscourseFunction::Specifier,
            "AUXILIARY" => DiscourseFunction::Auxiliary,
            "COMPLEMENTISER" => DiscourseFunction::Complementiser,
            other => return Err(UnknownDiscourseFunction(other.to_string())),
        };
        Ok(function)
    }
}

/// String-keyed feature map with typed accessors for the features the stages read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Features(BTreeMap<String, FeatureValue>);

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FeatureValue> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True only for an explicit boolean `true`
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(FeatureValue::Bool(true)))
    }

    pub fn is_elided(&self) -> bool {
        self.flag(keys::ELIDED)
    }

    pub fn set_elided(&mut self, elided: bool) {
        self.set(keys::ELIDED, elided);
    }

    pub fn is_appositive(&self) -> bool {
        self.flag(keys::APPOSITIVE)
    }

    pub fn set_appositive(&mut self, appositive: bool) {
        self.set(keys::APPOSITIVE, appositive);
    }

    pub fn is_interrogative(&self) -> bool {
        self.flag(keys::INTERROGATIVE)
    }

    pub fn set_interrogative(&mut self, interrogative: bool) {
        self.set(keys::INTERROGATIVE, interrogative);
    }

    pub fn is_passive(&self) -> bool {
        self.flag(keys::PASSIVE)
    }

    pub fn set_passive(&mut self, passive: bool) {
        self.set(keys::PASSIVE, passive);
    }

    /// The discourse function, if present and recognised
    pub fn discourse_function(&self) -> Option<DiscourseFunction> {
        match self.0.get(keys::DISCOURSE_FUNCTION) {
            Some(FeatureValue::Text(name)) => name.parse().ok(),
            _ => None,
        }
    }

    pub fn set_discourse_function(&mut self, function: DiscourseFunction) {
        self.set(keys::DISCOURSE_FUNCTION, function);
    }

    /// Describes the first read feature whose value has the wrong shape
    ///
    /// Flag keys must hold booleans and the discourse function must name a known function.
    /// Keys the stages never read are not checked.
    pub fn malformation(&self) -> Option<String> {
        const FLAGS: [&str; 4] = [
            keys::ELIDED,
            keys::APPOSITIVE,
            keys::INTERROGATIVE,
            keys::PASSIVE,
        ];
        for key in FLAGS {
            match self.0.get(key) {
                None | Some(FeatureValue::Bool(_)) => {}
                Some(other) => {
                    return Some(format!(
                        "feature '{}' must be a boolean, got {}",
                        key,
                        describe(other)
                    ))
                }
            }
        }
        match self.0.get(keys::DISCOURSE_FUNCTION) {
            None => None,
            Some(FeatureValue::Text(name)) => name
                .parse::<DiscourseFunction>()
                .err()
                .map(|err| err.to_string()),
            Some(other) => Some(format!(
                "feature '{}' must name a function, got {}",
                keys::DISCOURSE_FUNCTION,
                describe(other)
            )),
        }
    }
}

fn describe(value: &FeatureValue) -> String {
    match value {
        FeatureValue::Bool(b) => b.to_string(),
        FeatureValue::Integer(n) => n.to_string(),
        FeatureValue::Text(s) => format!("'{}'", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_require_explicit_true() {
        let mut features = Features::new();
        assert!(!features.is_elided());

        features.set(keys::ELIDED, "yes");
        assert!(!features.is_elided());

        features.set_elided(true);
        assert!(features.is_elided());
    }

    #[test]
    fn discourse_function_roundtrips_through_the_map() {
        let mut features = Features::new();
        features.set_discourse_function(DiscourseFunction::CuePhrase);
        assert_eq!(
            features.get(keys::DISCOURSE_FUNCTION),
            Some(&FeatureValue::Text("CUE_PHRASE".to_string()))
        );
        assert_eq!(
            features.discourse_function(),
            Some(DiscourseFunction::CuePhrase)
        );
    }

    #[test]
    fn unrecognised_function_reads_as_none() {
        let mut features = Features::new();
        features.set(keys::DISCOURSE_FUNCTION, "DANGLING");
        assert_eq!(features.discourse_function(), None);
        assert_eq!(
            "DANGLING".parse::<DiscourseFunction>(),
            Err(UnknownDiscourseFunction("DANGLING".to_string()))
        );
    }

    #[test]
    fn well_formed_features_pass_validation() {
        let features: Features = serde_json::from_str(
            r#"{"elided": false, "appositive": true, "discourse_function": "HEAD", "tense": 3}"#,
        )
        .unwrap();
        assert_eq!(features.malformation(), None);
        assert_eq!(Features::new().malformation(), None);
    }

    #[test]
    fn non_boolean_flag_is_malformed() {
        let mut features = Features::new();
        features.set(keys::ELIDED, "yes");
        assert_eq!(
            features.malformation().as_deref(),
            Some("feature 'elided' must be a boolean, got 'yes'")
        );

        let mut features = Features::new();
        features.set(keys::PASSIVE, 1_i64);
        assert_eq!(
            features.malformation().as_deref(),
            Some("feature 'passive' must be a boolean, got 1")
        );
    }

    #[test]
    fn unknown_discourse_function_is_malformed() {
        let mut features = Features::new();
        features.set(keys::DISCOURSE_FUNCTION, "PREMODIFIER");
        assert_eq!(
            features.malformation().as_deref(),
            Some("unknown discourse function 'PREMODIFIER'")
        );

        features.set(keys::DISCOURSE_FUNCTION, true);
        assert_eq!(
            features.malformation().as_deref(),
            Some("feature 'discourse_function' must name a function, got true")
        );
    }

    #[test]
    fn arbitrary_features_deserialise() {
        let features: Features =
            serde_json::from_str(r#"{"tense": "past", "person": 3, "elided": true}"#).unwrap();
        assert_eq!(features.get("tense"), Some(&FeatureValue::Text("past".into())));
        assert_eq!(features.get("person"), Some(&FeatureValue::Integer(3)));
        assert!(features.is_elided());
        assert_eq!(features.len(), 3);
    }
}
