//! Element categories
//!
//! Categories come in three families: lexical (the part of speech of a word), phrasal (the
//! kind of constituent a group forms) and document (the structural role of a node). All
//! variant names are distinct across families, so a category serialises as a bare string
//! such as `"noun"`, `"clause"` or `"list_item"`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Determiner,
    Pronoun,
    Conjunction,
    Complementiser,
    Modal,
    Auxiliary,
    Symbol,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCategory {
    Clause,
    NounPhrase,
    VerbPhrase,
    AdjectivePhrase,
    AdverbPhrase,
    PrepositionalPhrase,
    CannedText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Document,
    Section,
    Paragraph,
    Sentence,
    List,
    EnumeratedList,
    ListItem,
}

/// The category of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Lexical(LexicalCategory),
    Phrase(PhraseCategory),
    Document(DocumentCategory),
}

impl LexicalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexicalCategory::Noun => "noun",
            LexicalCategory::Verb => "verb",
            LexicalCategory::Adjective => "adjective",
            LexicalCategory::Adverb => "adverb",
            LexicalCategory::Preposition => "preposition",
            LexicalCategory::Determiner => "determiner",
            LexicalCategory::Pronoun => "pronoun",
            LexicalCategory::Conjunction => "conjunction",
            LexicalCategory::Complementiser => "complementiser",
            LexicalCategory::Modal => "modal",
            LexicalCategory::Auxiliary => "auxiliary",
            LexicalCategory::Symbol => "symbol",
            LexicalCategory::Any => "any",
        }
    }
}

impl PhraseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseCategory::Clause => "clause",
            PhraseCategory::NounPhrase => "noun_phrase",
            PhraseCategory::VerbPhrase => "verb_phrase",
            PhraseCategory::AdjectivePhrase => "adjective_phrase",
            PhraseCategory::AdverbPhrase => "adverb_phrase",
            PhraseCategory::PrepositionalPhrase => "prepositional_phrase",
            PhraseCategory::CannedText => "canned_text",
        }
    }
}

impl DocumentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Document => "document",
            DocumentCategory::Section => "section",
            DocumentCategory::Paragraph => "paragraph",
            DocumentCategory::Sentence => "sentence",
            DocumentCategory::List => "list",
            DocumentCategory::EnumeratedList => "enumerated_list",
            DocumentCategory::ListItem => "list_item",
        }
    }
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lexical(c) => c.as_str(),
            Category::Phrase(c) => c.as_str(),
            Category::Document(c) => c.as_str(),
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Category::Document(_))
    }

    pub fn as_document(&self) -> Option<DocumentCategory> {
        match self {
            Category::Document(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(self, Category::Lexical(LexicalCategory::Verb))
    }
}

impl From<LexicalCategory> for Category {
    fn from(c: LexicalCategory) -> Self {
        Category::Lexical(c)
    }
}

impl From<PhraseCategory> for Category {
    fn from(c: PhraseCategory) -> Self {
        Category::Phrase(c)
    }
}

impl From<DocumentCategory> for Category {
    fn from(c: DocumentCategory) -> Self {
        Category::Document(c)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_serialise_as_bare_names() {
        let json = serde_json::to_string(&Category::Document(DocumentCategory::ListItem)).unwrap();
        assert_eq!(json, "\"list_item\"");

        let parsed: Category = serde_json::from_str("\"verb_phrase\"").unwrap();
        assert_eq!(parsed, Category::Phrase(PhraseCategory::VerbPhrase));

        let parsed: Category = serde_json::from_str("\"noun\"").unwrap();
        assert_eq!(parsed, Category::Lexical(LexicalCategory::Noun));
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_json::from_str::<Category>("\"chapter\"").is_err());
    }

    #[test]
    fn document_family_helpers() {
        let sentence: Category = DocumentCategory::Sentence.into();
        assert!(sentence.is_document());
        assert_eq!(sentence.as_document(), Some(DocumentCategory::Sentence));
        assert_eq!(Category::from(LexicalCategory::Verb).as_document(), None);
        assert!(Category::from(LexicalCategory::Verb).is_verb());
    }
}
