//! Recursive structural validation of article documents.
//!
//! Each schema type has one method that checks a JSON value and builds the
//! matching model type. Methods return `None` after emitting a diagnostic, and
//! keep checking sibling fields so one run reports every mismatch. The
//! recursive variants (definitions inside definitions, quote insets inside
//! items) call back into the same methods without a depth limit.

use serde_json::{Map, Value};

use ordbok_core::{
    article::{
        Article, ArticleRef, Body, CompoundList, ConceptKind, Content, Definition,
        DefinitionElement, EtymologyEntry, EtymologyKind, Example, Explanation, Item, Lemma,
        LemmaRef, ParadigmInfo, SubArticle,
    },
    non_empty::NonEmpty,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    path::JsonPath,
};

type Object = Map<String, Value>;

const TAG_FIELD: &str = "type_";

const ITEM_TAGS: &[&str] = &[
    "article_ref",
    "usage",
    "relation",
    "entity",
    "grammar",
    "rhetoric",
    "temporal",
    "domain",
    "language",
    "superscript",
    "subscript",
    "fraction",
    "quote_inset",
];

const ELEMENT_TAGS: &[&str] = &[
    "definition",
    "explanation",
    "example",
    "compound_list",
    "sub_article",
];

const ETYMOLOGY_TAGS: &[&str] = &[
    "etymology_language",
    "etymology_reference",
    "etymology_litt",
];

/// Largest integer a JSON number can carry without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Walks a JSON value and builds the article model.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    collector: DiagnosticCollector,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn into_collector(self) -> DiagnosticCollector {
        self.collector
    }

    // =========================================================================
    // Article
    // =========================================================================

    pub(crate) fn article(&mut self, value: &Value, path: &JsonPath) -> Option<Article> {
        let obj = self.object(value, path)?;

        let article_id = self
            .required(obj, "article_id", path)
            .and_then(|v| self.unsigned(v, &path.field("article_id")));
        let lemmas = self.non_empty_field(obj, "lemmas", path, Self::lemma);
        let body = self
            .required(obj, "body", path)
            .and_then(|v| self.body(v, &path.field("body")));

        Some(Article::new(article_id?, lemmas?, body?))
    }

    fn lemma(&mut self, value: &Value, path: &JsonPath) -> Option<Lemma> {
        let obj = self.object(value, path)?;

        let hgno = self.required(obj, "hgno", path).and_then(|v| {
            let hgno_path = path.field("hgno");
            let hgno = self.unsigned(v, &hgno_path)?;
            self.fits_u32(hgno, &hgno_path)
        });
        let inflection_class = self.optional_string(obj, "inflection_class", path);
        let paradigm_info = self.non_empty_field(obj, "paradigm_info", path, Self::paradigm_info);
        let lemma = self.string_field(obj, "lemma", path);

        Some(Lemma::new(lemma?, hgno?, inflection_class?, paradigm_info?))
    }

    fn paradigm_info(&mut self, value: &Value, path: &JsonPath) -> Option<ParadigmInfo> {
        let obj = self.object(value, path)?;
        let inflection_group = self.string_field(obj, "inflection_group", path)?;
        Some(ParadigmInfo::new(inflection_group))
    }

    fn body(&mut self, value: &Value, path: &JsonPath) -> Option<Body> {
        let obj = self.object(value, path)?;

        let etymology = match obj.get("etymology") {
            None => Some(None),
            Some(v) => {
                let etymology_path = path.field("etymology");
                self.array(v, &etymology_path)
                    .and_then(|values| self.sequence(values, &etymology_path, Self::etymology))
                    .map(Some)
            }
        };
        let definition = self.single_definition(obj, path);

        Some(Body::new(etymology?, definition?))
    }

    /// Checks `body.definitions`, which must hold exactly one definition.
    fn single_definition(&mut self, obj: &Object, path: &JsonPath) -> Option<Definition> {
        let values = self.array_field(obj, "definitions", path)?;
        let definitions_path = path.field("definitions");
        let definitions = self.sequence(values, &definitions_path, Self::definition)?;

        match <[Definition; 1]>::try_from(definitions) {
            Ok([definition]) => Some(definition),
            Err(definitions) => {
                self.emit(
                    Diagnostic::error(format!(
                        "expected exactly 1 element, found {}",
                        definitions.len()
                    ))
                    .with_code(ErrorCode::E102)
                    .at(definitions_path)
                    .with_help("an article has a single root definition"),
                );
                None
            }
        }
    }

    fn etymology(&mut self, value: &Value, path: &JsonPath) -> Option<EtymologyEntry> {
        let obj = self.object(value, path)?;

        let kind = self.tag(obj, path).and_then(|tag| {
            EtymologyKind::from_tag(tag).or_else(|| {
                self.unknown_tag(tag, ETYMOLOGY_TAGS, path);
                None
            })
        });
        let content = self.content_fields(obj, path);

        Some(EtymologyEntry::new(kind?, content?))
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn definition(&mut self, value: &Value, path: &JsonPath) -> Option<Definition> {
        let obj = self.object(value, path)?;
        let tag = self.tag(obj, path)?;
        if tag != "definition" {
            self.unknown_tag(tag, &["definition"], path);
            return None;
        }
        self.definition_fields(obj, path)
    }

    fn definition_fields(&mut self, obj: &Object, path: &JsonPath) -> Option<Definition> {
        let sub_definition = match obj.get("sub_definition") {
            None => Some(None),
            Some(v) => self.boolean(v, &path.field("sub_definition")).map(Some),
        };
        let elements = self.array_field(obj, "elements", path).and_then(|values| {
            self.sequence(values, &path.field("elements"), Self::definition_element)
        });

        Some(Definition::new(elements?, sub_definition?))
    }

    fn definition_element(&mut self, value: &Value, path: &JsonPath) -> Option<DefinitionElement> {
        let obj = self.object(value, path)?;
        let tag = self.tag(obj, path)?;

        match tag {
            "definition" => self
                .definition_fields(obj, path)
                .map(DefinitionElement::Definition),
            "explanation" => self
                .content_fields(obj, path)
                .map(|content| DefinitionElement::Explanation(Explanation::new(content))),
            "example" => self.example(obj, path).map(DefinitionElement::Example),
            "compound_list" => self
                .compound_list(obj, path)
                .map(DefinitionElement::CompoundList),
            "sub_article" => Some(DefinitionElement::SubArticle(SubArticle)),
            other => {
                self.unknown_tag(other, ELEMENT_TAGS, path);
                None
            }
        }
    }

    fn example(&mut self, obj: &Object, path: &JsonPath) -> Option<Example> {
        let quote = self
            .required(obj, "quote", path)
            .and_then(|v| self.content_object(v, &path.field("quote")));
        let explanation = self
            .required(obj, "explanation", path)
            .and_then(|v| self.content_object(v, &path.field("explanation")));

        Some(Example::new(quote?, explanation?))
    }

    fn compound_list(&mut self, obj: &Object, path: &JsonPath) -> Option<CompoundList> {
        let elements = self.non_empty_field(obj, "elements", path, Self::compound_element);
        let intro = self
            .required(obj, "intro", path)
            .and_then(|v| self.content_object(v, &path.field("intro")));

        Some(CompoundList::new(elements?, intro?))
    }

    /// Compound list elements are article references and nothing else.
    fn compound_element(&mut self, value: &Value, path: &JsonPath) -> Option<ArticleRef> {
        let obj = self.object(value, path)?;
        let tag = self.tag(obj, path)?;
        if tag != "article_ref" {
            self.unknown_tag(tag, &["article_ref"], path);
            return None;
        }
        self.article_ref(obj, path)
    }

    // =========================================================================
    // Content and items
    // =========================================================================

    /// Validates a standalone `{content, items}` object.
    fn content_object(&mut self, value: &Value, path: &JsonPath) -> Option<Content> {
        let obj = self.object(value, path)?;
        self.content_fields(obj, path)
    }

    /// Validates `content` and `items` fields embedded in a larger object.
    fn content_fields(&mut self, obj: &Object, path: &JsonPath) -> Option<Content> {
        let content = self.string_field(obj, "content", path);
        let items = self
            .array_field(obj, "items", path)
            .and_then(|values| self.sequence(values, &path.field("items"), Self::item));

        Some(Content::new(content?, items?))
    }

    fn item(&mut self, value: &Value, path: &JsonPath) -> Option<Item> {
        let obj = self.object(value, path)?;
        let tag = self.tag(obj, path)?;

        match tag {
            "article_ref" => self.article_ref(obj, path).map(Item::ArticleRef),
            "usage" => self
                .string_field(obj, "text", path)
                .map(|text| Item::Usage { text }),
            "superscript" => self
                .string_field(obj, "text", path)
                .map(|text| Item::Superscript { text }),
            "subscript" => self
                .string_field(obj, "text", path)
                .map(|text| Item::Subscript { text }),
            "fraction" => {
                let numerator = self.number_field(obj, "numerator", path);
                let denominator = self.number_field(obj, "denominator", path);
                Some(Item::Fraction {
                    numerator: numerator?,
                    denominator: denominator?,
                })
            }
            "quote_inset" => self.content_fields(obj, path).map(Item::QuoteInset),
            other => match ConceptKind::from_tag(other) {
                Some(kind) => self
                    .string_field(obj, "id", path)
                    .map(|id| Item::Concept { kind, id }),
                None => {
                    self.unknown_tag(other, ITEM_TAGS, path);
                    None
                }
            },
        }
    }

    fn article_ref(&mut self, obj: &Object, path: &JsonPath) -> Option<ArticleRef> {
        self.non_empty_field(obj, "lemmas", path, Self::lemma_ref)
            .map(ArticleRef::new)
    }

    fn lemma_ref(&mut self, value: &Value, path: &JsonPath) -> Option<LemmaRef> {
        let obj = self.object(value, path)?;
        self.string_field(obj, "lemma", path).map(LemmaRef::new)
    }

    // =========================================================================
    // Field helpers
    // =========================================================================

    fn required<'v>(&mut self, obj: &'v Object, name: &str, path: &JsonPath) -> Option<&'v Value> {
        let value = obj.get(name);
        if value.is_none() {
            self.emit(
                Diagnostic::error(format!("missing required field `{name}`"))
                    .with_code(ErrorCode::E100)
                    .at(path.clone()),
            );
        }
        value
    }

    fn tag<'v>(&mut self, obj: &'v Object, path: &JsonPath) -> Option<&'v str> {
        let value = self.required(obj, TAG_FIELD, path)?;
        match value {
            Value::String(tag) => Some(tag.as_str()),
            other => {
                self.type_mismatch(ErrorCode::E003, "string", other, &path.field(TAG_FIELD));
                None
            }
        }
    }

    fn string_field(&mut self, obj: &Object, name: &str, path: &JsonPath) -> Option<String> {
        let value = self.required(obj, name, path)?;
        self.string(value, &path.field(name))
    }

    /// Reads a field that may be absent; a present field must be a string.
    ///
    /// Returns `Some(None)` for an absent field and `None` on a mismatch.
    fn optional_string(
        &mut self,
        obj: &Object,
        name: &str,
        path: &JsonPath,
    ) -> Option<Option<String>> {
        match obj.get(name) {
            None => Some(None),
            Some(value) => self.string(value, &path.field(name)).map(Some),
        }
    }

    fn number_field(&mut self, obj: &Object, name: &str, path: &JsonPath) -> Option<f64> {
        let value = self.required(obj, name, path)?;
        self.coerced_number(value, &path.field(name))
    }

    fn array_field<'v>(
        &mut self,
        obj: &'v Object,
        name: &str,
        path: &JsonPath,
    ) -> Option<&'v [Value]> {
        let value = self.required(obj, name, path)?;
        self.array(value, &path.field(name))
    }

    /// Validates an array field whose elements must not be empty.
    fn non_empty_field<T>(
        &mut self,
        obj: &Object,
        name: &str,
        path: &JsonPath,
        element: fn(&mut Self, &Value, &JsonPath) -> Option<T>,
    ) -> Option<NonEmpty<T>> {
        let values = self.array_field(obj, name, path)?;
        let field_path = path.field(name);
        if values.is_empty() {
            self.emit(
                Diagnostic::error(format!("`{name}` must contain at least one element"))
                    .with_code(ErrorCode::E101)
                    .at(field_path),
            );
            return None;
        }
        let items = self.sequence(values, &field_path, element)?;
        NonEmpty::new(items)
    }

    /// Validates every element, reporting all failures before giving up.
    fn sequence<T>(
        &mut self,
        values: &[Value],
        path: &JsonPath,
        element: fn(&mut Self, &Value, &JsonPath) -> Option<T>,
    ) -> Option<Vec<T>> {
        let mut items = Vec::with_capacity(values.len());
        let mut complete = true;
        for (index, value) in values.iter().enumerate() {
            match element(self, value, &path.index(index)) {
                Some(item) => items.push(item),
                None => complete = false,
            }
        }
        complete.then_some(items)
    }

    // =========================================================================
    // Value helpers
    // =========================================================================

    fn object<'v>(&mut self, value: &'v Value, path: &JsonPath) -> Option<&'v Object> {
        match value {
            Value::Object(obj) => Some(obj),
            other => {
                self.type_mismatch(ErrorCode::E001, "object", other, path);
                None
            }
        }
    }

    fn array<'v>(&mut self, value: &'v Value, path: &JsonPath) -> Option<&'v [Value]> {
        match value {
            Value::Array(values) => Some(values.as_slice()),
            other => {
                self.type_mismatch(ErrorCode::E002, "array", other, path);
                None
            }
        }
    }

    fn string(&mut self, value: &Value, path: &JsonPath) -> Option<String> {
        match value {
            Value::String(text) => Some(text.clone()),
            other => {
                self.type_mismatch(ErrorCode::E003, "string", other, path);
                None
            }
        }
    }

    fn boolean(&mut self, value: &Value, path: &JsonPath) -> Option<bool> {
        match value {
            Value::Bool(flag) => Some(*flag),
            other => {
                self.type_mismatch(ErrorCode::E005, "boolean", other, path);
                None
            }
        }
    }

    /// Accepts a JSON number or a string holding a finite number.
    fn coerced_number(&mut self, value: &Value, path: &JsonPath) -> Option<f64> {
        let number = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        match number {
            Some(number) if number.is_finite() => Some(number),
            _ => {
                self.emit(
                    Diagnostic::error(format!(
                        "expected number or numeric string, found {}",
                        describe(value)
                    ))
                    .with_code(ErrorCode::E004)
                    .at(path.clone()),
                );
                None
            }
        }
    }

    /// Accepts a JSON number holding a non-negative integer.
    fn unsigned(&mut self, value: &Value, path: &JsonPath) -> Option<u64> {
        let integer = match value {
            Value::Number(number) => number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|n| n.fract() == 0.0 && (0.0..=MAX_SAFE_INTEGER).contains(n))
                    .map(|n| n as u64)
            }),
            _ => None,
        };
        if integer.is_none() {
            self.type_mismatch(ErrorCode::E006, "non-negative integer", value, path);
        }
        integer
    }

    fn fits_u32(&mut self, value: u64, path: &JsonPath) -> Option<u32> {
        match u32::try_from(value) {
            Ok(value) => Some(value),
            Err(_) => {
                self.emit(
                    Diagnostic::error(format!("integer {value} is out of range"))
                        .with_code(ErrorCode::E006)
                        .at(path.clone()),
                );
                None
            }
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    fn emit(&mut self, diagnostic: Diagnostic) {
        self.collector.emit(diagnostic);
    }

    fn type_mismatch(&mut self, code: ErrorCode, expected: &str, found: &Value, path: &JsonPath) {
        self.emit(
            Diagnostic::error(format!("expected {expected}, found {}", describe(found)))
                .with_code(code)
                .at(path.clone()),
        );
    }

    fn unknown_tag(&mut self, tag: &str, allowed: &[&str], path: &JsonPath) {
        let allowed = allowed
            .iter()
            .map(|tag| format!("`{tag}`"))
            .collect::<Vec<_>>()
            .join(", ");
        self.emit(
            Diagnostic::error(format!("unknown type tag `{tag}`"))
                .with_code(ErrorCode::E103)
                .at(path.field(TAG_FIELD))
                .with_help(format!("expected one of {allowed}")),
        );
    }
}

/// Names the JSON type of a value for diagnostics.
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
