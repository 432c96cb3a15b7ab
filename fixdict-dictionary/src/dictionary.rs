//! Normalized FIX dictionary and the conversion producing it.
//!
//! This module provides:
//! - The records of the normalized dictionary (`FixDictionary`, `FieldDefinition`,
//!   `MessageDefinition`, ...), serializable to JSON
//! - The `FieldCatalog` every field reference is resolved against
//! - The `Converter` (and its `ConverterBuilder`) running the conversion stages
//! - Error and diagnostic types reported by the conversion
//!
//! A conversion is a single pass over the XML tree:
//! 1. version is read from the `<fix>` root
//! 2. `<fields>` is turned into the field list and the catalog
//! 3. `<header>` and `<trailer>` names are resolved against the catalog,
//!    unknown names are reported as diagnostics and skipped
//! 4. `<messages>` are built, an unknown field name in a message is fatal

use std::{
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::{debug, instrument, warn};

use crate::xml::Element;


/// Category assigned to messages declared without `msgcat`.
pub const DEFAULT_MSG_CAT: &str = "app";

const BEGIN_STRING_PREFIX: &str = "FIX.";

const ROOT_TAG: &str = "fix";
const FIELDS_TAG: &str = "fields";
const FIELD_TAG: &str = "field";
const MESSAGES_TAG: &str = "messages";
const MESSAGE_TAG: &str = "message";

// Value of the `required` attribute marking a mandatory field.
const REQUIRED_MARKER: &str = "Y";

/// Errors that can occur during dictionary conversion.
///
/// The `Display` form of every variant is the human readable message handed
/// to callers of [`convert_fix_xml`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input text is empty or contains only whitespace
    #[error("XML content is empty")]
    EmptyInput,

    /// Input text is not well formed XML
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    /// Dictionary structure validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON (de)serialization of a converted dictionary failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Version string is not in the `FIX.<major>.<minor>` form
    #[error("Invalid version `{0}`, expected FIX.<major>.<minor>")]
    InvalidVersion(String),
}

/// Errors related to dictionary structure and content validation.
///
/// Each of them aborts the conversion, no partial dictionary is returned.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Document root is not a `<fix>` element
    #[error("<fix> root tag not found")]
    MissingRoot,

    /// `major` or `minor` attribute of `<fix>` is missing
    #[error("could not determine FIX version, <fix> has no `{0}` attribute")]
    MissingVersion(&'static str),

    /// A `<field>` declaration in `<fields>` lacks `number`, `name` or `type`
    #[error("{field} in <fields> is missing required attribute `{attribute}`")]
    MissingFieldAttribute {
        field: ElementRef,
        attribute: &'static str,
    },

    /// A `<message>` lacks `name` or `msgtype`
    #[error("{message} in <messages> is missing required attribute `{attribute}`")]
    MissingMessageAttribute {
        message: ElementRef,
        attribute: &'static str,
    },

    /// A field reference inside a message lacks `name` or `required`
    #[error("{field} in message `{message}` is missing required attribute `{attribute}`")]
    MissingMessageFieldAttribute {
        message: String,
        field: ElementRef,
        attribute: &'static str,
    },

    /// A message references a field not declared in `<fields>`
    #[error("field `{field}` in message `{message}` not found in <fields>")]
    UnresolvedMessageField { message: String, field: String },
}

/// Locates an element within its section, for error messages.
///
/// Position is 1-based and counts only elements of the same kind. The name is
/// included when the element has one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElementRef {
    kind: &'static str,
    position: usize,
    name: Option<String>,
}

impl ElementRef {
    fn new(kind: &'static str, index: usize, name: Option<&str>) -> ElementRef {
        ElementRef {
            kind,
            position: index + 1,
            name: name.map(str::to_owned),
        }
    }

    /// Returns the element tag, e.g. `field` or `message`
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the 1-based position of the element within its section
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the element name, if it has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "<{}> #{} `{}`", self.kind, self.position, name),
            None => write!(f, "<{}> #{}", self.kind, self.position),
        }
    }
}

/// Section holding the standard header or trailer layout.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Section {
    Header,
    Trailer,
}

impl Section {
    /// Returns the (lower-cased) XML tag of this section
    pub const fn tag(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Trailer => "trailer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.tag())
    }
}

/// Non-fatal finding recorded during conversion.
///
/// Diagnostics never change the conversion outcome, the affected entries are
/// left out of the resulting dictionary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    /// Header/trailer references a field not declared in `<fields>`
    UnresolvedHeaderTrailerField { section: Section, field: String },

    /// Header/trailer entry has no `name` attribute
    UnnamedHeaderTrailerField { section: Section, position: usize },
}

impl Diagnostic {
    /// Returns the section the diagnostic was recorded in
    pub fn section(&self) -> Section {
        match self {
            Diagnostic::UnresolvedHeaderTrailerField { section, .. } => *section,
            Diagnostic::UnnamedHeaderTrailerField { section, .. } => *section,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedHeaderTrailerField { section, field } => write!(
                f,
                "field `{field}` referenced in {section} but absent from <fields>, entry skipped"
            ),
            Diagnostic::UnnamedHeaderTrailerField { section, position } => write!(
                f,
                "<field> #{position} in {section} has no `name` attribute, entry skipped"
            ),
        }
    }
}

/// FIX protocol version of a dictionary.
///
/// Rendered (and serialized) as the BeginString value `FIX.<major>.<minor>`.
/// Components are kept as written in the dictionary and may contain dots
/// themselves. A parsed BeginString is split at its first dot, so versions
/// compare by their BeginString rather than by components.
#[derive(Clone, Debug)]
pub struct Version {
    begin_string: String,
    major_len: usize,
}

impl Version {
    pub fn new(major: &str, minor: &str) -> Version {
        Version {
            begin_string: format!("{BEGIN_STRING_PREFIX}{major}.{minor}"),
            major_len: major.len(),
        }
    }

    fn minor_start(&self) -> usize {
        BEGIN_STRING_PREFIX.len() + self.major_len + 1
    }

    /// Returns the major version component
    pub fn major(&self) -> &str {
        &self.begin_string[BEGIN_STRING_PREFIX.len()..self.minor_start() - 1]
    }

    /// Returns the minor version component
    pub fn minor(&self) -> &str {
        &self.begin_string[self.minor_start()..]
    }

    /// Returns the BeginString representation of this version (e.g. "FIX.4.4")
    pub fn begin_string(&self) -> &str {
        &self.begin_string
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.begin_string == other.begin_string
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.begin_string.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.begin_string)
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Parses a BeginString value in the `FIX.<major>.<minor>` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixdict_dictionary::Version;
    ///
    /// let version: Version = "FIX.4.4".parse().unwrap();
    /// assert_eq!(version.major(), "4");
    /// assert_eq!(version.minor(), "4");
    /// assert!("FIXT.1.1".parse::<Version>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(BEGIN_STRING_PREFIX)
            .and_then(|rest| rest.split_once('.'))
            .filter(|(major, minor)| !major.is_empty() && !minor.is_empty())
            .map(|(major, minor)| Version::new(major, minor))
            .ok_or_else(|| Error::InvalidVersion(s.to_owned()))
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl de::Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a FIX.<major>.<minor> version string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

/// A field declared in the `<fields>` section.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// The tag number, as written in the dictionary
    pub tag: String,

    /// The field name, unique key of the catalog
    pub name: String,

    /// The FIX data type name (e.g. `STRING`, `PRICE`)
    #[serde(rename = "type")]
    pub data_type: String,
}

/// Catalog record of a field, keyed by the field name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogEntry {
    pub tag: String,
    pub data_type: String,
}

/// Name to `{tag, type}` lookup table built from the `<fields>` section.
///
/// Built once, before any reference is resolved, and never modified later.
/// When the same name is declared more than once, the last declaration wins.
#[derive(Clone, Debug, Default)]
pub struct FieldCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl FieldCatalog {
    /// Builds the catalog from field declarations in declaration order
    pub fn from_definitions(fields: &[FieldDefinition]) -> FieldCatalog {
        let mut entries = HashMap::with_capacity(fields.len());
        for field in fields {
            entries.insert(
                field.name.clone(),
                CatalogEntry {
                    tag: field.tag.clone(),
                    data_type: field.data_type.clone(),
                },
            );
        }
        FieldCatalog { entries }
    }

    /// Looks up a field by name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Returns the number of distinct field names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field is declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A header or trailer field, resolved to its tag.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HeaderTrailerEntry {
    pub name: String,
    pub tag: String,
}

/// A field referenced by a message.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MessageFieldRef {
    /// Tag copied from the field catalog
    pub tag: String,

    /// Name of the referenced field
    pub name: String,

    /// Whether the field is mandatory in this message
    pub required: bool,
}

/// A message declared in the `<messages>` section.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDefinition {
    /// Human-readable name of the message (e.g., "Heartbeat")
    pub name: String,

    /// Message type identifier (e.g., "0" for Heartbeat)
    pub msg_type: String,

    /// Message category, `admin` or `app` in standard dictionaries
    pub category: String,

    /// Field references in declaration order
    pub fields: Vec<MessageFieldRef>,
}

/// The normalized dictionary produced by a successful conversion.
///
/// Orderings of every list mirror the declaration order in the source XML.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixDictionary {
    version: Version,
    header: Vec<HeaderTrailerEntry>,
    trailer: Vec<HeaderTrailerEntry>,
    fields: Vec<FieldDefinition>,
    messages: Vec<MessageDefinition>,
}

impl FixDictionary {
    /// Returns the version of this dictionary
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Returns the resolved standard header layout
    pub fn header(&self) -> &[HeaderTrailerEntry] {
        &self.header
    }

    /// Returns the resolved standard trailer layout
    pub fn trailer(&self) -> &[HeaderTrailerEntry] {
        &self.trailer
    }

    /// Returns every field declaration, duplicates included
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Returns all messages
    pub fn messages(&self) -> &[MessageDefinition] {
        &self.messages
    }

    /// Looks up a field by name
    ///
    /// Follows the catalog rule: the last declaration of a name is returned.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().rev().find(|field| field.name == name)
    }

    /// Looks up a message by name
    pub fn message_by_name(&self, name: &str) -> Option<&MessageDefinition> {
        self.messages.iter().find(|msg| msg.name == name)
    }

    /// Looks up a message by message type (e.g. "D" for NewOrderSingle)
    pub fn message_by_type(&self, msg_type: &str) -> Option<&MessageDefinition> {
        self.messages.iter().find(|msg| msg.msg_type == msg_type)
    }

    /// Rebuilds the field catalog of this dictionary
    pub fn catalog(&self) -> FieldCatalog {
        FieldCatalog::from_definitions(&self.fields)
    }

    /// Serializes the dictionary to compact JSON
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the dictionary to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a dictionary back from its JSON form
    pub fn from_json(json: &str) -> Result<FixDictionary, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of a successful conversion: the dictionary and the diagnostics
/// recorded while building it.
#[derive(Clone, Debug)]
pub struct Conversion {
    dictionary: FixDictionary,
    diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Returns the converted dictionary
    pub fn dictionary(&self) -> &FixDictionary {
        &self.dictionary
    }

    /// Returns non-fatal findings, in the order they were recorded
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns true if the conversion recorded any diagnostic
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Consumes the conversion, dropping the diagnostics
    pub fn into_dictionary(self) -> FixDictionary {
        self.dictionary
    }

    /// Consumes the conversion, returning both parts
    pub fn into_parts(self) -> (FixDictionary, Vec<Diagnostic>) {
        (self.dictionary, self.diagnostics)
    }
}

/// Either a dictionary or an error message, never both.
///
/// This is the shape handed across the boundary to callers which render the
/// outcome as is (`{"data": ..., "error": null}` in JSON).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    pub data: Option<FixDictionary>,
    pub error: Option<String>,
}

impl ConversionOutcome {
    /// Returns true if the conversion succeeded
    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }
}

impl From<Result<Conversion, Error>> for ConversionOutcome {
    fn from(result: Result<Conversion, Error>) -> Self {
        match result {
            Ok(conversion) => ConversionOutcome {
                data: Some(conversion.into_dictionary()),
                error: None,
            },
            Err(err) => ConversionOutcome {
                data: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Builder for configuring a [`Converter`].
#[derive(Clone, Debug)]
pub struct ConverterBuilder {
    /// Category of messages declared without `msgcat`
    default_msg_cat: String,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// Creates a new builder with default settings
    pub fn new() -> ConverterBuilder {
        ConverterBuilder {
            default_msg_cat: DEFAULT_MSG_CAT.to_owned(),
        }
    }

    /// Sets the category assigned to messages declared without `msgcat`
    ///
    /// Defaults to [`DEFAULT_MSG_CAT`].
    pub fn with_default_msg_cat(mut self, default_msg_cat: impl Into<String>) -> Self {
        self.default_msg_cat = default_msg_cat.into();
        self
    }

    /// Builds the converter
    pub fn build(self) -> Converter {
        Converter {
            default_msg_cat: self.default_msg_cat,
        }
    }
}

/// Converts FIX XML dictionaries into [`FixDictionary`] values.
///
/// A converter holds configuration only. Every call to [`Converter::convert`]
/// is independent, so one converter can be shared between threads.
#[derive(Clone, Debug)]
pub struct Converter {
    default_msg_cat: String,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Creates a converter with default settings
    pub fn new() -> Converter {
        ConverterBuilder::new().build()
    }

    /// Returns a builder for a custom converter
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    /// Converts one XML document
    ///
    /// Stops at the first fatal problem. Unresolved header/trailer fields are
    /// not fatal, they are returned as [`Diagnostic`]s next to the dictionary.
    #[instrument(level = "debug", skip_all, fields(len = xml.len()))]
    pub fn convert(&self, xml: &str) -> Result<Conversion, Error> {
        if xml.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let root = Element::parse(xml)?
            .filter(|root| root.name() == ROOT_TAG)
            .ok_or(ValidationError::MissingRoot)?;

        let version = read_version(&root)?;

        let fields = build_fields(&root)?;
        let catalog = FieldCatalog::from_definitions(&fields);
        debug!(
            declared = fields.len(),
            distinct = catalog.len(),
            "field catalog built"
        );

        let mut diagnostics = Vec::new();
        let header = resolve_section(&root, Section::Header, &catalog, &mut diagnostics);
        let trailer = resolve_section(&root, Section::Trailer, &catalog, &mut diagnostics);

        let messages = build_messages(&root, &catalog, &self.default_msg_cat)?;
        debug!(
            %version,
            header = header.len(),
            trailer = trailer.len(),
            messages = messages.len(),
            diagnostics = diagnostics.len(),
            "dictionary converted"
        );

        Ok(Conversion {
            dictionary: FixDictionary {
                version,
                header,
                trailer,
                fields,
                messages,
            },
            diagnostics,
        })
    }
}

/// Converts one XML document with the default [`Converter`].
pub fn convert(xml: &str) -> Result<Conversion, Error> {
    Converter::new().convert(xml)
}

/// Converts one XML document into the `{data, error}` outcome.
pub fn convert_fix_xml(xml: &str) -> ConversionOutcome {
    convert(xml).into()
}

fn read_version(root: &Element) -> Result<Version, ValidationError> {
    let major = root
        .attr("major")
        .ok_or(ValidationError::MissingVersion("major"))?;
    let minor = root
        .attr("minor")
        .ok_or(ValidationError::MissingVersion("minor"))?;
    Ok(Version::new(major, minor))
}

fn build_fields(root: &Element) -> Result<Vec<FieldDefinition>, ValidationError> {
    let Some(section) = root.child(FIELDS_TAG) else {
        return Ok(Vec::new());
    };

    section
        .children_named(FIELD_TAG)
        .enumerate()
        .map(|(index, field)| {
            let required = |attribute: &'static str| {
                field
                    .attr(attribute)
                    .map(str::to_owned)
                    .ok_or_else(|| ValidationError::MissingFieldAttribute {
                        field: ElementRef::new(FIELD_TAG, index, field.attr("name")),
                        attribute,
                    })
            };
            Ok(FieldDefinition {
                tag: required("number")?,
                name: required("name")?,
                data_type: required("type")?,
            })
        })
        .collect()
}

// Lenient: names missing from the catalog are reported and skipped.
fn resolve_section(
    root: &Element,
    section: Section,
    catalog: &FieldCatalog,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<HeaderTrailerEntry> {
    let Some(element) = root.child(section.tag()) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (index, field) in element.children_named(FIELD_TAG).enumerate() {
        let Some(name) = field.attr("name") else {
            warn!(%section, position = index + 1, "field without name, entry skipped");
            diagnostics.push(Diagnostic::UnnamedHeaderTrailerField {
                section,
                position: index + 1,
            });
            continue;
        };

        match catalog.get(name) {
            Some(entry) => entries.push(HeaderTrailerEntry {
                name: name.to_owned(),
                tag: entry.tag.clone(),
            }),
            None => {
                warn!(%section, field = name, "field absent from <fields>, entry skipped");
                diagnostics.push(Diagnostic::UnresolvedHeaderTrailerField {
                    section,
                    field: name.to_owned(),
                });
            }
        }
    }
    entries
}

fn build_messages(
    root: &Element,
    catalog: &FieldCatalog,
    default_msg_cat: &str,
) -> Result<Vec<MessageDefinition>, ValidationError> {
    let Some(section) = root.child(MESSAGES_TAG) else {
        return Ok(Vec::new());
    };

    section
        .children_named(MESSAGE_TAG)
        .enumerate()
        .map(|(index, message)| build_message(index, message, catalog, default_msg_cat))
        .collect()
}

fn build_message(
    index: usize,
    message: &Element,
    catalog: &FieldCatalog,
    default_msg_cat: &str,
) -> Result<MessageDefinition, ValidationError> {
    let required = |attribute: &'static str| {
        message
            .attr(attribute)
            .ok_or_else(|| ValidationError::MissingMessageAttribute {
                message: ElementRef::new(MESSAGE_TAG, index, message.attr("name")),
                attribute,
            })
    };
    let name = required("name")?;
    let msg_type = required("msgtype")?;
    let category = message.attr("msgcat").unwrap_or(default_msg_cat);

    let fields = message
        .children_named(FIELD_TAG)
        .enumerate()
        .map(|(index, field)| resolve_message_field(name, index, field, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MessageDefinition {
        name: name.to_owned(),
        msg_type: msg_type.to_owned(),
        category: category.to_owned(),
        fields,
    })
}

// Strict: a name missing from the catalog fails the whole conversion.
fn resolve_message_field(
    message: &str,
    index: usize,
    field: &Element,
    catalog: &FieldCatalog,
) -> Result<MessageFieldRef, ValidationError> {
    let required = |attribute: &'static str| {
        field
            .attr(attribute)
            .ok_or_else(|| ValidationError::MissingMessageFieldAttribute {
                message: message.to_owned(),
                field: ElementRef::new(FIELD_TAG, index, field.attr("name")),
                attribute,
            })
    };
    let name = required("name")?;
    let marker = required("required")?;

    let entry = catalog
        .get(name)
        .ok_or_else(|| ValidationError::UnresolvedMessageField {
            message: message.to_owned(),
            field: name.to_owned(),
        })?;

    Ok(MessageFieldRef {
        tag: entry.tag.clone(),
        name: name.to_owned(),
        required: marker == REQUIRED_MARKER,
    })
}
