//! # fixdict-dictionary
//!
//! A crate for converting FIX (Financial Information Exchange) protocol dictionaries
//! into a normalized, JSON serializable representation.
//!
//! The input is a quickfix compatible XML dictionary. The output describes the protocol
//! version, the standard header/trailer layout, the global field catalog and the
//! message catalog with per-message required/optional field flags.
//!
//! ## Features
//!
//! - Case-insensitive handling of the `fix`, `fields`, `header`, `trailer`, `messages`,
//!   `message` and `field` tags
//! - Field references resolved against a single, last-write-wins field catalog
//! - Strict message field resolution, lenient header/trailer resolution with diagnostics
//! - Descriptive errors naming the offending element and attribute
//! - Builder for converter configuration
//!
//! ## Basic Usage
//!
//! ```rust
//! use fixdict_dictionary::Converter;
//!
//! let xml = r#"
//! <fix major='4' minor='4'>
//!   <fields>
//!     <field number='1' name='Account' type='STRING'/>
//!     <field number='11' name='ClOrdID' type='STRING'/>
//!   </fields>
//!   <header>
//!     <field name='Account'/>
//!   </header>
//!   <messages>
//!     <message name='NewOrderSingle' msgtype='D'>
//!       <field name='ClOrdID' required='Y'/>
//!     </message>
//!   </messages>
//! </fix>
//! "#;
//!
//! let conversion = Converter::new().convert(xml).expect("Failed to convert dictionary");
//! let dictionary = conversion.dictionary();
//!
//! assert_eq!(dictionary.version().to_string(), "FIX.4.4");
//! assert_eq!(dictionary.header()[0].tag, "1");
//!
//! let new_order = dictionary.message_by_type("D").unwrap();
//! assert_eq!(new_order.fields[0].tag, "11");
//! assert!(new_order.fields[0].required);
//!
//! let json = dictionary.to_json().unwrap();
//! assert!(json.starts_with(r#"{"version":"FIX.4.4""#));
//! ```

mod dictionary;
mod xml;

pub use dictionary::{
    CatalogEntry, Conversion, ConversionOutcome, Converter, ConverterBuilder, DEFAULT_MSG_CAT,
    Diagnostic, ElementRef, Error, FieldCatalog, FieldDefinition, FixDictionary,
    HeaderTrailerEntry, MessageDefinition, MessageFieldRef, Section, ValidationError, Version,
    convert, convert_fix_xml,
};
