//! Parser for config documents.
//!
//! ```text
//! ConfigRoot        := 'ConfigName' Name (Import | ConfigElement | ConfigList)* EOF
//! Import            := 'Import' StringLiteral
//! ConfigList        := 'ConfigList' Name ConfigListElement* 'endConfigList'
//! ConfigListElement := 'ConfigListElement' NumberLiteral ConfigElement 'endConfigListElement'
//! ConfigElement     := 'ConfigElement' Name (Attribute | ConfigList)* 'endConfigElement'
//! Attribute         := Name '=' (StringLiteral | NumberLiteral | BooleanLiteral)
//! ```

use plcl_tokenizer::TokenKind;
use plcl_tree::{ConfigAttribute, ConfigElement, ConfigList, ConfigListElement, ConfigRoot};
use tracing::{debug, trace};

use crate::literal::{integer, literal};
use crate::{Cursor, Expected, ParseError, ParseErrorKind};

const ROOT_ITEMS: &[TokenKind] = &[
    TokenKind::Import,
    TokenKind::ConfigElement,
    TokenKind::ConfigList,
    TokenKind::EndOfFile,
];

const ELEMENT_ITEMS: &[TokenKind] = &[
    TokenKind::Name,
    TokenKind::ConfigList,
    TokenKind::EndConfigElement,
];

const LIST_ITEMS: &[TokenKind] = &[TokenKind::ConfigListElement, TokenKind::EndConfigList];

/// Parse a whole config document, up to and including end of file.
pub fn config_root(cursor: &mut Cursor<'_>) -> Result<ConfigRoot, ParseError> {
    cursor.expect(TokenKind::ConfigName)?;
    let mut root = ConfigRoot::new(cursor.expect_name()?);
    trace!(name = %root.name, "config root");

    loop {
        match cursor.peek_kind() {
            TokenKind::Import => {
                cursor.advance();
                let path = cursor.expect(TokenKind::StringLiteral)?.text.to_string();
                root.imports.push(path);
            }
            TokenKind::ConfigElement => root.elements.push(config_element(cursor)?),
            TokenKind::ConfigList => root.lists.push(config_list(cursor)?),
            TokenKind::EndOfFile => break,
            _ => return Err(cursor.unexpected(Expected::OneOf(ROOT_ITEMS))),
        }
    }

    debug!(
        name = %root.name,
        imports = root.imports.len(),
        elements = root.elements.len(),
        lists = root.lists.len(),
        "parsed config"
    );
    Ok(root)
}

/// `ConfigList <name> ... endConfigList`
pub fn config_list(cursor: &mut Cursor<'_>) -> Result<ConfigList, ParseError> {
    cursor.expect(TokenKind::ConfigList)?;
    let mut list = ConfigList::new(cursor.expect_name()?);
    trace!(name = %list.name, "config list");

    loop {
        match cursor.peek_kind() {
            TokenKind::ConfigListElement => list.elements.push(config_list_element(cursor)?),
            TokenKind::EndConfigList => {
                cursor.advance();
                return Ok(list);
            }
            _ => return Err(cursor.unexpected(Expected::OneOf(LIST_ITEMS))),
        }
    }
}

/// `ConfigListElement <id> ConfigElement ... endConfigListElement`
pub fn config_list_element(cursor: &mut Cursor<'_>) -> Result<ConfigListElement, ParseError> {
    cursor.expect(TokenKind::ConfigListElement)?;
    let id = integer(cursor.expect(TokenKind::NumberLiteral)?)?;
    let element = config_element(cursor)?;

    if cursor.peek_kind() == TokenKind::ConfigElement {
        return Err(cursor.error(ParseErrorKind::DuplicateElement {
            found: TokenKind::ConfigElement,
        }));
    }
    cursor.expect(TokenKind::EndConfigListElement)?;
    Ok(ConfigListElement { id, element })
}

/// `ConfigElement <name> ... endConfigElement`
pub fn config_element(cursor: &mut Cursor<'_>) -> Result<ConfigElement, ParseError> {
    cursor.expect(TokenKind::ConfigElement)?;
    let mut element = ConfigElement::new(cursor.expect_name()?);
    trace!(name = %element.name, "config element");

    loop {
        match cursor.peek_kind() {
            TokenKind::Name => element.attributes.push(config_attribute(cursor)?),
            TokenKind::ConfigList => element.lists.push(config_list(cursor)?),
            TokenKind::EndConfigElement => {
                cursor.advance();
                return Ok(element);
            }
            _ => return Err(cursor.unexpected(Expected::OneOf(ELEMENT_ITEMS))),
        }
    }
}

/// `name = value`
pub fn config_attribute(cursor: &mut Cursor<'_>) -> Result<ConfigAttribute, ParseError> {
    let name = cursor.expect_name()?;
    cursor.expect(TokenKind::Equals)?;
    let value = literal(cursor)?;
    Ok(ConfigAttribute { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config;
    use facet_testhelpers::test;
    use plcl_tree::{AttributeType, Value};

    const EXAMPLE: &str = r#"
ConfigName examplethingy

Import "thingy"
Import "another thingy"

ConfigElement ExampleElement
    a = "string"
    b = 123
    c = 3.25
    d = true
    ConfigList InnerElements
        ConfigListElement 0
            ConfigElement InnerElement
                hi = "uwu"
            endConfigElement
        endConfigListElement
    endConfigList
endConfigElement

ConfigList TopLevelList
    ConfigListElement 0
        ConfigElement ElementInList
            attribute = "value"
        endConfigElement
    endConfigListElement
    ConfigListElement 1
        ConfigElement ElementInList
            attribute = "value2"
        endConfigElement
    endConfigListElement
endConfigList
"#;

    #[test]
    fn test_full_example() {
        let config = parse_config(EXAMPLE).unwrap();
        assert_eq!(config.name, "examplethingy");
        assert_eq!(config.imports, vec!["thingy", "another thingy"]);
        assert_eq!(config.elements.len(), 1);
        assert_eq!(config.lists.len(), 1);

        let element = &config.elements[0];
        assert_eq!(element.name, "ExampleElement");
        let attributes: Vec<_> = element
            .attributes
            .iter()
            .map(|a| (a.name.as_str(), a.value.clone()))
            .collect();
        assert_eq!(
            attributes,
            vec![
                ("a", Value::from("string")),
                ("b", Value::Integer(123)),
                ("c", Value::Float(3.25)),
                ("d", Value::Boolean(true)),
            ]
        );

        let inner = &element.lists[0];
        assert_eq!(inner.name, "InnerElements");
        assert_eq!(inner.elements[0].id, 0);
        assert_eq!(inner.elements[0].element.attribute("hi"), Some(&Value::from("uwu")));

        let top = &config.lists[0];
        assert_eq!(top.name, "TopLevelList");
        let ids: Vec<_> = top.elements.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(top.get(1).unwrap().attribute("attribute"), Some(&Value::from("value2")));
    }

    #[test]
    fn test_two_attributes() {
        let source = "ConfigName examplethingy\nConfigElement ExampleElement\n    a = \"string\"\n    b = 123\nendConfigElement\n";
        let expected = ConfigRoot::new("examplethingy").with_element(
            ConfigElement::new("ExampleElement")
                .with_attribute("a", "string")
                .with_attribute("b", 123i64),
        );
        assert_eq!(parse_config(source).unwrap(), expected);
    }

    #[test]
    fn test_empty_document() {
        let config = parse_config("ConfigName nothing").unwrap();
        assert_eq!(config, ConfigRoot::new("nothing"));
    }

    #[test]
    fn test_keywords_any_case() {
        let config = parse_config(
            "configname x\nIMPORT \"a\"\nconfigelement E\nk = FALSE\nENDCONFIGELEMENT",
        )
        .unwrap();
        assert_eq!(config.imports, vec!["a"]);
        assert_eq!(config.elements[0].attribute("k"), Some(&Value::Boolean(false)));
    }

    #[test]
    fn test_interleaved_attributes_and_lists() {
        let config = parse_config(
            r#"ConfigName x
ConfigElement E
    first = 1
    ConfigList L1
    endConfigList
    second = 2
    ConfigList L2
    endConfigList
    third = 3
endConfigElement"#,
        )
        .unwrap();
        let element = &config.elements[0];
        let names: Vec<_> = element.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        let lists: Vec<_> = element.lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(lists, vec!["L1", "L2"]);
    }

    #[test]
    fn test_ids_are_opaque_labels() {
        let config = parse_config(
            r#"ConfigName x
ConfigList L
    ConfigListElement 2
        ConfigElement A
        endConfigElement
    endConfigListElement
    ConfigListElement 2
        ConfigElement B
        endConfigElement
    endConfigListElement
    ConfigListElement -5
        ConfigElement C
        endConfigElement
    endConfigListElement
endConfigList"#,
        )
        .unwrap();
        let ids: Vec<_> = config.lists[0].elements.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 2, -5]);
    }

    #[test]
    fn test_missing_name_points_at_eof() {
        let err = parse_config("ConfigName").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: Expected::Token(TokenKind::Name),
                found: TokenKind::EndOfFile,
            }
        );
        assert_eq!((err.line, err.column), (1, 11));
        assert_eq!(err.to_string(), "expected Name but found EndOfFile at line 1 column 11");
    }

    #[test]
    fn test_wrong_header() {
        let err = parse_config("TemplateName x").unwrap_err();
        assert_eq!(err.found(), TokenKind::TemplateName);
        assert_eq!(err.expected(), "\"ConfigName\"");
    }

    #[test]
    fn test_unexpected_root_item() {
        let err = parse_config("ConfigName x\nendConfigElement").unwrap_err();
        assert_eq!(err.found(), TokenKind::EndConfigElement);
        assert_eq!((err.line, err.column), (2, 1));
        assert_eq!(
            err.expected(),
            "\"Import\", \"ConfigElement\", \"ConfigList\" or EndOfFile"
        );
    }

    #[test]
    fn test_import_needs_string() {
        let err = parse_config("ConfigName x\nImport thingy").unwrap_err();
        assert_eq!(err.found(), TokenKind::Name);
        assert_eq!(err.expected(), "StringLiteral");
    }

    #[test]
    fn test_unterminated_element() {
        let err = parse_config("ConfigName x\nConfigElement E\n a = 1\n").unwrap_err();
        assert_eq!(err.found(), TokenKind::EndOfFile);
        assert_eq!((err.line, err.column), (4, 1));
    }

    #[test]
    fn test_attribute_needs_equals() {
        let err = parse_config("ConfigName x\nConfigElement E\n a 1\nendConfigElement").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: Expected::Token(TokenKind::Equals),
                found: TokenKind::NumberLiteral,
            }
        );
        assert_eq!(err.expected(), "\"=\"");
    }

    #[test]
    fn test_unknown_character() {
        let err = parse_config("ConfigName x\nConfigElement E\n a = {\nendConfigElement").unwrap_err();
        assert_eq!(err.found(), TokenKind::Unknown);
        assert_eq!((err.line, err.column), (3, 6));
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse_config("ConfigName x\nConfigElement E\n a = \"oops\nendConfigElement").unwrap_err();
        assert_eq!(err.found(), TokenKind::Unknown);
    }

    #[test]
    fn test_bare_minus_value() {
        let err = parse_config("ConfigName x\nConfigElement E\n a = -\nendConfigElement").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidNumber {
                text: "-".to_string(),
                expected: AttributeType::Integer,
            }
        );
        assert_eq!((err.line, err.column), (3, 6));
    }

    #[test]
    fn test_second_element_in_list_element() {
        let err = parse_config(
            r#"ConfigName x
ConfigList L
    ConfigListElement 0
        ConfigElement A
        endConfigElement
        ConfigElement B
        endConfigElement
    endConfigListElement
endConfigList"#,
        )
        .unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::DuplicateElement {
                found: TokenKind::ConfigElement
            }
        );
        assert_eq!((err.line, err.column), (6, 9));
    }

    #[test]
    fn test_list_element_requires_element() {
        let err = parse_config(
            "ConfigName x\nConfigList L\nConfigListElement 0\nendConfigListElement\nendConfigList",
        )
        .unwrap_err();
        assert_eq!(err.found(), TokenKind::EndConfigListElement);
        assert_eq!(err.expected(), "\"ConfigElement\"");
    }

    #[test]
    fn test_fractional_id() {
        let err = parse_config(
            "ConfigName x\nConfigList L\nConfigListElement 1.5\nConfigElement A\nendConfigElement\nendConfigListElement\nendConfigList",
        )
        .unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::InvalidNumber { expected: AttributeType::Integer, .. }
        ));
    }

    #[test]
    fn test_template_keyword_in_config() {
        let err = parse_config("ConfigName x\nConfigElement E\n string a\nendConfigElement").unwrap_err();
        assert_eq!(err.found(), TokenKind::String);
        assert_eq!(err.expected(), "Name, \"ConfigList\" or \"endConfigElement\"");
    }
}
