//! Whole-document parsing tests.

use plcl_parse::{
    AttributeType, ConfigElement, ConfigRoot, Document, ParseErrorKind, TemplateAttribute,
    TokenKind, Value, parse_config, parse_document, parse_template,
};

const CONFIG: &str = r#"
ConfigName examplethingy

Import "thingy"
Import "another thingy"

ConfigElement ExampleElement
    a = "string"
    b = 123
    c = 3.14
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

// Everything on one line: layout carries no meaning.
const TEMPLATE: &str = "TemplateName examplethingy \
TemplateElement ExampleElement \
    TemplateElementOptions \
        required = true \
    endTemplateElementOptions \
    string a required \
    int b default 321 \
    float c \
    bool d \
    TemplateList InnerElements \
        TemplateListOptions \
            required = true \
            minimumCount = 1 \
            maximumCount = 1 \
        endTemplateListOptions \
        TemplateListElement 0 \
            TemplateElement InnerElement \
                string hi default \":3\" \
            endTemplateElement \
        endTemplateListElement \
    endTemplateList \
endTemplateElement \
TemplateList TopLevelList \
    TemplateListElement 2 \
        TemplateElement ElementInList \
            string attribute required \
        endTemplateElement \
    endTemplateListElement \
endTemplateList";

#[test]
fn test_sample_config() {
    let config = parse_config(CONFIG).expect("sample config should parse");
    assert_eq!(config.name, "examplethingy");
    assert_eq!(config.imports, vec!["thingy", "another thingy"]);

    let element = config.element("ExampleElement").unwrap();
    assert_eq!(element.attribute("a"), Some(&Value::from("string")));
    assert_eq!(element.attribute("b"), Some(&Value::Integer(123)));
    let c = element.attribute("c").unwrap();
    assert_eq!(c.attribute_type(), AttributeType::Float);
    assert_eq!(c.to_string(), "3.14");
    assert_eq!(element.attribute("d"), Some(&Value::Boolean(true)));

    let inner = element.list("InnerElements").unwrap().get(0).unwrap();
    assert_eq!(inner.name, "InnerElement");
    assert_eq!(inner.attribute("hi").and_then(Value::as_str), Some("uwu"));

    let top = config.list("TopLevelList").unwrap();
    assert_eq!(top.len(), 2);
    let values: Vec<_> = top
        .elements
        .iter()
        .map(|e| e.element.attribute("attribute").and_then(Value::as_str))
        .collect();
    assert_eq!(values, vec![Some("value"), Some("value2")]);
}

#[test]
fn test_sample_template() {
    let template = parse_template(TEMPLATE).expect("sample template should parse");
    assert_eq!(template.name, "examplethingy");

    let element = template.element("ExampleElement").unwrap();
    assert_eq!(element.option("required"), Some(&Value::Boolean(true)));
    assert_eq!(
        element.attributes,
        vec![
            TemplateAttribute::new(AttributeType::String, "a").required(),
            TemplateAttribute::new(AttributeType::Integer, "b").with_default("321"),
            TemplateAttribute::new(AttributeType::Float, "c"),
            TemplateAttribute::new(AttributeType::Boolean, "d"),
        ]
    );
    let required: Vec<_> = element.required_attributes().map(|a| a.name.as_str()).collect();
    assert_eq!(required, vec!["a"]);

    let inner = element.list("InnerElements").unwrap();
    assert_eq!(inner.option("minimumCount"), Some(&Value::Integer(1)));
    assert_eq!(inner.option("maximumCount"), Some(&Value::Integer(1)));
    let hi = inner.get(0).unwrap().attribute("hi").unwrap();
    assert!(!hi.required);
    assert_eq!(hi.default_value.as_deref(), Some(":3"));

    let top = template.list("TopLevelList").unwrap();
    assert_eq!(top.elements[0].id, 2);
    assert!(top.get(2).unwrap().attribute("attribute").unwrap().required);
}

#[test]
fn test_keyword_case_insensitivity() {
    for header in ["ConfigName", "configname", "CONFIGNAME", "cOnFiGnAmE"] {
        let config = parse_config(&format!("{header} x")).unwrap();
        assert_eq!(config, ConfigRoot::new("x"));
    }
}

#[test]
fn test_keyword_prefix_is_a_name() {
    let err = parse_config("ConfigName x\nConfigElementX E\nendConfigElement").unwrap_err();
    assert_eq!(err.found(), TokenKind::Name);
    assert_eq!((err.line, err.column), (2, 1));

    // As an attribute name it is just a name.
    let config = parse_config("ConfigName x\nConfigElement E\nConfigElementX = 1\nendConfigElement").unwrap();
    assert_eq!(
        config.elements[0],
        ConfigElement::new("E").with_attribute("ConfigElementX", 1i64)
    );
}

#[test]
fn test_comments_and_layout_are_ignored() {
    let spaced = parse_config(
        "; leading comment\nConfigName x ; trailing\n\n\tConfigElement   E\n  a=1;no space needed\nendConfigElement\n",
    )
    .unwrap();
    let dense = parse_config("ConfigName x ConfigElement E a = 1 endConfigElement").unwrap();
    assert_eq!(spaced, dense);
}

#[test]
fn test_escaped_quote_in_string() {
    let config = parse_config(r#"ConfigName x ConfigElement E s = "say \"hi\"" endConfigElement"#).unwrap();
    assert_eq!(config.elements[0].attribute("s").and_then(Value::as_str), Some("say \"hi\""));
}

#[test]
fn test_config_name_alone() {
    let err = parse_config("ConfigName").unwrap_err();
    assert_eq!(err.found(), TokenKind::EndOfFile);
    assert_eq!(err.expected(), "Name");
    assert_eq!((err.line, err.column), (1, 11));
    assert_eq!((err.span.start, err.span.end), (10, 10));
}

#[test]
fn test_int_default_rejects_fraction() {
    let err = parse_template("TemplateName t TemplateElement E int x default 1.5 endTemplateElement")
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::DefaultTypeMismatch { attribute: AttributeType::Integer, .. }
    ));
    assert_eq!(err.message(), "expected integer NumberLiteral for Integer default but found NumberLiteral");
}

#[test]
fn test_document_kinds() {
    match parse_document(CONFIG).unwrap() {
        Document::Config(config) => assert_eq!(config.elements.len(), 1),
        Document::Template(_) => panic!("expected a config document"),
    }
    match parse_document(TEMPLATE).unwrap() {
        Document::Template(template) => assert_eq!(template.lists.len(), 1),
        Document::Config(_) => panic!("expected a template document"),
    }
}

#[test]
fn test_template_text_is_not_a_config() {
    let err = parse_config(TEMPLATE).unwrap_err();
    assert_eq!(err.found(), TokenKind::TemplateName);
    let err = parse_template(CONFIG).unwrap_err();
    assert_eq!(err.found(), TokenKind::ConfigName);
    assert_eq!((err.line, err.column), (2, 1));
}
