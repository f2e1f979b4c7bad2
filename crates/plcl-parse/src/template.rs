//! Parser for template documents.
//!
//! ```text
//! TemplateRoot        := 'TemplateName' Name (TemplateElement | TemplateList)* EOF
//! TemplateList        := 'TemplateList' Name (TemplateListElement | TemplateListOptions)* 'endTemplateList'
//! TemplateListElement := 'TemplateListElement' NumberLiteral TemplateElement 'endTemplateListElement'
//! TemplateElement     := 'TemplateElement' Name
//!                        (TypedAttribute | TemplateElementOptions | TemplateList)* 'endTemplateElement'
//! TypedAttribute      := ('string' | 'int' | 'float' | 'bool') Name ('required' | 'default' Literal)*
//! TemplateOption      := Name '=' Literal
//! ```

use plcl_tokenizer::TokenKind;
use plcl_tree::{
    AttributeType, TemplateAttribute, TemplateElement, TemplateList, TemplateListElement,
    TemplateOption, TemplateOptions, TemplateRoot,
};
use tracing::{debug, trace};

use crate::literal::{float, integer, literal};
use crate::{Cursor, Expected, ParseError, ParseErrorKind};

const ROOT_ITEMS: &[TokenKind] = &[
    TokenKind::TemplateElement,
    TokenKind::TemplateList,
    TokenKind::EndOfFile,
];

const ATTRIBUTE_TYPES: &[TokenKind] = &[
    TokenKind::String,
    TokenKind::Integer,
    TokenKind::Float,
    TokenKind::Boolean,
];

const ELEMENT_ITEMS: &[TokenKind] = &[
    TokenKind::String,
    TokenKind::Integer,
    TokenKind::Float,
    TokenKind::Boolean,
    TokenKind::TemplateElementOptions,
    TokenKind::TemplateList,
    TokenKind::EndTemplateElement,
];

const LIST_ITEMS: &[TokenKind] = &[
    TokenKind::TemplateListElement,
    TokenKind::TemplateListOptions,
    TokenKind::EndTemplateList,
];

const ELEMENT_OPTIONS_ITEMS: &[TokenKind] =
    &[TokenKind::Name, TokenKind::EndTemplateElementOptions];

const LIST_OPTIONS_ITEMS: &[TokenKind] = &[TokenKind::Name, TokenKind::EndTemplateListOptions];

/// Which node an options block belongs to. Each kind has its own keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionsBlock {
    Element,
    List,
}

impl OptionsBlock {
    fn open(self) -> TokenKind {
        match self {
            OptionsBlock::Element => TokenKind::TemplateElementOptions,
            OptionsBlock::List => TokenKind::TemplateListOptions,
        }
    }

    fn close(self) -> TokenKind {
        match self {
            OptionsBlock::Element => TokenKind::EndTemplateElementOptions,
            OptionsBlock::List => TokenKind::EndTemplateListOptions,
        }
    }

    fn items(self) -> &'static [TokenKind] {
        match self {
            OptionsBlock::Element => ELEMENT_OPTIONS_ITEMS,
            OptionsBlock::List => LIST_OPTIONS_ITEMS,
        }
    }
}

/// Parse a whole template document, up to and including end of file.
pub fn template_root(cursor: &mut Cursor<'_>) -> Result<TemplateRoot, ParseError> {
    cursor.expect(TokenKind::TemplateName)?;
    let mut root = TemplateRoot::new(cursor.expect_name()?);
    trace!(name = %root.name, "template root");

    loop {
        match cursor.peek_kind() {
            TokenKind::TemplateElement => root.elements.push(template_element(cursor)?),
            TokenKind::TemplateList => root.lists.push(template_list(cursor)?),
            TokenKind::EndOfFile => break,
            _ => return Err(cursor.unexpected(Expected::OneOf(ROOT_ITEMS))),
        }
    }

    debug!(
        name = %root.name,
        elements = root.elements.len(),
        lists = root.lists.len(),
        "parsed template"
    );
    Ok(root)
}

/// `TemplateList <name> ... endTemplateList`
pub fn template_list(cursor: &mut Cursor<'_>) -> Result<TemplateList, ParseError> {
    cursor.expect(TokenKind::TemplateList)?;
    let mut list = TemplateList::new(cursor.expect_name()?);
    trace!(name = %list.name, "template list");

    loop {
        match cursor.peek_kind() {
            TokenKind::TemplateListElement => list.elements.push(template_list_element(cursor)?),
            TokenKind::TemplateListOptions => {
                list.options = Some(options_once(cursor, &list.options, OptionsBlock::List)?);
            }
            TokenKind::EndTemplateList => {
                cursor.advance();
                return Ok(list);
            }
            _ => return Err(cursor.unexpected(Expected::OneOf(LIST_ITEMS))),
        }
    }
}

/// `TemplateListElement <id> TemplateElement ... endTemplateListElement`
pub fn template_list_element(cursor: &mut Cursor<'_>) -> Result<TemplateListElement, ParseError> {
    cursor.expect(TokenKind::TemplateListElement)?;
    let id = integer(cursor.expect(TokenKind::NumberLiteral)?)?;
    let element = template_element(cursor)?;

    if cursor.peek_kind() == TokenKind::TemplateElement {
        return Err(cursor.error(ParseErrorKind::DuplicateElement {
            found: TokenKind::TemplateElement,
        }));
    }
    cursor.expect(TokenKind::EndTemplateListElement)?;
    Ok(TemplateListElement { id, element })
}

/// `TemplateElement <name> ... endTemplateElement`
pub fn template_element(cursor: &mut Cursor<'_>) -> Result<TemplateElement, ParseError> {
    cursor.expect(TokenKind::TemplateElement)?;
    let mut element = TemplateElement::new(cursor.expect_name()?);
    trace!(name = %element.name, "template element");

    loop {
        match cursor.peek_kind() {
            TokenKind::String | TokenKind::Integer | TokenKind::Float | TokenKind::Boolean => {
                element.attributes.push(template_attribute(cursor)?);
            }
            TokenKind::TemplateElementOptions => {
                element.options = Some(options_once(
                    cursor,
                    &element.options,
                    OptionsBlock::Element,
                )?);
            }
            TokenKind::TemplateList => element.lists.push(template_list(cursor)?),
            TokenKind::EndTemplateElement => {
                cursor.advance();
                return Ok(element);
            }
            _ => return Err(cursor.unexpected(Expected::OneOf(ELEMENT_ITEMS))),
        }
    }
}

/// `<type> <name>` followed by any number of `required` and `default <literal>`
/// modifiers, in any order. A repeated modifier overwrites the earlier one.
pub fn template_attribute(cursor: &mut Cursor<'_>) -> Result<TemplateAttribute, ParseError> {
    let ty = match cursor.peek_kind() {
        TokenKind::String => AttributeType::String,
        TokenKind::Integer => AttributeType::Integer,
        TokenKind::Float => AttributeType::Float,
        TokenKind::Boolean => AttributeType::Boolean,
        _ => return Err(cursor.unexpected(Expected::OneOf(ATTRIBUTE_TYPES))),
    };
    cursor.advance();
    let mut attribute = TemplateAttribute::new(ty, cursor.expect_name()?);

    loop {
        let token = cursor.peek();
        if token.kind != TokenKind::Name {
            break;
        }
        if token.text.eq_ignore_ascii_case("required") {
            cursor.advance();
            attribute.required = true;
        } else if token.text.eq_ignore_ascii_case("default") {
            cursor.advance();
            attribute.default_value = Some(default_literal(cursor, ty)?);
        } else {
            break;
        }
    }

    trace!(
        name = %attribute.name,
        ty = %attribute.ty,
        required = attribute.required,
        default = ?attribute.default_value,
        "template attribute"
    );
    Ok(attribute)
}

/// The literal after `default`, checked against the declared type and kept
/// as raw text.
fn default_literal(cursor: &mut Cursor<'_>, ty: AttributeType) -> Result<String, ParseError> {
    let token = cursor.peek();
    match (ty, token.kind) {
        (AttributeType::String, TokenKind::StringLiteral)
        | (AttributeType::Boolean, TokenKind::BooleanLiteral) => {}
        // A well-formed float is the wrong type, anything else is a bad number.
        (AttributeType::Integer, TokenKind::NumberLiteral)
            if token.text.contains('.') && token.text.parse::<f64>().is_ok() =>
        {
            return Err(cursor.error(ParseErrorKind::DefaultTypeMismatch {
                attribute: ty,
                found: token.kind,
            }));
        }
        (AttributeType::Integer, TokenKind::NumberLiteral) => {
            integer(token)?;
        }
        (AttributeType::Float, TokenKind::NumberLiteral) => {
            float(token)?;
        }
        (_, found) => {
            return Err(cursor.error(ParseErrorKind::DefaultTypeMismatch {
                attribute: ty,
                found,
            }));
        }
    }
    Ok(cursor.advance().text.to_string())
}

/// Parse an options block, failing if the node already has one.
fn options_once(
    cursor: &mut Cursor<'_>,
    existing: &Option<TemplateOptions>,
    block: OptionsBlock,
) -> Result<TemplateOptions, ParseError> {
    if existing.is_some() {
        return Err(cursor.error(ParseErrorKind::DuplicateOptions {
            found: block.open(),
        }));
    }
    options(cursor, block)
}

fn options(cursor: &mut Cursor<'_>, block: OptionsBlock) -> Result<TemplateOptions, ParseError> {
    cursor.expect(block.open())?;
    let mut options = TemplateOptions::new();

    loop {
        let kind = cursor.peek_kind();
        if kind == block.close() {
            cursor.advance();
            return Ok(options);
        }
        if kind != TokenKind::Name {
            return Err(cursor.unexpected(Expected::OneOf(block.items())));
        }
        let name = cursor.expect_name()?;
        cursor.expect(TokenKind::Equals)?;
        let value = literal(cursor)?;
        options.options.push(TemplateOption { name, value });
    }
}
