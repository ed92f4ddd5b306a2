//! The layout declaration state machine
//!
//! One function per state. Each state mutates the [`Layout`] under construction and returns
//! early with the first [`ParseError`] it hits. The record is only handed back once every
//! state has succeeded.

use crate::shader::ast::{Layout, LayoutOptions, LayoutType, Variable};
use crate::shader::error::{ParseError, ParseResult};
use crate::shader::parsing::cursor::Cursor;
use crate::shader::token::{Token, TokenKind};

/// Option that turns a `uniform` declaration into a uniform buffer block
pub const STD140: &str = "std140";

const QUALIFIER_TOKENS: [TokenKind; 5] = [
    TokenKind::MemoryQualifier,
    TokenKind::In,
    TokenKind::Out,
    TokenKind::Uniform,
    TokenKind::Buffer,
];

/// Parse one declaration
///
/// The cursor must sit right after the `layout` keyword. On success it is left after the last
/// token of the declaration.
pub fn parse_layout(cursor: &mut Cursor<'_>) -> ParseResult<Layout> {
    cursor.expect(TokenKind::OpenParen)?;

    let mut layout = Layout::default();
    parse_options(cursor, &mut layout)?;
    parse_qualifiers(cursor, &mut layout)?;

    if layout.is_buffer_block() {
        parse_body(cursor, &mut layout)?;
    }

    Ok(layout)
}

/// `key`, `key = N`, ... `)`
fn parse_options(cursor: &mut Cursor<'_>, layout: &mut Layout) -> ParseResult<()> {
    loop {
        let key = cursor.expect(TokenKind::Identifier)?.lexeme.clone();

        let separator = cursor.expect_any(&[
            TokenKind::EqualSign,
            TokenKind::Comma,
            TokenKind::CloseParen,
        ])?;

        match separator.kind {
            TokenKind::EqualSign => {
                let value = parse_integer(cursor.expect(TokenKind::Numeric)?)?;
                layout.options.set(key, value);

                let end = cursor.expect_any(&[TokenKind::Comma, TokenKind::CloseParen])?;
                if end.is(TokenKind::CloseParen) {
                    return Ok(());
                }
            }
            TokenKind::CloseParen => {
                layout.options.set(key, 0);
                return Ok(());
            }
            _ => layout.options.set(key, 0),
        }
    }
}

/// Memory qualifiers, the storage keyword, then the type qualifier and/or name
fn parse_qualifiers(cursor: &mut Cursor<'_>, layout: &mut Layout) -> ParseResult<()> {
    let mut token = cursor.expect_any(&QUALIFIER_TOKENS)?;

    while token.is(TokenKind::MemoryQualifier) {
        layout.memory_qualifiers.push(token.lexeme.clone());
        token = cursor.expect_any(&QUALIFIER_TOKENS)?;
    }

    layout.layout_type = storage_type(token.kind, &layout.options);

    if !layout.is_buffer_block() {
        layout.type_qualifier = cursor.expect(TokenKind::Identifier)?.lexeme.clone();
    }
    layout.name = cursor.expect(TokenKind::Identifier)?.lexeme.clone();

    Ok(())
}

fn storage_type(kind: TokenKind, options: &LayoutOptions) -> LayoutType {
    match kind {
        TokenKind::In => LayoutType::AttribIn,
        TokenKind::Out => LayoutType::AttribOut,
        TokenKind::Buffer => LayoutType::ShaderStorageBuffer,
        TokenKind::Uniform if options.contains_key(STD140) => LayoutType::UniformBuffer,
        TokenKind::Uniform => LayoutType::Uniform,
        _ => LayoutType::Invalid,
    }
}

/// `{ members }` followed by an optional instance name and `;`
fn parse_body(cursor: &mut Cursor<'_>, layout: &mut Layout) -> ParseResult<()> {
    cursor.expect(TokenKind::OpenCurly)?;

    loop {
        let token = cursor.expect_any(&[TokenKind::Identifier, TokenKind::CloseCurly])?;
        if token.is(TokenKind::CloseCurly) {
            break;
        }

        let member = parse_member(cursor, &token.lexeme)?;
        layout.body.push(member);
    }

    parse_block_trailer(cursor, layout)
}

/// `name;`, `name[N];` or `name[];` after the member type has been consumed
fn parse_member(cursor: &mut Cursor<'_>, type_name: &str) -> ParseResult<Variable> {
    let name = cursor.expect(TokenKind::Identifier)?.lexeme.clone();

    let token = cursor.expect_any(&[TokenKind::OpenSquare, TokenKind::SemiColon])?;
    if token.is(TokenKind::SemiColon) {
        return Ok(Variable::scalar(type_name, name));
    }

    let size = parse_array_size(cursor)?;
    cursor.expect(TokenKind::SemiColon)?;

    Ok(Variable::array(type_name, name, size))
}

fn parse_array_size(cursor: &mut Cursor<'_>) -> ParseResult<i32> {
    let token = cursor.expect_any(&[TokenKind::Numeric, TokenKind::CloseSquare])?;
    if token.is(TokenKind::CloseSquare) {
        return Ok(Variable::UNSIZED);
    }

    let size = parse_integer(token)?;
    cursor.expect(TokenKind::CloseSquare)?;

    Ok(size)
}

fn parse_block_trailer(cursor: &mut Cursor<'_>, layout: &mut Layout) -> ParseResult<()> {
    loop {
        let token = cursor.expect_any(&[TokenKind::SemiColon, TokenKind::Identifier])?;
        if token.is(TokenKind::SemiColon) {
            return Ok(());
        }

        if layout.instance_name.is_none() {
            layout.instance_name = Some(token.lexeme.clone());
        }
    }
}

/// Numeric lexemes are kept verbatim by the tokenizer; only plain decimal `i32` is accepted here
fn parse_integer(token: &Token) -> ParseResult<i32> {
    token
        .lexeme
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber {
            lexeme: token.lexeme.clone(),
            line: token.line,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::error::Expected;
    use crate::shader::lexing::tokenize;

    /// Parse the first declaration of `source`, which must start with `layout`
    fn parse(source: &str) -> (ParseResult<Layout>, usize, usize) {
        let tokens = tokenize(source);
        assert!(tokens[0].is(TokenKind::Layout));
        let mut cursor = Cursor::new(&tokens, 1);
        let result = parse_layout(&mut cursor);
        (result, cursor.position(), tokens.len())
    }

    #[test]
    fn test_attribute_in() {
        let (result, position, len) = parse("layout(location=0) in vec3 position;");
        let layout = result.unwrap();

        assert_eq!(layout.layout_type, LayoutType::AttribIn);
        assert_eq!(layout.type_qualifier, "vec3");
        assert_eq!(layout.name, "position");
        assert_eq!(layout.location(), Some(0));
        assert!(layout.body.is_empty());
        // The trailing `;` of a non-block declaration is left to the driver
        assert_eq!(position, len - 1);
    }

    #[test]
    fn test_plain_uniform_without_std140() {
        let (result, _, _) = parse("layout(binding = 2) uniform sampler2D albedo;");
        let layout = result.unwrap();

        assert_eq!(layout.layout_type, LayoutType::Uniform);
        assert_eq!(layout.type_qualifier, "sampler2D");
        assert_eq!(layout.name, "albedo");
    }

    #[test]
    fn test_std140_uniform_block() {
        let (result, position, len) =
            parse("layout(std140, binding=0) uniform Name { vec4 a; };");
        let layout = result.unwrap();

        assert_eq!(layout.layout_type, LayoutType::UniformBuffer);
        assert_eq!(
            layout.options.iter().collect::<Vec<_>>(),
            vec![("std140", 0), ("binding", 0)]
        );
        assert_eq!(layout.name, "Name");
        assert_eq!(layout.type_qualifier, "");
        assert_eq!(layout.body, vec![Variable::scalar("vec4", "a")]);
        assert_eq!(layout.instance_name, None);
        assert_eq!(position, len);
    }

    #[test]
    fn test_storage_buffer_members() {
        let source = "layout(binding = 1) readonly writeonly buffer Particles {\n\
                      float x[4];\n\
                      vec4 data[];\n\
                      } particles;";
        let (result, _, _) = parse(source);
        let layout = result.unwrap();

        assert_eq!(layout.layout_type, LayoutType::ShaderStorageBuffer);
        assert_eq!(layout.memory_qualifiers, vec!["readonly", "writeonly"]);
        assert_eq!(
            layout.body,
            vec![
                Variable::array("float", "x", 4),
                Variable::unsized_array("vec4", "data"),
            ]
        );
        assert_eq!(layout.instance_name.as_deref(), Some("particles"));
    }

    #[test]
    fn test_duplicate_option_last_write_wins() {
        let (result, _, _) = parse("layout(binding=1, binding=5) uniform sampler2D t;");
        assert_eq!(result.unwrap().binding(), Some(5));
    }

    #[test]
    fn test_missing_open_paren() {
        let (result, position, _) = parse("layout std140 uniform B {};");
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnexpectedToken {
                expected: Expected::One(TokenKind::OpenParen),
                found: TokenKind::Identifier,
                line: 1,
            }
        );
        assert_eq!(position, 1);
    }

    #[test]
    fn test_hex_option_value_is_rejected() {
        let (result, _, _) = parse("layout(binding=0x1) uniform sampler2D t;");
        assert_eq!(
            result.unwrap_err(),
            ParseError::InvalidNumber {
                lexeme: "0x1".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_float_array_size_is_rejected() {
        let (result, _, _) = parse("layout(std430) buffer B { float x[1.5]; };");
        assert!(matches!(
            result.unwrap_err(),
            ParseError::InvalidNumber { lexeme, .. } if lexeme == "1.5"
        ));
    }

    #[test]
    fn test_option_value_past_i32_max_is_rejected() {
        let (result, _, _) = parse("layout(location=2147483648) in vec3 p;");
        assert_eq!(
            result.unwrap_err(),
            ParseError::InvalidNumber {
                lexeme: "2147483648".to_string(),
                line: 1,
            }
        );

        let (result, _, _) = parse("layout(location=2147483647) in vec3 p;");
        assert_eq!(result.unwrap().location(), Some(i32::MAX));
    }

    #[test]
    fn test_oversized_array_size_is_rejected() {
        let (result, _, _) = parse("layout(std430) buffer B {\n float x[99999999999];\n};");
        assert_eq!(
            result.unwrap_err(),
            ParseError::InvalidNumber {
                lexeme: "99999999999".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn test_eof_inside_body() {
        let (result, _, _) = parse("layout(std430) buffer B { float x;");
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnexpectedEof {
                expected: Expected::AnyOf(vec![TokenKind::Identifier, TokenKind::CloseCurly]),
            }
        );
    }

    #[test]
    fn test_block_without_members() {
        let (result, _, _) = parse("layout(std430) buffer Empty {};");
        let layout = result.unwrap();
        assert!(layout.body.is_empty());
        assert_eq!(layout.layout_type, LayoutType::ShaderStorageBuffer);
    }
}
