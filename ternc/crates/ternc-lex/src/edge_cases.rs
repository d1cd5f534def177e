//! Edge case tests for ternc-lex

#[cfg(test)]
mod tests {
    use crate::{Keyword, Keywords, Lexer, LexerConfig, LiteralValue, Token, TokenKind};
    use ternc_util::{Handler, SourceFile};

    fn lex_all(source: &str) -> Vec<Token> {
        let file = SourceFile::new("edge.tn", source);
        let keywords = Keywords::new();
        let handler = Handler::new();
        let mut lexer = Lexer::new(&file, &keywords, &handler).unwrap();
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() { break; }
            tokens.push(token);
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].span().len(), 1);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("{} = 1", name);
        let t = lex_all(&source);
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].lexeme(&source), name);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Struct struct string String");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[1].keyword_tag(), Some(Keyword::Struct));
        assert_eq!(t[2].kind(), TokenKind::Identifier);
        assert_eq!(t[3].keyword_tag(), Some(Keyword::String));
    }

    #[test]
    fn test_edge_every_keyword_spelling() {
        for &keyword in Keyword::ALL {
            let t = lex_all(keyword.as_str());
            assert_eq!(t.len(), 1, "{}", keyword);
            assert_eq!(t[0].keyword_tag(), Some(keyword));
            assert_eq!(t[0].span().len(), keyword.as_str().len());
        }
    }

    #[test]
    fn test_edge_directive_case_sensitive() {
        assert_eq!(kinds(".NonRuntime"), vec![TokenKind::Illegal]);
    }

    #[test]
    fn test_edge_directive_followed_by_digits() {
        assert_eq!(kinds(".end2"), vec![TokenKind::Illegal]);
    }

    #[test]
    fn test_edge_underscore_member_ref() {
        let source = "_._";
        let t = lex_all(source);
        assert_eq!(t[0].kind(), TokenKind::MemberFieldRef);
        assert_eq!(t[0].lexeme(source), "_.");
        assert_eq!(t[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_member_ref_before_directive_spelling() {
        let t = lex_all("a.end");
        assert_eq!(t[0].kind(), TokenKind::MemberFieldRef);
        assert_eq!(t[1].keyword_tag(), None);
        assert_eq!(t[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_integer_zero_and_max() {
        let t = lex_all("0 9223372036854775807");
        assert_eq!(t[0].literal_value(), Some(&LiteralValue::Int(0)));
        assert_eq!(t[1].literal_value(), Some(&LiteralValue::Int(i64::MAX)));
    }

    #[test]
    fn test_edge_minus_is_separate() {
        assert_eq!(kinds("-5"), vec![TokenKind::Minus, TokenKind::Integer]);
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(t[0].literal_value(), Some(&LiteralValue::Str(String::new())));
    }

    #[test]
    fn test_edge_string_with_comment_marker() {
        let t = lex_all("\"// not a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].literal_value(), Some(&LiteralValue::Str("// not a comment".into())));
    }

    #[test]
    fn test_edge_lone_quote() {
        assert_eq!(kinds("\""), vec![TokenKind::Illegal]);
        assert_eq!(kinds("'"), vec![TokenKind::Illegal]);
    }

    #[test]
    fn test_edge_all_operators() {
        let t = kinds("+ - * ** / % == != < > <= >= << >> & | ^ ~ \\");
        assert_eq!(t.len(), 19);
        assert!(t.iter().all(|k| k.is_expression_operator()));
    }

    #[test]
    fn test_edge_operator_run() {
        assert_eq!(
            kinds("<<<=>>>="),
            vec![
                TokenKind::LeftShift,
                TokenKind::LessThanEqu,
                TokenKind::RightShift,
                TokenKind::GreaterThanEqu,
            ]
        );
    }

    #[test]
    fn test_edge_nested_parens() {
        let t = kinds("((()))");
        assert_eq!(t.iter().filter(|k| **k == TokenKind::LParen).count(), 3);
        assert_eq!(t.iter().filter(|k| **k == TokenKind::RParen).count(), 3);
    }

    #[test]
    fn test_edge_double_slash_never_emitted() {
        assert_eq!(kinds("a //b"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("a / /b"), vec![
            TokenKind::Identifier,
            TokenKind::FwdSlash,
            TokenKind::FwdSlash,
            TokenKind::Identifier,
        ]);
    }

    #[test]
    fn test_edge_blank_lines() {
        assert_eq!(kinds("\n\n\r\n"), vec![TokenKind::Newline; 3]);
    }

    #[test]
    fn test_edge_bom_then_directive() {
        let t = lex_all("\u{FEFF}.nonruntime");
        assert_eq!(t[0].keyword_tag(), Some(Keyword::NonRuntime));
        assert_eq!(t[0].span().start, 3);
        assert_eq!(t[0].span().column, 1);
    }

    #[test]
    fn test_edge_bom_kept_when_disabled() {
        let file = SourceFile::new("edge.tn", "\u{FEFF}x");
        let keywords = Keywords::new();
        let handler = Handler::new();
        let config = LexerConfig {
            skip_bom: false,
            ..LexerConfig::default()
        };
        let mut lexer = Lexer::with_config(&file, &keywords, &handler, config).unwrap();
        assert_eq!(lexer.next_token().kind(), TokenKind::Illegal);
        assert_eq!(lexer.next_token().kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_nul_character() {
        assert_eq!(kinds("\0"), vec![TokenKind::Illegal]);
    }

    #[test]
    fn test_edge_non_ascii_letter() {
        let source = "é";
        let t = lex_all(source);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind(), TokenKind::Illegal);
        assert_eq!(t[0].span().len(), source.len());
    }

    #[test]
    fn test_edge_dollar_and_octothorpe() {
        assert_eq!(kinds("$ #"), vec![TokenKind::Dollar, TokenKind::Octothorpe]);
    }
}
