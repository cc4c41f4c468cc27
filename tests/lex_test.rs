use intbasic::lang::{lex, token::*, Config, ErrorCode, ErrorKind, Ident, Lexeme};

fn tokens(s: &str) -> Vec<Token> {
    let (_, v) = lex(s, Config::default()).unwrap();
    v.into_iter().map(|l| l.token).collect()
}

fn int(n: i64) -> Token {
    Token::Literal(Literal::Integer(n))
}

fn name(s: &str) -> Token {
    Token::Ident(Ident::Integer(s.to_string()))
}

#[test]
fn test_for_print_next() {
    let (ln, v) = lex("10 FOR I = 1 TO 10: PRINT I: NEXT I", Config::default()).unwrap();
    assert_eq!(ln, 10);
    let v: Vec<Token> = v.into_iter().map(|l| l.token).collect();
    assert_eq!(
        v,
        vec![
            Token::Word(Word::For),
            name("I"),
            Token::Operator(Operator::Equal),
            int(1),
            Token::Word(Word::To),
            int(10),
            Token::Colon,
            Token::Word(Word::Print),
            name("I"),
            Token::Colon,
            Token::Word(Word::Next),
            name("I"),
        ]
    );
}

#[test]
fn test_spaced_word_keeps_its_span() {
    let (_, v) = lex("10 G O T O 100", Config::default()).unwrap();
    assert_eq!(
        v[0],
        Lexeme {
            token: Token::Word(Word::Goto),
            column: 3..10
        }
    );
    assert_eq!(v[0].text(), "GOTO");
    assert_eq!(v[1].column, 11..14);
}

#[test]
fn test_no_spaces_needed() {
    assert_eq!(
        tokens("10 IFXTHEN100"),
        vec![
            Token::Word(Word::If),
            name("X"),
            Token::Word(Word::Then),
            int(100)
        ]
    );
    assert_eq!(
        tokens("10FORI=1TO10STEP2"),
        vec![
            Token::Word(Word::For),
            name("I"),
            Token::Operator(Operator::Equal),
            int(1),
            Token::Word(Word::To),
            int(10),
            Token::Word(Word::Step),
            int(2),
        ]
    );
    assert_eq!(
        tokens("10 LETTER=1"),
        vec![
            Token::Word(Word::Let),
            name("TER"),
            Token::Operator(Operator::Equal),
            int(1)
        ]
    );
}

#[test]
fn test_names() {
    assert_eq!(
        tokens("10 A1B2$ = B"),
        vec![
            Token::Ident(Ident::String("A1B2".to_string())),
            Token::Operator(Operator::Equal),
            name("B"),
        ]
    );
    assert_eq!(
        tokens("10 ABS = 1"),
        vec![name("ABS"), Token::Operator(Operator::Equal), int(1)]
    );
    assert_eq!(
        tokens("10 X = YMODZ"),
        vec![
            name("X"),
            Token::Operator(Operator::Equal),
            name("Y"),
            Token::Operator(Operator::Modulus),
            name("Z"),
        ]
    );
}

#[test]
fn test_reserved_word_in_name() {
    for s in &["10 GRAPH=1", "10 POPS=1", "10 ENDING=1", "10 LISTED", "10 TEXT2=1"] {
        let e = lex(s, Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ReservedWordCollision, "{}", s);
        assert_eq!(e.kind(), ErrorKind::Lex);
        assert_eq!(e.line_number(), Some(10));
    }
    let e = lex("10 X=1:RETURNED", Config::default()).unwrap_err();
    assert_eq!(e.column(), 7..15);
}

#[test]
fn test_crunched_clauses() {
    assert_eq!(
        tokens("10 FOR I=1TON"),
        vec![
            Token::Word(Word::For),
            name("I"),
            Token::Operator(Operator::Equal),
            int(1),
            Token::Word(Word::To),
            name("N"),
        ]
    );
    assert_eq!(
        tokens("10 IF A>1THENPRINT 1"),
        vec![
            Token::Word(Word::If),
            name("A"),
            Token::Operator(Operator::Greater),
            int(1),
            Token::Word(Word::Then),
            Token::Word(Word::Print),
            int(1),
        ]
    );
    assert_eq!(tokens("10 IF X THENPRINT 1"), tokens("10 IF XTHENPRINT 1"));
    assert_eq!(
        tokens("10 HLIN 0,39ATY"),
        vec![
            Token::Word(Word::Hlin),
            int(0),
            Token::Comma,
            int(39),
            Token::Word(Word::At),
            name("Y"),
        ]
    );
    assert_eq!(
        tokens("10 X=ORANGE"),
        vec![
            name("X"),
            Token::Operator(Operator::Equal),
            Token::Operator(Operator::Or),
            name("ANGE"),
        ]
    );
}

#[test]
fn test_operators() {
    assert_eq!(
        tokens("10 1=<>=<>2"),
        vec![
            int(1),
            Token::Operator(Operator::Equal),
            Token::Operator(Operator::NotEqual),
            Token::Operator(Operator::Equal),
            Token::Operator(Operator::NotEqual),
            int(2),
        ]
    );
    assert_eq!(
        tokens("10 1< =2"),
        vec![int(1), Token::Operator(Operator::LessEqual), int(2)]
    );
}

#[test]
fn test_case_modes() {
    let sensitive = Config::case_sensitive();
    assert!(lex("10 PRINT \"lower\"", sensitive).is_ok());
    assert!(lex("10 REM lower", sensitive).is_ok());
    let e = lex("10 PRINT x", sensitive).unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnmatchedCharacter);
    assert_eq!(e.column(), 9..10);
    assert_eq!(tokens("10 pRiNt x"), tokens("10 PRINT X"));
}

#[test]
fn test_line_numbers() {
    let (ln, v) = lex("  1 2 3 END", Config::default()).unwrap();
    assert_eq!(ln, 123);
    assert_eq!(v.len(), 1);
    let e = lex("99999999999 END", Config::default()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::NumberOverflow);
    assert_eq!(e.line_number(), None);
    let e = lex("", Config::default()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::MissingLineNumber);
}

#[test]
fn test_strings_and_remarks() {
    assert_eq!(
        tokens("10 PRINT \"A:B\";"),
        vec![
            Token::Word(Word::Print),
            Token::Literal(Literal::String("A:B".to_string())),
            Token::Semicolon,
        ]
    );
    assert_eq!(
        tokens("10 REM IT'S \"FINE\": PRINT"),
        vec![
            Token::Word(Word::Rem),
            Token::Remark(" IT'S \"FINE\": PRINT".to_string())
        ]
    );
    let e = lex("10 PRINT \"unterminated", Config::default()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnterminatedString);
    assert_eq!(e.kind(), ErrorKind::Lex);
    assert_eq!(e.column(), 9..22);
}
