use super::{ast::*, token::*, Column, Domain, Error, Lexeme, LineNumber};

type Result<T> = std::result::Result<T, Error>;

pub fn parse(line_number: LineNumber, lexemes: &[Lexeme]) -> Result<Vec<Statement>> {
    Parser::parse(lexemes).map_err(|e| e.in_line_number(line_number))
}

struct Parser<'a> {
    lexemes: &'a [Lexeme],
    pos: usize,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(lexemes: &'a [Lexeme]) -> Result<Vec<Statement>> {
        let mut parse = Parser {
            lexemes,
            pos: 0,
            col: 0..0,
        };
        let mut r: Vec<Statement> = vec![];
        loop {
            match parse.peek() {
                None if r.is_empty() => {
                    return Err(error!(UnrecognizedStatement, ..&parse.peek_column();
                        "EXPECTED STATEMENT"))
                }
                None => return Err(error!(DanglingSeparator, ..&parse.column())),
                Some(Token::Colon) => {
                    return Err(error!(DanglingSeparator, ..&parse.peek_column()))
                }
                Some(_) => {}
            }
            r.push(parse.statement()?);
            match parse.next() {
                None => return Ok(r),
                Some(Token::Colon) => continue,
                Some(Token::RParen) => {
                    return Err(error!(UnbalancedParenthesis, ..&parse.column()))
                }
                Some(_) => {
                    return Err(error!(UnexpectedToken, ..&parse.column();
                        "EXPECTED END OF STATEMENT"))
                }
            }
        }
    }

    /// Column of the last token taken.
    fn column(&self) -> Column {
        self.col.clone()
    }

    /// Column of the next token, or an empty column at the end of the line.
    fn peek_column(&self) -> Column {
        match self.lexemes.get(self.pos) {
            Some(lexeme) => lexeme.column.clone(),
            None => {
                let end = self.lexemes.last().map_or(0, |l| l.column.end);
                end..end
            }
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        let lexeme = self.lexemes.get(self.pos)?;
        self.pos += 1;
        self.col = lexeme.column.clone();
        Some(&lexeme.token)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.lexemes.get(self.pos).map(|l| &l.token)
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.peek() {
            Some(Token::Ident(_)) => Statement::r#let(self, false),
            Some(Token::Word(word)) => {
                self.next();
                Statement::for_word(self, *word)
            }
            _ => Err(error!(UnrecognizedStatement, ..&self.peek_column();
                "EXPECTED STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = this.unary()?;
            loop {
                let (op_precedence, op) = match this.peek() {
                    Some(Token::Operator(op)) => match Expression::binary_op(*op) {
                        Some(found) => found,
                        None => break,
                    },
                    _ => break,
                };
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let column = this.column();
                let rhs = parse(this, op_precedence + 1)?;
                lhs = Expression::for_binary_op(&column, op, lhs, rhs)?;
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn integer_expression(&mut self) -> Result<Expression> {
        self.domain_expression(Domain::Integer)
    }

    fn string_expression(&mut self) -> Result<Expression> {
        self.domain_expression(Domain::String)
    }

    fn domain_expression(&mut self, domain: Domain) -> Result<Expression> {
        let start = self.peek_column().start;
        let expr = self.expression()?;
        if expr.domain() != domain {
            return Err(error!(DomainMismatch, ..&(start..self.col.end); expected(domain)));
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expression> {
        let op = match self.peek() {
            Some(Token::Operator(Operator::Plus)) => UnaryOp::Plus,
            Some(Token::Operator(Operator::Minus)) => UnaryOp::Minus,
            Some(Token::Operator(Operator::Not)) => UnaryOp::Not,
            _ => return self.primary(),
        };
        self.next();
        let start = self.peek_column().start;
        let expr = self.unary()?;
        if expr.domain() != Domain::Integer {
            return Err(error!(DomainMismatch, ..&(start..self.col.end);
                expected(Domain::Integer)));
        }
        Ok(Expression::Unary(op, Box::new(expr)))
    }

    fn primary(&mut self) -> Result<Expression> {
        let column = self.peek_column();
        match self.next() {
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.close(&column)?;
                Ok(expr)
            }
            Some(Token::Literal(Literal::Integer(n))) => Ok(Expression::Integer(*n)),
            Some(Token::Literal(Literal::String(s))) => Ok(Expression::String(s.clone())),
            Some(Token::Ident(ident)) => Ok(Expression::Variable(self.variable(ident.clone())?)),
            Some(Token::Function(function)) => self.function(*function),
            Some(Token::Word(_)) if self.peek() == Some(&Token::LParen) => {
                Err(error!(UnknownFunction, ..&column))
            }
            Some(Token::RParen) => Err(error!(UnbalancedParenthesis, ..&column)),
            _ => Err(error!(UnexpectedToken, ..&column; "EXPECTED EXPRESSION")),
        }
    }

    /// The function token already holds its `(`.
    fn function(&mut self, function: Function) -> Result<Expression> {
        let open = self.column();
        let args = match function {
            Function::Asc | Function::Len => vec![self.string_expression()?],
            Function::Scrn => {
                let x = self.integer_expression()?;
                self.expect(Token::Comma)?;
                vec![x, self.integer_expression()?]
            }
            _ => vec![self.integer_expression()?],
        };
        self.close(&open)?;
        Ok(Expression::Function(function, args))
    }

    fn variable(&mut self, ident: Ident) -> Result<Variable> {
        if self.peek() != Some(&Token::LParen) {
            return Ok(Variable::Unary(ident));
        }
        self.next();
        let open = self.column();
        let index = self.integer_expression()?;
        if self.peek() == Some(&Token::Comma) {
            self.next();
            if ident.domain() != Domain::String {
                return Err(error!(DomainMismatch, ..&self.column(); "SLICE OF INTEGER"));
            }
            let end = self.integer_expression()?;
            self.close(&open)?;
            return Ok(Variable::Slice(ident, Box::new(index), Box::new(end)));
        }
        self.close(&open)?;
        Ok(Variable::Array(ident, Box::new(index)))
    }

    fn close(&mut self, open: &Column) -> Result<()> {
        match self.peek() {
            Some(Token::RParen) => {
                self.next();
                Ok(())
            }
            None => Err(error!(UnbalancedParenthesis, ..open)),
            Some(_) => Err(error!(UnexpectedToken, ..&self.peek_column(); "EXPECTED )")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if self.peek() == Some(&token) {
            self.next();
            return Ok(());
        }
        Err(error!(UnexpectedToken, ..&self.peek_column(); expected_token(&token)))
    }

    /// Like `expect` but for the fixed punctuation and clause words of a statement.
    fn operand(&mut self, token: Token) -> Result<()> {
        if self.peek() == Some(&token) {
            self.next();
            return Ok(());
        }
        Err(error!(MalformedOperands, ..&self.peek_column(); expected_token(&token)))
    }

    fn ident(&mut self) -> Result<Ident> {
        let column = self.peek_column();
        match self.next() {
            Some(Token::Ident(ident)) => Ok(ident.clone()),
            _ => Err(error!(MalformedOperands, ..&column; "EXPECTED VARIABLE")),
        }
    }

    fn integer_ident(&mut self) -> Result<Ident> {
        let ident = self.ident()?;
        if ident.domain() != Domain::Integer {
            return Err(error!(TargetMismatch, ..&self.column(); "EXPECTED INTEGER VARIABLE"));
        }
        Ok(ident)
    }

    fn line_number(&mut self) -> Result<Option<LineNumber>> {
        let n = match self.peek() {
            Some(Token::Literal(Literal::Integer(n))) => *n,
            _ => return Ok(None),
        };
        self.next();
        match LineNumber::try_from(n) {
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(error!(MalformedOperands, ..&self.column(); "LINE NUMBER TOO LARGE")),
        }
    }

    fn pair(&mut self) -> Result<(Expression, Expression)> {
        let a = self.integer_expression()?;
        self.operand(Token::Comma)?;
        Ok((a, self.integer_expression()?))
    }

    /// `a, b AT c` for HLIN and VLIN.
    fn line_operands(&mut self) -> Result<(Expression, Expression, Expression)> {
        let (a, b) = self.pair()?;
        self.operand(Token::Word(Word::At))?;
        Ok((a, b, self.integer_expression()?))
    }
}

fn expected(domain: Domain) -> &'static str {
    match domain {
        Domain::Integer => "EXPECTED INTEGER EXPRESSION",
        Domain::String => "EXPECTED STRING EXPRESSION",
    }
}

fn expected_token(token: &Token) -> &'static str {
    match token {
        Token::Comma => "EXPECTED ,",
        Token::RParen => "EXPECTED )",
        Token::LParen => "EXPECTED (",
        Token::Operator(Operator::Equal) => "EXPECTED =",
        Token::Word(Word::At) => "EXPECTED AT",
        Token::Word(Word::Then) => "EXPECTED THEN",
        Token::Word(Word::To) => "EXPECTED TO",
        _ => "UNEXPECTED TOKEN",
    }
}

impl Expression {
    fn binary_op(op: Operator) -> Option<(usize, BinaryOp)> {
        use Operator::*;
        Some(match op {
            Caret => (6, BinaryOp::Power),
            Multiply => (5, BinaryOp::Multiply),
            Divide => (5, BinaryOp::Divide),
            Modulus => (5, BinaryOp::Modulus),
            Plus => (4, BinaryOp::Add),
            Minus => (4, BinaryOp::Subtract),
            Equal => (3, BinaryOp::Equal),
            Hash => (3, BinaryOp::Hash),
            NotEqual => (3, BinaryOp::NotEqual),
            Less => (3, BinaryOp::Less),
            LessEqual => (3, BinaryOp::LessEqual),
            Greater => (3, BinaryOp::Greater),
            GreaterEqual => (3, BinaryOp::GreaterEqual),
            And => (3, BinaryOp::And),
            Or => (3, BinaryOp::Or),
            Not => return None,
        })
    }

    fn for_binary_op(
        col: &Column,
        op: BinaryOp,
        lhs: Expression,
        rhs: Expression,
    ) -> Result<Expression> {
        let op = match (lhs.domain(), rhs.domain(), op) {
            (Domain::Integer, Domain::Integer, op) => op,
            (Domain::String, Domain::String, BinaryOp::Equal) => BinaryOp::StrEqual,
            (Domain::String, Domain::String, BinaryOp::Hash) => BinaryOp::StrHash,
            (Domain::String, Domain::String, _) => {
                return Err(error!(DomainMismatch, ..col; "NOT A STRING OPERATOR"))
            }
            _ => return Err(error!(DomainMismatch, ..col; "MIXED INTEGER AND STRING")),
        };
        Ok(Expression::Binary(op, Box::new(lhs), Box::new(rhs)))
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Call => Ok(Statement::Call(parse.integer_expression()?)),
            Color => Ok(Statement::Color(parse.integer_expression()?)),
            Dim => Self::r#dim(parse),
            Dsp => Ok(Statement::Dsp(parse.ident()?)),
            End => Ok(Statement::End),
            For => Self::r#for(parse),
            Gosub => Ok(Statement::Gosub(parse.integer_expression()?)),
            Goto => Ok(Statement::Goto(parse.integer_expression()?)),
            Gr => Ok(Statement::Gr),
            Hlin => {
                let (a, b, c) = parse.line_operands()?;
                Ok(Statement::Hlin(a, b, c))
            }
            If => Self::r#if(parse),
            InNumber => Ok(Statement::InNumber(parse.integer_expression()?)),
            Input => Self::r#input(parse),
            Let => Self::r#let(parse, true),
            List => Self::r#list(parse),
            Next => Self::r#next(parse),
            NoDsp => Ok(Statement::NoDsp(parse.ident()?)),
            NoTrace => Ok(Statement::NoTrace),
            Plot => {
                let (a, b) = parse.pair()?;
                Ok(Statement::Plot(a, b))
            }
            Poke => {
                let (a, b) = parse.pair()?;
                Ok(Statement::Poke(a, b))
            }
            Pop => Ok(Statement::Pop),
            PrNumber => Ok(Statement::PrNumber(parse.integer_expression()?)),
            Print => Self::r#print(parse),
            Rem => Self::r#rem(parse),
            Return => Ok(Statement::Return),
            Tab => Ok(Statement::Tab(parse.integer_expression()?)),
            Text => Ok(Statement::Text),
            Trace => Ok(Statement::Trace),
            Vlin => {
                let (a, b, c) = parse.line_operands()?;
                Ok(Statement::Vlin(a, b, c))
            }
            Vtab => Ok(Statement::Vtab(parse.integer_expression()?)),
            At | Step | Then | To => Err(error!(UnrecognizedStatement, ..&parse.column();
                "EXPECTED STATEMENT")),
        }
    }

    fn r#dim(parse: &mut Parser) -> Result<Statement> {
        let mut v: Vec<Variable> = vec![];
        loop {
            let ident = parse.ident()?;
            parse.operand(Token::LParen)?;
            let open = parse.column();
            let start = parse.peek_column().start;
            let size = parse.expression()?;
            if size.domain() != Domain::Integer {
                return Err(error!(TargetMismatch, ..&(start..parse.col.end);
                    "EXPECTED INTEGER SIZE"));
            }
            parse.close(&open)?;
            v.push(Variable::Array(ident, Box::new(size)));
            if parse.peek() != Some(&Token::Comma) {
                return Ok(Statement::Dim(v));
            }
            parse.next();
        }
    }

    fn r#for(parse: &mut Parser) -> Result<Statement> {
        let ident = parse.integer_ident()?;
        parse.operand(Token::Operator(Operator::Equal))?;
        let from = parse.integer_expression()?;
        parse.operand(Token::Word(Word::To))?;
        let to = parse.integer_expression()?;
        let step = match parse.peek() {
            Some(Token::Word(Word::Step)) => {
                parse.next();
                Some(parse.integer_expression()?)
            }
            _ => None,
        };
        Ok(Statement::For(ident, from, to, step))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let predicate = parse.integer_expression()?;
        parse.operand(Token::Word(Word::Then))?;
        let consequent = match parse.peek() {
            Some(Token::Ident(_)) => Consequent::Statement(Box::new(parse.statement()?)),
            Some(Token::Word(word)) if word.starts_statement() => {
                Consequent::Statement(Box::new(parse.statement()?))
            }
            _ => Consequent::Jump(parse.integer_expression()?),
        };
        Ok(Statement::If(predicate, consequent))
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        let prompt = match parse.peek() {
            Some(Token::Literal(Literal::String(s))) => {
                parse.next();
                let prompt = Expression::String(s.clone());
                parse.operand(Token::Comma)?;
                Some(prompt)
            }
            _ => None,
        };
        let mut v: Vec<Variable> = vec![];
        loop {
            let ident = parse.ident()?;
            v.push(parse.variable(ident)?);
            if parse.peek() != Some(&Token::Comma) {
                return Ok(Statement::Input(prompt, v));
            }
            parse.next();
        }
    }

    fn r#let(parse: &mut Parser, explicit: bool) -> Result<Statement> {
        let start = parse.peek_column().start;
        let ident = parse.ident()?;
        let var = parse.variable(ident)?;
        let target = start..parse.col.end;
        if let Variable::Slice(..) = var {
            return Err(error!(MalformedOperands, ..&target; "CAN NOT ASSIGN TO SLICE"));
        }
        match parse.peek() {
            Some(Token::Operator(Operator::Equal)) => {
                parse.next();
            }
            _ if explicit => {
                return Err(error!(MalformedOperands, ..&parse.peek_column(); "EXPECTED ="))
            }
            _ => return Err(error!(UnrecognizedStatement, ..&target)),
        }
        let start = parse.peek_column().start;
        let expr = parse.expression()?;
        if expr.domain() != var.domain() {
            return Err(error!(TargetMismatch, ..&(start..parse.col.end);
                expected(var.domain())));
        }
        Ok(Statement::Let(var, expr))
    }

    fn r#list(parse: &mut Parser) -> Result<Statement> {
        let from = match parse.line_number()? {
            Some(from) => from,
            None => return Ok(Statement::List(None, None)),
        };
        if parse.peek() != Some(&Token::Comma) {
            return Ok(Statement::List(Some(from), None));
        }
        parse.next();
        match parse.line_number()? {
            Some(to) => Ok(Statement::List(Some(from), Some(to))),
            None => Err(error!(MalformedOperands, ..&parse.peek_column();
                "EXPECTED LINE NUMBER")),
        }
    }

    fn r#next(parse: &mut Parser) -> Result<Statement> {
        let mut v: Vec<Ident> = vec![parse.integer_ident()?];
        while parse.peek() == Some(&Token::Comma) {
            parse.next();
            v.push(parse.integer_ident()?);
        }
        Ok(Statement::Next(v))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        let mut v: Vec<PrintItem> = vec![];
        let mut expression_allowed = true;
        loop {
            match parse.peek() {
                Some(Token::Comma) => {
                    parse.next();
                    v.push(PrintItem::Comma);
                    expression_allowed = true;
                }
                Some(Token::Semicolon) => {
                    parse.next();
                    v.push(PrintItem::Semicolon);
                    expression_allowed = true;
                }
                None | Some(Token::Colon) => return Ok(Statement::Print(v)),
                _ if expression_allowed => {
                    v.push(PrintItem::Expression(parse.expression()?));
                    expression_allowed = false;
                }
                _ => return Ok(Statement::Print(v)),
            }
        }
    }

    fn r#rem(parse: &mut Parser) -> Result<Statement> {
        match parse.peek() {
            Some(Token::Remark(s)) => {
                parse.next();
                Ok(Statement::Rem(s.clone()))
            }
            _ => Ok(Statement::Rem(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{lex, Config, ErrorCode};
    use super::*;

    fn parse_str(s: &str) -> Vec<Statement> {
        let (lin, lexemes) = lex(&format!("10 {}", s), Config::default()).unwrap();
        match parse(lin, &lexemes) {
            Ok(v) => v,
            Err(e) => panic!("{} : {:?}", s, e),
        }
    }

    fn parse_err(s: &str) -> Error {
        let (lin, lexemes) = lex(&format!("10 {}", s), Config::default()).unwrap();
        parse(lin, &lexemes).unwrap_err()
    }

    fn int(n: i64) -> Box<Expression> {
        Box::new(Expression::Integer(n))
    }

    fn var(s: &str) -> Expression {
        Expression::Variable(Variable::Unary(Ident::Integer(s.to_string())))
    }

    #[test]
    fn test_precedence() {
        let answer = Statement::Print(vec![PrintItem::Expression(Expression::Binary(
            BinaryOp::Add,
            int(2),
            Box::new(Expression::Binary(
                BinaryOp::Multiply,
                int(3),
                Box::new(Expression::Binary(BinaryOp::Power, int(4), int(2))),
            )),
        ))]);
        assert_eq!(parse_str("PRINT 2 + 3 * 4 ^ 2"), vec![answer]);
    }

    #[test]
    fn test_left_associative() {
        let answer = Statement::Print(vec![PrintItem::Expression(Expression::Binary(
            BinaryOp::Subtract,
            Box::new(Expression::Binary(BinaryOp::Subtract, int(8), int(4))),
            int(2),
        ))]);
        assert_eq!(parse_str("PRINT 8-4-2"), vec![answer]);
    }

    #[test]
    fn test_unary_binds_tighter_than_power() {
        let answer = Statement::Print(vec![PrintItem::Expression(Expression::Binary(
            BinaryOp::Power,
            Box::new(Expression::Unary(UnaryOp::Minus, int(2))),
            int(2),
        ))]);
        assert_eq!(parse_str("PRINT -2^2"), vec![answer]);
    }

    #[test]
    fn test_string_comparison() {
        let answer = Statement::If(
            Expression::Binary(
                BinaryOp::StrEqual,
                Box::new(Expression::Variable(Variable::Unary(Ident::String(
                    "A".to_string(),
                )))),
                Box::new(Expression::String("YES".to_string())),
            ),
            Consequent::Jump(Expression::Integer(100)),
        );
        assert_eq!(parse_str("IF A$ = \"YES\" THEN 100"), vec![answer]);
        let e = parse_err("IF A$ < \"YES\" THEN 100");
        assert_eq!(e.code(), ErrorCode::DomainMismatch);
        assert_eq!(e.column(), 9..10);
    }

    #[test]
    fn test_let() {
        let answer = Statement::Let(Variable::Unary(Ident::Integer("TER".to_string())), var("BAR"));
        assert_eq!(parse_str("letter=bar"), vec![answer.clone()]);
        assert_eq!(parse_str("TER = BAR"), vec![answer]);
        assert_eq!(parse_err("A = \"X\"").code(), ErrorCode::TargetMismatch);
        assert_eq!(parse_err("A$(1,2) = \"X\"").code(), ErrorCode::MalformedOperands);
        assert_eq!(parse_err("LET A 1").code(), ErrorCode::MalformedOperands);
        assert_eq!(parse_err("A 1").code(), ErrorCode::UnrecognizedStatement);
    }

    #[test]
    fn test_if_consequents() {
        let v = parse_str("IF X THEN PRINT \"HI\"");
        assert_eq!(
            v,
            vec![Statement::If(
                var("X"),
                Consequent::Statement(Box::new(Statement::Print(vec![PrintItem::Expression(
                    Expression::String("HI".to_string())
                )]))),
            )]
        );
        let v = parse_str("IF X THEN 100");
        assert_eq!(
            v,
            vec![Statement::If(var("X"), Consequent::Jump(Expression::Integer(100)))]
        );
        let v = parse_str("IF X THEN Y = 1: END");
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_print_separators() {
        let v = parse_str("PRINT 1,2;");
        assert_eq!(
            v,
            vec![Statement::Print(vec![
                PrintItem::Expression(Expression::Integer(1)),
                PrintItem::Comma,
                PrintItem::Expression(Expression::Integer(2)),
                PrintItem::Semicolon,
            ])]
        );
        assert!(!v[0].ends_line());
        assert_eq!(parse_str("PRINT"), vec![Statement::Print(vec![])]);
        assert_eq!(parse_err("PRINT 1 2 3 \"X\"").code(), ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_functions() {
        let v = parse_str("PRINT LEN(A$) + SCRN(1, 2)");
        assert_eq!(
            v,
            vec![Statement::Print(vec![PrintItem::Expression(Expression::Binary(
                BinaryOp::Add,
                Box::new(Expression::Function(
                    Function::Len,
                    vec![Expression::Variable(Variable::Unary(Ident::String(
                        "A".to_string()
                    )))]
                )),
                Box::new(Expression::Function(
                    Function::Scrn,
                    vec![Expression::Integer(1), Expression::Integer(2)]
                )),
            ))])]
        );
        assert_eq!(parse_err("PRINT ABS(\"X\")").code(), ErrorCode::DomainMismatch);
        assert_eq!(parse_err("PRINT ABS(1").code(), ErrorCode::UnbalancedParenthesis);
        assert_eq!(parse_err("PRINT TAB(1)").code(), ErrorCode::UnknownFunction);
    }

    #[test]
    fn test_separators() {
        assert_eq!(parse_str("END:END").len(), 2);
        assert_eq!(parse_err("END:").code(), ErrorCode::DanglingSeparator);
        assert_eq!(parse_err("END::END").code(), ErrorCode::DanglingSeparator);
        assert_eq!(parse_err("END)").code(), ErrorCode::UnbalancedParenthesis);
        assert_eq!(parse_err("").code(), ErrorCode::UnrecognizedStatement);
        let e = parse_err("THEN");
        assert_eq!(e.code(), ErrorCode::UnrecognizedStatement);
        assert_eq!(e.line_number(), Some(10));
    }
}
