use crate::utils::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline(always)]
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }
}

macro_rules! define_tokens {
    (
        dynamic { $($dynamic_variant:ident),* $(,)? }
        keywords { $($keyword_text:literal => $keyword_variant:ident),* $(,)? }
        symbols { $($symbol_text:literal => $symbol_variant:ident),* $(,)? }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenKind {
            EOF,
            ERROR,
            // 动态 Token (词法分析器根据逻辑生成，而非直接匹配字符串)
            $($dynamic_variant),*,
            // 关键字
            $($keyword_variant),*,
            // 符号
            $($symbol_variant),*,
        }

        impl TokenKind {
            pub fn as_str(&self) -> &'static str {
                match self {
                    TokenKind::EOF => "end of file",
                    TokenKind::ERROR => "error",
                    $(TokenKind::$dynamic_variant => stringify!($dynamic_variant)),*,
                    $(TokenKind::$keyword_variant => $keyword_text),*,
                    $(TokenKind::$symbol_variant => $symbol_text),*,
                }
            }

            pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
                match text {
                    $($keyword_text => Some(TokenKind::$keyword_variant),)*
                    _ => None,
                }
            }

            pub fn lookup_symbol(text: &str) -> Option<TokenKind> {
                match text {
                    $($symbol_text => Some(TokenKind::$symbol_variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_tokens! {
    dynamic {
        Identifier,
        Number,       // 123, 12.5
        StringLiteral,// "hello" 或 'hello'
    }

    keywords {
        // --- 声明 ---
        "let"      => Let,
        "const"    => Const,
        "fn"       => Fn,

        // --- 模块 ---
        "import"   => Import,
        "from"     => From,

        // --- 控制流 ---
        "if"       => If,
        "else"     => Else,
        "while"    => While,
        "return"   => Return,
        "break"    => Break,
        "continue" => Continue,
        "and"      => And,
        "or"       => Or,
        // true / false / null 按普通标识符处理
    }

    symbols {
        // --- 算术 ---
        "+"   => Plus,
        "-"   => Minus,
        "*"   => Star,
        "/"   => Slash,
        "%"   => Percent,

        // --- 赋值与复合赋值 ---
        "="   => Assign,
        "+="  => PlusAssign,
        "-="  => MinusAssign,
        "*="  => StarAssign,
        "/="  => SlashAssign,
        "%="  => PercentAssign,

        // --- 逻辑 ---
        "!"   => Bang,
        "&&"  => AmpAmp,
        "||"  => PipePipe,

        // --- 比较 ---
        "=="  => Equal,
        "!="  => NotEqual,
        "<"   => LessThan,
        "<="  => LessEqual,
        ">"   => GreaterThan,
        ">="  => GreaterEqual,

        // --- 标点符号 ---
        "("   => LeftParen,
        ")"   => RightParen,
        "["   => LeftBracket,
        "]"   => RightBracket,
        "{"   => LeftBrace,
        "}"   => RightBrace,
        "."   => Dot,
        ","   => Comma,
        ":"   => Colon,
        ";"   => Semicolon,
        "=>"  => FatArrow,        // 箭头函数 (a, b) => a + b
    }
}
