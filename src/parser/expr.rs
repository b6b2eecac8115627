mod postfix;
mod prefix;

use crate::ast::*;
use crate::parser::{ParseResult, Parser};
use crate::token::TokenKind;

// 结合力, 越大越紧
const ASSIGN: u8 = 10;
const OR: u8 = 20;
const AND: u8 = 30;
const COMPARE: u8 = 40;
const SUM: u8 = 50;
const PRODUCT: u8 = 60;
pub(super) const UNARY: u8 = 80;
const POSTFIX: u8 = 90;

/// 出现在左操作数之后的运算符
#[derive(Clone, Copy)]
enum Infix {
    Assign(AssignOp),
    Binary(BinaryOp),
    /// 调用 / 下标 / 成员访问
    Postfix,
}

fn infix(kind: TokenKind) -> Option<(Infix, u8)> {
    use TokenKind as T;

    let entry = match kind {
        T::Assign => (Infix::Assign(AssignOp::Assign), ASSIGN),
        T::PlusAssign => (Infix::Assign(AssignOp::PlusAssign), ASSIGN),
        T::MinusAssign => (Infix::Assign(AssignOp::MinusAssign), ASSIGN),
        T::StarAssign => (Infix::Assign(AssignOp::MulAssign), ASSIGN),
        T::SlashAssign => (Infix::Assign(AssignOp::DivAssign), ASSIGN),
        T::PercentAssign => (Infix::Assign(AssignOp::ModAssign), ASSIGN),

        T::Or | T::PipePipe => (Infix::Binary(BinaryOp::Or), OR),
        T::And | T::AmpAmp => (Infix::Binary(BinaryOp::And), AND),

        T::Equal => (Infix::Binary(BinaryOp::Eq), COMPARE),
        T::NotEqual => (Infix::Binary(BinaryOp::Neq), COMPARE),
        T::LessThan => (Infix::Binary(BinaryOp::Lt), COMPARE),
        T::LessEqual => (Infix::Binary(BinaryOp::Lte), COMPARE),
        T::GreaterThan => (Infix::Binary(BinaryOp::Gt), COMPARE),
        T::GreaterEqual => (Infix::Binary(BinaryOp::Gte), COMPARE),

        T::Plus => (Infix::Binary(BinaryOp::Add), SUM),
        T::Minus => (Infix::Binary(BinaryOp::Sub), SUM),
        T::Star => (Infix::Binary(BinaryOp::Mul), PRODUCT),
        T::Slash => (Infix::Binary(BinaryOp::Div), PRODUCT),
        T::Percent => (Infix::Binary(BinaryOp::Mod), PRODUCT),

        T::LeftParen | T::LeftBracket | T::Dot => (Infix::Postfix, POSTFIX),
        _ => return None,
    };
    Some(entry)
}

impl<'a> Parser<'a> {
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expression_bp(0)
    }

    /// 表达式的每一层递归都计入嵌套深度
    pub(super) fn parse_expression_bp(&mut self, min_bp: u8) -> ParseResult<Expression> {
        self.nested(|parser| parser.parse_infix_loop(min_bp))
    }

    /// Pratt 主循环: 前缀之后不断吞掉结合力不低于 `min_bp` 的中缀
    fn parse_infix_loop(&mut self, min_bp: u8) -> ParseResult<Expression> {
        let mut lhs = self.parse_prefix()?;

        while let Some((op, bp)) = infix(self.peek().kind) {
            if bp < min_bp {
                break;
            }
            // 每包一层, 左操作数就更深一层; 由外层 nested 恢复
            self.deepen()?;

            lhs = match op {
                Infix::Postfix => self.parse_postfix(lhs)?,
                Infix::Assign(op) => {
                    self.advance();
                    // 右结合: a = b = c => a = (b = c)
                    let value = self.parse_expression_bp(bp)?;
                    let span = lhs.span.to(value.span);
                    self.make_node(
                        ExpressionData::Assign {
                            op,
                            target: Box::new(lhs),
                            value: Box::new(value),
                        },
                        span,
                    )
                }
                Infix::Binary(op) => {
                    self.advance();
                    let right = self.parse_expression_bp(bp + 1)?;
                    let span = lhs.span.to(right.span);
                    self.make_node(
                        ExpressionData::Binary {
                            op,
                            left: Box::new(lhs),
                            right: Box::new(right),
                        },
                        span,
                    )
                }
            };
        }

        Ok(lhs)
    }
}
