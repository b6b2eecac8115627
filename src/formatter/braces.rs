#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Str(char),
    Comment,
}

/// 单趟展开: `{x` 拆成 `{` 换行 `x`, `x}` 拆成 `x` 换行 `}`
///
/// 字符串与 `//` 注释里的花括号不动; 字符串在行尾结束
pub(super) fn expand_braces(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 8);
    let mut state = State::Code;
    let mut previous: Option<char> = None;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '"' | '\'' => {
                    state = State::Str(c);
                    out.push(c);
                }
                '/' if chars.peek() == Some(&'/') => {
                    state = State::Comment;
                    out.push(c);
                }
                '{' => {
                    out.push(c);
                    if chars.peek().is_some_and(|&next| !next.is_whitespace() && next != '}') {
                        out.push('\n');
                    }
                }
                '}' => {
                    if previous.is_some_and(|prev| !prev.is_whitespace() && prev != '{') {
                        out.push('\n');
                    }
                    out.push(c);
                }
                _ => out.push(c),
            },
            State::Str(quote) => {
                out.push(c);
                if c == '\n' || c == quote {
                    state = State::Code;
                } else if c == '\\' {
                    // 转义吃掉下一个字符, 但不跨行
                    if let Some(&next) = chars.peek() {
                        if next != '\n' {
                            out.push(next);
                            chars.next();
                            previous = Some(next);
                            continue;
                        }
                    }
                }
            }
            State::Comment => {
                out.push(c);
                if c == '\n' {
                    state = State::Code;
                }
            }
        }
        previous = Some(c);
    }

    out
}
