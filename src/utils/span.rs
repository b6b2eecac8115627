/// 源码中的字节区间 `[start, end)`
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Span start must be <= end");
        Self { start, end }
    }

    /// 覆盖两个区间的最小区间
    pub fn to(self, other: Span) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// 区间对应的源码文本; 越界或不在字符边界上时为 None
    pub fn text(self, src: &str) -> Option<&str> {
        src.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn merge_keeps_outer_bounds() {
        let a = Span::new(4, 7);
        let b = Span::new(1, 5);
        assert_eq!(a.to(b), Span::new(1, 7));
        assert_eq!(b.to(a), Span::new(1, 7));
    }

    #[test]
    fn text_respects_bounds() {
        assert_eq!(Span::new(4, 7).text("let foo = 1"), Some("foo"));
        assert_eq!(Span::new(4, 70).text("let"), None);
    }
}
