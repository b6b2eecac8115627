use crate::utils::Span;
use core::ops::Deref;

/// AST 节点: 数据 + 源码区间
///
/// 节点由父容器独占, 不需要反向引用
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub span: Span,
    pub data: T,
}

impl<T> Node<T> {
    pub fn new(span: Span, data: T) -> Self {
        Self { span, data }
    }
}

impl<T> Deref for Node<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
