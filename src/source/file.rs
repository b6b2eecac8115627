use crate::source::{DocumentId, Position, PositionEncoding, Range};

/// 一份打开的文档: 文本 + 行首偏移表
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub id: DocumentId,
    pub src: String,
    pub line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(id: DocumentId, src: String) -> Self {
        // 计算每一行的起始位置
        let line_starts = std::iter::once(0)
            .chain(src.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            id,
            src,
            line_starts,
        }
    }

    /// 1-based 行号
    pub fn lookup_line(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// 返回 (行号, 列号, 该行文本内容), 均为 1-based, 列号按字符计
    pub fn lookup_location(&self, offset: usize) -> (usize, usize, &str) {
        let offset = self.clamp_offset(offset);
        let line_num = self.lookup_line(offset);
        let line_start = self.line_starts[line_num - 1];
        let col_num = self.src[line_start..offset].chars().count() + 1;

        let line_end = if line_num < self.line_starts.len() {
            self.line_starts[line_num] - 1 // -1 去掉换行符
        } else {
            self.src.len()
        };

        let line_text = if line_start > line_end {
            ""
        } else {
            &self.src[line_start..line_end]
        };

        (line_num, col_num, line_text)
    }

    /// 第 `line` 行 (0-based) 的文本, 不含换行符
    fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => self.src.len(),
        };
        let text = &self.src[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// 将编辑器坐标 (0-based 行, `encoding` 单位的列) 转换为字节偏移量
    ///
    /// 超出行尾的列被夹到行尾, 落在字符中间的列取该字符之后, 超出文件的行返回 None
    pub fn offset_at(
        &self,
        line: usize,
        character: usize,
        encoding: PositionEncoding,
    ) -> Option<usize> {
        let text = self.line_text(line)?;

        let mut units = 0;
        let within = text
            .char_indices()
            .find_map(|(i, c)| {
                if units >= character {
                    return Some(i);
                }
                units += encoding.units(c);
                None
            })
            .unwrap_or(text.len());

        Some(self.line_starts[line] + within)
    }

    /// 按字符计的坐标 -> `encoding` 单位的坐标; 超出行尾的部分按一字符一单位
    pub fn encode_position(&self, position: Position, encoding: PositionEncoding) -> Position {
        let Some(text) = self.line_text(position.line as usize) else {
            return position;
        };

        let wanted = position.character as usize;
        let (count, units) = text
            .chars()
            .take(wanted)
            .fold((0, 0), |(count, units), c| (count + 1, units + encoding.units(c)));

        Position::new(position.line, (units + wanted - count) as u32)
    }

    pub fn encode_range(&self, range: Range, encoding: PositionEncoding) -> Range {
        Range::new(
            self.encode_position(range.start, encoding),
            self.encode_position(range.end, encoding),
        )
    }

    /// 文档末尾的编辑器坐标 (整篇替换时用作 Range.end)
    pub fn end_position(&self, encoding: PositionEncoding) -> Position {
        let last = self.line_starts.len() - 1;
        let tail = &self.src[self.line_starts[last]..];
        let units: usize = tail.chars().map(|c| encoding.units(c)).sum();
        Position::new(last as u32, units as u32)
    }

    fn clamp_offset(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.src.len());
        while !self.src.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}
