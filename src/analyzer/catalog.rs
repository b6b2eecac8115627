use super::{SymbolInfo, SymbolKind};
use indexmap::IndexMap;
use std::sync::LazyLock;

/// 内置库符号表 (函数 / 常量 / 命名空间)
///
/// 进程内只构建一次, 之后只读
#[derive(Debug)]
pub struct GlobalCatalog {
    symbols: IndexMap<String, SymbolInfo>,
}

impl GlobalCatalog {
    pub fn get(&self, name: &str) -> Option<&SymbolInfo> {
        self.symbols.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolInfo> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn build() -> Self {
        let mut symbols = IndexMap::new();
        for symbol in builtin_symbols() {
            symbols.insert(symbol.name.clone(), symbol);
        }
        Self { symbols }
    }
}

static CATALOG: LazyLock<GlobalCatalog> = LazyLock::new(GlobalCatalog::build);

pub fn global_catalog() -> &'static GlobalCatalog {
    &CATALOG
}

// --- 构造辅助 ---

fn function(name: &str, params: &[&str], doc: &str) -> SymbolInfo {
    SymbolInfo::new(
        name,
        SymbolKind::Function,
        format!("fn {}({})", name, params.join(", ")),
    )
    .with_documentation(doc)
}

fn constant(name: &str, ty: &str, doc: &str) -> SymbolInfo {
    SymbolInfo::new(name, SymbolKind::Constant, format!("const {}: {}", name, ty))
        .with_documentation(doc)
}

fn method(namespace: &str, name: &str, params: &[&str], doc: &str) -> SymbolInfo {
    SymbolInfo::new(
        name,
        SymbolKind::Function,
        format!("fn {}.{}({})", namespace, name, params.join(", ")),
    )
    .with_documentation(doc)
}

fn field(namespace: &str, name: &str, ty: &str, doc: &str) -> SymbolInfo {
    SymbolInfo::new(
        name,
        SymbolKind::Property,
        format!("const {}.{}: {}", namespace, name, ty),
    )
    .with_documentation(doc)
}

fn namespace(name: &str, doc: &str, members: Vec<SymbolInfo>) -> SymbolInfo {
    SymbolInfo::new(name, SymbolKind::Module, format!("module {}", name))
        .with_documentation(doc)
        .with_members(members)
}

fn builtin_symbols() -> Vec<SymbolInfo> {
    vec![
        // --- 全局函数 ---
        function("print", &["value"], "Writes a value to standard output."),
        function("input", &["prompt"], "Reads one line from standard input."),
        function("len", &["value"], "Length of a string, array or object."),
        function("type", &["value"], "Name of the runtime type of a value."),
        function("str", &["value"], "Converts a value to its string form."),
        function("num", &["value"], "Parses a number from a string."),
        function("range", &["start", "end"], "Array of integers from start up to end."),
        function("push", &["array", "value"], "Appends a value to an array."),
        function("pop", &["array"], "Removes and returns the last element of an array."),
        function("keys", &["object"], "Array of an object's keys."),
        function("random", &[], "Random number in [0, 1)."),
        function("sleep", &["ms"], "Pauses execution for the given milliseconds."),
        function("assert", &["condition", "message"], "Fails when the condition is false."),
        // --- 常量 ---
        constant("PI", "number", "Ratio of a circle's circumference to its diameter."),
        constant("E", "number", "Euler's number."),
        constant("INFINITY", "number", "Positive infinity."),
        // --- 命名空间 ---
        namespace(
            "Math",
            "Numeric helpers.",
            vec![
                method("Math", "abs", &["x"], "Absolute value."),
                method("Math", "floor", &["x"], "Largest integer not above x."),
                method("Math", "ceil", &["x"], "Smallest integer not below x."),
                method("Math", "round", &["x"], "Nearest integer."),
                method("Math", "sqrt", &["x"], "Square root."),
                method("Math", "pow", &["base", "exponent"], "base raised to exponent."),
                method("Math", "min", &["a", "b"], "Smaller of two numbers."),
                method("Math", "max", &["a", "b"], "Larger of two numbers."),
                method("Math", "sin", &["x"], "Sine of x in radians."),
                method("Math", "cos", &["x"], "Cosine of x in radians."),
            ],
        ),
        namespace(
            "String",
            "String helpers.",
            vec![
                method("String", "upper", &["s"], "Upper-cased copy of s."),
                method("String", "lower", &["s"], "Lower-cased copy of s."),
                method("String", "trim", &["s"], "s without surrounding whitespace."),
                method("String", "split", &["s", "separator"], "Splits s into an array."),
                method("String", "contains", &["s", "needle"], "Whether s contains needle."),
                method("String", "replace", &["s", "from", "to"], "Replaces every occurrence."),
            ],
        ),
        namespace(
            "Array",
            "Array helpers.",
            vec![
                method("Array", "map", &["array", "f"], "New array of f applied to each element."),
                method("Array", "filter", &["array", "predicate"], "Elements matching predicate."),
                method("Array", "join", &["array", "separator"], "Joins elements into a string."),
                method("Array", "slice", &["array", "start", "end"], "Sub-array from start to end."),
            ],
        ),
        namespace(
            "Window",
            "The application window.",
            vec![
                method("Window", "create", &["width", "height", "title"], "Opens the window."),
                method("Window", "clear", &["color"], "Fills the window with a color."),
            ],
        ),
        namespace(
            "Draw",
            "2D drawing primitives.",
            vec![
                method("Draw", "rect", &["x", "y", "width", "height", "color"], "Filled rectangle."),
                method("Draw", "circle", &["x", "y", "radius", "color"], "Filled circle."),
                method("Draw", "line", &["x1", "y1", "x2", "y2", "color"], "Line segment."),
                method("Draw", "text", &["text", "x", "y", "size", "color"], "Text at a position."),
            ],
        ),
        namespace(
            "Input",
            "Keyboard and mouse state.",
            vec![
                method("Input", "key_down", &["key"], "Whether a key is held down."),
                method("Input", "mouse_x", &[], "Mouse x coordinate."),
                method("Input", "mouse_y", &[], "Mouse y coordinate."),
            ],
        ),
        namespace(
            "Time",
            "Clock access.",
            vec![
                method("Time", "now", &[], "Seconds since the program started."),
                method("Time", "delta", &[], "Seconds since the previous frame."),
            ],
        ),
        namespace(
            "Color",
            "Predefined colors.",
            vec![
                field("Color", "RED", "color", "Pure red."),
                field("Color", "GREEN", "color", "Pure green."),
                field("Color", "BLUE", "color", "Pure blue."),
                field("Color", "WHITE", "color", "White."),
                field("Color", "BLACK", "color", "Black."),
                method("Color", "rgb", &["r", "g", "b"], "Color from 0-255 components."),
            ],
        ),
    ]
}
