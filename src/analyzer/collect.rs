use super::{SymbolInfo, SymbolKind};
use crate::ast::*;

/// 按声明顺序 (先序, 深度优先) 收集程序里所有本地声明
pub fn collect_symbols(program: &Program) -> Vec<SymbolInfo> {
    let mut collector = SymbolCollector::default();
    collector.collect_block(&program.statements);
    collector.symbols
}

/// 仅凭初始化表达式的语法形状推断展示类型, 不求值
pub fn infer_type(expr: &Expression) -> Option<String> {
    let ty = match &expr.data {
        ExpressionData::NumericLiteral(_) => "number".to_string(),
        ExpressionData::StringLiteral(_) => "string".to_string(),
        ExpressionData::ArrayLiteral(_) => "array".to_string(),
        ExpressionData::ObjectLiteral(_) => "object".to_string(),
        ExpressionData::Lambda { parameters, .. } => format!("fn({})", parameters.join(", ")),
        ExpressionData::Identifier(name) => match name.as_str() {
            "true" | "false" => "boolean".to_string(),
            "null" => "null".to_string(),
            _ => return None,
        },
        ExpressionData::Call { .. } => "(result of call)".to_string(),
        _ => return None,
    };
    Some(ty)
}

#[derive(Default)]
struct SymbolCollector {
    symbols: Vec<SymbolInfo>,
}

impl SymbolCollector {
    fn collect_block(&mut self, statements: &[Statement]) {
        for stmt in statements {
            self.collect_statement(stmt);
        }
    }

    fn collect_statement(&mut self, stmt: &Statement) {
        match &stmt.data {
            StatementData::VarDeclaration(decl) => self.collect_var(decl),
            StatementData::FunctionDeclaration(func) => {
                self.collect_function(func);
                // 函数体只在这里遍历一次
                self.collect_block(&func.body);
            }
            StatementData::ImportDeclaration(import) => self.collect_import(import),
            other => {
                for block in other.nested_blocks() {
                    self.collect_block(block);
                }
            }
        }
    }

    fn collect_var(&mut self, decl: &VarDeclaration) {
        let (keyword, kind) = if decl.is_constant {
            ("const", SymbolKind::Constant)
        } else {
            ("let", SymbolKind::Variable)
        };

        let ty = decl.initializer.as_ref().and_then(infer_type);
        let detail = match &ty {
            Some(ty) => format!("{} {}: {}", keyword, decl.identifier, ty),
            None => format!("{} {}", keyword, decl.identifier),
        };

        let mut symbol =
            SymbolInfo::new(&decl.identifier, kind, detail).at(decl.line, decl.column);

        // 对象字面量: 只展开一层属性
        if let Some(ExpressionData::ObjectLiteral(properties)) =
            decl.initializer.as_ref().map(|e| &e.data)
        {
            symbol = symbol.with_members(properties.iter().map(property_symbol).collect());
        }

        self.symbols.push(symbol);
    }

    fn collect_function(&mut self, func: &FunctionDeclaration) {
        let detail = format!("fn {}({})", func.name, func.parameters.join(", "));
        self.symbols.push(
            SymbolInfo::new(&func.name, SymbolKind::Function, detail).at(func.line, func.column),
        );

        // 参数没有独立位置, 沿用函数的声明位置
        for param in &func.parameters {
            self.symbols.push(
                SymbolInfo::new(param, SymbolKind::Parameter, format!("parameter {}", param))
                    .at(func.line, func.column),
            );
        }
    }

    fn collect_import(&mut self, import: &ImportDeclaration) {
        for spec in &import.specifiers {
            let detail = format!("import {} from \"{}\"", spec.name, import.source);
            self.symbols.push(
                SymbolInfo::new(&spec.name, SymbolKind::Module, detail).at(spec.line, spec.column),
            );
        }
    }
}

fn property_symbol(property: &ObjectProperty) -> SymbolInfo {
    let detail = match infer_type(&property.value) {
        Some(ty) => format!("property {}: {}", property.key, ty),
        None => format!("property {}", property.key),
    };
    SymbolInfo::new(&property.key, SymbolKind::Property, detail).at(property.line, property.column)
}
