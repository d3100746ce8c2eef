//! Java emitter for one generated unit.

use viewbind_core::Colors;

use super::{Config, HEADER_COMMENT};
use crate::synth::GeneratedUnit;

/// Renders a `GeneratedUnit` as a Java compilation unit.
pub struct Emitter<'a> {
    unit: &'a GeneratedUnit,
    config: &'a Config,
    /// Output buffer
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(unit: &'a GeneratedUnit, config: &'a Config) -> Self {
        Self {
            unit,
            config,
            output: String::new(),
        }
    }

    fn c(&self) -> Colors {
        self.config.colors
    }

    pub fn emit(mut self) -> String {
        let c = self.c();
        let unit = self.unit;

        if self.config.header {
            self.line(0, &c.paint(c.dim, HEADER_COMMENT));
        }

        if !unit.package_name.is_empty() {
            let package = format!("{} {};", c.paint(c.keyword, "package"), unit.package_name);
            self.line(0, &package);
            self.output.push('\n');
        }

        if !unit.imports.is_empty() {
            for import in &unit.imports {
                let import = format!("{} {import}.*;", c.paint(c.keyword, "import"));
                self.line(0, &import);
            }
            self.output.push('\n');
        }

        let class = format!(
            "{} {} {{",
            c.paint(c.keyword, "public class"),
            c.paint(c.ty, &unit.type_name)
        );
        self.line(0, &class);

        let method = &unit.method;
        let signature = format!(
            "{} {}({} {}) {{",
            c.paint(c.keyword, "public static void"),
            method.name,
            c.paint(c.ty, &method.param.ty),
            method.param.name
        );
        self.line(1, &signature);

        for statement in &method.statements {
            self.line(2, &statement.render(c));
        }

        self.line(1, "}");
        self.line(0, "}");

        self.output
    }

    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str(&self.config.indent);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}
