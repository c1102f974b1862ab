use crate::hierarchy::domain::{HierarchyLine, HierarchyTree};
use crate::ports::outbound::HierarchyFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// TextFormatter adapter producing the indented text tree
///
/// In colored mode the name, version and annotations are wrapped in ANSI color
/// codes; removing those codes gives back exactly the plain output.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn colored() -> Self {
        Self { colored: true }
    }

    fn colored_line(line: &HierarchyLine) -> String {
        let name = if line.is_filter_match {
            line.name.magenta().to_string()
        } else if line.is_root {
            line.name.blue().to_string()
        } else {
            line.name.blue().dimmed().to_string()
        };

        let version = if line.has_conflict() {
            line.version.bright_black().to_string()
        } else if line.is_root {
            line.version.green().to_string()
        } else {
            line.version.green().dimmed().to_string()
        };

        let mut output = format!("{}{} : {}", line.indent(), name, version);
        if let Some(resolved) = &line.conflict {
            output.push(' ');
            output.push_str(
                &format!("(omitted for conflict with {})", resolved)
                    .yellow()
                    .to_string(),
            );
        }
        if line.cycle {
            output.push(' ');
            output.push_str(&"(cycle)".red().to_string());
        }
        output
    }
}

impl HierarchyFormatter for TextFormatter {
    fn format(&self, tree: &HierarchyTree) -> Result<String> {
        if !self.colored {
            return Ok(tree.to_plain_text());
        }

        let mut output = String::new();
        for line in tree.lines() {
            output.push_str(&Self::colored_line(line));
            output.push('\n');
        }
        Ok(output)
    }
}
