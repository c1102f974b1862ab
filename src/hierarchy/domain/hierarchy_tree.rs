/// Indentation added per depth level
pub const INDENT_UNIT: &str = "  ";

/// One rendered package line of a dependency hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyLine {
    /// Distance from the root package (roots are 0)
    pub depth: usize,
    pub name: String,
    /// Version shown first: the desired version of the incoming edge, or the
    /// resolved version for roots
    pub version: String,
    /// Version the restore selected, present only when it differs from `version`
    pub conflict: Option<String>,
    pub is_root: bool,
    /// Whether this is the package the hierarchy was filtered on
    pub is_filter_match: bool,
    /// Whether this line closes a dependency cycle
    pub cycle: bool,
}

impl HierarchyLine {
    pub fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.depth)
    }

    pub fn has_conflict(&self) -> bool {
        self.conflict.is_some()
    }

    /// The line without color: `<indent><name> : <version>[ (annotation)]`
    pub fn to_plain(&self) -> String {
        let mut line = format!("{}{} : {}", self.indent(), self.name, self.version);
        if let Some(resolved) = &self.conflict {
            line.push_str(&format!(" (omitted for conflict with {})", resolved));
        }
        if self.cycle {
            line.push_str(" (cycle)");
        }
        line
    }
}

/// The ordered output of rendering one dependency graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyTree {
    lines: Vec<HierarchyLine>,
    cycles: Vec<Vec<String>>,
}

impl HierarchyTree {
    pub fn new(lines: Vec<HierarchyLine>, cycles: Vec<Vec<String>>) -> Self {
        Self { lines, cycles }
    }

    pub fn lines(&self) -> &[HierarchyLine] {
        &self.lines
    }

    /// Each cycle as the chain of package names from the first repeated
    /// package back to itself
    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }

    pub fn conflict_count(&self) -> usize {
        self.lines.iter().filter(|l| l.has_conflict()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_plain_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.to_plain());
            text.push('\n');
        }
        text
    }
}
