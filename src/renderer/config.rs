//! Output options for the SVG writer

/// How a scene is written as SVG text
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Emit `<?xml ...?>` ahead of the root element
    pub xml_declaration: bool,

    /// One element per line, indented under `<svg>`
    pub pretty_print: bool,

    /// Put before each primitive kind in its `class` attribute ("sc-" gives "sc-bar").
    /// Empty leaves out class attributes.
    pub class_prefix: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            pretty_print: true,
            class_prefix: "sc-".to_string(),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// For SVG placed inside an HTML page
    pub fn inline() -> Self {
        Self {
            xml_declaration: false,
            ..Self::default()
        }
    }

    /// Single-line output without a declaration
    pub fn compact() -> Self {
        Self {
            pretty_print: false,
            ..Self::inline()
        }
    }

    pub fn with_xml_declaration(self, xml_declaration: bool) -> Self {
        Self {
            xml_declaration,
            ..self
        }
    }

    pub fn with_pretty_print(self, pretty_print: bool) -> Self {
        Self {
            pretty_print,
            ..self
        }
    }

    pub fn with_class_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: prefix.into(),
            ..self
        }
    }

    /// Drop class attributes entirely
    pub fn without_classes(self) -> Self {
        self.with_class_prefix("")
    }
}
