//! Builder for synthetic XPM text.
//!
//! Produces files in the layout GROMACS writes: metadata comments, the
//! `static char` declaration, the dimension line, the color table, axis
//! comments and quoted pixel rows.

/// Builds XPM text line by line.
///
/// Dimensions are derived from the rows and color entries unless overridden,
/// which makes it easy to generate deliberately inconsistent headers for
/// parser error tests.
#[derive(Debug, Clone)]
pub struct XpmBuilder {
    title: String,
    legend: String,
    type_str: String,
    x_label: String,
    y_label: String,
    symbol_width: usize,
    entries: Vec<(String, String, String)>,
    rows: Vec<String>,
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    declared_width: Option<usize>,
    declared_height: Option<usize>,
    declared_colors: Option<usize>,
}

impl Default for XpmBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl XpmBuilder {
    pub fn new() -> Self {
        Self {
            title: "Gibbs Energy Landscape".to_string(),
            legend: "G (kJ/mol)".to_string(),
            type_str: "Continuous".to_string(),
            x_label: "PC1".to_string(),
            y_label: "PC2".to_string(),
            symbol_width: 1,
            entries: Vec::new(),
            rows: Vec::new(),
            x_axis: Vec::new(),
            y_axis: Vec::new(),
            declared_width: None,
            declared_height: None,
            declared_colors: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn legend(mut self, legend: &str) -> Self {
        self.legend = legend.to_string();
        self
    }

    pub fn type_str(mut self, type_str: &str) -> Self {
        self.type_str = type_str.to_string();
        self
    }

    pub fn labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    pub fn symbol_width(mut self, width: usize) -> Self {
        self.symbol_width = width;
        self
    }

    /// Add a color-table entry (symbol, `#RRGGBB`, note).
    pub fn color(mut self, symbol: &str, hex: &str, note: &str) -> Self {
        self.entries.push((symbol.to_string(), hex.to_string(), note.to_string()));
        self
    }

    pub fn row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    pub fn x_axis(mut self, values: &[f64]) -> Self {
        self.x_axis = values.to_vec();
        self
    }

    pub fn y_axis(mut self, values: &[f64]) -> Self {
        self.y_axis = values.to_vec();
        self
    }

    /// Override the declared width (for malformed-header tests).
    pub fn declared_width(mut self, width: usize) -> Self {
        self.declared_width = Some(width);
        self
    }

    /// Override the declared height.
    pub fn declared_height(mut self, height: usize) -> Self {
        self.declared_height = Some(height);
        self
    }

    /// Override the declared color count.
    pub fn declared_colors(mut self, count: usize) -> Self {
        self.declared_colors = Some(count);
        self
    }

    /// Render the XPM text.
    pub fn build(&self) -> String {
        let width = self.declared_width.unwrap_or_else(|| {
            self.rows
                .first()
                .map(|r| r.len() / self.symbol_width.max(1))
                .unwrap_or(0)
        });
        let height = self.declared_height.unwrap_or(self.rows.len());
        let colors = self.declared_colors.unwrap_or(self.entries.len());

        let mut out = String::from("/* XPM */\n");
        out.push_str(&format!("/* title:   \"{}\" */\n", self.title));
        out.push_str(&format!("/* legend:  \"{}\" */\n", self.legend));
        out.push_str(&format!("/* x-label: \"{}\" */\n", self.x_label));
        out.push_str(&format!("/* y-label: \"{}\" */\n", self.y_label));
        out.push_str(&format!("/* type:    \"{}\" */\n", self.type_str));
        out.push_str("static char *gv_xpm[] = {\n");
        out.push_str(&format!(
            "\"{} {}   {} {}\",\n",
            width, height, colors, self.symbol_width
        ));
        for (symbol, hex, note) in &self.entries {
            out.push_str(&format!("\"{symbol}  c {hex} \" /* \"{note}\" */,\n"));
        }
        out.push_str(&axis_comment("x-axis", &self.x_axis));
        out.push_str(&axis_comment("y-axis", &self.y_axis));
        for row in &self.rows {
            out.push_str(&format!("\"{row}\",\n"));
        }
        out.push_str("};\n");
        out
    }
}

fn axis_comment(name: &str, values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("/* {name}:  {joined} */\n")
}
