/// Accumulates the output document and owns string escaping.
pub struct JsonWriter {
    out: String,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write `s` as a quoted JSON string.
    ///
    /// Escapes the minimal set: backslash, double quote, newline, carriage
    /// return, tab. Other control characters pass through verbatim.
    pub fn write_escaped(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
