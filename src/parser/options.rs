//! Parsing options and configuration.

/// Options for parsing resume text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Normalize the input to Unicode NFC before scanning
    pub normalize_unicode: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Scan the input exactly as given.
    pub fn raw(mut self) -> Self {
        self.normalize_unicode = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
        }
    }
}
