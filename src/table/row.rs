//! Table rows

/// One line of the table, kept as raw bytes (terminator excluded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    /// Offset of the first delimiter, if the line is well-formed
    split: Option<usize>,
}

impl Row {
    /// Parse a raw line
    pub fn parse(raw: Vec<u8>, delimiter: u8) -> Self {
        let split = raw
            .iter()
            .position(|&b| b == delimiter)
            .filter(|&pos| pos > 0 && pos + 1 < raw.len());
        Self { raw, split }
    }

    /// Build a well-formed row from a key and a value
    pub fn entry(key: &[u8], value: &[u8], delimiter: u8) -> Self {
        let mut raw = Vec::with_capacity(key.len() + 1 + value.len());
        raw.extend_from_slice(key);
        raw.push(delimiter);
        raw.extend_from_slice(value);
        Self::parse(raw, delimiter)
    }

    /// Key field, or `None` for a malformed row
    pub fn key(&self) -> Option<&[u8]> {
        self.split.map(|pos| &self.raw[..pos])
    }

    /// Value field (everything after the first delimiter), or `None` for a
    /// malformed row
    pub fn value(&self) -> Option<&[u8]> {
        self.split.map(|pos| &self.raw[pos + 1..])
    }

    pub fn is_malformed(&self) -> bool {
        self.split.is_none()
    }

    /// The line exactly as read, without its terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }
}
