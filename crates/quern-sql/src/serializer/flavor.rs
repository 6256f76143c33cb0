use super::Serializer;

use quern_core::Flavor;

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub(super) fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }

    pub(super) fn is_postgresql(&self) -> bool {
        matches!(self.flavor, Flavor::Postgresql)
    }

    /// Placeholder for the `index`-th bound value (1-based).
    pub fn placeholder(&self, index: usize) -> String {
        match self.flavor {
            Flavor::Sqlite => "?".to_string(),
            Flavor::Postgresql => format!("${index}"),
        }
    }

    /// Replaces every `?` marker in `skeleton` with the flavor's placeholder,
    /// numbered left to right. Markers inside quoted identifiers or string
    /// literals are left alone.
    pub fn paste_placeholders(&self, skeleton: &str) -> String {
        let mut dst = String::with_capacity(skeleton.len());
        let mut quote: Option<char> = None;
        let mut index = 0;

        for ch in skeleton.chars() {
            match (quote, ch) {
                (Some(open), _) if ch == open => quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => quote = Some(ch),
                (None, '?') => {
                    index += 1;
                    dst.push_str(&self.placeholder(index));
                    continue;
                }
                (None, _) => {}
            }
            dst.push(ch);
        }

        dst
    }
}
