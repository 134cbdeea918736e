//! JAR manifest encoding.
//!
//! Only the main section is produced. Lines are CRLF terminated and never
//! exceed 72 bytes; longer headers continue on lines starting with a space.

use kdrive_api::FqName;

pub const MANIFEST_NAME: &str = "META-INF/MANIFEST.MF";
pub const MANIFEST_VERSION: &str = "1.0";

pub const MANIFEST_VERSION_ATTR: &str = "Manifest-Version";
pub const CREATED_BY_ATTR: &str = "Created-By";
pub const MAIN_CLASS_ATTR: &str = "Main-Class";

const MAX_LINE_BYTES: usize = 72;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    attributes: Vec<(String, String)>,
}

impl Manifest {
    pub fn new(created_by: &str) -> Self {
        Self {
            attributes: vec![
                (MANIFEST_VERSION_ATTR.to_string(), MANIFEST_VERSION.to_string()),
                (CREATED_BY_ATTR.to_string(), created_by.to_string()),
            ],
        }
    }

    pub fn with_main_class(mut self, main_class: Option<&FqName>) -> Self {
        if let Some(main_class) = main_class {
            self.set(MAIN_CLASS_ATTR, main_class.as_str());
        }
        self
    }

    /// Set `name`, replacing an existing value. Names compare case-insensitively.
    pub fn set(&mut self, name: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (name, value) in &self.attributes {
            write_header(&mut out, &format!("{}: {}", name, value));
        }
        out.extend_from_slice(b"\r\n");
        out
    }

    /// Parse the main section of a manifest. Malformed lines are skipped.
    pub fn parse(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        let mut attributes: Vec<(String, String)> = Vec::new();
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                break;
            }
            if let Some(continued) = line.strip_prefix(' ') {
                if let Some((_, value)) = attributes.last_mut() {
                    value.push_str(continued);
                }
                continue;
            }
            if let Some((name, value)) = line.split_once(": ") {
                attributes.push((name.to_string(), value.to_string()));
            }
        }
        Self { attributes }
    }
}

fn write_header(out: &mut Vec<u8>, line: &str) {
    let mut rest = line;
    let mut limit = MAX_LINE_BYTES;
    loop {
        let mut cut = rest.len().min(limit);
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        if limit < MAX_LINE_BYTES {
            out.push(b' ');
        }
        out.extend_from_slice(rest[..cut].as_bytes());
        out.extend_from_slice(b"\r\n");
        rest = &rest[cut..];
        if rest.is_empty() {
            break;
        }
        limit = MAX_LINE_BYTES - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_comes_first() {
        let manifest = Manifest::new("kdrive");
        let text = String::from_utf8(manifest.to_bytes()).unwrap();
        assert_eq!(text, "Manifest-Version: 1.0\r\nCreated-By: kdrive\r\n\r\n");
    }

    #[test]
    fn test_main_class_only_when_declared() {
        let main = FqName::new("pkg.Main").unwrap();
        let with_main = Manifest::new("kdrive").with_main_class(Some(&main));
        assert_eq!(with_main.get(MAIN_CLASS_ATTR), Some("pkg.Main"));

        let without = Manifest::new("kdrive").with_main_class(None);
        assert_eq!(without.get(MAIN_CLASS_ATTR), None);
        let text = String::from_utf8(without.to_bytes()).unwrap();
        assert!(!text.contains(MAIN_CLASS_ATTR));
    }

    #[test]
    fn test_long_values_wrap_at_72_bytes() {
        let long_name = format!("org.example.{}.MainKt", "deeply.nested".repeat(10));
        let main = FqName::new(long_name.clone()).unwrap();
        let bytes = Manifest::new("kdrive").with_main_class(Some(&main)).to_bytes();
        let text = String::from_utf8(bytes.clone()).unwrap();

        for line in text.split("\r\n") {
            assert!(line.len() <= 72, "line too long: {line:?}");
        }
        let parsed = Manifest::parse(&bytes);
        assert_eq!(parsed.get(MAIN_CLASS_ATTR), Some(long_name.as_str()));
    }

    #[test]
    fn test_wrapping_keeps_utf8_intact() {
        let mut manifest = Manifest::new("kdrive");
        let value = "é".repeat(60);
        manifest.set("Implementation-Title", &value);
        let bytes = manifest.to_bytes();
        assert!(String::from_utf8(bytes.clone()).is_ok());
        assert_eq!(
            Manifest::parse(&bytes).get("implementation-title"),
            Some(value.as_str())
        );
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut manifest = Manifest::new("kdrive");
        manifest.set("created-by", "other");
        assert_eq!(manifest.get(CREATED_BY_ATTR), Some("other"));
        assert_eq!(manifest.attributes().count(), 2);
    }
}
