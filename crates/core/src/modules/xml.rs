//! Parser for `modules.xml` module definition files.
//!
//! ```xml
//! <modules>
//!   <module name="app" type="java-production" outputDir="out/app">
//!     <sources path="src/main/kotlin"/>
//!     <javaSourceRoots path="src/main/java"/>
//!     <classpath path="lib/dep.jar"/>
//!     <externalAnnotations path="annotations"/>
//!   </module>
//! </modules>
//! ```

use super::model::{ModuleDescriptor, ModuleDescriptorSet};
use kdrive_api::DiagnosticSink;
use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const MODULES: &str = "modules";
const MODULE: &str = "module";
const NAME_ATTR: &str = "name";
const TYPE_ATTR: &str = "type";
const OUTPUT_DIR_ATTR: &str = "outputDir";
const PATH_ATTR: &str = "path";

#[derive(Debug, Error)]
pub enum ModuleXmlError {
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),
    #[error("{0}")]
    Attribute(#[from] AttrError),
    #[error("expected <modules> as the root element, found <{0}>")]
    UnexpectedRoot(String),
    #[error("no <modules> element")]
    MissingRoot,
    #[error("unexpected end of file")]
    UnexpectedEof,
}

#[derive(Debug, Clone, Copy)]
enum PathList {
    Sources,
    JavaSourceRoots,
    Classpath,
    ExternalAnnotations,
}

impl PathList {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "sources" => Some(Self::Sources),
            "javaSourceRoots" => Some(Self::JavaSourceRoots),
            "classpath" => Some(Self::Classpath),
            "externalAnnotations" => Some(Self::ExternalAnnotations),
            _ => None,
        }
    }

    fn target<'m>(&self, module: &'m mut ModuleDescriptor) -> &'m mut Vec<String> {
        match self {
            Self::Sources => &mut module.sources,
            Self::JavaSourceRoots => &mut module.java_source_roots,
            Self::Classpath => &mut module.classpath,
            Self::ExternalAnnotations => &mut module.annotations,
        }
    }
}

/// Read and parse `path`. Every problem is reported to `sink`; a file that
/// cannot be read or parsed yields the empty set.
pub fn parse_module_file(path: &Path, sink: &dyn DiagnosticSink) -> ModuleDescriptorSet {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_module_xml(&content, path, sink),
        Err(e) => {
            sink.error(&format!(
                "Failed to read module definition file {}: {}",
                path.display(),
                e
            ));
            ModuleDescriptorSet::EMPTY
        }
    }
}

/// Parse module definitions from `xml`. `origin` only names the document in
/// diagnostics.
pub fn parse_module_xml(
    xml: &str,
    origin: &Path,
    sink: &dyn DiagnosticSink,
) -> ModuleDescriptorSet {
    let mut parser = ModuleXmlParser::new(origin, sink);
    match parser.run(xml) {
        Ok(()) => {
            let count = parser.modules.len();
            debug!("Parsed {} module(s) from {:?}", count, origin);
            ModuleDescriptorSet::new(parser.modules)
        }
        Err(e) => {
            sink.error(&format!(
                "Malformed module definition file {}: {}",
                origin.display(),
                e
            ));
            ModuleDescriptorSet::EMPTY
        }
    }
}

struct ModuleXmlParser<'a> {
    origin: &'a Path,
    sink: &'a dyn DiagnosticSink,
    modules: Vec<ModuleDescriptor>,
    current: Option<ModuleDescriptor>,
    seen_root: bool,
}

impl<'a> ModuleXmlParser<'a> {
    fn new(origin: &'a Path, sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            origin,
            sink,
            modules: Vec::new(),
            current: None,
            seen_root: false,
        }
    }

    fn run(&mut self, xml: &str) -> Result<(), ModuleXmlError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        // Element nesting level: 1 = <modules>, 2 = <module>, 3 = path lists.
        let mut depth = 0usize;
        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    depth += 1;
                    self.open_element(&e, depth)?;
                }
                Event::Empty(e) => {
                    self.open_element(&e, depth + 1)?;
                    self.close_element(depth + 1);
                }
                Event::End(_) => {
                    self.close_element(depth);
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => {
                    if depth != 0 {
                        return Err(ModuleXmlError::UnexpectedEof);
                    }
                    if !self.seen_root {
                        return Err(ModuleXmlError::MissingRoot);
                    }
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    fn open_element(&mut self, e: &BytesStart<'_>, depth: usize) -> Result<(), ModuleXmlError> {
        let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        match depth {
            1 => {
                if tag != MODULES {
                    return Err(ModuleXmlError::UnexpectedRoot(tag));
                }
                self.seen_root = true;
            }
            2 if tag == MODULE => {
                self.current = self.read_module(e)?;
            }
            3 => {
                let Some(list) = PathList::from_tag(&tag) else {
                    return Ok(());
                };
                let path = attribute(e, PATH_ATTR)?;
                let Some(module) = self.current.as_mut() else {
                    return Ok(());
                };
                match path {
                    Some(path) => list.target(module).push(path),
                    None => self.sink.error(&format!(
                        "Missing '{}' attribute on <{}> in module '{}' ({})",
                        PATH_ATTR,
                        tag,
                        module.name,
                        self.origin.display()
                    )),
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close_element(&mut self, depth: usize) {
        if depth == 2 {
            if let Some(module) = self.current.take() {
                self.modules.push(module);
            }
        }
    }

    fn read_module(&self, e: &BytesStart<'_>) -> Result<Option<ModuleDescriptor>, ModuleXmlError> {
        let name = attribute(e, NAME_ATTR)?;
        let output_dir = attribute(e, OUTPUT_DIR_ATTR)?;
        let module_type = attribute(e, TYPE_ATTR)?;

        let Some(name) = name else {
            self.sink.error(&format!(
                "Module without a '{}' attribute in {}",
                NAME_ATTR,
                self.origin.display()
            ));
            return Ok(None);
        };
        let Some(output_dir) = output_dir else {
            self.sink.error(&format!(
                "Module '{}' has no '{}' attribute in {}",
                name,
                OUTPUT_DIR_ATTR,
                self.origin.display()
            ));
            return Ok(None);
        };

        let mut module = ModuleDescriptor::new(name, output_dir);
        if let Some(module_type) = module_type {
            module.module_type = module_type;
        }
        Ok(Some(module))
    }
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, ModuleXmlError> {
    match e.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}
