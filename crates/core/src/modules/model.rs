use serde::{Deserialize, Serialize};

pub const DEFAULT_MODULE_TYPE: &str = "java-production";

/// One build module as declared in a module definition file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub module_type: String,
    pub output_dir: String,
    pub sources: Vec<String>,
    pub java_source_roots: Vec<String>,
    pub classpath: Vec<String>,
    pub annotations: Vec<String>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_type: DEFAULT_MODULE_TYPE.to_string(),
            output_dir: output_dir.into(),
            sources: Vec::new(),
            java_source_roots: Vec::new(),
            classpath: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn is_test(&self) -> bool {
        self.module_type.ends_with("-test")
    }
}

/// Modules loaded from one definition file. Empty when the file was
/// missing, of an unknown type, or malformed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDescriptorSet {
    pub modules: Vec<ModuleDescriptor>,
}

impl ModuleDescriptorSet {
    pub const EMPTY: ModuleDescriptorSet = ModuleDescriptorSet {
        modules: Vec::new(),
    };

    pub fn new(modules: Vec<ModuleDescriptor>) -> Self {
        Self { modules }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleDescriptor> {
        self.modules.iter()
    }

    pub fn find(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|m| m.name == name)
    }
}

impl<'a> IntoIterator for &'a ModuleDescriptorSet {
    type Item = &'a ModuleDescriptor;
    type IntoIter = std::slice::Iter<'a, ModuleDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}
