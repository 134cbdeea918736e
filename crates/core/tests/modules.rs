use kdrive_api::DiagnosticCollector;
use kdrive_core::load_module_descriptions;
use std::fs;
use tempfile::tempdir;

const MODULES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<modules>
  <!-- Generated by the build tool -->
  <module name="core" type="java-production" outputDir="out/core">
    <sources path="core/src"/>
    <classpath path="lib/annotations.jar"/>
  </module>
  <module name="core-tests" type="java-test" outputDir="out/core-tests">
    <sources path="core/test"/>
    <classpath path="out/core"/>
  </module>
</modules>
"#;

#[test]
fn test_missing_definition_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("modules.xml");

    let sink = DiagnosticCollector::new();
    let set = load_module_descriptions(&path, &sink);

    assert!(set.is_empty());
    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        format!("Module definition file does not exist: {}", path.display())
    );
}

#[test]
fn test_unknown_definition_types_report_one_error() {
    let dir = tempdir().unwrap();
    for name in ["modules.txt", "modules.json", "modules.xmlx", "modules"] {
        let path = dir.path().join(name);
        fs::write(&path, MODULES_XML).unwrap();

        let sink = DiagnosticCollector::new();
        let set = load_module_descriptions(&path, &sink);

        assert!(set.is_empty(), "{name}");
        let errors = sink.errors();
        assert_eq!(errors.len(), 1, "{name}");
        assert_eq!(
            errors[0].message,
            format!("Unknown module definition type: {}", path.display())
        );
    }
}

#[test]
fn test_xml_extension_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Modules.XML");
    fs::write(&path, MODULES_XML).unwrap();

    let sink = DiagnosticCollector::new();
    let set = load_module_descriptions(&path, &sink);

    assert!(sink.is_empty(), "{:?}", sink.diagnostics());
    assert_eq!(set.len(), 2);
    let names: Vec<_> = set.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["core", "core-tests"]);
    assert_eq!(set.modules[1].classpath, vec!["out/core"]);
    assert!(set.modules[1].is_test());
}

#[test]
fn test_malformed_xml_degrades_to_empty_set() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("modules.xml");
    let xml = r#"<modules><module name="m" outputDir="o"></wrong></modules>"#;
    fs::write(&path, xml).unwrap();

    let sink = DiagnosticCollector::new();
    let set = load_module_descriptions(&path, &sink);

    assert!(set.is_empty());
    assert_eq!(sink.errors().len(), 1);
    let message = &sink.errors()[0].message;
    assert!(message.starts_with("Malformed module definition file"));
}
