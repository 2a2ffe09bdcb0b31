use logdecl::emit::{InterfaceOptions, render_declarations, render_interface};
use logdecl::{CatalogError, CatalogParser, RenderOptions, Severity};

const CATALOG: &str = r#"DOCUMENTLOADER_DETACHFROMFRAME, "DocumentLoader::detachFromFrame: frameID=%" PRIu64 ", isMainFrame=%d", (uint64_t, int), DEFAULT, Loading
NETWORK_DATATASK_FAILED, "NetworkDataTask::failed: error=[%" PUBLIC_LOG_STRING "]", (CString), ERROR, Network
MEMORYPRESSURE_CRITICAL, "MemoryPressureHandler: critical {level=%u}", (unsigned), FAULT, Memory
"#;

#[test]
fn test_one_definition_and_method_per_record() {
    let records = CatalogParser::new().parse(CATALOG).unwrap();
    assert_eq!(records.len(), 3);

    let declarations = render_declarations(&records);
    let defines: Vec<_> = declarations
        .lines()
        .filter(|line| line.starts_with("#define "))
        .collect();
    assert_eq!(defines.len(), 3);
    assert!(defines[0].starts_with("#define MESSAGE_DOCUMENTLOADER_DETACHFROMFRAME "));
    assert!(defines[1].starts_with("#define MESSAGE_NETWORK_DATATASK_FAILED "));
    assert!(defines[2].starts_with("#define MESSAGE_MEMORYPRESSURE_CRITICAL "));

    let interface = render_interface(&records, InterfaceOptions::default());
    let methods: Vec<_> = interface
        .lines()
        .filter(|line| line.starts_with("    virtual void ") && !line.contains(" log("))
        .collect();
    assert_eq!(
        methods,
        [
            "    virtual void DOCUMENTLOADER_DETACHFROMFRAME(uint64_t, int) { }",
            "    virtual void NETWORK_DATATASK_FAILED(CString&&) { }",
            "    virtual void MEMORYPRESSURE_CRITICAL(unsigned) { }",
        ]
    );
}

#[test]
fn test_comments_and_blank_lines_do_not_change_output() {
    let plain = CatalogParser::new().parse(CATALOG).unwrap();

    let mut noisy = String::from("# leading comment\n\n");
    for line in CATALOG.lines() {
        noisy.push_str(line);
        noisy.push_str("\n\n# between entries\n");
    }
    noisy.push_str("#trailing\n\n");
    let commented = CatalogParser::new().parse(&noisy).unwrap();

    assert_eq!(render_declarations(&plain), render_declarations(&commented));
    assert_eq!(
        render_interface(&plain, InterfaceOptions::default()),
        render_interface(&commented, InterfaceOptions::default())
    );
}

#[test]
fn test_example_scenario() {
    let records = CatalogParser::new()
        .parse(r#"MYLOG_START, "Starting %d" PRIu32, (int), INFO, Network"#)
        .unwrap();

    assert_eq!(records[0].severity, Severity::Info);
    assert!(
        render_declarations(&records)
            .contains("#define MESSAGE_MYLOG_START \"Starting %d\" PRIu32\n")
    );
    assert!(
        render_interface(&records, InterfaceOptions::default())
            .contains("    virtual void MYLOG_START(int) { }\n")
    );
    let named = InterfaceOptions {
        named_parameters: true,
    };
    assert!(
        render_interface(&records, named).contains("    virtual void MYLOG_START(int arg0) { }\n")
    );
}

#[test]
fn test_distinguished_type_rewrite() {
    let records = CatalogParser::new()
        .parse(r#"URL, "url=%" PRIVATE_LOG_STRING, (CString), DEFAULT, Loading"#)
        .unwrap();
    let params = records[0].parameters();
    assert_eq!(params.render(RenderOptions::interface()), "CString&&");
    assert_eq!(params.render(RenderOptions::call_site()), "arg0.data()");
}

#[test]
fn test_bad_line_is_fatal() {
    let err = CatalogParser::new()
        .parse("GOOD, \"ok\", (), INFO, X\nBADLINE\n")
        .unwrap_err();
    match err {
        CatalogError::Grammar { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "BADLINE");
        }
        other => panic!("Expected grammar error, got {other:?}"),
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let first = CatalogParser::new().parse(CATALOG).unwrap();
    let second = CatalogParser::new().parse(CATALOG).unwrap();
    assert_eq!(first, second);
    assert_eq!(render_declarations(&first), render_declarations(&second));
    assert_eq!(
        render_interface(&first, InterfaceOptions::default()),
        render_interface(&second, InterfaceOptions::default())
    );
}
