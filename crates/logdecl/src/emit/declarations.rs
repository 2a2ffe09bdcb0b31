use crate::ir::LogMessage;

/// Prefix prepended to each identifier to form the macro name.
pub const MESSAGE_PREFIX: &str = "MESSAGE_";

/// Renders the declarations header: one `#define` per record, in catalog order.
///
/// Format strings are copied verbatim; duplicates are neither removed nor reordered.
pub fn render_declarations(records: &[LogMessage]) -> String {
    let mut out = String::from("#pragma once\n\n");
    for record in records {
        out.push_str(&format!(
            "#define {MESSAGE_PREFIX}{} {}\n",
            record.identifier, record.format_string
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogParser;
    use expect_test::expect;

    #[test]
    fn test_render_declarations() {
        let catalog = r#"
MYLOG_START, "Starting %d" PRIu32, (int), INFO, Network
MYLOG_URL, "url=%" PRIVATE_LOG_STRING ", id=%" PRIu64, (CString, uint64_t), DEFAULT, Loading
MYLOG_START, "again", (), FAULT, Network
"#;
        let records = CatalogParser::new().parse(catalog).unwrap();
        expect![[r#"
            #pragma once

            #define MESSAGE_MYLOG_START "Starting %d" PRIu32
            #define MESSAGE_MYLOG_URL "url=%" PRIVATE_LOG_STRING ", id=%" PRIu64
            #define MESSAGE_MYLOG_START "again"
        "#]]
        .assert_eq(&render_declarations(&records));
    }

    #[test]
    fn test_render_declarations_empty_catalog() {
        assert_eq!(render_declarations(&[]), "#pragma once\n\n");
    }
}
