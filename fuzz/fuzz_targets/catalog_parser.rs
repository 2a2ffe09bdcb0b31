#![no_main]
use libfuzzer_sys::fuzz_target;
use logdecl::CatalogParser;
use logdecl::emit::{InterfaceOptions, render_declarations, render_interface};

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(records) = CatalogParser::new().parse(&s) {
        let _ = render_declarations(&records);
        let _ = render_interface(&records, InterfaceOptions::default());
    }
});
