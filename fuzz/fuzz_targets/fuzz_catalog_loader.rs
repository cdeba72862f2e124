#![no_main]

use std::path::Path;

use fhevm_examples_core::config::Catalog;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml) = std::str::from_utf8(data) {
        if let Ok(catalog) = Catalog::from_yaml_str(yaml, Path::new("<fuzz>")) {
            for id in catalog.ids() {
                assert!(catalog.require(id).is_ok());
            }
        }
    }
});
