#![no_main]

use fhevm_examples_docs::{ParsedAnnotation, category_for_dir, parse_annotations};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let annotations = parse_annotations(source);
        if let Some(title) = &annotations.title {
            assert!(!title.contains('\n'));
        }
        let parsed = ParsedAnnotation::resolve(annotations, "Fuzz.sol");
        assert!(!parsed.chapter.is_empty());

        let category = category_for_dir(source);
        assert!(!category.is_empty());
    }
});
