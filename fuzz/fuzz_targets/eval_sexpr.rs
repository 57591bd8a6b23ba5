#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tree) = hoagie::parser::parse(s) {
            let value = hoagie::evaluator::eval(hoagie::reader::read(&tree));
            let _ = value.to_string();
        }
    }
});
