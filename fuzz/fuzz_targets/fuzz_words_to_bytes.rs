#![no_main]

use keyphrase_core::{parse_phrase, words_to_bytes, Wordlist};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let expected_len = (data[0] % 48) as usize;
    let text = String::from_utf8_lossy(&data[1..]);

    let wordlist = Wordlist::new((0..4096).map(|i| format!("w{i}")).collect()).unwrap();
    let words = parse_phrase(&text);

    // Arbitrary text must never panic, and any success has the asked length
    if let Ok(bytes) = words_to_bytes(&words, &wordlist, expected_len) {
        assert_eq!(bytes.len(), expected_len);
    }
});
