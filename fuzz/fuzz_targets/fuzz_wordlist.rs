#![no_main]

use keyphrase_core::Wordlist;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    if let Ok(wordlist) = Wordlist::parse(&text) {
        assert!(wordlist.len() >= 2);
        for (i, word) in wordlist.iter().enumerate() {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim());
            assert_eq!(wordlist.position(word), Some(i));
        }
    }
});
