#![no_main]

use arbitrary::Arbitrary;
use keyphrase_core::{bit_length, bytes_to_words, words_to_bytes, Error, Wordlist};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    wordlist_len: u16,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // 2..=4097 entries keeps the list cheap to build
    let n = 2 + (input.wordlist_len as usize % 4096);
    let data = &input.data[..input.data.len().min(64)];
    let wordlist = Wordlist::new((0..n).map(|i| format!("w{i}")).collect()).unwrap();
    let bits = bit_length(n) as usize;

    match bytes_to_words(data, &wordlist) {
        Ok(words) => {
            assert_eq!(words.len(), data.len() * 8 / bits);
            let decoded = words_to_bytes(&words, &wordlist, data.len()).unwrap();
            assert_eq!(decoded, data);
        }
        Err(Error::IncompatibleWordlist { .. }) => assert_ne!(data.len() * 8 % bits, 0),
        Err(Error::SymbolOutOfRange { index, .. }) => {
            assert!(!n.is_power_of_two());
            assert!(index >= n);
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
