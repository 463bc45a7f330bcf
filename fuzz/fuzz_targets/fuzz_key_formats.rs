#![no_main]

use keyphrase_codecs::KeyFormat;
use keyphrase_core::Wordlist;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let wordlist = Wordlist::new((0..4096).map(|i| format!("w{i}")).collect()).unwrap();

    for format in KeyFormat::ALL {
        let codec = format.codec();
        // Anything that parses as a key must survive the round trip
        if let Ok(words) = codec.encode(&text, &wordlist) {
            assert_eq!(words.len(), 24);
            let restored = codec.decode(&words, &wordlist).unwrap();
            let again = codec.encode(&restored, &wordlist).unwrap();
            assert_eq!(words, again);
        }
    }
});
