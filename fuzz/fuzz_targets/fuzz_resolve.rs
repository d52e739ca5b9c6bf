//! Fuzz target: display resolver
//!
//! Splits the input at the first NUL into identifier and message and
//! verifies:
//! - No panics on arbitrary (lossily decoded) UTF-8
//! - Image and fallback text are never both present
//! - Bubble is visible iff its text is non-empty
//! - Resolution is deterministic
//!
//! cargo fuzz run fuzz_resolve

#![no_main]

use libfuzzer_sys::fuzz_target;
use petwidget::resolver::resolve;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (identifier, message) = match text.split_once('\0') {
        Some((id, msg)) => (Some(id), Some(msg)),
        None if data.first().is_some_and(|b| b % 2 == 0) => (Some(&*text), None),
        None => (None, Some(&*text)),
    };

    let decision = resolve(identifier, message);

    assert!(
        !(decision.image_asset().is_some() && decision.fallback_text().is_some()),
        "image and fallback text both present for {identifier:?}"
    );
    assert_eq!(
        decision.bubble_visible(),
        decision.bubble_text().is_some_and(|t| !t.is_empty())
    );
    if let Some(fallback) = decision.fallback_text() {
        assert_eq!(Some(fallback), identifier, "fallback must be the raw identifier");
    }
    assert_eq!(decision, resolve(identifier, message));
});
