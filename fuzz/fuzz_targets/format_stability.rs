#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_format::{PhoneFormatter, TemplateFormatter};
use phone_types::{CountryCode, is_formatting_char};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let fmt = PhoneFormatter::new(TemplateFormatter::new());
    for country in [CountryCode::new("US"), CountryCode::new("GB"), None] {
        for prefix in ["", "1", "0"] {
            let value = fmt.format(raw, country, prefix);

            if country.is_some() {
                // Pure number carries no punctuation beyond a leading '+'.
                assert!(
                    value
                        .number
                        .chars()
                        .skip(usize::from(value.number.starts_with('+')))
                        .all(|c| !is_formatting_char(c) && c != '+'),
                    "punctuation leaked into pure number {:?}",
                    value.number
                );
            }

            // Reformatting the display string must be a fixed point. The
            // one exception is the fault fallback with a prefix set: there
            // the display *is* the pure number, prefix still attached, and
            // feeding it back prepends the prefix a second time.
            let fault_with_prefix = !prefix.is_empty() && value.number_formatted == value.number;
            if !fault_with_prefix {
                let again = fmt.format(&value.number_formatted, country, prefix);
                assert_eq!(
                    value.number_formatted, again.number_formatted,
                    "formatting not idempotent for {raw:?}"
                );
            }
        }
    }
});
