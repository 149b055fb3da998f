#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let formatted = cadastro::format_document(input);
        match cadastro::classify(input) {
            // Invalid input must pass through unchanged.
            cadastro::DocumentKind::Invalid => assert_eq!(formatted, input),
            // Valid input renders to a fixed-width punctuated form.
            cadastro::DocumentKind::Cpf => assert_eq!(formatted.len(), 14),
            cadastro::DocumentKind::Cnpj => assert_eq!(formatted.len(), 18),
        }
        let _ = cadastro::kind_label(input);
        let _ = cadastro::holder_label(input);
    }
});
