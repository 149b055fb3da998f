#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let kind = cadastro::classify(input);
        // Validators must agree with the classification.
        match kind {
            cadastro::DocumentKind::Cpf => assert!(cadastro::is_valid_cpf(input)),
            cadastro::DocumentKind::Cnpj => assert!(cadastro::is_valid_cnpj(input)),
            cadastro::DocumentKind::Invalid => {
                assert!(!cadastro::is_valid_cpf(input));
                assert!(!cadastro::is_valid_cnpj(input));
            }
        }
    }
});
