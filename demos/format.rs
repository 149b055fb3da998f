use cadastro::*;

fn main() {
    println!("=== Canonical Formatting ===\n");

    let inputs = [
        "11144477735",        // clean CPF
        "111.444.777-35",     // already punctuated
        "191",                // short, zero-padded CPF
        "11444777000161",     // clean CNPJ
        "11.444.777/0001-61", // already punctuated
        "11144477736",        // invalid: passed through unchanged
        "not-a-number",       // invalid: passed through unchanged
    ];

    for input in &inputs {
        println!("  {input:>20} => {}", format_document(input));
    }

    println!("\n=== Typed Display ===\n");

    let cpf: Cpf = "11144477735".parse().expect("valid CPF");
    let cnpj: Cnpj = "11444777000161".parse().expect("valid CNPJ");
    println!("  CPF  digits={} display={cpf}", cpf.as_digits());
    println!("  CNPJ digits={} display={cnpj}", cnpj.as_digits());
}
