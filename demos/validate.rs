use cadastro::*;

fn main() {
    println!("=== CPF Validation ===\n");

    let test_cpfs = [
        "11144477735",
        "111.444.777-35",
        "11144477736",  // corrupted check digit
        "00000000000",  // repeated digits
        "111444777350", // too many digits
        "191",          // zero-padded
    ];

    for cpf in &test_cpfs {
        match Cpf::parse(cpf) {
            Ok(parsed) => println!("  {cpf} => valid ({parsed})"),
            Err(e) => println!("  {cpf} => INVALID: {e}"),
        }
    }

    println!("\n=== CNPJ Validation ===\n");

    let test_cnpjs = [
        "11444777000161",
        "11.444.777/0001-61",
        "11444777000162", // corrupted check digit
        "00000000000000", // repeated digits
    ];

    for cnpj in &test_cnpjs {
        match Cnpj::parse(cnpj) {
            Ok(parsed) => println!("  {cnpj} => valid ({parsed})"),
            Err(e) => println!("  {cnpj} => INVALID: {e}"),
        }
    }

    println!("\n=== Classification ===\n");

    let inputs = [
        "11144477735",
        "11444777000161",
        "00000000000000",
        "not-a-number",
    ];

    for input in &inputs {
        println!(
            "  {input} => {:?} ({}, {})",
            classify(input),
            kind_label(input),
            holder_label(input)
        );
    }
}
