use log::{error, info};
use zillion::{Numeral, name_period, number_to_text, read_period, text_to_number};

fn spell(input: &str) {
    match number_to_text(input) {
        Ok(words) => {
            println!("  {input} ->");
            println!("    {words}");

            // Verify roundtrip
            match text_to_number(&words) {
                Ok(back) => {
                    let same = back.parse::<Numeral>().ok() == input.parse::<Numeral>().ok();
                    let mark = if same { "✓" } else { "✗" };
                    println!("    {mark} reads back as {back}");
                }
                Err(e) => println!("    ✗ Read error: {e}"),
            }
            println!();
        }
        Err(e) => println!("  Error spelling {input}: {e}\n"),
    }
}

fn read(input: &str) {
    match text_to_number(input) {
        Ok(number) => println!("  {input:?} -> {number}"),
        Err(e) => println!("  Error reading {input:?}: {e}"),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        info!("converting {} argument(s)", args.len());
        for arg in &args {
            if arg.parse::<Numeral>().is_ok() {
                spell(arg);
            } else {
                read(arg);
            }
        }
        return;
    }

    println!("=== Period Names ===\n");
    for zillion in [-1, 0, 1, 4, 9, 10, 21, 100, 789, 1000, 1001, 1_000_000] {
        let name = name_period(zillion);
        match read_period(&name) {
            Ok(back) if back == zillion => println!("  {zillion:>9} -> {name:?} ✓"),
            Ok(back) => println!("  {zillion:>9} -> {name:?} ✗ reads back as {back}"),
            Err(e) => error!("period name {name:?} does not read back: {e}"),
        }
    }

    println!("\n=== Spelling Numbers ===\n");
    for example in ["0", "-123456", "1.12", "1.2e-9", "18446744073709551615", "4e2370"] {
        spell(example);
    }

    println!("=== Reading Words ===\n");
    let far_apart = format!("one {} and one tenth", name_period(4000));
    for example in [
        "one hundred twenty-three thousand four hundred fifty-six",
        "negative one and fifteen tenths",
        "seven nonillionths",
        far_apart.as_str(),
        "one quadrxillion",
        "twentyfive",
    ] {
        read(example);
    }

    println!("\n=== Demo Complete ===");
}
