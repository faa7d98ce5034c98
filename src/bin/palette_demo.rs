use partbox::color::ColorSequence;
use partbox::PART_COUNT;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let count: usize = match args.next() {
        Some(v) => v.parse().map_err(|e| format!("bad count {v:?}: {e}"))?,
        None => PART_COUNT,
    };
    let seed: u64 = match args.next() {
        Some(v) => v.parse().map_err(|e| format!("bad seed {v:?}: {e}"))?,
        None => 0,
    };

    for (index, color) in ColorSequence::new(seed).take(count).enumerate() {
        println!("{index:2} {}", color.to_hex());
    }
    Ok(())
}
