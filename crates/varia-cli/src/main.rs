//! Command-line round-trip check for variant list records.
//!
//! `varia-cli write <file>` builds a demo parameter list and saves it as a
//! named record; `varia-cli read <file>` loads a record back and dumps its
//! contents. Useful for eyeballing the wire format against saved files.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

use varia_core::{Variant, VariantList, Vec2};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "write" => write_demo(&args[2]),
        "read" => read_record(&args[2]),
        _ => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn write_demo(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let list = VariantList::from([
        Variant::from(42u32),
        Variant::from("Hey guys"),
        Variant::from(Vec2::new(3.5, -1.25)),
    ]);

    let mut file = File::create(path)?;
    list.save(&mut file, "demo")?;
    log::info!("wrote {} byte payload to {path}", list.serialized_size());
    Ok(())
}

fn read_record(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(path)?);
    let (name, list) = VariantList::load(&mut reader)?;
    print!("record \"{name}\"\n{}", list.contents_as_debug_string());
    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} write <file>");
    eprintln!("       {program} read <file>");
}
