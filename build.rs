use std::{env, fs, path::Path};
use std::io::{BufRead, BufReader};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("word_data.rs");

    let data_file = "data/wordlist.txt";
    let file = fs::File::open(data_file).expect("Failed to open data file");
    let reader = BufReader::new(file);

    let mut word_array = Vec::new();

    for line in reader.lines() {
        let line = line.expect("Error reading line");
        let word = line.trim();
        if word.is_empty() {
            continue; // skip blank lines
        }

        word_array.push(format!("\"{}\"", word));
    }

    let code = format!(r#"pub static WORDS: [&str; {}] = [{}];"#,
        word_array.len(),
        word_array.join(", ")
    );

    fs::write(dest_path, code).expect("Failed to write generated file");

    // rebuild when the word list changes
    println!("cargo:rerun-if-changed={}", data_file);
}
