use std::{env, fs, path::Path};
use std::io::{BufRead, BufReader};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("word_data.rs");

    // 每种语言一个文件: data/wordlists/<tag>.txt
    let data_dir = "data/wordlists";
    let mut entries: Vec<_> = fs::read_dir(data_dir)
        .expect("Failed to open word list directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("txt"))
        .collect();
    entries.sort();

    let mut code = String::new();
    let mut table = Vec::new();

    for path in &entries {
        let tag = path
            .file_stem()
            .and_then(|s| s.to_str())
            .expect("Invalid word list file name")
            .to_lowercase();
        let file = fs::File::open(path).expect("Failed to open word list");
        let reader = BufReader::new(file);

        let mut word_array = Vec::new();
        for line in reader.lines() {
            let line = line.expect("Error reading line");
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue; // 跳过空行和注释
            }
            if word.chars().any(char::is_whitespace) {
                panic!("Invalid word in {}: {:?}", path.display(), word);
            }
            word_array.push(format!("{:?}", word));
        }

        let ident = format!("WORDS_{}", tag.to_uppercase());
        code.push_str(&format!(
            "pub static {}: [&str; {}] = [{}];\n",
            ident,
            word_array.len(),
            word_array.join(", ")
        ));
        table.push(format!("({:?}, &{})", tag, ident));

        println!("cargo:rerun-if-changed={}", path.display());
    }

    code.push_str(&format!(
        "pub static WORDLISTS: [(&str, &[&str]); {}] = [{}];\n",
        table.len(),
        table.join(", ")
    ));

    fs::write(dest_path, code).expect("Failed to write generated file");

    println!("cargo:rerun-if-changed={}", data_dir);
}
