use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // The page-break rule is what separates files in the PDF
    let stylesheet = table
        .get("document")
        .and_then(|d| d.get("stylesheet"))
        .and_then(|s| s.as_str())
        .unwrap_or_default();
    if !stylesheet.contains(".page-break") {
        panic!("default_config.toml stylesheet is missing the .page-break rule");
    }
}
