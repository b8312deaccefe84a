/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from rune-edit.toml and the environment
    let config = rune_config::EditConfig::load();

    println!("=== Rune Edit Configuration ===\n");

    println!("Caret Settings:");
    println!("  Blink Interval: {}s", config.caret.blink_interval);
    println!("  Width: {}", config.caret.width);
    println!();

    println!("Selection Settings:");
    println!("  Color: {:?}", config.selection.color);
    println!("  Alpha: {}", config.selection.alpha);
    println!();

    println!("Text Settings:");
    println!("  Font: {:?}", config.text.font);
    println!("  Font Size: {}", config.text.font_size);
    println!("  Monospace Advance: {}", config.text.monospace_advance);
    println!("  Mask: {:?}", config.text.mask);
    println!();

    println!("Input Settings:");
    println!("  Size: {} x {}", config.input.width, config.input.height);
    println!("  Padding: {:?}", config.input.padding);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
