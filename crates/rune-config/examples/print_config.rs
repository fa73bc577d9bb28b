/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from rune.toml
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Tweener Configuration ===\n");

    println!("Tween Settings:");
    println!("  FPS: {}", config.tween.fps);
    println!("  Time: {}s", config.tween.time);
    println!("  Transition: {}", config.tween.transition);
    println!("  Delay: {}s", config.tween.delay);
    println!();

    // Try to serialize to TOML for verification
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
