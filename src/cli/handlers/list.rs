use basex::AlphabetRegistry;

const PREVIEW_CHARS: usize = 20;

pub fn handle(registry: &AlphabetRegistry) {
    println!("Available alphabets:\n");

    for name in registry.names() {
        let Some(config) = registry.get_alphabet(&name) else {
            continue;
        };
        let count = config.chars.chars().count();
        let preview: String = config.chars.chars().take(PREVIEW_CHARS).collect();
        let suffix = if count > PREVIEW_CHARS { "..." } else { "" };
        let marker = if registry.settings.default_alphabet.as_deref() == Some(name.as_str()) {
            "*"
        } else {
            " "
        };

        println!(
            "{} {:<15} base-{:<3} {:>8}  {}{}",
            marker,
            name,
            count,
            config.effective_mode().as_str(),
            preview,
            suffix
        );
    }
}
