use rslp::StemDetails;
use std::time::Duration;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, words: &[StemDetails], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Stemming: \"{}\"", input), ansi::CYAN)));

    if words.is_empty() {
        println!("{}", palette.dim("  No tokens"));
        println!();
        return;
    }

    for details in words {
        println!("\n{}", palette.paint(format!("━━━ {} ━━━", details.input), ansi::GRAY));
        print_word(details, &palette);
    }

    let stems: Vec<&str> = words.iter().map(|d| d.output.as_str()).collect();
    let total: Duration = words.iter().map(|d| d.total).sum();

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(stems.join(" "), ansi::GREEN)));
    println!("  {} {}", palette.dim("Total:"), palette.paint(format!("{:?}", total), ansi::GREEN));
    println!();
}

fn print_word(details: &StemDetails, palette: &ansi::Palette) {
    if details.short_word {
        println!("  {}", palette.dim("short word, not stemmed"));
    }

    for step in &details.trace {
        let label = palette.paint(format!("{:<13}", step.step.name()), ansi::BLUE);
        match step.rule {
            Some(suffix) => println!(
                "  {} {} {} {} {}",
                label,
                palette.paint(format!("✓ -{suffix}"), ansi::GREEN),
                step.input,
                palette.dim("→"),
                palette.bold(&step.output)
            ),
            None => println!("  {} {}", label, palette.dim(format!("✗ {}", step.input))),
        }
    }

    println!(
        "  {} {}  {} {}  {}",
        palette.dim("stem:"),
        palette.bold(palette.paint(&details.output, ansi::GREEN)),
        palette.dim("│ traversal:"),
        palette.paint(format!("{:?}", details.traversal), ansi::CYAN),
        palette.paint(format!("normalize: {:?}", details.normalize), ansi::YELLOW),
    );
}
