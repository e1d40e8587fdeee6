use mdtheme::{preview, SeedTheme};

const DEFAULT_SEED: &str = "#C09A76";

fn main() {
    let seed = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SEED.to_string());

    let theme = SeedTheme::new(&seed).expect("could not parse seed color");

    eprintln!("light palette:\n{}", theme.light_css());

    std::fs::write("out.html", preview::render(&theme))
        .expect("could not write to out.html");
}
