use assoc_array_demos::experiments;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    divider();
    let s2s = experiments::strings_to_strings();
    println!("{s2s}");
    divider();
    let i2i = experiments::integers_to_integers();
    println!("{i2i}");
    divider();
    let i2s = experiments::integers_to_strings();
    println!("{i2s}");
}

fn divider() {
    println!();
    println!("------------------------------------------------");
    println!();
}
