//! desktop-wallpaper - read and set the desktop wallpaper for a display.
//!
//! Examples:
//! - `desktop-wallpaper get options --display 1`
//! - `desktop-wallpaper set ~/Pictures/a.png --scaling proportional`

fn main() {
    if let Err(err) = desktop_wallpaper::cli::run() {
        eprintln!("desktop-wallpaper: {err}");
        std::process::exit(1);
    }
}
