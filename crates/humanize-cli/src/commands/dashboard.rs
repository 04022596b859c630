pub fn run() {
    let mut app = crate::tui::app::App::new();
    if let Err(e) = app.run() {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
}
