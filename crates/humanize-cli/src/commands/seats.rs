use humanize_core::SeatBoard;

pub fn run(fold: Option<&str>, shade: Option<&str>, json: bool) {
    let mut board = SeatBoard::default();

    if let Some(id) = fold {
        match board.toggle_fold(id) {
            Some(status) => println!("Zone {id}: fold toggled, now {status}"),
            None => {
                eprintln!("Unknown zone id: {id}");
                std::process::exit(1);
            }
        }
    }
    if let Some(id) = shade {
        match board.toggle_shade(id) {
            Some(status) => println!("Zone {id}: shade toggled, now {status}"),
            None => {
                eprintln!("Unknown zone id: {id}");
                std::process::exit(1);
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(board.zones()) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("seat serialization failed: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let counts = board.counts();
    println!(
        "IoT zone overview: {} occupied · {} available · {} folded\n",
        counts.occupied, counts.available, counts.folded
    );
    for zone in board.zones() {
        println!("{}", super::format_zone(zone));
    }
}
