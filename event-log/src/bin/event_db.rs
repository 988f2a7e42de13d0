use std::io::{self, BufRead, Write};

use event_log::{run_line, EventStore};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut store = EventStore::new();
    let mut stdout = io::stdout().lock();

    for line in io::stdin().lock().lines() {
        for output in run_line(&mut store, &line?) {
            writeln!(stdout, "{output}")?;
        }
    }

    log::debug!("exiting with {} dates in store", store.len());
    Ok(())
}
