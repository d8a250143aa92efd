mod app;
mod data;
mod export;
mod state;
mod ui;

use std::io;

use app::Shell;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run()
}
