//! dockbar - a floating toolbar that docks to screen edges

#[cfg(debug_assertions)]
mod debug_dump;
mod runtime;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use dockbar::cli::CliArgs;
use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    dockbar::tracing::init();

    let startup = args.into_config()?;

    if startup.print_config {
        print!("{}", startup.panel.to_yaml()?);
        return Ok(());
    }

    tracing::info!("Starting dockbar");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);
    event_loop.run_app(&mut app)?;

    Ok(())
}
