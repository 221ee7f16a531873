/*!
 * Heap Simulator - Main Entry Point
 *
 * Interactive allocator shell over a fixed-size buffer:
 * - malloc / realloc / free with best-fit placement
 * - Block listing and heap statistics
 * - Raw memory inspection (writemem / printmem)
 */

use heap_sim::cli;
use heap_sim::{HeapManager, DEFAULT_HEAP_SIZE};
use log::info;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let capacity = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|_| format!("invalid capacity argument: {}", arg))?,
        None => DEFAULT_HEAP_SIZE,
    };

    let mut heap = HeapManager::with_capacity(capacity)?;
    info!("heap simulator ready ({} byte heap)", capacity);

    cli::run_interactive(&mut heap)?;
    Ok(())
}
