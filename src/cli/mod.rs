/*!
 * Command Shell
 *
 * Interactive front-end driving the heap engine. Thin by design: every
 * command maps onto one engine call, and all policy lives in the engine.
 *
 * Commands: `malloc <size>`, `realloc <ptr> <size>`, `free <ptr>`,
 * `blocklist`, `writemem <ptr> <data>`, `printmem <ptr> <count>`,
 * `stats`, `reset`, `quit`.
 */

use crate::heap::HeapManager;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Run the command loop until `quit` or end of input
///
/// Generic over the I/O handles so tests can drive it with in-memory
/// buffers.
pub fn run<R: BufRead, W: Write>(heap: &mut HeapManager, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        if command == "quit" {
            break;
        }
        let reply = dispatch(heap, command, &args);
        if !reply.is_empty() {
            writeln!(output, "{}", reply.trim_end())?;
        }
        output.flush()?;
    }
    Ok(())
}

/// Run the command loop with a prompt on an interactive terminal
pub fn run_interactive(heap: &mut HeapManager) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        if command == "quit" {
            return Ok(());
        }
        let reply = dispatch(heap, command, &args);
        if !reply.is_empty() {
            writeln!(stdout, "{}", reply.trim_end())?;
        }
    }
}

/// Execute one command against the engine, returning the text to print
fn dispatch(heap: &mut HeapManager, command: &str, args: &[&str]) -> String {
    match command {
        "malloc" => {
            let &[size] = args else {
                return usage("malloc <size>");
            };
            match parse(size) {
                Ok(size) => match heap.allocate(size) {
                    Ok(ptr) => ptr.to_string(),
                    Err(e) => format!("error: {}", e),
                },
                Err(e) => e,
            }
        }
        "realloc" => {
            let &[ptr, size] = args else {
                return usage("realloc <ptr> <size>");
            };
            match (parse(ptr), parse(size)) {
                (Ok(ptr), Ok(size)) => match heap.reallocate(ptr, size) {
                    Ok(new_ptr) => new_ptr.to_string(),
                    Err(e) => format!("error: {}", e),
                },
                (Err(e), _) | (_, Err(e)) => e,
            }
        }
        "free" => {
            let &[ptr] = args else {
                return usage("free <ptr>");
            };
            match parse(ptr) {
                Ok(ptr) => {
                    heap.free(ptr);
                    String::new()
                }
                Err(e) => e,
            }
        }
        "blocklist" => {
            let mut out = String::new();
            for block in heap.list_blocks() {
                let state = if block.allocated { "allocated" } else { "free" };
                let _ = writeln!(out, "{}, {}, {}", block.pointer, block.payload_size, state);
            }
            out
        }
        "writemem" => {
            let &[ptr, data] = args else {
                return usage("writemem <ptr> <data>");
            };
            match parse(ptr) {
                Ok(ptr) => match heap.write_bytes(ptr, data.as_bytes()) {
                    Ok(()) => String::new(),
                    Err(e) => format!("error: {}", e),
                },
                Err(e) => e,
            }
        }
        "printmem" => {
            let &[ptr, count] = args else {
                return usage("printmem <ptr> <count>");
            };
            match (parse(ptr), parse(count)) {
                (Ok(ptr), Ok(count)) => match heap.read_bytes(ptr, count) {
                    Ok(bytes) => bytes
                        .iter()
                        .map(|b| format!("{:02X}", b))
                        .collect::<Vec<_>>()
                        .join(" "),
                    Err(e) => format!("error: {}", e),
                },
                (Err(e), _) | (_, Err(e)) => e,
            }
        }
        "stats" => match serde_json::to_string_pretty(&heap.stats()) {
            Ok(json) => json,
            Err(e) => format!("error: {}", e),
        },
        "reset" => {
            heap.initialize();
            String::new()
        }
        _ => format!("unknown command: {}", command),
    }
}

fn parse(word: &str) -> Result<usize, String> {
    word.parse()
        .map_err(|_| format!("invalid number: {}", word))
}

fn usage(syntax: &str) -> String {
    format!("usage: {}", syntax)
}
