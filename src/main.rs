use memory_probe::probe::Probe;
use std::env;
use std::process;

fn main() {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "memory-probe".to_string());

    let Some(server_url) = args.next() else {
        println!("Usage: {} <server_url>", program);
        println!("Example: {} http://localhost:8000", program);
        process::exit(1);
    };

    let probe = Probe::new(&server_url);
    let success = probe.run();
    process::exit(if success { 0 } else { 1 });
}
